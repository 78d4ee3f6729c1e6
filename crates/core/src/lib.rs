//! Typed model of the AdCOM 1.0 object schema.
//!
//! Enumerated lists, context objects (distribution channel, user, device,
//! regulations, restrictions), media objects (ad and creative subtypes) and
//! placement objects, all round-tripping through their JSON wire form.

pub mod codec;
pub mod config;
pub mod context;
pub mod enums;
pub mod error;
pub mod ext;
pub mod media;
pub mod placement;
pub mod taxonomy;
mod variant;

pub use codec::{Codec, Inspection, ObjectKind};
pub use config::AppConfig;
pub use context::{ChannelKind, DistributionChannel};
pub use error::{AdcomError, AdcomResult};
pub use ext::Ext;
pub use media::{Ad, AdMedia, PartialAd};
pub use placement::{NativeFormat, Placement, PlacementMedia};
pub use taxonomy::Categorized;
