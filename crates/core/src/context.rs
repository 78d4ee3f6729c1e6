//! Context objects: the world an impression lives in.
//!
//! User, device and location, the distribution channel (site, app or DOOH
//! venue) with its publisher and content, and the regulations and
//! restrictions in effect.

use crate::enums::{
    AgentType, CategoryTaxonomy, ConnectionType, ContentContext, CreativeAttribute, DeviceType,
    DoohVenueType, IpLocationService, LocationType, MediaRating, OperatingSystem,
    ProductionQuality, UserAgentSource,
};
use crate::error::AdcomError;
use crate::ext::{flag, Ext};
use crate::variant::exactly_one;
use serde::{Deserialize, Serialize};

// ─── Distribution Channels ──────────────────────────────────────────────

/// A website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "pub", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    /// Categories of the current section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectcat: Option<Vec<String>>,
    /// Categories of the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagecat: Option<Vec<String>>,
    /// Taxonomy of `cat`, `sectcat` and `pagecat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub privpolicy: Option<bool>,
    /// Comma separated keywords. Deprecated in favour of `kwarray`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwarray: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Search string that led to the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub amp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// A non-browser application, typically mobile, desktop or CTV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "pub", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectcat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagecat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub privpolicy: Option<bool>,
    /// Deprecated in favour of `kwarray`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwarray: Option<Vec<String>>,
    /// Bundle or package name (e.g. "com.foo.mygame"), never a store ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storeid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storeurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    /// Paid app. Absent means free.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl App {
    pub fn is_paid(&self) -> bool {
        self.paid.unwrap_or(false)
    }
}

/// A digital out-of-home venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dooh {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "pub", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<DoohVenueType>,
    /// 1 = fixed, 2 = movable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<u8>,
    /// Exposure time in seconds per view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etime: Option<u32>,
    /// Minimum DPI for text-based creative elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Dooh {
    pub fn is_movable(&self) -> bool {
        self.fixed == Some(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Site,
    App,
    Dooh,
}

impl ChannelKind {
    /// Wire field that carries this channel.
    pub fn field(&self) -> &'static str {
        match self {
            ChannelKind::Site => "site",
            ChannelKind::App => "app",
            ChannelKind::Dooh => "dooh",
        }
    }
}

/// The channel an opportunity is delivered through: exactly one of a site,
/// an app or a DOOH venue.
///
/// On the wire this is `{"site": {..}}`, `{"app": {..}}` or `{"dooh": {..}}`.
/// Decoding a shape with none or several of those populated fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistributionChannelFields", into = "DistributionChannelFields")]
pub enum DistributionChannel {
    Site(Site),
    App(App),
    Dooh(Dooh),
}

/// Permissive wire shape of [`DistributionChannel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionChannelFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dooh: Option<Dooh>,
}

impl TryFrom<DistributionChannelFields> for DistributionChannel {
    type Error = AdcomError;

    fn try_from(fields: DistributionChannelFields) -> Result<Self, Self::Error> {
        exactly_one(
            "DistributionChannel",
            "site, app, dooh",
            [
                ("site", fields.site.map(DistributionChannel::Site)),
                ("app", fields.app.map(DistributionChannel::App)),
                ("dooh", fields.dooh.map(DistributionChannel::Dooh)),
            ],
        )
    }
}

impl From<DistributionChannel> for DistributionChannelFields {
    fn from(channel: DistributionChannel) -> Self {
        match channel {
            DistributionChannel::Site(site) => Self {
                site: Some(site),
                ..Default::default()
            },
            DistributionChannel::App(app) => Self {
                app: Some(app),
                ..Default::default()
            },
            DistributionChannel::Dooh(dooh) => Self {
                dooh: Some(dooh),
                ..Default::default()
            },
        }
    }
}

impl From<Site> for DistributionChannel {
    fn from(site: Site) -> Self {
        DistributionChannel::Site(site)
    }
}

impl From<App> for DistributionChannel {
    fn from(app: App) -> Self {
        DistributionChannel::App(app)
    }
}

impl From<Dooh> for DistributionChannel {
    fn from(dooh: Dooh) -> Self {
        DistributionChannel::Dooh(dooh)
    }
}

impl DistributionChannel {
    pub fn kind(&self) -> ChannelKind {
        match self {
            DistributionChannel::Site(_) => ChannelKind::Site,
            DistributionChannel::App(_) => ChannelKind::App,
            DistributionChannel::Dooh(_) => ChannelKind::Dooh,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            DistributionChannel::Site(site) => site.id.as_deref(),
            DistributionChannel::App(app) => app.id.as_deref(),
            DistributionChannel::Dooh(dooh) => dooh.id.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DistributionChannel::Site(site) => site.name.as_deref(),
            DistributionChannel::App(app) => app.name.as_deref(),
            DistributionChannel::Dooh(dooh) => dooh.name.as_deref(),
        }
    }

    pub fn publisher(&self) -> Option<&Publisher> {
        match self {
            DistributionChannel::Site(site) => site.publisher.as_ref(),
            DistributionChannel::App(app) => app.publisher.as_ref(),
            DistributionChannel::Dooh(dooh) => dooh.publisher.as_ref(),
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match self {
            DistributionChannel::Site(site) => site.content.as_ref(),
            DistributionChannel::App(app) => app.content.as_ref(),
            DistributionChannel::Dooh(dooh) => dooh.content.as_ref(),
        }
    }
}

// ─── Publisher & Content ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Highest level domain of the publisher (e.g. "publisher.com").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Content in which an impression can appear: a page, a video stream, a
/// podcast episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Free form, e.g. "Season 3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// International Standard Recording Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prodq: Option<ProductionQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContentContext>,
    /// Content rating, e.g. "PG-13".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrating: Option<MediaRating>,
    /// Deprecated in favour of `kwarray`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwarray: Option<Vec<String>>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    /// Source relationship: direct (true) or indirect (false).
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub srcrel: Option<bool>,
    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub langb: Option<String>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<Producer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Data>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Network the content is broadcast on (e.g. a TV network).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Channel within a network (e.g. a local station).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Third-party data about the user or content, grouped by provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Vec<Segment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Data {
    /// Value of the first segment with the given id.
    pub fn segment_value(&self, id: &str) -> Option<&str> {
        self.segment
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|s| s.id.as_deref() == Some(id))
            .and_then(|s| s.value.as_deref())
    }
}

// ─── User ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// The human user of the device. At least one of `id` or `buyeruid` is
/// strongly recommended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Buyer-specific ID as mapped by the exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyeruid: Option<String>,
    /// Deprecated. Year of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yob: Option<u16>,
    /// Deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Deprecated in favour of `kwarray`. Only one of the two may be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwarray: Option<Vec<String>>,
    /// GDPR consent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<String>,
    /// Home base of the user, as opposed to the device's current location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Data>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eids: Option<Vec<ExtendedIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Keywords from either the array form or the deprecated comma separated
/// string. The array wins when both are present.
fn keyword_list<'a>(keywords: Option<&'a str>, kwarray: Option<&'a [String]>) -> Vec<&'a str> {
    match (kwarray, keywords) {
        (Some(list), _) => list.iter().map(String::as_str).collect(),
        (None, Some(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect(),
        (None, None) => Vec::new(),
    }
}

macro_rules! keyword_accessor {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                pub fn keyword_list(&self) -> Vec<&str> {
                    keyword_list(self.keywords.as_deref(), self.kwarray.as_deref())
                }
            }
        )+
    };
}

keyword_accessor!(Site, App, Content, User);

impl User {
    /// Every extended id from `source` (e.g. "liveramp.com").
    pub fn eids_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a ExtendedIdentifierUid> {
        self.eids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(move |eid| eid.source.as_deref() == Some(source))
            .flat_map(|eid| eid.uids.as_deref().unwrap_or_default())
    }
}

/// Extended (third-party) identifiers from one source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIdentifier {
    /// Top-level domain of the ID provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uids: Option<Vec<ExtendedIdentifierUid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIdentifierUid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Highly recommended: many buyers resolve app-native and browser IDs
    /// separately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atype: Option<AgentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

// ─── Device ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ua: Option<String>,
    /// Structured user agent, preferred over `ua` when both are present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sua: Option<UserAgent>,
    /// Advertising ID in the clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifa: Option<String>,
    /// Do Not Track.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub dnt: Option<bool>,
    /// Limit Ad Tracking.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub lmt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<OperatingSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hwv: Option<String>,
    /// Physical screen height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    /// Physical screen width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppi: Option<u32>,
    /// Physical pixels per device independent pixel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pxratio: Option<f64>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub js: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub langb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    /// Raw X-Forwarded-For header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xff: Option<String>,
    /// Any of `ip`, `ipv6` or `xff` was truncated.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub iptr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// MCC-MNC of the network, e.g. "310-005".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mccmnc: Option<String>,
    /// MCC-MNC of the SIM card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mccmncsim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contype: Option<ConnectionType>,
    /// Geolocation API will be available to the ad.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub geofetch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Device {
    /// Tracking is restricted by either Do Not Track or Limit Ad Tracking.
    pub fn tracking_limited(&self) -> bool {
        self.dnt.unwrap_or(false) || self.lmt.unwrap_or(false)
    }
}

/// Structured user agent, typically from User-Agent Client Hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browsers: Option<Vec<BrandVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<BrandVersion>,
    /// Prefers mobile content.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<UserAgentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Version components, most significant first: `["12", "4", "1"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl BrandVersion {
    /// Dotted version string, e.g. "12.4.1".
    pub fn version_string(&self) -> Option<String> {
        self.version.as_ref().map(|parts| parts.join("."))
    }
}

/// A location fix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    /// -90.0 to +90.0, negative is south.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// -180.0 to +180.0, negative is west.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Accuracy in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accur: Option<u32>,
    /// Seconds since the fix was established.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastfix: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipserv: Option<IpLocationService>,
    /// ISO-3166-1-alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO-3166-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro: Option<String>,
    /// UN/LOCODE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Local time offset from UTC in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utcoffset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Geo {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lon?))
    }
}

// ─── Regs & Restrictions ────────────────────────────────────────────────

/// Regulations in effect. COPPA and GDPR are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Regs {
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub coppa: Option<bool>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub gdpr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Regs {
    pub fn coppa_applies(&self) -> bool {
        self.coppa.unwrap_or(false)
    }

    pub fn gdpr_applies(&self) -> bool {
        self.gdpr.unwrap_or(false)
    }
}

/// Block lists applied to ads. An absent list blocks nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcat: Option<Vec<String>>,
    /// Taxonomy of `bcat`. Defaults to 2 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    /// Blocked advertiser domains (e.g. "ford.com").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badv: Option<Vec<String>>,
    /// Blocked app bundles (e.g. "com.foo.mygame").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bapp: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<CreativeAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Restrictions {
    /// `category` is interpreted in the taxonomy of `bcat`.
    pub fn blocks_category(&self, category: &str) -> bool {
        contains(&self.bcat, category)
    }

    pub fn blocks_advertiser(&self, domain: &str) -> bool {
        self.badv
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|blocked| blocked.eq_ignore_ascii_case(domain))
    }

    pub fn blocks_app(&self, bundle: &str) -> bool {
        contains(&self.bapp, bundle)
    }

    pub fn blocks_attribute(&self, attribute: CreativeAttribute) -> bool {
        self.battr
            .as_deref()
            .unwrap_or_default()
            .contains(&attribute)
    }
}

fn contains(list: &Option<Vec<String>>, value: &str) -> bool {
    list.as_deref()
        .unwrap_or_default()
        .iter()
        .any(|item| item == value)
}
