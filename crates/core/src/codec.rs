//! JSON entry points and round-trip inspection.
//!
//! Typed decoding tolerates fields the model does not know, which means a
//! re-encode silently loses them. [`dropped_paths`] makes that loss visible.
//!
//! Coded fields decode into closed enums, including fields that are plain
//! numbers in the published schema (`Device.os`, `Device.contype`,
//! `Content.cattax`, `Geo.ipserv` and similar). A code outside the known list
//! fails the decode of the whole enclosing object.

use crate::config::CodecConfig;
use crate::context::{
    App, Content, Device, DistributionChannel, Dooh, Geo, Publisher, Regs, Restrictions, Site,
    User,
};
use crate::error::{AdcomError, AdcomResult};
use crate::media::{Ad, Audit};
use crate::placement::{NativeFormat, Placement};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, warn};

pub fn decode<T: DeserializeOwned>(input: &str) -> AdcomResult<T> {
    Ok(serde_json::from_str(input)?)
}

pub fn decode_slice<T: DeserializeOwned>(input: &[u8]) -> AdcomResult<T> {
    Ok(serde_json::from_slice(input)?)
}

pub fn decode_value<T: DeserializeOwned>(input: Value) -> AdcomResult<T> {
    Ok(serde_json::from_value(input)?)
}

pub fn encode<T: Serialize>(value: &T) -> AdcomResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn encode_pretty<T: Serialize>(value: &T) -> AdcomResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Paths present in `original` but missing from `reencoded`.
///
/// Object keys join with `.`, array elements use `[i]`. A missing subtree is
/// reported once at its root.
pub fn dropped_paths(original: &Value, reencoded: &Value) -> Vec<String> {
    let mut dropped = Vec::new();
    collect_dropped(original, reencoded, String::new(), &mut dropped);
    dropped
}

fn collect_dropped(original: &Value, reencoded: &Value, path: String, out: &mut Vec<String>) {
    match (original, reencoded) {
        (Value::Object(before), Value::Object(after)) => {
            for (key, value) in before {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match after.get(key) {
                    Some(kept) => collect_dropped(value, kept, child, out),
                    None if value.is_null() => {}
                    None => out.push(child),
                }
            }
        }
        (Value::Array(before), Value::Array(after)) => {
            for (i, value) in before.iter().enumerate() {
                let child = format!("{path}[{i}]");
                match after.get(i) {
                    Some(kept) => collect_dropped(value, kept, child, out),
                    None => out.push(child),
                }
            }
        }
        _ => {}
    }
}

// ─── Object kinds ───────────────────────────────────────────────────────

/// Top-level objects a standalone payload can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Ad,
    Placement,
    Channel,
    Site,
    App,
    Dooh,
    Publisher,
    Content,
    User,
    Device,
    Geo,
    Regs,
    Restrictions,
    NativeFormat,
    Audit,
}

impl ObjectKind {
    pub const ALL: &'static [ObjectKind] = &[
        ObjectKind::Ad,
        ObjectKind::Placement,
        ObjectKind::Channel,
        ObjectKind::Site,
        ObjectKind::App,
        ObjectKind::Dooh,
        ObjectKind::Publisher,
        ObjectKind::Content,
        ObjectKind::User,
        ObjectKind::Device,
        ObjectKind::Geo,
        ObjectKind::Regs,
        ObjectKind::Restrictions,
        ObjectKind::NativeFormat,
        ObjectKind::Audit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Ad => "ad",
            ObjectKind::Placement => "placement",
            ObjectKind::Channel => "channel",
            ObjectKind::Site => "site",
            ObjectKind::App => "app",
            ObjectKind::Dooh => "dooh",
            ObjectKind::Publisher => "publisher",
            ObjectKind::Content => "content",
            ObjectKind::User => "user",
            ObjectKind::Device => "device",
            ObjectKind::Geo => "geo",
            ObjectKind::Regs => "regs",
            ObjectKind::Restrictions => "restrictions",
            ObjectKind::NativeFormat => "native-format",
            ObjectKind::Audit => "audit",
        }
    }

    /// Decode `input` as this kind and encode it back.
    pub fn roundtrip(self, input: Value) -> AdcomResult<Value> {
        match self {
            ObjectKind::Ad => reencode::<Ad>(input),
            ObjectKind::Placement => reencode::<Placement>(input),
            ObjectKind::Channel => reencode::<DistributionChannel>(input),
            ObjectKind::Site => reencode::<Site>(input),
            ObjectKind::App => reencode::<App>(input),
            ObjectKind::Dooh => reencode::<Dooh>(input),
            ObjectKind::Publisher => reencode::<Publisher>(input),
            ObjectKind::Content => reencode::<Content>(input),
            ObjectKind::User => reencode::<User>(input),
            ObjectKind::Device => reencode::<Device>(input),
            ObjectKind::Geo => reencode::<Geo>(input),
            ObjectKind::Regs => reencode::<Regs>(input),
            ObjectKind::Restrictions => reencode::<Restrictions>(input),
            ObjectKind::NativeFormat => reencode::<NativeFormat>(input),
            ObjectKind::Audit => reencode::<Audit>(input),
        }
    }
}

fn reencode<T: DeserializeOwned + Serialize>(input: Value) -> AdcomResult<Value> {
    let typed: T = decode_value(input)?;
    Ok(serde_json::to_value(&typed)?)
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown object kind: {s}"))
    }
}

// ─── Inspection ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub kind: ObjectKind,
    /// Re-encoded payload, rendered per the codec settings.
    pub output: String,
    /// Input paths the typed model did not retain.
    pub dropped: Vec<String>,
}

/// Decodes raw payloads under the configured limits.
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Reads a payload, stopping one byte past `max_input_bytes`.
    pub fn read_bounded<R: Read>(&self, reader: R) -> AdcomResult<Vec<u8>> {
        let max = self.config.max_input_bytes;
        let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
        let mut buf = Vec::new();
        reader.take(limit).read_to_end(&mut buf)?;
        if buf.len() > max {
            return Err(AdcomError::InputTooLarge { len: buf.len(), max });
        }
        Ok(buf)
    }

    pub fn inspect(&self, kind: ObjectKind, input: &[u8]) -> AdcomResult<Inspection> {
        if input.len() > self.config.max_input_bytes {
            return Err(AdcomError::InputTooLarge {
                len: input.len(),
                max: self.config.max_input_bytes,
            });
        }
        debug!(kind = %kind, bytes = input.len(), "Decoding payload");

        let original: Value = decode_slice(input)?;
        let reencoded = kind.roundtrip(original.clone())?;
        let dropped = dropped_paths(&original, &reencoded);

        if self.config.warn_on_dropped_fields {
            for path in &dropped {
                warn!(kind = %kind, path = %path, "Field not retained by the typed model");
            }
        }

        let output = if self.config.pretty {
            encode_pretty(&reencoded)?
        } else {
            encode(&reencoded)?
        };

        Ok(Inspection {
            kind,
            output,
            dropped,
        })
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
