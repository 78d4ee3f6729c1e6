//! Placement objects: what an impression opportunity accepts.

use crate::enums::{
    ApiFramework, AudioVideoCreativeSubtype, ClickType, CompanionType, DeliveryMethod,
    DisplayContextType, DisplayCreativeSubtype, DisplayPlacementType, EventTrackingMethod,
    EventType, ExpandableDirection, FeedType, LinearityMode, NativeDataAssetType,
    NativeImageAssetType, PlacementPosition, PlaybackCessationMode, PlaybackMethod, PodSequence,
    SizeUnit, SlotPosition, StartDelayMode, VideoPlacementSubtype, VideoPlacementType,
    VolumeNormalizationMode,
};
use crate::error::{AdcomError, AdcomResult};
use crate::ext::{flag, Ext};
use crate::variant::exactly_one;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ─── Placement ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementMedia {
    Display(DisplayPlacement),
    Video(VideoPlacement),
    Audio(AudioPlacement),
}

impl PlacementMedia {
    pub fn field(&self) -> &'static str {
        match self {
            PlacementMedia::Display(_) => "display",
            PlacementMedia::Video(_) => "video",
            PlacementMedia::Audio(_) => "audio",
        }
    }
}

/// The root placement object. Exactly one media subtype is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlacementFields", into = "PlacementFields")]
pub struct Placement {
    /// Publisher's identifier for the placement.
    pub tagid: Option<String>,
    /// Server-side ad insertion: 0 unknown, 1 all client-side, 2 assets
    /// stitched server-side with client-side tracking, 3 all server-side.
    pub ssai: Option<u8>,
    pub sdk: Option<String>,
    pub sdkver: Option<String>,
    /// User receives a reward for viewing.
    pub reward: Option<bool>,
    /// Allowed creative languages, ISO-639-1-alpha-2.
    pub wlang: Option<Vec<String>>,
    pub secure: Option<bool>,
    /// Markup may be returned inline.
    pub admx: Option<bool>,
    /// Markup may be returned by URL.
    pub curlx: Option<bool>,
    pub media: PlacementMedia,
    pub ext: Option<Ext>,
}

/// Permissive wire shape of [`Placement`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssai: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdkver: Option<String>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub reward: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlang: Option<Vec<String>>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub admx: Option<bool>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub curlx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl TryFrom<PlacementFields> for Placement {
    type Error = AdcomError;

    fn try_from(fields: PlacementFields) -> AdcomResult<Self> {
        let media = exactly_one(
            "Placement",
            "display, video, audio",
            [
                ("display", fields.display.map(PlacementMedia::Display)),
                ("video", fields.video.map(PlacementMedia::Video)),
                ("audio", fields.audio.map(PlacementMedia::Audio)),
            ],
        )?;

        Ok(Placement {
            tagid: fields.tagid,
            ssai: fields.ssai,
            sdk: fields.sdk,
            sdkver: fields.sdkver,
            reward: fields.reward,
            wlang: fields.wlang,
            secure: fields.secure,
            admx: fields.admx,
            curlx: fields.curlx,
            media,
            ext: fields.ext,
        })
    }
}

impl From<Placement> for PlacementFields {
    fn from(placement: Placement) -> Self {
        let mut fields = PlacementFields {
            tagid: placement.tagid,
            ssai: placement.ssai,
            sdk: placement.sdk,
            sdkver: placement.sdkver,
            reward: placement.reward,
            wlang: placement.wlang,
            secure: placement.secure,
            admx: placement.admx,
            curlx: placement.curlx,
            ext: placement.ext,
            ..Default::default()
        };
        match placement.media {
            PlacementMedia::Display(display) => fields.display = Some(display),
            PlacementMedia::Video(video) => fields.video = Some(video),
            PlacementMedia::Audio(audio) => fields.audio = Some(audio),
        }
        fields
    }
}

impl Placement {
    pub fn new(media: PlacementMedia) -> Self {
        Self {
            tagid: None,
            ssai: None,
            sdk: None,
            sdkver: None,
            reward: None,
            wlang: None,
            secure: None,
            admx: None,
            curlx: None,
            media,
            ext: None,
        }
    }

    pub fn display(&self) -> Option<&DisplayPlacement> {
        match &self.media {
            PlacementMedia::Display(display) => Some(display),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&VideoPlacement> {
        match &self.media {
            PlacementMedia::Video(video) => Some(video),
            _ => None,
        }
    }

    pub fn audio(&self) -> Option<&AudioPlacement> {
        match &self.media {
            PlacementMedia::Audio(audio) => Some(audio),
            _ => None,
        }
    }

    /// Whether `lang` is acceptable. An absent allow-list accepts anything.
    pub fn allows_language(&self, lang: &str) -> bool {
        match &self.wlang {
            Some(allowed) => allowed.iter().any(|l| l.eq_ignore_ascii_case(lang)),
            None => true,
        }
    }
}

// ─── Display placement ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayPlacement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<PlacementPosition>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub instl: Option<bool>,
    /// Served into the top frame rather than an iframe.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub topframe: Option<bool>,
    /// Supported iframe buster names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifrbust: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clktype: Option<ClickType>,
    /// AMPHTML rendering: 1 early loading, 2 standard loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ampren: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptype: Option<DisplayPlacementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<DisplayContextType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<Vec<DisplayCreativeSubtype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<SizeUnit>,
    /// Placement can render a buyer privacy notice.
    #[serde(rename = "priv", default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayfmt: Option<Vec<DisplayFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nativefmt: Option<NativeFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<EventSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl DisplayPlacement {
    pub fn effective_instl(&self) -> bool {
        self.instl.unwrap_or(false)
    }

    pub fn effective_clktype(&self) -> ClickType {
        self.clktype.unwrap_or(ClickType::ClickableUnknown)
    }

    pub fn effective_unit(&self) -> SizeUnit {
        self.unit.unwrap_or(SizeUnit::Dips)
    }
}

/// An allowed size or aspect ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wratio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hratio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expdir: Option<Vec<ExpandableDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl DisplayFormat {
    pub fn fixed(w: u32, h: u32) -> Self {
        Self {
            w: Some(w),
            h: Some(h),
            ..Default::default()
        }
    }

    /// Whether a creative of `w`x`h` fits: exact size when one is given,
    /// otherwise the same aspect ratio.
    pub fn accepts(&self, w: u32, h: u32) -> bool {
        match (self.w, self.h, self.wratio, self.hratio) {
            (Some(fw), Some(fh), _, _) => fw == w && fh == h,
            (_, _, Some(wr), Some(hr)) => u64::from(w) * u64::from(hr) == u64::from(h) * u64::from(wr),
            _ => false,
        }
    }
}

// ─── Native format ──────────────────────────────────────────────────────

/// The asset slots a native placement offers.
///
/// Asset format ids are unique within one format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NativeFormatFields", into = "NativeFormatFields")]
pub struct NativeFormat {
    asset: Vec<AssetFormat>,
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeFormatFields {
    pub asset: Vec<AssetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl TryFrom<NativeFormatFields> for NativeFormat {
    type Error = AdcomError;

    fn try_from(fields: NativeFormatFields) -> AdcomResult<Self> {
        let mut format = NativeFormat::new(fields.asset)?;
        format.ext = fields.ext;
        Ok(format)
    }
}

impl From<NativeFormat> for NativeFormatFields {
    fn from(format: NativeFormat) -> Self {
        NativeFormatFields {
            asset: format.asset,
            ext: format.ext,
        }
    }
}

impl NativeFormat {
    pub fn new(asset: Vec<AssetFormat>) -> AdcomResult<Self> {
        let mut seen = HashSet::with_capacity(asset.len());
        for format in &asset {
            if !seen.insert(format.id) {
                return Err(AdcomError::DuplicateAssetId { id: format.id });
            }
        }
        Ok(Self { asset, ext: None })
    }

    pub fn assets(&self) -> &[AssetFormat] {
        &self.asset
    }

    pub fn asset_format(&self, id: u32) -> Option<&AssetFormat> {
        self.asset.iter().find(|format| format.id == id)
    }

    pub fn required_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.asset
            .iter()
            .filter(|format| format.req.unwrap_or(false))
            .map(|format| format.id)
    }
}

/// One permitted asset slot. A slot describes a single asset kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFormat {
    pub id: u32,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub req: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleAssetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<ImageAssetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataAssetFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl AssetFormat {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            req: None,
            title: None,
            img: None,
            video: None,
            data: None,
            ext: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAssetFormat {
    /// Maximum title length in characters.
    pub len: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAssetFormat {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<NativeImageAssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wmin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wratio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hratio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAssetFormat {
    #[serde(rename = "type")]
    pub data_type: NativeDataAssetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Event tracking a placement supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Vec<EventTrackingMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    /// JavaScript tracker domains, read per `wjs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jstrk: Option<Vec<String>>,
    /// `jstrk` is an allow list when true, a block list when false.
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub wjs: Option<bool>,
    /// Pixel tracker domains, read per `wpx`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pxtrk: Option<Vec<String>>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub wpx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl EventSpec {
    pub fn supports(&self, method: EventTrackingMethod) -> bool {
        self.method
            .as_deref()
            .is_some_and(|methods| methods.contains(&method))
    }
}

// ─── Video & audio placements ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPlacement {
    /// Legacy subtype, superseded by `plcmt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptype: Option<VideoPlacementSubtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmt: Option<VideoPlacementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<PlacementPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<StartDelayMode>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    /// Only ads longer than this many seconds may be skippable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipmin: Option<u32>,
    /// Seconds before skip is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipafter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playmethod: Option<Vec<PlaybackMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playend: Option<PlaybackCessationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clktype: Option<ClickType>,
    pub mime: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<Vec<AudioVideoCreativeSubtype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<SizeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mindur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxdur: Option<u32>,
    /// Exact durations accepted; excludes `mindur`/`maxdur`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rqddur: Option<Vec<u32>>,
    /// Extension allowed beyond `maxdur`: 0 none, -1 unlimited, else seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxext: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minbitr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbitr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<DeliveryMethod>>,
    /// Maximum ads in a dynamic pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxseq: Option<u32>,
    /// Total seconds of a dynamic pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poddur: Option<u32>,
    /// Pod this placement belongs to; placements sharing it form one pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podseq: Option<PodSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slotinpod: Option<SlotPosition>,
    /// Minimum CPM per second for dynamic pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mincpmpersec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear: Option<LinearityMode>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub boxing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp: Option<Vec<Companion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comptype: Option<Vec<CompanionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expdir: Option<Vec<ExpandableDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlayexpdir: Option<Vec<ExpandableDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioPlacement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<StartDelayMode>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipmin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipafter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playmethod: Option<Vec<PlaybackMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playend: Option<PlaybackCessationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nvol: Option<VolumeNormalizationMode>,
    pub mime: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<Vec<AudioVideoCreativeSubtype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mindur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxdur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rqddur: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxext: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minbitr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbitr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<DeliveryMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxseq: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poddur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podseq: Option<PodSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slotinpod: Option<SlotPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mincpmpersec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp: Option<Vec<Companion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comptype: Option<Vec<CompanionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlayexpdir: Option<Vec<ExpandableDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Timing and pod accessors shared by video and audio placements.
macro_rules! timed_placement {
    ($ty:ty) => {
        impl $ty {
            pub fn effective_skipmin(&self) -> u32 {
                self.skipmin.unwrap_or(0)
            }

            pub fn effective_skipafter(&self) -> u32 {
                self.skipafter.unwrap_or(0)
            }

            pub fn effective_maxext(&self) -> i32 {
                self.maxext.unwrap_or(0)
            }

            pub fn effective_podseq(&self) -> PodSequence {
                self.podseq.unwrap_or(PodSequence::Any)
            }

            pub fn effective_slotinpod(&self) -> SlotPosition {
                self.slotinpod.unwrap_or(SlotPosition::Any)
            }

            /// Whether an ad of `dur` seconds fits the duration constraints.
            /// `rqddur` takes precedence over the min/max range.
            pub fn accepts_duration(&self, dur: u32) -> bool {
                if let Some(exact) = &self.rqddur {
                    return exact.contains(&dur);
                }
                let max = match (self.maxdur, self.effective_maxext()) {
                    (_, ext) if ext < 0 => None,
                    (Some(max), ext) => Some(max.saturating_add(ext.unsigned_abs())),
                    (None, _) => None,
                };
                self.mindur.map_or(true, |min| dur >= min) && max.map_or(true, |max| dur <= max)
            }

            pub fn is_dynamic_pod(&self) -> bool {
                self.maxseq.is_some() || self.poddur.is_some()
            }
        }
    };
}

timed_placement!(VideoPlacement);
timed_placement!(AudioPlacement);

impl VideoPlacement {
    pub fn effective_unit(&self) -> SizeUnit {
        self.unit.unwrap_or(SizeUnit::Dips)
    }

    pub fn effective_boxing(&self) -> bool {
        self.boxing.unwrap_or(true)
    }
}

/// A companion ad slot next to video or audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rendering mode: 0 concurrent with the media, 1 end-card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcm: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Companion {
    pub fn is_end_card(&self) -> bool {
        self.vcm == Some(1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placement_requires_exactly_one_media() {
        let placement: Placement = serde_json::from_value(json!({
            "tagid": "leaderboard-1",
            "secure": 1,
            "display": {"w": 728, "h": 90}
        }))
        .unwrap();
        assert_eq!(placement.media.field(), "display");
        assert_eq!(placement.secure, Some(true));
        assert_eq!(placement.display().unwrap().w, Some(728));

        let err = serde_json::from_value::<Placement>(json!({"tagid": "x"})).unwrap_err();
        assert!(err.to_string().contains("Placement requires one of"));

        let err = serde_json::from_value::<Placement>(json!({
            "display": {},
            "video": {"mime": ["video/mp4"]}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("display, video"));
    }

    #[test]
    fn test_podseq_sentinel() {
        let video: VideoPlacement =
            serde_json::from_value(json!({"mime": ["video/mp4"], "podseq": -1, "slotinpod": 2}))
                .unwrap();
        assert_eq!(video.podseq, Some(PodSequence::Last));
        assert_eq!(video.slotinpod, Some(SlotPosition::FirstOrLast));
        assert_eq!(
            serde_json::to_value(&video).unwrap()["podseq"],
            json!(-1)
        );
    }

    #[test]
    fn test_defaults_stay_off_the_wire() {
        let video: VideoPlacement = serde_json::from_value(json!({"mime": ["video/mp4"]})).unwrap();
        assert_eq!(video.effective_unit(), SizeUnit::Dips);
        assert_eq!(video.effective_maxext(), 0);
        assert_eq!(video.effective_podseq(), PodSequence::Any);
        assert_eq!(video.effective_slotinpod(), SlotPosition::Any);
        assert!(video.effective_boxing());
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            json!({"mime": ["video/mp4"]})
        );

        let display = DisplayPlacement::default();
        assert!(!display.effective_instl());
        assert_eq!(display.effective_clktype(), ClickType::ClickableUnknown);
        assert_eq!(serde_json::to_value(&display).unwrap(), json!({}));
    }

    #[test]
    fn test_mime_is_required_for_timed_media() {
        assert!(serde_json::from_value::<VideoPlacement>(json!({"maxdur": 30})).is_err());
        assert!(serde_json::from_value::<AudioPlacement>(json!({"feed": 1})).is_err());
    }

    #[test]
    fn test_delay_sentinels() {
        let audio: AudioPlacement =
            serde_json::from_value(json!({"mime": ["audio/mp4"], "delay": -2, "maxext": -1}))
                .unwrap();
        assert_eq!(audio.delay, Some(StartDelayMode::PostRoll));
        assert!(audio.accepts_duration(600));

        let audio: AudioPlacement =
            serde_json::from_value(json!({"mime": ["audio/mp4"], "delay": 15})).unwrap();
        assert_eq!(audio.delay, Some(StartDelayMode::after(15)));
    }

    #[test]
    fn test_accepts_duration() {
        let video = VideoPlacement {
            mime: vec!["video/mp4".into()],
            mindur: Some(5),
            maxdur: Some(30),
            maxext: Some(5),
            ..Default::default()
        };
        assert!(!video.accepts_duration(4));
        assert!(video.accepts_duration(35));
        assert!(!video.accepts_duration(36));

        let exact = VideoPlacement {
            rqddur: Some(vec![15, 30]),
            ..video
        };
        assert!(exact.accepts_duration(15));
        assert!(!exact.accepts_duration(20));
    }

    #[test]
    fn test_native_format_rejects_duplicate_ids() {
        let err = NativeFormat::new(vec![AssetFormat::new(1), AssetFormat::new(1)]).unwrap_err();
        assert!(matches!(err, AdcomError::DuplicateAssetId { id: 1 }));

        let err = serde_json::from_value::<NativeFormat>(json!({
            "asset": [{"id": 3}, {"id": 3}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate asset format id 3"));

        assert!(serde_json::from_value::<NativeFormat>(json!({})).is_err());
    }

    #[test]
    fn test_native_format_lookup() {
        let format: NativeFormat = serde_json::from_value(json!({
            "asset": [
                {"id": 1, "req": 1, "title": {"len": 90}},
                {"id": 2, "img": {"type": 3, "wmin": 300, "hmin": 250}},
                {"id": 3, "data": {"type": 2, "len": 140}}
            ],
            "ext": {"vendor": true}
        }))
        .unwrap();
        assert_eq!(format.assets().len(), 3);
        assert_eq!(format.asset_format(1).unwrap().title.as_ref().unwrap().len, 90);
        assert_eq!(
            format.asset_format(3).unwrap().data.as_ref().unwrap().data_type,
            NativeDataAssetType::Description
        );
        assert!(format.asset_format(9).is_none());
        assert_eq!(format.required_ids().collect::<Vec<_>>(), vec![1]);
        assert_eq!(format.ext.as_ref().unwrap()["vendor"], json!(true));
    }

    #[test]
    fn test_display_format_accepts() {
        assert!(DisplayFormat::fixed(300, 250).accepts(300, 250));
        assert!(!DisplayFormat::fixed(300, 250).accepts(320, 50));

        let ratio = DisplayFormat {
            wratio: Some(16),
            hratio: Some(9),
            ..Default::default()
        };
        assert!(ratio.accepts(1920, 1080));
        assert!(!ratio.accepts(1080, 1920));
    }

    #[test]
    fn test_companion_and_event_spec() {
        let video: VideoPlacement = serde_json::from_value(json!({
            "mime": ["video/mp4"],
            "comp": [{"id": "c1", "vcm": 1, "display": {"w": 300, "h": 250}}],
            "comptype": [1, 2]
        }))
        .unwrap();
        let comp = &video.comp.as_ref().unwrap()[0];
        assert!(comp.is_end_card());
        assert_eq!(comp.display.as_ref().unwrap().h, Some(250));

        let spec: EventSpec =
            serde_json::from_value(json!({"type": 1, "method": [1], "wpx": 1})).unwrap();
        assert_eq!(spec.event_type, EventType::Loaded);
        assert!(spec.supports(EventTrackingMethod::ImagePixel));
        assert!(!spec.supports(EventTrackingMethod::Javascript));
        assert_eq!(spec.wpx, Some(true));
    }

    #[test]
    fn test_allows_language() {
        let mut placement = Placement::new(PlacementMedia::Audio(AudioPlacement {
            mime: vec!["audio/mpeg".into()],
            ..Default::default()
        }));
        assert!(placement.allows_language("fr"));
        placement.wlang = Some(vec!["en".into(), "de".into()]);
        assert!(placement.allows_language("EN"));
        assert!(!placement.allows_language("fr"));
    }
}
