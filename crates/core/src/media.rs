//! Media objects: an ad, its creative subtype and its audit state.

use crate::enums::{
    ApiFramework, AudioVideoCreativeSubtype, AuditStatusCode, CategoryTaxonomy, CreativeAttribute,
    DisplayCreativeSubtype, EventTrackingMethod, EventType, MediaRating, NativeDataAssetType,
    NativeImageAssetType,
};
use crate::error::{AdcomError, AdcomResult};
use crate::ext::{flag, Ext};
use crate::placement::{AssetFormat, NativeFormat};
use crate::variant::{at_most_one, exactly_one};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Ad ─────────────────────────────────────────────────────────────────

/// Creative subtype of an ad.
#[derive(Debug, Clone, PartialEq)]
pub enum AdMedia {
    Display(Display),
    Video(Video),
    Audio(Audio),
}

impl AdMedia {
    /// Wire field carrying this subtype.
    pub fn field(&self) -> &'static str {
        match self {
            AdMedia::Display(_) => "display",
            AdMedia::Video(_) => "video",
            AdMedia::Audio(_) => "audio",
        }
    }
}

/// The root media object.
///
/// `id` identifies the creative across transactions: two instances of the
/// same creative content carry the same id. Exactly one media subtype is
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartialAd", into = "PartialAd")]
pub struct Ad {
    pub id: String,
    /// Advertiser domains, top two levels only (e.g. "ford.com"). More than
    /// one when creatives rotate.
    pub adomain: Option<Vec<String>>,
    /// App bundles when the advertised product is an app.
    pub bundle: Option<Vec<String>>,
    /// Representative image for cursory quality checks, without cache busting.
    pub iurl: Option<String>,
    pub cat: Option<Vec<String>>,
    pub cattax: Option<CategoryTaxonomy>,
    pub lang: Option<String>,
    pub attr: Option<Vec<CreativeAttribute>>,
    /// Uses HTTPS for all assets and markup.
    pub secure: Option<bool>,
    pub mrating: Option<MediaRating>,
    /// Original instantiation, Unix milliseconds.
    pub init: Option<i64>,
    /// Most recent modification, Unix milliseconds.
    pub lastmod: Option<i64>,
    pub media: AdMedia,
    pub audit: Option<Audit>,
    pub ext: Option<Ext>,
}

/// Every [`Ad`] attribute, all optional.
///
/// This is both the permissive wire shape an `Ad` decodes from and the
/// payload of `Audit.corr`, where only corrected attributes are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialAd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adomain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cattax: Option<CategoryTaxonomy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr: Option<Vec<CreativeAttribute>>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrating: Option<MediaRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl TryFrom<PartialAd> for Ad {
    type Error = AdcomError;

    fn try_from(partial: PartialAd) -> AdcomResult<Self> {
        let id = partial.id.ok_or(AdcomError::MissingField {
            object: "Ad",
            field: "id",
        })?;
        let media = exactly_one(
            "Ad",
            "display, video, audio",
            [
                ("display", partial.display.map(AdMedia::Display)),
                ("video", partial.video.map(AdMedia::Video)),
                ("audio", partial.audio.map(AdMedia::Audio)),
            ],
        )?;

        Ok(Ad {
            id,
            adomain: partial.adomain,
            bundle: partial.bundle,
            iurl: partial.iurl,
            cat: partial.cat,
            cattax: partial.cattax,
            lang: partial.lang,
            attr: partial.attr,
            secure: partial.secure,
            mrating: partial.mrating,
            init: partial.init,
            lastmod: partial.lastmod,
            media,
            audit: partial.audit,
            ext: partial.ext,
        })
    }
}

impl From<Ad> for PartialAd {
    fn from(ad: Ad) -> Self {
        let (display, video, audio) = match ad.media {
            AdMedia::Display(display) => (Some(display), None, None),
            AdMedia::Video(video) => (None, Some(video), None),
            AdMedia::Audio(audio) => (None, None, Some(audio)),
        };

        PartialAd {
            id: Some(ad.id),
            adomain: ad.adomain,
            bundle: ad.bundle,
            iurl: ad.iurl,
            cat: ad.cat,
            cattax: ad.cattax,
            lang: ad.lang,
            attr: ad.attr,
            secure: ad.secure,
            mrating: ad.mrating,
            init: ad.init,
            lastmod: ad.lastmod,
            display,
            video,
            audio,
            audit: ad.audit,
            ext: ad.ext,
        }
    }
}

impl PartialAd {
    fn has_media(&self) -> bool {
        self.display.is_some() || self.video.is_some() || self.audio.is_some()
    }
}

impl Ad {
    pub fn new(id: impl Into<String>, media: AdMedia) -> Self {
        Self {
            id: id.into(),
            adomain: None,
            bundle: None,
            iurl: None,
            cat: None,
            cattax: None,
            lang: None,
            attr: None,
            secure: None,
            mrating: None,
            init: None,
            lastmod: None,
            media,
            audit: None,
            ext: None,
        }
    }

    pub fn display(&self) -> Option<&Display> {
        match &self.media {
            AdMedia::Display(display) => Some(display),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&Video> {
        match &self.media {
            AdMedia::Video(video) => Some(video),
            _ => None,
        }
    }

    pub fn audio(&self) -> Option<&Audio> {
        match &self.media {
            AdMedia::Audio(audio) => Some(audio),
            _ => None,
        }
    }

    pub fn init_time(&self) -> Option<DateTime<Utc>> {
        self.init.and_then(DateTime::from_timestamp_millis)
    }

    pub fn lastmod_time(&self) -> Option<DateTime<Utc>> {
        self.lastmod.and_then(DateTime::from_timestamp_millis)
    }

    /// Overlay a partial correction (typically `audit.corr`) on this ad.
    ///
    /// Attributes present in `corr` replace the ad's own. A correction that
    /// carries a media subtype replaces the media entirely. The audit is kept.
    pub fn apply_correction(&self, corr: &PartialAd) -> AdcomResult<Ad> {
        let base = PartialAd::from(self.clone());
        let corr = corr.clone();
        let (display, video, audio) = if corr.has_media() {
            (corr.display, corr.video, corr.audio)
        } else {
            (base.display, base.video, base.audio)
        };

        Ad::try_from(PartialAd {
            id: corr.id.or(base.id),
            adomain: corr.adomain.or(base.adomain),
            bundle: corr.bundle.or(base.bundle),
            iurl: corr.iurl.or(base.iurl),
            cat: corr.cat.or(base.cat),
            cattax: corr.cattax.or(base.cattax),
            lang: corr.lang.or(base.lang),
            attr: corr.attr.or(base.attr),
            secure: corr.secure.or(base.secure),
            mrating: corr.mrating.or(base.mrating),
            init: corr.init.or(base.init),
            lastmod: corr.lastmod.or(base.lastmod),
            display,
            video,
            audio,
            audit: base.audit,
            ext: corr.ext.or(base.ext),
        })
    }

    /// The ad with its own audit correction applied, if it has one.
    pub fn corrected(&self) -> AdcomResult<Option<Ad>> {
        match self.audit.as_ref().and_then(|audit| audit.corr.as_deref()) {
            Some(corr) => self.apply_correction(corr).map(Some),
            None => Ok(None),
        }
    }
}

// ─── Display ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// e.g. "image/jpeg".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<DisplayCreativeSubtype>,
    /// Absolute width in DIPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Absolute height in DIPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wratio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hratio: Option<u32>,
    /// Buyer's privacy notice URL.
    #[serde(rename = "priv", skip_serializing_if = "Option::is_none")]
    pub privacy_url: Option<String>,
    /// Inline markup (HTML, AMPHTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    /// URL returning the markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<Native>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<Event>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Structured banner image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub img: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Structured native ad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Native {
    /// Default destination for assets without their own link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Vec<Asset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Native {
    pub fn assets(&self) -> &[Asset] {
        self.asset.as_deref().unwrap_or_default()
    }

    /// Pair each asset, in order, with the format that declared its slot.
    ///
    /// Assets join formats on `Asset.id == AssetFormat.id`. An asset without
    /// an id or with an id the format does not declare pairs with `None`.
    pub fn resolve<'a>(
        &'a self,
        format: &'a NativeFormat,
    ) -> Vec<(&'a Asset, Option<&'a AssetFormat>)> {
        self.assets()
            .iter()
            .map(|asset| (asset, asset.id.and_then(|id| format.asset_format(id))))
            .collect()
    }

    /// Asset ids with no matching declaration in `format`.
    pub fn unmatched_assets(&self, format: &NativeFormat) -> Vec<Option<u32>> {
        self.resolve(format)
            .into_iter()
            .filter(|(_, declared)| declared.is_none())
            .map(|(asset, _)| asset.id)
            .collect()
    }

    /// Destination for `asset`: its own link, else the native default.
    pub fn link_for<'a>(&'a self, asset: &'a Asset) -> Option<&'a LinkAsset> {
        asset.link.as_ref().or(self.link.as_ref())
    }
}

/// Content of a native asset.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetKind {
    Title(TitleAsset),
    Image(ImageAsset),
    Video(VideoAsset),
    Data(DataAsset),
}

/// One element of a native ad.
///
/// Carries at most one content kind. An asset with only a `link` is a pure
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssetFields", into = "AssetFields")]
pub struct Asset {
    /// The `AssetFormat.id` of the slot this asset fills.
    pub id: Option<u32>,
    /// Required to be displayed. Absent means not required.
    pub req: Option<bool>,
    pub kind: Option<AssetKind>,
    pub link: Option<LinkAsset>,
    pub ext: Option<Ext>,
}

/// Permissive wire shape of [`Asset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
    pub req: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleAsset>,
    #[serde(alias = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl TryFrom<AssetFields> for Asset {
    type Error = AdcomError;

    fn try_from(fields: AssetFields) -> AdcomResult<Self> {
        let kind = at_most_one(
            "Asset",
            [
                ("title", fields.title.map(AssetKind::Title)),
                ("image", fields.image.map(AssetKind::Image)),
                ("video", fields.video.map(AssetKind::Video)),
                ("data", fields.data.map(AssetKind::Data)),
            ],
        )?;

        Ok(Asset {
            id: fields.id,
            req: fields.req,
            kind,
            link: fields.link,
            ext: fields.ext,
        })
    }
}

impl From<Asset> for AssetFields {
    fn from(asset: Asset) -> Self {
        let mut fields = AssetFields {
            id: asset.id,
            req: asset.req,
            link: asset.link,
            ext: asset.ext,
            ..Default::default()
        };
        match asset.kind {
            Some(AssetKind::Title(title)) => fields.title = Some(title),
            Some(AssetKind::Image(image)) => fields.image = Some(image),
            Some(AssetKind::Video(video)) => fields.video = Some(video),
            Some(AssetKind::Data(data)) => fields.data = Some(data),
            None => {}
        }
        fields
    }
}

impl Asset {
    pub fn is_required(&self) -> bool {
        self.req.unwrap_or(false)
    }

    pub fn title(&self) -> Option<&TitleAsset> {
        match &self.kind {
            Some(AssetKind::Title(title)) => Some(title),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&ImageAsset> {
        match &self.kind {
            Some(AssetKind::Image(image)) => Some(image),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&VideoAsset> {
        match &self.kind {
            Some(AssetKind::Video(video)) => Some(video),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&DataAsset> {
        match &self.kind {
            Some(AssetKind::Data(data)) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAsset {
    pub url: String,
    /// Fallback when `url` is a deep link the device cannot open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urlfb: Option<String>,
    /// Third-party click trackers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trkr: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAsset {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<NativeImageAssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAsset {
    /// Formatted for display, e.g. "$10.99".
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<NativeDataAssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// A tracker attached to an ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub method: EventTrackingMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    /// Pixel or script URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Vendor key/value data for the tracker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdata: Option<Ext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

// ─── Video & Audio ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<AudioVideoCreativeSubtype>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dur: Option<u32>,
    /// VAST document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<ApiFramework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctype: Option<AudioVideoCreativeSubtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dur: Option<u32>,
    /// DAAST or VAST document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

// ─── Audit ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatusCode>,
    /// Human-readable explanations, typically for a denial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<i64>,
    /// Best-effort corrections the auditor applied or requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corr: Option<Box<PartialAd>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Audit {
    /// Absent status reads as pending.
    pub fn status(&self) -> AuditStatusCode {
        self.status.unwrap_or(AuditStatusCode::PendingAudit)
    }

    /// No further status change is expected without a new submission.
    ///
    /// A pre-approval may still be revisited and a change request waits on
    /// the buyer, so neither is final.
    pub fn is_final(&self) -> bool {
        matches!(
            self.status(),
            AuditStatusCode::Approved | AuditStatusCode::Denied | AuditStatusCode::Expired
        )
    }

    pub fn lastmod_time(&self) -> Option<DateTime<Utc>> {
        self.lastmod.and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::placement::{DataAssetFormat, TitleAssetFormat};
    use serde_json::json;

    #[test]
    fn test_decode_minimal_display_ad() {
        let ad: Ad = serde_json::from_str(
            r#"{"id":"ad1","display":{"mime":"image/jpeg","w":300,"h":250}}"#,
        )
        .unwrap();
        assert_eq!(ad.id, "ad1");
        let display = ad.display().unwrap();
        assert_eq!(display.mime.as_deref(), Some("image/jpeg"));
        assert_eq!(display.w, Some(300));
        assert_eq!(display.h, Some(250));
        assert!(display.ctype.is_none());
        assert!(ad.video().is_none());
        assert!(ad.audio().is_none());
        assert!(ad.audit.is_none());
    }

    #[test]
    fn test_ad_requires_id_and_one_media() {
        let err = serde_json::from_value::<Ad>(json!({"display": {}})).unwrap_err();
        assert!(err.to_string().contains("`id`"));

        let err = serde_json::from_value::<Ad>(json!({"id": "a"})).unwrap_err();
        assert!(err.to_string().contains("display, video, audio"));

        let err = serde_json::from_value::<Ad>(json!({"id": "a", "display": {}, "audio": {}}))
            .unwrap_err();
        assert!(err.to_string().contains("display, audio"));
    }

    #[test]
    fn test_ad_encodes_media_as_sibling_field() {
        let ad = Ad::new(
            "v1",
            AdMedia::Video(Video {
                mime: Some(vec!["video/mp4".into()]),
                ctype: Some(AudioVideoCreativeSubtype::Vast4_2),
                dur: Some(30),
                ..Default::default()
            }),
        );
        let json = serde_json::to_value(&ad).unwrap();
        assert_eq!(
            json,
            json!({"id": "v1", "video": {"mime": ["video/mp4"], "ctype": 13, "dur": 30}})
        );
        assert_eq!(ad.media.field(), "video");
    }

    #[test]
    fn test_ad_timestamps() {
        let ad = Ad {
            init: Some(1_700_000_000_000),
            ..Ad::new("a", AdMedia::Audio(Audio::default()))
        };
        assert_eq!(ad.init_time().unwrap().timestamp(), 1_700_000_000);
        assert!(ad.lastmod_time().is_none());
    }

    #[test]
    fn test_audit_correction() {
        let ad: Ad = serde_json::from_value(json!({
            "id": "a1",
            "adomain": ["ford.com"],
            "cat": ["IAB2"],
            "display": {"mime": "image/png"},
            "audit": {
                "status": 5,
                "feedback": ["wrong category"],
                "corr": {"cat": ["IAB3"], "cattax": 6}
            }
        }))
        .unwrap();
        let audit = ad.audit.as_ref().unwrap();
        assert_eq!(audit.status(), AuditStatusCode::ChangedResubmissionRequested);
        assert!(!audit.is_final());
        assert!(!Audit::default().is_final());

        let corrected = ad.corrected().unwrap().unwrap();
        assert_eq!(corrected.id, "a1");
        assert_eq!(corrected.cat, Some(vec!["IAB3".to_string()]));
        assert_eq!(corrected.cattax, Some(CategoryTaxonomy::ContentTaxonomy2_2));
        assert_eq!(corrected.adomain, Some(vec!["ford.com".to_string()]));
        assert_eq!(corrected.display().unwrap().mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_correction_replaces_media() {
        let ad = Ad::new("a1", AdMedia::Display(Display::default()));
        let corr = PartialAd {
            audio: Some(Audio {
                dur: Some(15),
                ..Default::default()
            }),
            ..Default::default()
        };
        let corrected = ad.apply_correction(&corr).unwrap();
        assert!(corrected.display().is_none());
        assert_eq!(corrected.audio().unwrap().dur, Some(15));
        assert!(ad.corrected().unwrap().is_none());
    }

    #[test]
    fn test_asset_kinds() {
        let native: Native = serde_json::from_value(json!({
            "link": {"url": "https://adv.example/landing"},
            "asset": [
                {"id": 1, "req": 1, "title": {"text": "Buy now"}},
                {"id": 2, "image": {"url": "https://cdn.example/i.png", "type": 3}},
                {"id": 3, "data": {"value": "$9.99", "type": 6}},
                {"link": {"url": "https://adv.example/cta"}}
            ]
        }))
        .unwrap();
        let assets = native.assets();
        assert_eq!(assets.len(), 4);
        assert!(assets[0].is_required());
        assert_eq!(assets[0].title().unwrap().text, "Buy now");
        assert_eq!(
            assets[1].image().unwrap().image_type,
            Some(NativeImageAssetType::Main)
        );
        assert_eq!(
            assets[2].data().unwrap().data_type,
            Some(NativeDataAssetType::Price)
        );
        assert!(assets[3].kind.is_none());
        assert_eq!(
            native.link_for(&assets[3]).unwrap().url,
            "https://adv.example/cta"
        );
        assert_eq!(
            native.link_for(&assets[0]).unwrap().url,
            "https://adv.example/landing"
        );

        let json = serde_json::to_value(&assets[1]).unwrap();
        assert!(json.get("image").is_some());
        assert!(json.get("img").is_none());

        // `img` is accepted on decode and written back as `image`.
        let asset: Asset = serde_json::from_value(json!({
            "id": 5,
            "img": {"url": "https://cdn.example/j.png"}
        }))
        .unwrap();
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["image"]["url"], "https://cdn.example/j.png");
        assert!(json.get("img").is_none());
    }

    #[test]
    fn test_asset_rejects_two_kinds() {
        let err = serde_json::from_value::<Asset>(json!({
            "id": 1,
            "title": {"text": "t"},
            "data": {"value": "v"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("title, data"));
    }

    #[test]
    fn test_resolve_against_native_format() {
        let format = NativeFormat::new(vec![
            AssetFormat {
                title: Some(TitleAssetFormat { len: 90, ext: None }),
                ..AssetFormat::new(1)
            },
            AssetFormat {
                data: Some(DataAssetFormat {
                    data_type: NativeDataAssetType::Sponsored,
                    len: None,
                    ext: None,
                }),
                ..AssetFormat::new(2)
            },
        ])
        .unwrap();

        let native = Native {
            asset: Some(vec![
                Asset {
                    id: Some(2),
                    kind: Some(AssetKind::Data(DataAsset {
                        value: "Acme".into(),
                        len: None,
                        data_type: None,
                        ext: None,
                    })),
                    ..Default::default()
                },
                Asset {
                    id: Some(7),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let resolved = native.resolve(&format);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].1.map(|f| f.id), Some(2));
        assert!(resolved[1].1.is_none());
        assert_eq!(native.unmatched_assets(&format), vec![Some(7)]);
    }

    #[test]
    fn test_event_requires_type_and_method() {
        let event: Event = serde_json::from_value(json!({
            "type": 2,
            "method": 1,
            "url": "https://trk.example/imp",
            "cdata": {"k": "v"}
        }))
        .unwrap();
        assert_eq!(event.event_type, EventType::Impression);
        assert_eq!(event.method, EventTrackingMethod::ImagePixel);

        assert!(serde_json::from_value::<Event>(json!({"type": 2})).is_err());
        assert!(serde_json::from_value::<Banner>(json!({"link": {"url": "u"}})).is_err());
    }
}
