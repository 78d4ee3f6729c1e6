//! AdCOM enumerations.
//!
//! Every list is a closed set of integer codes. The codes are the wire
//! contract: each enum serializes as its bare integer and rejects codes it
//! does not know. `name()` returns the symbolic constant used by the AdCOM
//! documents (e.g. `"CONNECTED_TV"`).

use crate::error::{AdcomError, AdcomResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

macro_rules! adcom_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn code(self) -> i32 {
                self as i32
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = AdcomError;

            fn try_from(code: i32) -> AdcomResult<Self> {
                Self::from_code(code).ok_or(AdcomError::UnknownCode {
                    list: stringify!($name),
                    code: code.into(),
                })
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

adcom_enum! {
    /// Kind of user agent an extended identifier was observed on.
    AgentType {
        BrowserOrDevice = 1 => "BROWSER_OR_DEVICE",
        InApp = 2 => "IN_APP",
        PersonBased = 3 => "PERSON_BASED",
    }
}

adcom_enum! {
    /// Ad serving and measurement APIs a placement supports or an ad needs.
    ApiFramework {
        Vpaid1_0 = 1 => "VPAID_1_0",
        Vpaid2_0 = 2 => "VPAID_2_0",
        Mraid1_0 = 3 => "MRAID_1_0",
        Ormma = 4 => "ORMMA",
        Mraid2_0 = 5 => "MRAID_2_0",
        Mraid3_0 = 6 => "MRAID_3_0",
        Omid1_0 = 7 => "OMID_1_0",
        Simid1_0 = 8 => "SIMID_1_0",
        Simid1_1 = 9 => "SIMID_1_1",
    }
}

adcom_enum! {
    /// Workflow state of an ad audit.
    ///
    /// Every audit starts at `PendingAudit`; the remaining states are outcomes.
    AuditStatusCode {
        PendingAudit = 1 => "PENDING_AUDIT",
        PreApproved = 2 => "PRE_APPROVED",
        Approved = 3 => "APPROVED",
        Denied = 4 => "DENIED",
        ChangedResubmissionRequested = 5 => "CHANGED_RESUBMISSION_REQUESTED",
        Expired = 6 => "EXPIRED",
    }
}

adcom_enum! {
    AutoRefreshTrigger {
        Unknown = 0 => "UNKNOWN",
        UserAction = 1 => "USER_ACTION",
        Event = 2 => "EVENT",
        Time = 3 => "TIME",
    }
}

adcom_enum! {
    /// Versioned category code lists. `cat` values only mean something relative to
    /// the taxonomy named next to them in `cattax`.
    CategoryTaxonomy {
        /// Deprecated.
        ContentTaxonomy1_0 = 1 => "CONTENT_TAXONOMY_1_0",
        /// Deprecated. Also the documented default wherever `cattax` has one.
        ContentTaxonomy2_0 = 2 => "CONTENT_TAXONOMY_2_0",
        AdProductTaxonomy1_0 = 3 => "AD_PRODUCT_TAXONOMY_1_0",
        AudienceTaxonomy1_1 = 4 => "AUDIENCE_TAXONOMY_1_1",
        ContentTaxonomy2_1 = 5 => "CONTENT_TAXONOMY_2_1",
        ContentTaxonomy2_2 = 6 => "CONTENT_TAXONOMY_2_2",
        ContentTaxonomy3_0 = 7 => "CONTENT_TAXONOMY_3_0",
        AdProductTaxonomy2_0 = 8 => "AD_PRODUCT_TAXONOMY_2_0",
    }
}

adcom_enum! {
    /// How a creative reacts to activation.
    ClickType {
        NonClickable = 0 => "NON_CLICKABLE",
        ClickableUnknown = 1 => "CLICKABLE_UNKNOWN",
        ClickableEmbeddedBrowser = 2 => "CLICKABLE_EMBEDDED_BROWSER",
        ClickableNativeBrowser = 3 => "CLICKABLE_NATIVE_BROWSER",
    }
}

adcom_enum! {
    /// Companion markup accepted alongside video and audio ads.
    CompanionType {
        StaticResource = 1 => "STATIC_RESOURCE",
        HtmlResource = 2 => "HTML_RESOURCE",
        IframeResource = 3 => "IFRAME_RESOURCE",
    }
}

adcom_enum! {
    ConnectionType {
        Ethernet = 1 => "ETHERNET",
        Wifi = 2 => "WIFI",
        CellularUnknown = 3 => "CELLULAR_UNKNOWN",
        Cellular2G = 4 => "CELLULAR_2G",
        Cellular3G = 5 => "CELLULAR_3G",
        Cellular4G = 6 => "CELLULAR_4G",
        Cellular5G = 7 => "CELLULAR_5G",
    }
}

adcom_enum! {
    /// Kind of content surrounding the ad.
    ContentContext {
        Video = 1 => "VIDEO",
        Game = 2 => "GAME",
        Music = 3 => "MUSIC",
        Application = 4 => "APPLICATION",
        Text = 5 => "TEXT",
        Other = 6 => "OTHER",
        Unknown = 7 => "UNKNOWN",
    }
}

adcom_enum! {
    /// Creative attributes, used both to describe ads and to block them.
    CreativeAttribute {
        AudioAdAutoplay = 1 => "AUDIO_AD_AUTOPLAY",
        AudioAdUserInitiated = 2 => "AUDIO_AD_USER_INITIATED",
        ExpandableAutomatic = 3 => "EXPANDABLE_AUTOMATIC",
        ExpandableClick = 4 => "EXPANDABLE_CLICK",
        ExpandableRollover = 5 => "EXPANDABLE_ROLLOVER",
        InBannerVideoAutoplay = 6 => "IN_BANNER_VIDEO_AUTOPLAY",
        InBannerVideoUserInitiated = 7 => "IN_BANNER_VIDEO_USER_INITIATED",
        Pop = 8 => "POP",
        ProvocativeImagery = 9 => "PROVOCATIVE_IMAGERY",
        DisruptiveAnimation = 10 => "DISRUPTIVE_ANIMATION",
        Surveys = 11 => "SURVEYS",
        TextOnly = 12 => "TEXT_ONLY",
        UserInteractive = 13 => "USER_INTERACTIVE",
        DialogStyle = 14 => "DIALOG_STYLE",
        AudioButton = 15 => "AUDIO_BUTTON",
        SkipButton = 16 => "SKIP_BUTTON",
        Flash = 17 => "FLASH",
        Responsive = 18 => "RESPONSIVE",
    }
}

adcom_enum! {
    /// VAST/DAAST flavours for audio and video creatives.
    AudioVideoCreativeSubtype {
        Vast1_0 = 1 => "VAST_1_0",
        Vast2_0 = 2 => "VAST_2_0",
        Vast3_0 = 3 => "VAST_3_0",
        Vast1_0Wrapper = 4 => "VAST_1_0_WRAPPER",
        Vast2_0Wrapper = 5 => "VAST_2_0_WRAPPER",
        Vast3_0Wrapper = 6 => "VAST_3_0_WRAPPER",
        Vast4_0 = 7 => "VAST_4_0",
        Vast4_0Wrapper = 8 => "VAST_4_0_WRAPPER",
        Daast1_0 = 9 => "DAAST_1_0",
        Daast1_0Wrapper = 10 => "DAAST_1_0_WRAPPER",
        Vast4_1 = 11 => "VAST_4_1",
        Vast4_1Wrapper = 12 => "VAST_4_1_WRAPPER",
        Vast4_2 = 13 => "VAST_4_2",
        Vast4_2Wrapper = 14 => "VAST_4_2_WRAPPER",
        Vast4_3 = 15 => "VAST_4_3",
        Vast4_3Wrapper = 16 => "VAST_4_3_WRAPPER",
    }
}

adcom_enum! {
    DisplayCreativeSubtype {
        Html = 1 => "HTML",
        AmpHtml = 2 => "AMPHTML",
        StructuredImage = 3 => "STRUCTURED_IMAGE",
        StructuredNative = 4 => "STRUCTURED_NATIVE",
    }
}

adcom_enum! {
    DeliveryMethod {
        Streaming = 1 => "STREAMING",
        Progressive = 2 => "PROGRESSIVE",
        Download = 3 => "DOWNLOAD",
    }
}

adcom_enum! {
    /// General class of device.
    DeviceType {
        MobileTablet = 1 => "MOBILE_TABLET",
        PersonalComputer = 2 => "PERSONAL_COMPUTER",
        ConnectedTv = 3 => "CONNECTED_TV",
        Phone = 4 => "PHONE",
        Tablet = 5 => "TABLET",
        ConnectedDevice = 6 => "CONNECTED_DEVICE",
        SetTopBox = 7 => "SET_TOP_BOX",
        OohDevice = 8 => "OOH_DEVICE",
    }
}

adcom_enum! {
    /// Context a native ad appears in. Codes are grouped by tens: 1x content,
    /// 2x social, 3x product.
    DisplayContextType {
        Content = 10 => "CONTENT",
        Article = 11 => "ARTICLE",
        Video = 12 => "VIDEO",
        Audio = 13 => "AUDIO",
        Image = 14 => "IMAGE",
        UserGenerated = 15 => "USER_GENERATED",
        Social = 20 => "SOCIAL",
        Email = 21 => "EMAIL",
        Chat = 22 => "CHAT",
        Product = 30 => "PRODUCT",
        AppStore = 31 => "APP_STORE",
        ProductReviews = 32 => "PRODUCT_REVIEWS",
    }
}

adcom_enum! {
    DisplayPlacementType {
        InFeed = 1 => "IN_FEED",
        InContent = 2 => "IN_CONTENT",
        OutsideContent = 3 => "OUTSIDE_CONTENT",
        Recommendation = 4 => "RECOMMENDATION",
    }
}

adcom_enum! {
    /// Who measured the impression multiplier of a DOOH play.
    DoohMultiplierMeasurementSourceType {
        Unknown = 0 => "UNKNOWN",
        MeasurementVendor = 1 => "MEASUREMENT_VENDOR",
        Publisher = 2 => "PUBLISHER",
        Exchange = 3 => "EXCHANGE",
    }
}

adcom_enum! {
    DoohVenueTaxonomy {
        /// The deprecated [`DoohVenueType`] list.
        Adcom = 0 => "ADCOM",
        OpenOoh1_0 = 1 => "OPENOOH_1_0",
        Dpaa = 2 => "DPAA",
        Dmi1_1 = 3 => "DMI_1_1",
        Oma2022 = 4 => "OMA_2022",
        OpenOoh1_1 = 5 => "OPENOOH_1_1",
    }
}

adcom_enum! {
    /// DPAA-derived DOOH venue types.
    ///
    /// Superseded by venue taxonomies; kept so older producers still decode.
    DoohVenueType {
        Airborne = 1 => "AIRBORNE",
        AirportsGeneral = 2 => "AIRPORTS_GENERAL",
        AirportsBaggageClaim = 3 => "AIRPORTS_BAGGAGE_CLAIM",
        AirportsTerminal = 4 => "AIRPORTS_TERMINAL",
        AirportsLounges = 5 => "AIRPORTS_LOUNGES",
        Atms = 6 => "ATMS",
        Backlights = 7 => "BACKLIGHTS",
        Bars = 8 => "BARS",
        Benches = 9 => "BENCHES",
        BikeRacks = 10 => "BIKE_RACKS",
        Bulletins = 11 => "BULLETINS",
        Buses = 12 => "BUSES",
        Cafes = 13 => "CAFES",
        CasualDining = 14 => "CASUAL_DINING",
        ChildCare = 15 => "CHILD_CARE",
        Cinema = 16 => "CINEMA",
        CityInfoPanels = 17 => "CITY_INFO_PANELS",
        ConvenienceStores = 18 => "CONVENIENCE_STORES",
        WildPosting = 19 => "WILD_POSTING",
        DoctorsGeneral = 20 => "DOCTORS_GENERAL",
        DoctorsObstetrics = 21 => "DOCTORS_OBSTETRICS",
        DoctorsPediatrics = 22 => "DOCTORS_PEDIATRICS",
        FamilyEntertainment = 23 => "FAMILY_ENTERTAINMENT",
        Ferries = 24 => "FERRIES",
        FinancialServices = 25 => "FINANCIAL_SERVICES",
        GasStations = 26 => "GAS_STATIONS",
        GolfCourses = 27 => "GOLF_COURSES",
        Gyms = 28 => "GYMS",
        Hospitals = 29 => "HOSPITALS",
        Hotels = 30 => "HOTELS",
        JuniorPosters = 31 => "JUNIOR_POSTERS",
        Kiosks = 32 => "KIOSKS",
        MallsGeneral = 33 => "MALLS_GENERAL",
        MallsFoodCourts = 34 => "MALLS_FOOD_COURTS",
        Marine = 35 => "MARINE",
        MobileBillboards = 36 => "MOBILE_BILLBOARDS",
        MovieLobbies = 37 => "MOVIE_LOBBIES",
        Newsstands = 38 => "NEWSSTANDS",
        OfficeBuildings = 39 => "OFFICE_BUILDINGS",
        PhoneKiosks = 40 => "PHONE_KIOSKS",
        Posters = 41 => "POSTERS",
        Qsr = 42 => "QSR",
        Rail = 43 => "RAIL",
        Receptacles = 44 => "RECEPTACLES",
        Resorts = 45 => "RESORTS",
        Retail = 46 => "RETAIL",
        Salons = 47 => "SALONS",
        Shelters = 48 => "SHELTERS",
        SportsArenas = 49 => "SPORTS_ARENAS",
        Subway = 50 => "SUBWAY",
        Taxis = 51 => "TAXIS",
        Truckside = 52 => "TRUCKSIDE",
        Universities = 53 => "UNIVERSITIES",
        UrbanPanels = 54 => "URBAN_PANELS",
        Veterinarian = 55 => "VETERINARIAN",
        Walls = 56 => "WALLS",
        Other = 57 => "OTHER",
    }
}

adcom_enum! {
    EventTrackingMethod {
        ImagePixel = 1 => "IMAGE_PIXEL",
        Javascript = 2 => "JAVASCRIPT",
    }
}

adcom_enum! {
    /// Trackable ad events.
    EventType {
        Loaded = 1 => "LOADED",
        Impression = 2 => "IMPRESSION",
        ViewableMrc50 = 3 => "VIEWABLE_MRC_50",
        ViewableMrc100 = 4 => "VIEWABLE_MRC_100",
        ViewableVideo50 = 5 => "VIEWABLE_VIDEO_50",
    }
}

adcom_enum! {
    ExpandableDirection {
        Left = 1 => "LEFT",
        Right = 2 => "RIGHT",
        Up = 3 => "UP",
        Down = 4 => "DOWN",
        FullScreen = 5 => "FULL_SCREEN",
        Resize = 6 => "RESIZE",
    }
}

adcom_enum! {
    /// Audio feed kinds.
    FeedType {
        MusicStreaming = 1 => "MUSIC_STREAMING",
        Broadcast = 2 => "BROADCAST",
        Podcast = 3 => "PODCAST",
        CatchupRadio = 4 => "CATCHUP_RADIO",
        WebRadio = 5 => "WEB_RADIO",
        VideoGame = 6 => "VIDEO_GAME",
        TextToSpeech = 7 => "TEXT_TO_SPEECH",
    }
}

adcom_enum! {
    IdMatchMethod {
        Unknown = 0 => "UNKNOWN",
        NoMatch = 1 => "NO_MATCH",
        CookieSync = 2 => "COOKIE_SYNC",
        Authenticated = 3 => "AUTHENTICATED",
        Observed = 4 => "OBSERVED",
        Inference = 5 => "INFERENCE",
    }
}

adcom_enum! {
    /// IP geolocation vendors.
    IpLocationService {
        Ip2Location = 1 => "IP2LOCATION",
        Neustar = 2 => "NEUSTAR",
        MaxMind = 3 => "MAXMIND",
        NetAcuity = 4 => "NETACUITY",
    }
}

adcom_enum! {
    LinearityMode {
        Linear = 1 => "LINEAR",
        NonLinear = 2 => "NON_LINEAR",
    }
}

adcom_enum! {
    /// Source of a location fix.
    LocationType {
        Gps = 1 => "GPS",
        Ip = 2 => "IP",
        UserProvided = 3 => "USER_PROVIDED",
    }
}

adcom_enum! {
    /// IQG media ratings.
    MediaRating {
        AllAudiences = 1 => "ALL_AUDIENCES",
        Over12 = 2 => "OVER_12",
        Mature = 3 => "MATURE",
    }
}

adcom_enum! {
    NativeDataAssetType {
        Sponsored = 1 => "SPONSORED",
        Description = 2 => "DESCRIPTION",
        Rating = 3 => "RATING",
        Likes = 4 => "LIKES",
        Downloads = 5 => "DOWNLOADS",
        Price = 6 => "PRICE",
        SalePrice = 7 => "SALE_PRICE",
        Phone = 8 => "PHONE",
        Address = 9 => "ADDRESS",
        Description2 = 10 => "DESCRIPTION_2",
        DisplayUrl = 11 => "DISPLAY_URL",
        CtaText = 12 => "CTA_TEXT",
    }
}

adcom_enum! {
    /// Native image slots. Code 2 is unassigned.
    NativeImageAssetType {
        Icon = 1 => "ICON",
        Main = 3 => "MAIN",
    }
}

adcom_enum! {
    OperatingSystem {
        Other = 0 => "OTHER",
        ThreeDs = 1 => "THREE_DS",
        Android = 2 => "ANDROID",
        AppleTv = 3 => "APPLE_TV",
        Asha = 4 => "ASHA",
        Bada = 5 => "BADA",
        Blackberry = 6 => "BLACKBERRY",
        Brew = 7 => "BREW",
        ChromeOs = 8 => "CHROME_OS",
        Darwin = 9 => "DARWIN",
        FireOs = 10 => "FIRE_OS",
        FirefoxOs = 11 => "FIREFOX_OS",
        HelenOs = 12 => "HELEN_OS",
        Ios = 13 => "IOS",
        Linux = 14 => "LINUX",
        MacOs = 15 => "MAC_OS",
        Meego = 16 => "MEEGO",
        MorphOs = 17 => "MORPH_OS",
        NetBsd = 18 => "NET_BSD",
        NucleusPlus = 19 => "NUCLEUS_PLUS",
        PsVita = 20 => "PS_VITA",
        Ps3 = 21 => "PS3",
        Ps4 = 22 => "PS4",
        Psp = 23 => "PSP",
        Symbian = 24 => "SYMBIAN",
        Tizen = 25 => "TIZEN",
        WatchOs = 26 => "WATCH_OS",
        WebOs = 27 => "WEB_OS",
        Windows = 28 => "WINDOWS",
    }
}

adcom_enum! {
    /// Position of a placement on screen.
    PlacementPosition {
        Unknown = 0 => "UNKNOWN",
        AboveFold = 1 => "ABOVE_FOLD",
        Locked = 2 => "LOCKED",
        BelowFold = 3 => "BELOW_FOLD",
        Header = 4 => "HEADER",
        Footer = 5 => "FOOTER",
        Sidebar = 6 => "SIDEBAR",
        Fullscreen = 7 => "FULLSCREEN",
    }
}

adcom_enum! {
    /// Legacy video placement subtypes.
    ///
    /// Replaced by [`VideoPlacementType`] as of the 2.6-202303 release; kept so
    /// older producers still decode.
    VideoPlacementSubtype {
        InStream = 1 => "IN_STREAM",
        InBanner = 2 => "IN_BANNER",
        InArticle = 3 => "IN_ARTICLE",
        InFeed = 4 => "IN_FEED",
        Interstitial = 5 => "INTERSTITIAL",
    }
}

adcom_enum! {
    /// Video placement subtypes from the current IAB Digital Video Guidelines.
    VideoPlacementType {
        Instream = 1 => "INSTREAM",
        Accompanying = 2 => "ACCOMPANYING",
        Interstitial = 3 => "INTERSTITIAL",
        Standalone = 4 => "STANDALONE",
    }
}

adcom_enum! {
    /// What ends media playback.
    PlaybackCessationMode {
        OnCompletion = 1 => "ON_COMPLETION",
        OnViewportExit = 2 => "ON_VIEWPORT_EXIT",
        FloatingUntilComplete = 3 => "FLOATING_UNTIL_COMPLETE",
    }
}

adcom_enum! {
    PlaybackMethod {
        AutoPlaySoundOn = 1 => "AUTO_PLAY_SOUND_ON",
        AutoPlaySoundOff = 2 => "AUTO_PLAY_SOUND_OFF",
        ClickToPlay = 3 => "CLICK_TO_PLAY",
        MouseOver = 4 => "MOUSE_OVER",
        ViewportSoundOn = 5 => "VIEWPORT_SOUND_ON",
        ViewportSoundOff = 6 => "VIEWPORT_SOUND_OFF",
        Continuous = 7 => "CONTINUOUS",
    }
}

adcom_enum! {
    PodDeduplicationSetting {
        ByDomain = 1 => "BY_DOMAIN",
        ByCategory = 2 => "BY_CATEGORY",
        ByCreativeId = 3 => "BY_CREATIVE_ID",
        ByMediafileUrl = 4 => "BY_MEDIAFILE_URL",
    }
}

adcom_enum! {
    /// Position of a pod within the content stream.
    ///
    /// `Last` is the sentinel `-1`.
    PodSequence {
        Last = -1 => "LAST",
        Any = 0 => "ANY",
        First = 1 => "FIRST",
    }
}

adcom_enum! {
    ProductionQuality {
        Unknown = 0 => "UNKNOWN",
        Professional = 1 => "PROFESSIONAL",
        Prosumer = 2 => "PROSUMER",
        UserGenerated = 3 => "USER_GENERATED",
    }
}

adcom_enum! {
    /// Unit for widths and heights.
    SizeUnit {
        Dips = 1 => "DIPS",
        Inches = 2 => "INCHES",
        Centimeters = 3 => "CENTIMETERS",
    }
}

adcom_enum! {
    /// Guaranteed slot of an ad within its pod. Shares the `-1` = last, `0` = any,
    /// `1` = first encoding of [`PodSequence`] and adds `2` = first or last.
    SlotPosition {
        Last = -1 => "LAST",
        Any = 0 => "ANY",
        First = 1 => "FIRST",
        FirstOrLast = 2 => "FIRST_OR_LAST",
    }
}

adcom_enum! {
    UserAgentSource {
        Unknown = 0 => "UNKNOWN",
        ClientHintsLow = 1 => "CLIENT_HINTS_LOW",
        ClientHintsHigh = 2 => "CLIENT_HINTS_HIGH",
        ParsedUa = 3 => "PARSED_UA",
    }
}

adcom_enum! {
    VolumeNormalizationMode {
        None = 0 => "NONE",
        Average = 1 => "AVERAGE",
        Peak = 2 => "PEAK",
        Loudness = 3 => "LOUDNESS",
        Custom = 4 => "CUSTOM",
    }
}

/// Start delay of a video or audio placement.
///
/// Negative codes are sentinels (`-2` generic post-roll, `-1` generic
/// mid-roll), `0` is pre-roll and any positive code is a mid-roll starting
/// that many seconds into the content. Codes below `-2` or above
/// `u32::MAX` are rejected. Codes are `i64`, wide enough
/// for every `u32` delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum StartDelayMode {
    PostRoll,
    MidRoll,
    PreRoll,
    Seconds(NonZeroU32),
}

impl StartDelayMode {
    /// Mid-roll after `secs` seconds; zero seconds is a pre-roll.
    pub fn after(secs: u32) -> Self {
        match NonZeroU32::new(secs) {
            Some(secs) => StartDelayMode::Seconds(secs),
            None => StartDelayMode::PreRoll,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            StartDelayMode::PostRoll => -2,
            StartDelayMode::MidRoll => -1,
            StartDelayMode::PreRoll => 0,
            StartDelayMode::Seconds(secs) => secs.get().into(),
        }
    }

    /// Symbolic name of the sentinel codes. Specific delays have none.
    pub fn name(self) -> Option<&'static str> {
        match self {
            StartDelayMode::PostRoll => Some("POST_ROLL"),
            StartDelayMode::MidRoll => Some("MID_ROLL"),
            StartDelayMode::PreRoll => Some("PRE_ROLL"),
            StartDelayMode::Seconds(_) => None,
        }
    }

    pub fn is_mid_roll(self) -> bool {
        matches!(self, StartDelayMode::MidRoll | StartDelayMode::Seconds(_))
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -2 => Some(StartDelayMode::PostRoll),
            -1 => Some(StartDelayMode::MidRoll),
            0 => Some(StartDelayMode::PreRoll),
            secs => u32::try_from(secs)
                .ok()
                .and_then(NonZeroU32::new)
                .map(StartDelayMode::Seconds),
        }
    }
}

impl TryFrom<i64> for StartDelayMode {
    type Error = AdcomError;

    fn try_from(code: i64) -> AdcomResult<Self> {
        Self::from_code(code).ok_or(AdcomError::UnknownCode {
            list: "StartDelayMode",
            code,
        })
    }
}

impl From<StartDelayMode> for i64 {
    fn from(value: StartDelayMode) -> i64 {
        value.code()
    }
}

impl fmt::Display for StartDelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartDelayMode::Seconds(secs) => write!(f, "MID_ROLL+{}s", secs),
            other => f.write_str(other.name().unwrap_or_default()),
        }
    }
}

impl CategoryTaxonomy {
    /// Taxonomy assumed by `Ad` and `Restrictions` when `cattax` is absent.
    pub const DEFAULT: CategoryTaxonomy = CategoryTaxonomy::ContentTaxonomy2_0;

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            CategoryTaxonomy::ContentTaxonomy1_0 | CategoryTaxonomy::ContentTaxonomy2_0
        )
    }
}

impl AuditStatusCode {
    /// Whether the audit workflow has left `PendingAudit`.
    pub fn is_resolved(self) -> bool {
        !matches!(self, AuditStatusCode::PendingAudit)
    }

    /// Whether an ad in this state may serve.
    pub fn is_servable(self) -> bool {
        matches!(
            self,
            AuditStatusCode::PreApproved | AuditStatusCode::Approved
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names() {
        assert_eq!(DeviceType::ConnectedTv.code(), 3);
        assert_eq!(DeviceType::ConnectedTv.name(), "CONNECTED_TV");
        assert_eq!(AgentType::BrowserOrDevice.code(), 1);
        assert_eq!(DisplayContextType::ProductReviews.code(), 32);
        assert_eq!(NativeImageAssetType::Main.code(), 3);
        assert_eq!(OperatingSystem::Windows.code(), 28);
        assert_eq!(DoohVenueType::Other.code(), 57);
        assert_eq!(ApiFramework::Simid1_1.name(), "SIMID_1_1");
        assert_eq!(CreativeAttribute::Responsive.to_string(), "RESPONSIVE");
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(AgentType::ALL.len(), 3);
        assert_eq!(ApiFramework::ALL.len(), 9);
        assert_eq!(CategoryTaxonomy::ALL.len(), 8);
        assert_eq!(CreativeAttribute::ALL.len(), 18);
        assert_eq!(AudioVideoCreativeSubtype::ALL.len(), 16);
        assert_eq!(DisplayContextType::ALL.len(), 12);
        assert_eq!(DoohVenueType::ALL.len(), 57);
        assert_eq!(NativeDataAssetType::ALL.len(), 12);
        assert_eq!(OperatingSystem::ALL.len(), 29);
        assert_eq!(SlotPosition::ALL.len(), 4);
    }

    #[test]
    fn test_from_code_covers_every_member() {
        for os in OperatingSystem::ALL {
            assert_eq!(OperatingSystem::from_code(os.code()), Some(*os));
        }
        assert_eq!(NativeImageAssetType::from_code(2), None);
        assert_eq!(DisplayContextType::from_code(16), None);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = DeviceType::try_from(9).unwrap_err();
        assert!(matches!(
            err,
            AdcomError::UnknownCode {
                list: "DeviceType",
                code: 9
            }
        ));
        assert!(serde_json::from_str::<DeviceType>("42").is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&PodSequence::Last).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&SlotPosition::FirstOrLast).unwrap(), "2");
        let pos: PlacementPosition = serde_json::from_str("7").unwrap();
        assert_eq!(pos, PlacementPosition::Fullscreen);
    }

    #[test]
    fn test_start_delay_sentinels() {
        assert_eq!(StartDelayMode::PostRoll.code(), -2);
        assert_eq!(StartDelayMode::MidRoll.code(), -1);
        assert_eq!(StartDelayMode::PreRoll.code(), 0);
        assert_eq!(StartDelayMode::after(0), StartDelayMode::PreRoll);
        assert_eq!(StartDelayMode::after(15).code(), 15);
        assert!(StartDelayMode::after(15).is_mid_roll());
        assert!(StartDelayMode::MidRoll.is_mid_roll());
        assert!(!StartDelayMode::PreRoll.is_mid_roll());
        assert_eq!(StartDelayMode::after(30).name(), None);
        assert_eq!(StartDelayMode::PostRoll.name(), Some("POST_ROLL"));
        assert_eq!(StartDelayMode::from_code(-3), None);

        let delay: StartDelayMode = serde_json::from_str("-2").unwrap();
        assert_eq!(delay, StartDelayMode::PostRoll);
        let delay: StartDelayMode = serde_json::from_str("45").unwrap();
        assert_eq!(delay, StartDelayMode::after(45));
        assert!(serde_json::from_str::<StartDelayMode>("-7").is_err());

        // Delays past i32::MAX keep their exact value.
        let long = StartDelayMode::after(3_000_000_000);
        assert_eq!(long.code(), 3_000_000_000);
        assert_eq!(StartDelayMode::from_code(long.code()), Some(long));
        assert_eq!(serde_json::to_string(&long).unwrap(), "3000000000");
        assert_eq!(StartDelayMode::from_code(i64::from(u32::MAX) + 1), None);
    }

    #[test]
    fn test_audit_status_workflow() {
        assert!(!AuditStatusCode::PendingAudit.is_resolved());
        assert!(AuditStatusCode::Denied.is_resolved());
        assert!(AuditStatusCode::PreApproved.is_servable());
        assert!(!AuditStatusCode::Expired.is_servable());
    }

    #[test]
    fn test_default_taxonomy() {
        assert_eq!(CategoryTaxonomy::DEFAULT.code(), 2);
        assert!(CategoryTaxonomy::DEFAULT.is_deprecated());
        assert!(!CategoryTaxonomy::ContentTaxonomy3_0.is_deprecated());
    }
}
