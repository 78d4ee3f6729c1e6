//! Property checks for sentinel codes and extension maps.

use adcom_core::context::{Device, Geo};
use adcom_core::enums::{PodSequence, SlotPosition, StartDelayMode};
use adcom_core::media::{Ad, AdMedia, Display};
use adcom_core::placement::{Companion, DisplayPlacement, VideoPlacement};
use adcom_core::Ext;
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_ext() -> impl Strategy<Value = Ext> {
    prop::collection::btree_map("[a-z_]{1,10}", arb_json(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

fn arb_start_delay() -> impl Strategy<Value = StartDelayMode> {
    prop_oneof![
        Just(StartDelayMode::PostRoll),
        Just(StartDelayMode::MidRoll),
        Just(StartDelayMode::PreRoll),
        (1u32..=u32::MAX).prop_map(StartDelayMode::after),
    ]
}

proptest! {
    #[test]
    fn ext_survives_roundtrip(ext in arb_ext(), display_ext in arb_ext()) {
        let ad = Ad {
            ext: Some(ext),
            ..Ad::new(
                "prop-ad",
                AdMedia::Display(Display {
                    ext: Some(display_ext),
                    ..Default::default()
                }),
            )
        };
        let json = serde_json::to_string(&ad).unwrap();
        let decoded: Ad = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, ad);
    }

    #[test]
    fn nested_ext_survives_roundtrip(
        geo_ext in arb_ext(),
        comp_ext in arb_ext(),
        slot_ext in arb_ext(),
        podid in any::<u64>(),
    ) {
        let device = Device {
            geo: Some(Geo {
                country: Some("USA".to_string()),
                ext: Some(geo_ext),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&device).unwrap();
        let decoded: Device = serde_json::from_value(value).unwrap();
        prop_assert_eq!(decoded, device);

        let video = VideoPlacement {
            mime: vec!["video/mp4".to_string()],
            podid: Some(podid),
            comp: Some(vec![Companion {
                display: Some(DisplayPlacement {
                    ext: Some(slot_ext),
                    ..Default::default()
                }),
                ext: Some(comp_ext),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let value = serde_json::to_value(&video).unwrap();
        prop_assert_eq!(&value["podid"], &json!(podid));
        let decoded: VideoPlacement = serde_json::from_value(value).unwrap();
        prop_assert_eq!(decoded, video);
    }

    #[test]
    fn start_delay_code_roundtrip(delay in arb_start_delay()) {
        let code = delay.code();
        prop_assert_eq!(StartDelayMode::from_code(code), Some(delay));
        prop_assert_eq!(delay.name().is_some(), code <= 0);
        prop_assert_eq!(delay.is_mid_roll(), code == -1 || code > 0);

        let decoded: StartDelayMode = serde_json::from_value(json!(code)).unwrap();
        prop_assert_eq!(decoded, delay);
    }

    #[test]
    fn start_delay_rejects_out_of_range(
        code in prop_oneof![i64::MIN..-2, (i64::from(u32::MAX) + 1)..=i64::MAX],
    ) {
        prop_assert!(StartDelayMode::from_code(code).is_none());
        prop_assert!(serde_json::from_value::<StartDelayMode>(json!(code)).is_err());
    }

    #[test]
    fn pod_sentinels_roundtrip(
        podseq in prop::sample::select(PodSequence::ALL),
        slot in prop::sample::select(SlotPosition::ALL),
        delay in arb_start_delay(),
    ) {
        let video = VideoPlacement {
            mime: vec!["video/mp4".to_string()],
            podseq: Some(podseq),
            slotinpod: Some(slot),
            delay: Some(delay),
            ..Default::default()
        };
        let value = serde_json::to_value(&video).unwrap();
        prop_assert_eq!(&value["podseq"], &json!(podseq.code()));
        prop_assert_eq!(&value["slotinpod"], &json!(slot.code()));
        prop_assert_eq!(&value["delay"], &json!(delay.code()));

        let decoded: VideoPlacement = serde_json::from_value(value).unwrap();
        prop_assert_eq!(decoded, video);
    }
}
