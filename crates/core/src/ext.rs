//! Vendor extension maps and the integer flag encoding shared by every entity.

use serde::{Deserialize, Deserializer, Serializer};

/// Open vendor-extension object carried by nearly every AdCOM entity.
///
/// Keys are kept in a sorted map so that re-encoding is deterministic; values
/// pass through untouched.
pub type Ext = serde_json::Map<String, serde_json::Value>;

/// Serde adapter for `0 = no, 1 = yes` attributes, exposed as `Option<bool>`.
///
/// Encodes as the integers 0/1. Decoding also accepts JSON booleans since some
/// producers emit them; any other integer is rejected.
pub(crate) mod flag {
    use super::*;
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Int(i64),
        Bool(bool),
    }

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(flag) => serializer.serialize_u8(u8::from(*flag)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawFlag>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawFlag::Bool(flag)) => Ok(Some(flag)),
            Some(RawFlag::Int(0)) => Ok(Some(false)),
            Some(RawFlag::Int(1)) => Ok(Some(true)),
            Some(RawFlag::Int(other)) => Err(D::Error::custom(format!(
                "expected flag value 0 or 1, found {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Flagged {
        #[serde(default, with = "flag", skip_serializing_if = "Option::is_none")]
        on: Option<bool>,
    }

    #[test]
    fn test_flag_encodes_as_integer() {
        let json = serde_json::to_value(Flagged { on: Some(true) }).unwrap();
        assert_eq!(json, json!({"on": 1}));

        let json = serde_json::to_value(Flagged { on: Some(false) }).unwrap();
        assert_eq!(json, json!({"on": 0}));

        let json = serde_json::to_value(Flagged::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_flag_decode() {
        let f: Flagged = serde_json::from_value(json!({"on": 1})).unwrap();
        assert_eq!(f.on, Some(true));
        let f: Flagged = serde_json::from_value(json!({"on": false})).unwrap();
        assert_eq!(f.on, Some(false));
        let f: Flagged = serde_json::from_value(json!({"on": null})).unwrap();
        assert_eq!(f.on, None);
        let f: Flagged = serde_json::from_value(json!({})).unwrap();
        assert_eq!(f.on, None);

        assert!(serde_json::from_value::<Flagged>(json!({"on": 2})).is_err());
    }
}
