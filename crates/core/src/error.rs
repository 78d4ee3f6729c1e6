use thiserror::Error;

pub type AdcomResult<T> = Result<T, AdcomError>;

#[derive(Error, Debug)]
pub enum AdcomError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown {list} code: {code}")]
    UnknownCode { list: &'static str, code: i64 },

    #[error("{object} requires one of: {expected}")]
    MissingVariant {
        object: &'static str,
        expected: &'static str,
    },

    #[error("{object} must carry exactly one of its subtypes, found: {}", found.join(", "))]
    AmbiguousVariant {
        object: &'static str,
        found: Vec<&'static str>,
    },

    #[error("{object} is missing required field `{field}`")]
    MissingField {
        object: &'static str,
        field: &'static str,
    },

    #[error("Duplicate asset format id {id} in native format")]
    DuplicateAssetId { id: u32 },

    #[error("Input of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
