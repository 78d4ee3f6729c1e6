use crate::error::AdcomResult;
use serde::Deserialize;
use std::path::Path;

/// Root configuration for the codec tooling. Loaded from environment
/// variables with the prefix `ADCOM__` and an optional TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Re-encode with indentation.
    #[serde(default)]
    pub pretty: bool,
    /// Log every input path the typed model does not retain.
    #[serde(default = "default_warn_on_dropped_fields")]
    pub warn_on_dropped_fields: bool,
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default functions
fn default_warn_on_dropped_fields() -> bool {
    true
}
fn default_max_input_bytes() -> usize {
    4 * 1024 * 1024
}
fn default_log_filter() -> String {
    "adcom_inspect=info,adcom_core=info".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            warn_on_dropped_fields: default_warn_on_dropped_fields(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: default_log_filter(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables only.
    pub fn load() -> AdcomResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an optional TOML file, overridden by
    /// environment variables.
    pub fn load_from(file: Option<&Path>) -> AdcomResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("ADCOM")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.codec.pretty);
        assert!(config.codec.warn_on_dropped_fields);
        assert_eq!(config.codec.max_input_bytes, 4 * 1024 * 1024);
        assert!(!config.log.json);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!("adcom-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[codec]\npretty = true\nmax_input_bytes = 1024\n\n[log]\njson = true\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(config.codec.pretty);
        assert_eq!(config.codec.max_input_bytes, 1024);
        assert!(config.codec.warn_on_dropped_fields);
        assert!(config.log.json);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("adcom-config-does-not-exist.toml");
        let err = AppConfig::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, crate::error::AdcomError::Config(_)));
    }
}
