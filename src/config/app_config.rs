use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub crypto: CryptoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CryptoConfig {
    /// Cipher algorithm name (only "aes" is supported)
    pub algorithm: String,
    /// Length of provisioned per-user keys, in bytes (16, 24, or 32)
    pub key_length_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            algorithm: "aes".to_string(),
            key_length_bytes: 32,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.crypto.algorithm, "aes");
        assert_eq!(config.crypto.key_length_bytes, 32);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig =
            serde_json::from_str(r#"{"crypto": {"algorithm": "aes", "key_length_bytes": 16}}"#)
                .unwrap();

        assert_eq!(config.crypto.key_length_bytes, 16);
        assert_eq!(config.logging.level, "info");
    }
}
