//! # configs
//!
//! Layered settings for the forum core and the tracing subscriber they drive.
//!
//! Precedence, lowest first: built-in defaults, `config/forum.toml` (optional),
//! then `FORUM__*` environment variables (`FORUM__LOG__LEVEL=debug`). A `.env`
//! file is loaded into the environment before anything is read.

pub mod telemetry;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "config/forum";
const ENV_PREFIX: &str = "FORUM";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageSettings {
    /// Length of the random suffix in `thread-<suffix>` / `comment-<suffix>`.
    pub id_suffix_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub log: LogSettings,
    pub storage: StorageSettings,
}

impl Settings {
    /// Reads `.env`, `config/forum.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        let _ = dotenvy::dotenv();
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Like [`Settings::load`] but with an explicit config file stem and no `.env`.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings: Settings = config::Config::builder()
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            .set_default("storage.id_suffix_len", 16_i64)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=32).contains(&self.storage.id_suffix_len) {
            return Err(ConfigError::Invalid {
                key: "storage.id_suffix_len",
                reason: format!("{} is outside 1..=32", self.storage.id_suffix_len),
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "log.level",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load_from("does/not/exist").unwrap();
        assert_eq!(settings.log.format, LogFormat::Pretty);
        assert_eq!(settings.storage.id_suffix_len, 16);
    }

    #[test]
    fn test_rejects_out_of_range_suffix() {
        let settings = Settings {
            log: LogSettings {
                level: "info".into(),
                format: LogFormat::Json,
            },
            storage: StorageSettings { id_suffix_len: 0 },
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "storage.id_suffix_len", .. }));
    }

    #[test]
    fn test_rejects_blank_log_level() {
        let settings = Settings {
            log: LogSettings {
                level: "  ".into(),
                format: LogFormat::Pretty,
            },
            storage: StorageSettings { id_suffix_len: 8 },
        };
        assert!(settings.validate().is_err());
    }
}
