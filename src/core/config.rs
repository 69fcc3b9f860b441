//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own options (site address, site root) are read separately through
//! `leptos::config::get_configuration`.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum LogFormat {
    /// Human-readable, for local development
    #[default]
    #[display("pretty")]
    Pretty,
    /// One JSON object per line, for log collectors
    #[display("json")]
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// | Variable | Default |
/// |---|---|
/// | `MLD_LOG_LEVEL` | `info` |
/// | `MLD_LOG_FORMAT` | `pretty` |
/// | `MLD_COMPRESSION` | `true` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Compress responses with brotli/gzip
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys keep their
    /// default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = get("MLD_LOG_LEVEL")
            .map(|value| value.trim().to_string())
            .unwrap_or(defaults.log_level);

        let log_format = match get("MLD_LOG_FORMAT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MLD_LOG_FORMAT",
                value,
                expected: "`pretty` or `json`",
            })?,
            None => defaults.log_format,
        };

        let compression = match get("MLD_COMPRESSION") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                key: "MLD_COMPRESSION",
                value,
                expected: "a boolean",
            })?,
            None => defaults.compression,
        };

        Ok(Self {
            log_level,
            log_format,
            compression,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env access - thread safe)
    // ========================================================================

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.compression);
    }

    #[test]
    fn test_all_fields() {
        let config = load(&[
            ("MLD_LOG_LEVEL", "mylabeldesk=debug,tower_http=info"),
            ("MLD_LOG_FORMAT", "JSON"),
            ("MLD_COMPRESSION", "off"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "mylabeldesk=debug,tower_http=info");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.compression);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = load(&[("MLD_LOG_LEVEL", "  "), ("MLD_LOG_FORMAT", "")]).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = load(&[("MLD_LOG_FORMAT", "xml")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "MLD_LOG_FORMAT",
                value: "xml".to_string(),
                expected: "`pretty` or `json`",
            }
        );
        assert!(err.to_string().contains("MLD_LOG_FORMAT"));
    }

    #[test]
    fn test_invalid_compression() {
        let err = load(&[("MLD_COMPRESSION", "maybe")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "MLD_COMPRESSION",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }
}
