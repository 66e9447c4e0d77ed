//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use catalog_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const DATA_PATH_VAR: &str = "CATALOG_DATA_PATH";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 127.0.0.1:8080, got `{value}`")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: catalog_observability::ParseLogFormatError,
    },

    #[error("{var} is set but empty")]
    EmptyDataPath { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON seed file; the built-in catalog is used when absent.
    pub data_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let data_path = match lookup(DATA_PATH_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::EmptyDataPath { var: DATA_PATH_VAR });
            }
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => None,
        };

        let log_format: LogFormat = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                source,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            data_path,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn reads_all_variables() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (DATA_PATH_VAR, "/etc/catalog/products.json"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.data_path,
            Some(PathBuf::from("/etc/catalog/products.json"))
        );
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ApiConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = ApiConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));
    }

    #[test]
    fn rejects_blank_data_path() {
        let err = ApiConfig::from_lookup(lookup_from(&[(DATA_PATH_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDataPath { var: DATA_PATH_VAR });
    }
}
