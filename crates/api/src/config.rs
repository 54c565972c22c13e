//! Process configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the listen address.
pub const BIND_ADDR_ENV: &str = "FINAPI_BIND_ADDR";

/// Listen address used when `FINAPI_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3333";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ADDR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr = raw.parse().map_err(|_| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_ENV,
            value: raw.clone(),
        })?;

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_3333() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.bind_addr.port(), 3333);
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let cfg = ApiConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3333);
    }

    #[test]
    fn reads_bind_addr_override() {
        let cfg = ApiConfig::from_lookup(|key| {
            (key == BIND_ADDR_ENV).then(|| "127.0.0.1:8080".to_string())
        })
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = ApiConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: "localhost".to_string(),
            }
        );
    }
}
