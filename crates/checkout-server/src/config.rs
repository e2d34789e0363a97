//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// BIND_ADDR is not a socket address
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Where to listen and what to serve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("STATIC_DIR").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, static_dir: Option<String>) -> Result<Self, ConfigError> {
        let value = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = value
            .parse()
            .map_err(|source| ConfigError::BindAddr { value, source })?;

        Ok(Self {
            bind_addr,
            static_dir: static_dir
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_vars(Some("localhost".into()), None).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
