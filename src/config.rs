use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::bundle::Source;
use crate::error::ConfigError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_DIR: &str = "data/catalog";

/// Runtime settings, read from the environment (and an optional `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub catalog: Source,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("CHEMREF_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::Addr {
                value: addr_value.clone(),
                source,
            })?;
        let catalog = Source::parse(&lookup("CHEMREF_CATALOG").unwrap_or_default());
        let cache_dir = lookup("CHEMREF_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));
        Ok(Config {
            addr,
            catalog,
            cache_dir,
        })
    }
}
