use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const STORE_ENV: &str = "BOOKSTORE_STORE";
pub const ADDR_ENV: &str = "BOOKSTORE_ADDR";
pub const LOG_LEVEL_ENV: &str = "BOOKSTORE_LOG_LEVEL";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration abstracts startup options for the bookstore service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub store: String,
    pub listen_addr: String,
    pub log_level: String,
}

impl Configuration {
    pub fn new(store: &str) -> Self {
        Configuration {
            store: store.to_string(),
            listen_addr: DEFAULT_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    // reads overrides from BOOKSTORE_* variables, unset ones keep their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new("mem");
        if let Some(store) = lookup(STORE_ENV) {
            config.store = store;
        }
        if let Some(addr) = lookup(ADDR_ENV) {
            config.listen_addr = addr;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config
    }

    pub fn socket_addr(&self) -> LibraryResult<SocketAddr> {
        Ok(self.listen_addr.parse::<SocketAddr>()?)
    }

    pub fn tracing_level(&self) -> LibraryResult<tracing::Level> {
        tracing::Level::from_str(self.log_level.as_str()).map_err(|err| LibraryError::validation(
            format!("invalid log level {} {}", self.log_level, err).as_str(), None))
    }
}
