// Runtime configuration read from the environment (a `.env` file is loaded by main).

use crate::modules::cart::application::store::{DEFAULT_STORAGE_NAMESPACE, cart_storage_key};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const API_URL: &str = "CART_API_URL";
pub const API_TIMEOUT_MS: &str = "CART_API_TIMEOUT_MS";
pub const STORAGE_PATH: &str = "CART_STORAGE_PATH";
pub const STORAGE_NAMESPACE: &str = "CART_STORAGE_NAMESPACE";
pub const HTTP_ADDR: &str = "CART_HTTP_ADDR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub api_timeout: Duration,
    pub storage_path: PathBuf,
    pub storage_namespace: String,
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_ms = value(API_TIMEOUT_MS, "5000");
        let api_timeout = timeout_ms
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::Invalid {
                key: API_TIMEOUT_MS,
                value: timeout_ms.clone(),
            })?;

        let addr = value(HTTP_ADDR, "0.0.0.0:8080");
        let http_addr = addr.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            key: HTTP_ADDR,
            value: addr.clone(),
        })?;

        Ok(Self {
            api_url: value(API_URL, "http://localhost:3333"),
            api_timeout,
            storage_path: PathBuf::from(value(STORAGE_PATH, "cart-storage.json")),
            storage_namespace: value(STORAGE_NAMESPACE, DEFAULT_STORAGE_NAMESPACE),
            http_addr,
        })
    }

    pub fn storage_key(&self) -> String {
        cart_storage_key(&self.storage_namespace)
    }
}
