// Durable key-value storage port.
//
// Purpose
// - Hold serialized client state (the cart) across process restarts.
//
// Boundaries
// - Values are opaque strings. Callers own the serialization format.
// - Adapters live next to this port: in_memory.rs for tests, json_file.rs for local disk.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub mod in_memory;
pub mod json_file;
