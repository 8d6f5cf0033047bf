// User-facing notification sink.
//
// Purpose
// - Show a short error message to the person using the storefront (a toast).
//
// Boundaries
// - Fire and forget. Implementations never report back to the caller.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub raised_at: i64,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn error(&self, message: &str);
}

pub mod in_memory;
pub mod tracing_notifier;
