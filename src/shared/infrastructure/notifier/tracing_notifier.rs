use crate::shared::infrastructure::notifier::Notifier;

/// Renders user notifications as structured log events. Used when no toast
/// sink is attached, for instance when the store is served over HTTP and the
/// message already travels back in the response body.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn error(&self, message: &str) {
        tracing::warn!(target: "cart_store::notification", notification = message, "user notified");
    }
}
