// Collects notifications in a list for inspection by tests.

use crate::shared::infrastructure::notifier::{Notification, Notifier};
use chrono::Utc;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .await
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn error(&self, message: &str) {
        self.notifications.lock().await.push(Notification {
            message: message.to_string(),
            raised_at: Utc::now().timestamp_millis(),
        });
    }
}
