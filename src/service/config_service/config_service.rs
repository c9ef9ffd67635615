use crate::dto::{ConfigUpdate, NotificationServiceConfig};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigService: Send + Sync {
    ///
    /// Returns a snapshot of the current notification preferences.
    ///
    async fn config(&self) -> NotificationServiceConfig;

    ///
    /// Shallow-merges `update` into the current preferences and persists
    /// the merged result. Fire-and-forget: persistence failures are logged,
    /// never surfaced.
    ///
    async fn update_config(&self, update: ConfigUpdate);
}
