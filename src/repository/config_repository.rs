use super::Error;
use crate::dto::NotificationServiceConfig;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    ///
    /// Finds the user's saved notification preferences.
    /// Returns None when the user never saved any.
    ///
    async fn find(&self, user_id: Uuid) -> Result<Option<NotificationServiceConfig>, Error>;

    ///
    /// Replaces the user's saved notification preferences.
    ///
    async fn save(&self, user_id: Uuid, config: &NotificationServiceConfig) -> Result<(), Error>;
}
