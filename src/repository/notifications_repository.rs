use super::Error;
use crate::dto::NotificationRecord;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Finds all stored notifications of the user.
    /// Returns an empty Vec when the user has no stored notifications.
    ///
    async fn find_all(&self, user_id: Uuid) -> Result<Vec<NotificationRecord>, Error>;

    ///
    /// Replaces the user's stored notifications with `notifications`.
    ///
    async fn save_all(
        &self,
        user_id: Uuid,
        notifications: &[NotificationRecord],
    ) -> Result<(), Error>;

    ///
    /// Deletes the user's stored notifications.
    /// Succeeds when there was nothing stored.
    ///
    async fn delete_all(&self, user_id: Uuid) -> Result<(), Error>;
}
