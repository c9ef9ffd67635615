use super::{Error, NotificationsRepository};
use crate::dto::NotificationRecord;
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tokio::fs;
use uuid::Uuid;

const NOTIFICATIONS_FILE: &str = "notifications.json";

///
/// Stores each user's notifications as a single JSON document at
/// `<storage_dir>/<user_id>/notifications.json`.
///
/// Writes are last-write-wins; two processes sharing a storage root
/// overwrite each other silently.
///
pub struct NotificationsRepositoryImpl {
    storage_dir: PathBuf,
}

impl NotificationsRepositoryImpl {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    fn user_dir(&self, user_id: Uuid) -> PathBuf {
        self.storage_dir.join(user_id.to_string())
    }

    fn file_path(&self, user_id: Uuid) -> PathBuf {
        self.user_dir(user_id).join(NOTIFICATIONS_FILE)
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn find_all(&self, user_id: Uuid) -> Result<Vec<NotificationRecord>, Error> {
        let path = self.file_path(user_id);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let notifications = serde_json::from_slice(&bytes)?;

        Ok(notifications)
    }

    async fn save_all(
        &self,
        user_id: Uuid,
        notifications: &[NotificationRecord],
    ) -> Result<(), Error> {
        let bytes = serde_json::to_vec(notifications)?;

        fs::create_dir_all(self.user_dir(user_id)).await?;
        fs::write(self.file_path(user_id), bytes).await?;

        Ok(())
    }

    async fn delete_all(&self, user_id: Uuid) -> Result<(), Error> {
        match fs::remove_file(self.file_path(user_id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
