use super::{ConfigRepository, Error};
use crate::dto::NotificationServiceConfig;
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tokio::fs;
use uuid::Uuid;

const CONFIG_FILE: &str = "notification-config.json";

///
/// Stores each user's notification preferences as a JSON document at
/// `<storage_dir>/<user_id>/notification-config.json`.
///
pub struct ConfigRepositoryImpl {
    storage_dir: PathBuf,
}

impl ConfigRepositoryImpl {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    fn user_dir(&self, user_id: Uuid) -> PathBuf {
        self.storage_dir.join(user_id.to_string())
    }

    fn file_path(&self, user_id: Uuid) -> PathBuf {
        self.user_dir(user_id).join(CONFIG_FILE)
    }
}

#[async_trait]
impl ConfigRepository for ConfigRepositoryImpl {
    async fn find(&self, user_id: Uuid) -> Result<Option<NotificationServiceConfig>, Error> {
        let path = self.file_path(user_id);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let config = serde_json::from_slice(&bytes)?;

        Ok(Some(config))
    }

    async fn save(&self, user_id: Uuid, config: &NotificationServiceConfig) -> Result<(), Error> {
        let bytes = serde_json::to_vec(config)?;

        fs::create_dir_all(self.user_dir(user_id)).await?;
        fs::write(self.file_path(user_id), bytes).await?;

        Ok(())
    }
}
