use super::ConfigService;
use crate::{
    dto::{ConfigUpdate, NotificationServiceConfig},
    repository::ConfigRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct ConfigServiceImpl {
    user: Option<Uuid>,
    config: RwLock<NotificationServiceConfig>,
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigServiceImpl {
    ///
    /// Loads the user's saved preferences, falling back to the built-in
    /// defaults when nothing was saved or the saved copy cannot be read.
    /// Without a signed-in user the defaults are used and nothing is
    /// ever persisted.
    ///
    pub async fn new(user: Option<Uuid>, repository: Arc<dyn ConfigRepository>) -> Self {
        let config = match user {
            Some(user_id) => match repository.find(user_id).await {
                Ok(Some(config)) => config,
                Ok(None) => NotificationServiceConfig::default(),
                Err(err) => {
                    tracing::warn!(%err, "failed to load notification config, using defaults");
                    NotificationServiceConfig::default()
                }
            },
            None => NotificationServiceConfig::default(),
        };

        Self {
            user,
            config: RwLock::new(config),
            repository,
        }
    }
}

#[async_trait]
impl ConfigService for ConfigServiceImpl {
    async fn config(&self) -> NotificationServiceConfig {
        self.config.read().await.clone()
    }

    #[tracing::instrument(name = "Update notification config", skip_all)]
    async fn update_config(&self, update: ConfigUpdate) {
        tracing::debug!(?update, "updating notification config");

        let config = {
            let mut config = self.config.write().await;
            config.apply(update);
            config.clone()
        };

        if let Some(user_id) = self.user {
            if let Err(err) = self.repository.save(user_id, &config).await {
                tracing::warn!(%err, "failed to persist notification config");
            }
        }
    }
}
