use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output, NotificationCategory, NotificationPriority, NotificationRecord},
    repository::NotificationsRepository,
    service::{
        activity_mapper::map_activity,
        config_service::ConfigService,
        push_service::{PushPermission, PushService},
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    user: Option<Uuid>,
    notifications: RwLock<Vec<NotificationRecord>>,
    repository: Arc<dyn NotificationsRepository>,
    config_service: Arc<dyn ConfigService>,
    push_service: Arc<dyn PushService>,
}

impl NotificationsServiceImpl {
    ///
    /// Rehydrates the user's stored notifications. Without a signed-in user
    /// the store starts empty and nothing is ever persisted. A storage read
    /// failure also starts empty; losing stale notifications is preferable
    /// to failing session start.
    ///
    pub async fn new(
        config: NotificationsServiceConfig,
        user: Option<Uuid>,
        repository: Arc<dyn NotificationsRepository>,
        config_service: Arc<dyn ConfigService>,
        push_service: Arc<dyn PushService>,
    ) -> Self {
        let notifications = match user {
            Some(user_id) => match repository.find_all(user_id).await {
                Ok(notifications) => {
                    tracing::debug!(count = notifications.len(), "rehydrated notifications");
                    notifications
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to load stored notifications, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            config,
            user,
            notifications: RwLock::new(notifications),
            repository,
            config_service,
            push_service,
        }
    }

    async fn persist(&self, notifications: &[NotificationRecord]) {
        let Some(user_id) = self.user else {
            return;
        };

        if let Err(err) = self.repository.save_all(user_id, notifications).await {
            tracing::warn!(%err, "failed to persist notifications");
        }
    }

    ///
    /// Best-effort OS push. Resolves an unprompted permission first; every
    /// failure is logged and swallowed.
    ///
    async fn push_notification(&self, record: &NotificationRecord) {
        let permission = match self.push_service.permission().await {
            PushPermission::Unprompted => self.push_service.request_permission().await,
            permission => permission,
        };

        if permission != PushPermission::Granted {
            tracing::debug!(
                category = record.category.as_ref(),
                "push permission not granted, skipping os notification"
            );
            return;
        }

        if let Err(err) = self
            .push_service
            .push(&record.title, &record.message)
            .await
        {
            tracing::warn!(%err, "failed to raise os notification");
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    #[tracing::instrument(name = "Add notification", skip_all, fields(title = %notification.title))]
    async fn add_notification(&self, notification: input::NewNotification) {
        let config = self.config_service.config().await;

        let category = notification
            .category
            .unwrap_or(NotificationCategory::System);
        let preferences = *config.categories.get(category);

        if !preferences.enabled {
            tracing::debug!(
                category = category.as_ref(),
                "category disabled, dropping notification"
            );
            return;
        }

        let record = NotificationRecord {
            id: Uuid::new_v4(),
            title: notification.title,
            message: notification.message,
            r#type: notification.r#type,
            category,
            timestamp: OffsetDateTime::now_utc(),
            read: false,
            priority: notification
                .priority
                .unwrap_or(NotificationPriority::Medium),
            related_user_id: notification.related_user_id,
            related_user_name: notification.related_user_name,
            related_user_avatar: notification.related_user_avatar,
            icon: notification.icon,
        };

        {
            let mut notifications = self.notifications.write().await;
            notifications.insert(0, record.clone());
            notifications.truncate(self.config.max_stored_notifications);
            self.persist(&notifications).await;
        }
        tracing::debug!(id = %record.id, category = category.as_ref(), "stored notification");

        if config.enable_real_time && config.enable_push && preferences.push {
            self.push_notification(&record).await;
        }
    }

    async fn trigger_activity(&self, activity: input::Activity) {
        let notification = map_activity(&activity);
        self.add_notification(notification).await;
    }

    #[tracing::instrument(name = "Trigger system notification", skip_all, fields(kind))]
    async fn trigger_system_notification(&self, kind: &str, payload: serde_json::Value) {
        let mut object = match payload {
            serde_json::Value::Object(object) => object,
            serde_json::Value::Null => serde_json::Map::new(),
            payload => {
                tracing::debug!(kind, ?payload, "activity payload is not an object, dropping");
                return;
            }
        };
        object.insert(
            "kind".to_string(),
            serde_json::Value::String(kind.to_string()),
        );

        let activity = match serde_json::from_value::<input::Activity>(object.into()) {
            Ok(activity) => activity,
            Err(err) => {
                tracing::debug!(kind, %err, "unrecognized activity, dropping");
                return;
            }
        };

        self.trigger_activity(activity).await;
    }

    async fn notifications(&self) -> Vec<NotificationRecord> {
        self.notifications.read().await.clone()
    }

    async fn unread_count(&self) -> usize {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    async fn unread_count_by_category(&self, category: NotificationCategory) -> usize {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|notification| !notification.read && notification.category == category)
            .count()
    }

    async fn feed(&self) -> output::NotificationFeed {
        let now = OffsetDateTime::now_utc();
        let notifications = self.notifications.read().await;

        output::NotificationFeed {
            unread_count: notifications
                .iter()
                .filter(|notification| !notification.read)
                .count(),
            entries: notifications
                .iter()
                .take(self.config.feed_len)
                .map(|notification| output::FeedEntry::from_record(notification, now))
                .collect(),
        }
    }

    #[tracing::instrument(name = "Mark notification read", skip_all, fields(id = %id))]
    async fn mark_as_read(&self, id: Uuid) {
        let mut notifications = self.notifications.write().await;

        match notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        {
            Some(notification) => {
                notification.read = true;
                self.persist(&notifications).await;
            }
            None => tracing::debug!("no notification with this id"),
        }
    }

    async fn mark_all_as_read(&self) {
        let mut notifications = self.notifications.write().await;

        for notification in notifications.iter_mut() {
            notification.read = true;
        }

        self.persist(&notifications).await;
    }

    #[tracing::instrument(name = "Remove notification", skip_all, fields(id = %id))]
    async fn remove_notification(&self, id: Uuid) {
        let mut notifications = self.notifications.write().await;

        let len_before = notifications.len();
        notifications.retain(|notification| notification.id != id);

        if notifications.len() == len_before {
            tracing::debug!("no notification with this id");
            return;
        }

        self.persist(&notifications).await;
    }

    async fn clear_all(&self) {
        {
            let mut notifications = self.notifications.write().await;
            notifications.clear();
        }

        let Some(user_id) = self.user else {
            return;
        };
        if let Err(err) = self.repository.delete_all(user_id).await {
            tracing::warn!(%err, "failed to delete stored notifications");
        }
    }

    #[tracing::instrument(
        name = "Clear category",
        skip_all,
        fields(category = category.as_ref())
    )]
    async fn clear_category(&self, category: NotificationCategory) {
        let mut notifications = self.notifications.write().await;

        let len_before = notifications.len();
        notifications.retain(|notification| notification.category != category);
        let removed = len_before - notifications.len();

        tracing::debug!(removed, "cleared category");

        self.persist(&notifications).await;
    }
}
