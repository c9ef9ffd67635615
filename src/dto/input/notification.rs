use crate::dto::{NotificationCategory, NotificationPriority, NotificationType};
use serde::Deserialize;

///
/// Content of a notification about to be dispatched.
///
/// `id`, `timestamp` and `read` are synthesized by the dispatcher;
/// absent `category` defaults to `system`, absent `priority` to `medium`.
///
#[derive(Debug, Clone, Deserialize)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub r#type: NotificationType,
    pub category: Option<NotificationCategory>,
    pub priority: Option<NotificationPriority>,
    pub icon: Option<String>,
    pub related_user_id: Option<String>,
    pub related_user_name: Option<String>,
    pub related_user_avatar: Option<String>,
}
