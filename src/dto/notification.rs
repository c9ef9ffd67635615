use super::NotificationCategory;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Visual severity, independent of business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

///
/// Advisory signal carried on every record.
///
/// Delivery gating is entirely by category; priority is stored
/// but not consulted by any delivery or ordering logic.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

///
/// A single stored notification.
///
/// `related_*` fields are a denormalized reference to the actor that caused
/// the notification; no referential integrity is enforced.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub r#type: NotificationType,
    pub category: NotificationCategory,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
    pub priority: NotificationPriority,
    pub related_user_id: Option<String>,
    pub related_user_name: Option<String>,
    pub related_user_avatar: Option<String>,
    pub icon: Option<String>,
}
