use crate::dto::{NotificationCategory, NotificationRecord, NotificationType};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Render-ready model for the bell-icon dropdown: unread badge count plus
/// the most recent entries with pre-formatted relative timestamps.
///
#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    pub unread_count: usize,
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Serialize)]
pub struct FeedEntry {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub r#type: NotificationType,
    pub category: NotificationCategory,
    pub icon: Option<String>,
    pub read: bool,
    pub relative_time: String,
}

impl FeedEntry {
    pub fn from_record(record: &NotificationRecord, now: OffsetDateTime) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            message: record.message.clone(),
            r#type: record.r#type,
            category: record.category,
            icon: record.icon.clone(),
            read: record.read,
            relative_time: format_relative_time(record.timestamp, now),
        }
    }
}

/// Boundaries at 60 s / 3600 s / 86400 s.
pub fn format_relative_time(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = (now - timestamp).whole_seconds().max(0);

    match elapsed {
        0..=59 => "Just now".to_string(),
        60..=3599 => format!("{}m ago", elapsed / 60),
        3600..=86399 => format!("{}h ago", elapsed / 3600),
        _ => format!("{}d ago", elapsed / 86400),
    }
}
