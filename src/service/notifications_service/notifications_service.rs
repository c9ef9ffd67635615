use crate::dto::{input, output, NotificationCategory, NotificationRecord};
use async_trait::async_trait;
use uuid::Uuid;

///
/// The notification store and its sole write entry point.
///
/// No operation returns an error: a miss (unknown id, unknown activity
/// kind) or a gated drop (disabled category) is a silent no-op with a
/// diagnostic log. Notifications are non-critical UX and must never fail
/// the calling feature.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Dispatches a new notification: synthesizes id/timestamp, applies
    /// category gating, evicts past the cap, persists and best-effort
    /// raises an OS push notification when preferences allow it.
    ///
    async fn add_notification(&self, notification: input::NewNotification);

    ///
    /// Maps a portal activity to notification content and dispatches it.
    ///
    async fn trigger_activity(&self, activity: input::Activity);

    ///
    /// String entry point for upstream feature pages: parses `kind` plus a
    /// JSON payload into an activity and dispatches it. Unknown kinds and
    /// malformed payloads are dropped with a diagnostic log.
    ///
    async fn trigger_system_notification(&self, kind: &str, payload: serde_json::Value);

    /// All stored notifications, most recent first.
    async fn notifications(&self) -> Vec<NotificationRecord>;

    async fn unread_count(&self) -> usize;

    async fn unread_count_by_category(&self, category: NotificationCategory) -> usize;

    /// Render-ready model for the bell-icon dropdown.
    async fn feed(&self) -> output::NotificationFeed;

    async fn mark_as_read(&self, id: Uuid);

    async fn mark_all_as_read(&self);

    async fn remove_notification(&self, id: Uuid);

    /// Empties the store and deletes the persisted copy.
    async fn clear_all(&self);

    async fn clear_category(&self, category: NotificationCategory);
}
