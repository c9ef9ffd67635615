use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Coarse tag used to gate and group notifications.
///
/// Distinct from [NotificationType](super::NotificationType) (visual severity)
/// and [NotificationPriority](super::NotificationPriority) (advisory signal).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationCategory {
    Message,
    Forum,
    Reaction,
    Academic,
    Event,
    StudyGroup,
    Poll,
    Announcement,
    Support,
    Social,
    System,
}
