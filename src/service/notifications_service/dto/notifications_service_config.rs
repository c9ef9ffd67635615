use std::time::Duration;

pub struct NotificationsServiceConfig {
    /// Oldest records beyond this cap are evicted on insert.
    pub max_stored_notifications: usize,
    /// Entries exposed through the bell-dropdown feed.
    pub feed_len: usize,
    pub deadline_check_interval: Duration,
}

impl Default for NotificationsServiceConfig {
    fn default() -> Self {
        Self {
            max_stored_notifications: 100,
            feed_len: 10,
            deadline_check_interval: Duration::from_secs(60 * 60),
        }
    }
}
