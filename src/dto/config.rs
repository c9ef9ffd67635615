use super::NotificationCategory;
use serde::{Deserialize, Serialize};

/// Delivery preferences for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPreferences {
    pub enabled: bool,
    pub real_time: bool,
    pub push: bool,
    pub email: bool,
}

impl CategoryPreferences {
    const fn new(push: bool, email: bool) -> Self {
        Self {
            enabled: true,
            real_time: true,
            push,
            email,
        }
    }
}

///
/// Per-category delivery preferences with one field per
/// [NotificationCategory], so adding a category is a compile-time-checked
/// change rather than a runtime string key.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPreferencesMap {
    pub message: CategoryPreferences,
    pub forum: CategoryPreferences,
    pub reaction: CategoryPreferences,
    pub academic: CategoryPreferences,
    pub event: CategoryPreferences,
    pub study_group: CategoryPreferences,
    pub poll: CategoryPreferences,
    pub announcement: CategoryPreferences,
    pub support: CategoryPreferences,
    pub social: CategoryPreferences,
    pub system: CategoryPreferences,
}

impl CategoryPreferencesMap {
    pub fn get(&self, category: NotificationCategory) -> &CategoryPreferences {
        match category {
            NotificationCategory::Message => &self.message,
            NotificationCategory::Forum => &self.forum,
            NotificationCategory::Reaction => &self.reaction,
            NotificationCategory::Academic => &self.academic,
            NotificationCategory::Event => &self.event,
            NotificationCategory::StudyGroup => &self.study_group,
            NotificationCategory::Poll => &self.poll,
            NotificationCategory::Announcement => &self.announcement,
            NotificationCategory::Support => &self.support,
            NotificationCategory::Social => &self.social,
            NotificationCategory::System => &self.system,
        }
    }

    pub fn get_mut(&mut self, category: NotificationCategory) -> &mut CategoryPreferences {
        match category {
            NotificationCategory::Message => &mut self.message,
            NotificationCategory::Forum => &mut self.forum,
            NotificationCategory::Reaction => &mut self.reaction,
            NotificationCategory::Academic => &mut self.academic,
            NotificationCategory::Event => &mut self.event,
            NotificationCategory::StudyGroup => &mut self.study_group,
            NotificationCategory::Poll => &mut self.poll,
            NotificationCategory::Announcement => &mut self.announcement,
            NotificationCategory::Support => &mut self.support,
            NotificationCategory::Social => &mut self.social,
            NotificationCategory::System => &mut self.system,
        }
    }
}

impl Default for CategoryPreferencesMap {
    ///
    /// All categories enabled, push off for the low-signal categories
    /// (reaction, poll, social), email on only for academic, announcement
    /// and support.
    ///
    fn default() -> Self {
        Self {
            message: CategoryPreferences::new(true, false),
            forum: CategoryPreferences::new(true, false),
            reaction: CategoryPreferences::new(false, false),
            academic: CategoryPreferences::new(true, true),
            event: CategoryPreferences::new(true, false),
            study_group: CategoryPreferences::new(true, false),
            poll: CategoryPreferences::new(false, false),
            announcement: CategoryPreferences::new(true, true),
            support: CategoryPreferences::new(true, true),
            social: CategoryPreferences::new(false, false),
            system: CategoryPreferences::new(true, false),
        }
    }
}

///
/// Notification preferences of a single signed-in identity.
///
/// `enable_email` and `enable_telegram` are configuration-only: stored and
/// editable, but no delivery path in this crate consults them.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationServiceConfig {
    pub enable_real_time: bool,
    pub enable_push: bool,
    pub enable_email: bool,
    pub enable_telegram: bool,
    pub categories: CategoryPreferencesMap,
}

impl Default for NotificationServiceConfig {
    fn default() -> Self {
        Self {
            enable_real_time: true,
            enable_push: true,
            enable_email: false,
            enable_telegram: false,
            categories: CategoryPreferencesMap::default(),
        }
    }
}

///
/// Partial config update. Absent fields leave the current value untouched;
/// each `categories` entry replaces that category's whole preference record.
///
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub enable_real_time: Option<bool>,
    pub enable_push: Option<bool>,
    pub enable_email: Option<bool>,
    pub enable_telegram: Option<bool>,
    pub categories: Vec<(NotificationCategory, CategoryPreferences)>,
}

impl NotificationServiceConfig {
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(enable_real_time) = update.enable_real_time {
            self.enable_real_time = enable_real_time;
        }
        if let Some(enable_push) = update.enable_push {
            self.enable_push = enable_push;
        }
        if let Some(enable_email) = update.enable_email {
            self.enable_email = enable_email;
        }
        if let Some(enable_telegram) = update.enable_telegram {
            self.enable_telegram = enable_telegram;
        }
        for (category, preferences) in update.categories {
            *self.categories.get_mut(category) = preferences;
        }
    }
}
