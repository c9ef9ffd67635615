use campus_notifier::{
    application::{create_state, ApplicationEnv, ApplicationState, ApplicationStateToClose},
    dto::{input::NewNotification, ConfigUpdate, NotificationCategory, NotificationType},
};
use std::path::Path;
use uuid::Uuid;

pub fn test_env(storage_directory: &Path) -> ApplicationEnv {
    ApplicationEnv {
        log_directory: storage_directory.join("log").display().to_string(),
        log_filename: "campus-notifier.log".to_string(),
        storage_directory: storage_directory.to_path_buf(),
        push_app_name: "Econ Portal".to_string(),
    }
}

pub async fn create_test_state(
    storage_directory: &Path,
    user: Option<Uuid>,
) -> (ApplicationState, ApplicationStateToClose) {
    let env = test_env(storage_directory);
    create_state(&env, user).await.unwrap()
}

///
/// Turns the global push toggle off so tests never reach for the
/// session bus.
///
pub async fn disable_push(state: &ApplicationState) {
    state
        .config_service
        .update_config(ConfigUpdate {
            enable_push: Some(false),
            ..Default::default()
        })
        .await;
}

pub fn sample_notification(title: &str, category: NotificationCategory) -> NewNotification {
    NewNotification {
        title: title.to_string(),
        message: format!("{title} message"),
        r#type: NotificationType::Info,
        category: Some(category),
        priority: None,
        icon: None,
        related_user_id: None,
        related_user_name: None,
        related_user_avatar: None,
    }
}
