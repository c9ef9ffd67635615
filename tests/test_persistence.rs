pub mod common;

use campus_notifier::{
    application,
    dto::{ConfigUpdate, NotificationCategory},
};
use common::*;
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn round_trip_preserves_records_and_read_flags() {
    let storage = TempDir::new().unwrap();
    let user = Uuid::new_v4();

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    disable_push(&state).await;

    for title in ["first", "second", "third"] {
        state
            .notifications_service
            .add_notification(sample_notification(title, NotificationCategory::Message))
            .await;
    }
    let read_id = state.notifications_service.notifications().await[1].id;
    state.notifications_service.mark_as_read(read_id).await;

    let before = state.notifications_service.notifications().await;
    application::close(to_close).await;
    drop(state);

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    let after = state.notifications_service.notifications().await;

    assert_eq!(after, before);
    assert_eq!(state.notifications_service.unread_count().await, 2);
    application::close(to_close).await;
}

#[tokio::test]
async fn no_identity_persists_nothing() {
    let storage = TempDir::new().unwrap();

    let (state, to_close) = create_test_state(storage.path(), None).await;
    disable_push(&state).await;

    state
        .notifications_service
        .add_notification(sample_notification("hello", NotificationCategory::System))
        .await;
    assert_eq!(state.notifications_service.notifications().await.len(), 1);
    application::close(to_close).await;
    drop(state);

    let entries = std::fs::read_dir(storage.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[tokio::test]
async fn clear_all_deletes_persisted_copy() {
    let storage = TempDir::new().unwrap();
    let user = Uuid::new_v4();

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    disable_push(&state).await;

    state
        .notifications_service
        .add_notification(sample_notification("hello", NotificationCategory::System))
        .await;
    let notifications_file = storage
        .path()
        .join(user.to_string())
        .join("notifications.json");
    assert!(notifications_file.exists());

    state.notifications_service.clear_all().await;

    assert!(!notifications_file.exists());
    application::close(to_close).await;
}

#[tokio::test]
async fn removing_last_record_persists_empty_list() {
    let storage = TempDir::new().unwrap();
    let user = Uuid::new_v4();

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    disable_push(&state).await;

    state
        .notifications_service
        .add_notification(sample_notification("hello", NotificationCategory::System))
        .await;
    let id = state.notifications_service.notifications().await[0].id;
    state.notifications_service.remove_notification(id).await;

    let notifications_file = storage
        .path()
        .join(user.to_string())
        .join("notifications.json");
    assert!(notifications_file.exists());
    application::close(to_close).await;
    drop(state);

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    assert!(state.notifications_service.notifications().await.is_empty());
    application::close(to_close).await;
}

#[tokio::test]
async fn identities_are_isolated() {
    let storage = TempDir::new().unwrap();
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    let (state_a, to_close_a) = create_test_state(storage.path(), Some(user_a)).await;
    disable_push(&state_a).await;
    for title in ["a1", "a2"] {
        state_a
            .notifications_service
            .add_notification(sample_notification(title, NotificationCategory::Forum))
            .await;
    }
    application::close(to_close_a).await;

    let (state_b, to_close_b) = create_test_state(storage.path(), Some(user_b)).await;
    disable_push(&state_b).await;
    state_b
        .notifications_service
        .add_notification(sample_notification("b1", NotificationCategory::Forum))
        .await;
    application::close(to_close_b).await;

    let (state_a, to_close_a) = create_test_state(storage.path(), Some(user_a)).await;
    let (state_b, to_close_b) = create_test_state(storage.path(), Some(user_b)).await;

    assert_eq!(state_a.notifications_service.notifications().await.len(), 2);
    assert_eq!(state_b.notifications_service.notifications().await.len(), 1);

    application::close(to_close_a).await;
    application::close(to_close_b).await;
}

#[tokio::test]
async fn config_survives_session_restart() {
    let storage = TempDir::new().unwrap();
    let user = Uuid::new_v4();

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    state
        .config_service
        .update_config(ConfigUpdate {
            enable_push: Some(false),
            enable_telegram: Some(true),
            ..Default::default()
        })
        .await;
    application::close(to_close).await;
    drop(state);

    let (state, to_close) = create_test_state(storage.path(), Some(user)).await;
    let config = state.config_service.config().await;

    assert!(!config.enable_push);
    assert!(config.enable_telegram);
    assert!(config.enable_real_time);
    application::close(to_close).await;
}
