use super::ApplicationEnv;
use crate::{
    repository::{ConfigRepositoryImpl, NotificationsRepositoryImpl},
    service::{
        config_service::{ConfigService, ConfigServiceImpl},
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceDeadlineChecker,
            NotificationsServiceImpl,
        },
        push_service::{FreedesktopPushService, PushServiceConfig},
    },
};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};
use uuid::Uuid;

///
/// One shared notification subsystem per running portal session,
/// constructed once and passed by reference to every feature page.
///
#[derive(Clone)]
pub struct ApplicationState {
    pub config_service: Arc<dyn ConfigService>,
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub deadline_checker_notify: Arc<Notify>,
    pub deadline_checker: JoinHandle<()>,
}

///
/// Wires repositories and services for the signed-in identity.
/// `user` of None means a fresh, never-persisted session.
///
pub async fn create_state(
    env: &ApplicationEnv,
    user: Option<Uuid>,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("creating repositories");
    let config_repository = ConfigRepositoryImpl::new(&env.storage_directory);
    let config_repository = Arc::new(config_repository);
    let notifications_repository = NotificationsRepositoryImpl::new(&env.storage_directory);
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let config_service = ConfigServiceImpl::new(user, config_repository).await;
    let config_service = Arc::new(config_service);

    let push_config = PushServiceConfig {
        app_name: env.push_app_name.clone(),
    };
    let push_service = FreedesktopPushService::new(push_config);
    let push_service = Arc::new(push_service);

    let config = NotificationsServiceConfig::default();
    let deadline_checker = NotificationsServiceDeadlineChecker::new(&config);
    let notifications_service = NotificationsServiceImpl::new(
        config,
        user,
        notifications_repository,
        config_service.clone(),
        push_service,
    )
    .await;
    let notifications_service = Arc::new(notifications_service);

    let deadline_checker_notify = Arc::new(Notify::new());
    let deadline_checker = tokio::spawn(deadline_checker.run(deadline_checker_notify.clone()));

    Ok((
        ApplicationState {
            config_service,
            notifications_service,
        },
        ApplicationStateToClose {
            deadline_checker_notify,
            deadline_checker,
        },
    ))
}
