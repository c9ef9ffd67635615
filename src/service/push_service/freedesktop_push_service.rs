use super::{Error, PushPermission, PushService, PushServiceConfig};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use zbus::{zvariant::Value, Connection, Proxy};

const NOTIFICATIONS_DESTINATION: &str = "org.freedesktop.Notifications";
const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";
const NOTIFICATIONS_INTERFACE: &str = "org.freedesktop.Notifications";

///
/// Delivers push notifications through the `org.freedesktop.Notifications`
/// daemon on the D-Bus session bus.
///
/// "Requesting permission" maps to establishing the session bus connection:
/// reachable daemon means granted, anything else means denied.
///
pub struct FreedesktopPushService {
    config: PushServiceConfig,
    state: Mutex<PushState>,
}

struct PushState {
    permission: PushPermission,
    connection: Option<Connection>,
}

impl FreedesktopPushService {
    pub fn new(config: PushServiceConfig) -> Self {
        let state = PushState {
            permission: PushPermission::Unprompted,
            connection: None,
        };

        Self {
            config,
            state: Mutex::new(state),
        }
    }
}

#[async_trait]
impl PushService for FreedesktopPushService {
    async fn permission(&self) -> PushPermission {
        self.state.lock().await.permission
    }

    #[tracing::instrument(name = "Request push permission", skip_all)]
    async fn request_permission(&self) -> PushPermission {
        let mut state = self.state.lock().await;

        if state.permission != PushPermission::Unprompted {
            return state.permission;
        }

        match Connection::session().await {
            Ok(connection) => {
                tracing::debug!("connected to session bus, push permission granted");
                state.connection = Some(connection);
                state.permission = PushPermission::Granted;
            }
            Err(err) => {
                tracing::debug!(%err, "session bus unavailable, push permission denied");
                state.permission = PushPermission::Denied;
            }
        }

        state.permission
    }

    #[tracing::instrument(name = "Push notification", skip_all, fields(title))]
    async fn push(&self, title: &str, message: &str) -> Result<(), Error> {
        let connection = {
            let state = self.state.lock().await;
            state.connection.clone().ok_or(Error::PermissionNotGranted)?
        };

        let proxy = Proxy::new(
            &connection,
            NOTIFICATIONS_DESTINATION,
            NOTIFICATIONS_PATH,
            NOTIFICATIONS_INTERFACE,
        )
        .await?;

        let reply = proxy
            .call_method(
                "Notify",
                &(
                    self.config.app_name.as_str(),
                    0u32,
                    "",
                    title,
                    message,
                    Vec::<String>::new(),
                    HashMap::<&str, Value>::new(),
                    -1i32,
                ),
            )
            .await?;
        let notification_id = reply.body::<u32>()?;

        tracing::debug!(notification_id, "raised os notification");

        Ok(())
    }
}
