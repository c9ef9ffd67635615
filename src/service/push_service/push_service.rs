use super::Error;
use async_trait::async_trait;

///
/// OS-level notification permission state. `Unprompted` resolves to
/// `Granted` or `Denied` the first time permission is requested;
/// `Denied` is sticky for the rest of the session.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushPermission {
    Unprompted,
    Granted,
    Denied,
}

///
/// Best-effort bridge to the OS notification daemon. Callers are expected
/// to treat every failure as non-fatal.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushService: Send + Sync {
    async fn permission(&self) -> PushPermission;

    ///
    /// Resolves an [PushPermission::Unprompted] permission by attempting to
    /// reach the notification daemon. Idempotent once resolved.
    ///
    async fn request_permission(&self) -> PushPermission;

    ///
    /// Raises a native OS notification.
    ///
    /// ### Errors
    /// - [Error::PermissionNotGranted] when permission was never granted
    /// - [Error::Bus] when the daemon call fails
    ///
    async fn push(&self, title: &str, message: &str) -> Result<(), Error>;
}
