#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification permission not granted")]
    PermissionNotGranted,

    #[error("bus error: {0}")]
    Bus(#[from] zbus::Error),
}
