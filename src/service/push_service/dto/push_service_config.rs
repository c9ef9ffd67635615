pub struct PushServiceConfig {
    /// Application name shown by the OS notification daemon.
    pub app_name: String,
}
