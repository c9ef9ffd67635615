use anyhow::anyhow;
use std::path::PathBuf;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Root directory holding each user's notification files.
    pub storage_directory: PathBuf,

    /// Application name shown by the OS notification daemon.
    pub push_app_name: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CAMPUS_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CAMPUS_NOTIFIER_LOG_FILENAME")?;
        let storage_directory = Self::env_var("CAMPUS_NOTIFIER_STORAGE_DIRECTORY")?.into();
        let push_app_name = Self::env_var("CAMPUS_NOTIFIER_PUSH_APP_NAME")?;

        Ok(Self {
            log_directory,
            log_filename,
            storage_directory,
            push_app_name,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
