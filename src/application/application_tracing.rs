use super::ApplicationEnv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

///
/// Console output is filtered through `RUST_LOG` (info by default, so
/// feature pages embedding the notifier stay quiet); the daily rolling
/// file keeps targets and everything down to debug for after-the-fact
/// inspection of dropped or gated notifications.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    let file_appender = tracing_appender::rolling::daily(&env.log_directory, &env.log_filename);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setup_tracing_initializes() {
        let log_dir = tempfile::tempdir().unwrap();
        let env = ApplicationEnv {
            log_directory: log_dir.path().display().to_string(),
            log_filename: "campus-notifier.log".to_string(),
            storage_directory: log_dir.path().to_path_buf(),
            push_app_name: "Econ Portal".to_string(),
        };

        let result = setup_tracing(&env);

        assert!(result.is_ok());
    }
}
