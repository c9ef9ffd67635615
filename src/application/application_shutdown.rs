use super::ApplicationStateToClose;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing deadline checker");
    state.deadline_checker_notify.notify_one();
    if let Err(err) = state.deadline_checker.await {
        tracing::error!(%err, "deadline checker task failed");
    }
}
