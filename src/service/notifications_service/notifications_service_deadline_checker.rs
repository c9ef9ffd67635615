use super::NotificationsServiceConfig;
use std::sync::Arc;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Hourly background task reserved for assignment-deadline checks.
///
/// Currently only ticks; the portal does not yet expose due dates to this
/// crate. TODO: once the assignments page publishes due dates here, emit
/// `assignment_due` activities from this loop.
///
pub struct NotificationsServiceDeadlineChecker {
    interval: Interval,
}

impl NotificationsServiceDeadlineChecker {
    pub fn new(config: &NotificationsServiceConfig) -> Self {
        let mut interval = interval(config.deadline_check_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { interval }
    }

    #[tracing::instrument(name = "Deadline Checker", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            _ = async { loop {
                self.interval.tick().await;
                tracing::trace!("deadline check tick");
            }} => {}
        }
    }
}
