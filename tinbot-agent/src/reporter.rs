//! State & log reporter
//!
//! Pushes job state transitions and log lines to the orchestrator. State
//! submission failures are logged and swallowed here: a report that never
//! arrives must not abort the job's local execution. Log submission returns
//! its error so each call site decides what a failed log line means.

use std::sync::Arc;
use tinbot_client::{ClientError, Result};
use tinbot_core::domain::command::Command;
use tinbot_core::domain::log::{LogLevel, RobotLogEntry};
use tinbot_core::dto::job::JobStateReport;
use tracing::error;

use crate::repository::Orchestrator;

/// Actor name stamped on reports and log entries
pub const ACTOR_NAME: &str = "tinbot";

pub struct Reporter {
    orchestrator: Arc<dyn Orchestrator>,
}

impl Reporter {
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Submits a job state report; never propagates the failure.
    pub async fn report_state(&self, token: &str, report: JobStateReport) {
        let job_key = report.job_key.clone();
        if let Err(e) = self.orchestrator.submit_job_state(token, &report).await {
            error!(%job_key, "failed to submit job state: {e}");
        }
    }

    /// Builds and submits one log line for a job.
    pub async fn log_message(
        &self,
        job: &Command,
        message: &str,
        level: LogLevel,
    ) -> Result<()> {
        let Some(secret) = job.robot_oauth_secret() else {
            return Err(ClientError::InvalidRequest(
                "command carries no robot log secret".to_string(),
            ));
        };

        let entry = RobotLogEntry::for_job(job, message, level, ACTOR_NAME);
        self.orchestrator.submit_log(secret, &entry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fake::FakeOrchestrator;
    use crate::testutil::start_command;

    #[tokio::test]
    async fn test_report_state_swallows_submission_failure() {
        let fake = Arc::new(FakeOrchestrator::new());
        fake.fail_submit_state
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let reporter = Reporter::new(fake.clone());

        let job = start_command("J1", "sum.xaml", r#"{"x":1,"y":1}"#);
        reporter
            .report_state("t", JobStateReport::processing(&job, ACTOR_NAME))
            .await;

        // No panic, no propagation; the report was simply lost.
        assert!(fake.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_log_message_carries_job_metadata() {
        let fake = Arc::new(FakeOrchestrator::new());
        let reporter = Reporter::new(fake.clone());

        let job = start_command("J1", "sum.xaml", r#"{"x":1,"y":1}"#);
        reporter
            .log_message(&job, "Execution started", LogLevel::Information)
            .await
            .unwrap();

        let logs = fake.logs.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "Execution started");
        assert_eq!(logs[0].job_id, "J1");
        assert_eq!(logs[0].machine_name, ACTOR_NAME);
    }

    #[tokio::test]
    async fn test_log_message_without_secret_is_an_error() {
        let fake = Arc::new(FakeOrchestrator::new());
        let reporter = Reporter::new(fake.clone());

        let mut job = start_command("J1", "sum.xaml", r#"{"x":1,"y":1}"#);
        job.auth_settings.clear();

        let err = reporter
            .log_message(&job, "Execution started", LogLevel::Information)
            .await;
        assert!(matches!(err, Err(ClientError::InvalidRequest(_))));
        assert!(fake.logs.lock().unwrap().is_empty());
    }
}
