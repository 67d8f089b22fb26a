//! Log submission
//!
//! The logging endpoint differs from the rest of the robots-service API in
//! two ways: it authenticates with a robot-specific secret (`UiRobot` scheme,
//! carried in the job's own auth settings rather than the bearer token), and
//! it takes the log entry double-encoded as a one-element array of strings.

use tinbot_core::domain::log::RobotLogEntry;
use tracing::debug;

use crate::OrchestratorClient;
use crate::error::{ClientError, Result};

impl OrchestratorClient {
    /// Submits a single log entry for a job.
    ///
    /// # Arguments
    /// * `robot_secret` - Per-robot log submission secret from the command's
    ///   auth settings
    /// * `entry` - The entry to submit
    pub async fn submit_log(&self, robot_secret: &str, entry: &RobotLogEntry) -> Result<()> {
        let payload = entry
            .to_wire_payload()
            .map_err(|e| ClientError::InvalidRequest(format!("failed to encode log entry: {e}")))?;

        debug!(job_id = %entry.job_id, "submitting log entry");

        let url = format!("{}/api/Logs/SubmitLogs", self.base_url());
        let response = self
            .identity()
            .apply_for_logs(self.http().post(url))
            .header("Authorization", format!("UiRobot {robot_secret}"))
            .header("Content-Type", "application/json; charset=utf-8")
            .body(payload)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
