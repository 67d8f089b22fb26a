//! Job state submission

use tinbot_core::dto::job::JobStateReport;
use tracing::debug;

use crate::OrchestratorClient;
use crate::error::Result;

impl OrchestratorClient {
    /// Submits one job state report.
    ///
    /// The endpoint expects a one-element array of the merged job-state
    /// object, not a bare object.
    pub async fn submit_job_state(&self, token: &str, report: &JobStateReport) -> Result<()> {
        debug!(
            job_key = %report.job_key,
            state = i32::from(report.job_state),
            "submitting job state"
        );

        let response = self
            .robot_post("/api/robotsservice/SubmitJobState", token)
            .json(&[report])
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
