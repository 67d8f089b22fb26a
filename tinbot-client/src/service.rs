//! Start/stop service notifications

use tinbot_core::dto::service::{StartServiceBody, StopServiceBody};
use tracing::debug;

use crate::OrchestratorClient;
use crate::error::Result;

impl OrchestratorClient {
    /// Notifies the orchestrator that the robot service came up.
    ///
    /// Sent once, right after a fresh token is acquired.
    pub async fn start_service(&self, token: &str) -> Result<()> {
        debug!("notifying orchestrator: service start");
        let response = self
            .robot_post("/api/robotsservice/StartService", token)
            .json(&StartServiceBody::default())
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Notifies the orchestrator that the robot service is going away.
    pub async fn stop_service(&self, token: &str) -> Result<()> {
        debug!("notifying orchestrator: service stop");
        let response = self
            .robot_post("/api/robotsservice/StopService", token)
            .json(&StopServiceBody::default())
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
