//! Heartbeat polling

use tinbot_core::domain::command::Command;
use tinbot_core::dto::heartbeat::{HeartbeatBody, HeartbeatResponse};
use tracing::debug;

use crate::OrchestratorClient;
use crate::error::Result;

impl OrchestratorClient {
    /// Polls the orchestrator for pending commands.
    ///
    /// # Returns
    /// The commands for this robot, in the order they must be processed.
    pub async fn heartbeat(&self, token: &str) -> Result<Vec<Command>> {
        let response = self
            .robot_post("/api/robotsservice/HeartbeatV2", token)
            .json(&HeartbeatBody::default())
            .send()
            .await?;

        let parsed: HeartbeatResponse = self.handle_response(response).await?;
        debug!(commands = parsed.commands.len(), "heartbeat response received");
        Ok(parsed.commands)
    }
}
