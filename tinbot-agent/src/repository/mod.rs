//! Orchestrator repository
//!
//! Trait seam between the agent and the remote orchestrator. The production
//! implementation delegates to the HTTP client; tests swap in an in-memory
//! fake that records calls and scripts failures.

use async_trait::async_trait;
use tinbot_client::{OrchestratorClient, Result};
use tinbot_core::domain::command::Command;
use tinbot_core::domain::log::RobotLogEntry;
use tinbot_core::dto::job::JobStateReport;

#[cfg(test)]
pub mod fake;

/// Remote operations the agent performs against the orchestrator
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Exchanges the configured client credentials for an access token.
    async fn fetch_token(&self) -> Result<String>;

    /// One-time "service start" notification, sent after a fresh token.
    async fn start_service(&self, token: &str) -> Result<()>;

    /// "Service stop" notification, sent during agent shutdown.
    async fn stop_service(&self, token: &str) -> Result<()>;

    /// Polls for pending commands.
    async fn heartbeat(&self, token: &str) -> Result<Vec<Command>>;

    /// Submits one job state report.
    async fn submit_job_state(&self, token: &str, report: &JobStateReport) -> Result<()>;

    /// Submits one log entry, authenticated with the robot-specific secret.
    async fn submit_log(&self, robot_secret: &str, entry: &RobotLogEntry) -> Result<()>;
}

/// HTTP implementation of [`Orchestrator`]
pub struct HttpOrchestrator {
    client: OrchestratorClient,
    client_id: String,
    client_secret: String,
}

impl HttpOrchestrator {
    pub fn new(
        client: OrchestratorClient,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

#[async_trait]
impl Orchestrator for HttpOrchestrator {
    async fn fetch_token(&self) -> Result<String> {
        self.client
            .fetch_token(&self.client_id, &self.client_secret)
            .await
    }

    async fn start_service(&self, token: &str) -> Result<()> {
        self.client.start_service(token).await
    }

    async fn stop_service(&self, token: &str) -> Result<()> {
        self.client.stop_service(token).await
    }

    async fn heartbeat(&self, token: &str) -> Result<Vec<Command>> {
        self.client.heartbeat(token).await
    }

    async fn submit_job_state(&self, token: &str, report: &JobStateReport) -> Result<()> {
        self.client.submit_job_state(token, report).await
    }

    async fn submit_log(&self, robot_secret: &str, entry: &RobotLogEntry) -> Result<()> {
        self.client.submit_log(robot_secret, entry).await
    }
}
