//! Tinbot HTTP Client
//!
//! A typed HTTP client for the orchestrator endpoints the robot agent talks
//! to: the identity token exchange, the robots-service API (start/stop
//! service, heartbeat, job state submission) and the logging endpoint.
//!
//! # Example
//!
//! ```no_run
//! use tinbot_client::{OrchestratorClient, RobotIdentity};
//!
//! # async fn example() -> Result<(), tinbot_client::ClientError> {
//! let identity = RobotIdentity::new("dev", "my-client-id");
//! let client = OrchestratorClient::new(
//!     "https://orchestrator.example.com",
//!     "https://identity.example.com",
//!     identity,
//! );
//!
//! let token = client.fetch_token("my-client-id", "my-secret").await?;
//! let commands = client.heartbeat(&token).await?;
//! println!("{} pending command(s)", commands.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod heartbeat;
mod identity;
mod jobs;
mod logs;
mod service;
mod token;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use identity::RobotIdentity;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the orchestrator API
///
/// One instance is shared by the whole agent. All robots-service calls carry
/// the fixed identification headers from [`RobotIdentity`] plus a bearer
/// token; log submission uses its own robot-secret scheme instead.
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    /// Base URL of the orchestrator (e.g., "https://orchestrator.example.com")
    base_url: String,
    /// Base URL of the identity service issuing access tokens
    identity_url: String,
    /// Stable identity headers for this agent instance
    identity: RobotIdentity,
    /// HTTP client instance
    client: Client,
}

impl OrchestratorClient {
    /// Create a new orchestrator client
    pub fn new(
        base_url: impl Into<String>,
        identity_url: impl Into<String>,
        identity: RobotIdentity,
    ) -> Self {
        Self::with_client(base_url, identity_url, identity, Client::new())
    }

    /// Create a new orchestrator client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        identity_url: impl Into<String>,
        identity: RobotIdentity,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        let identity_url = identity_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            identity_url: identity_url.trim_end_matches('/').to_string(),
            identity,
            client,
        }
    }

    /// Get the base URL of the orchestrator
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a POST to a robots-service endpoint with the identification
    /// headers and bearer token attached.
    pub(crate) fn robot_post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.identity
            .apply(self.client.post(url))
            .bearer_auth(token)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn identity(&self) -> &RobotIdentity {
        &self.identity
    }

    pub(crate) fn identity_url(&self) -> &str {
        &self.identity_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response where only the status code matters
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
