//! Identity endpoint: client-credentials token exchange

use tinbot_core::dto::token::{TokenRequest, TokenResponse};
use tracing::debug;

use crate::OrchestratorClient;
use crate::error::Result;

impl OrchestratorClient {
    /// Exchanges the configured client credentials for an access token.
    ///
    /// # Returns
    /// The bearer token to use on subsequent robots-service calls.
    pub async fn fetch_token(&self, client_id: &str, client_secret: &str) -> Result<String> {
        let url = format!("{}/connect/token", self.identity_url());
        debug!(client_id, "requesting access token");

        let request = TokenRequest::client_credentials(client_id, client_secret);
        let response = self
            .http()
            .post(&url)
            .header("Accept", "application/json")
            .form(&request)
            .send()
            .await?;

        let token: TokenResponse = self.handle_response(response).await?;
        Ok(token.access_token)
    }
}
