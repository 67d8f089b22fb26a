//! Identity endpoint DTOs

use serde::{Deserialize, Serialize};

/// OAuth scope requested for the orchestrator API
pub const TOKEN_SCOPE: &str = "OrchestratorApiUserAccess";

/// Form body of the client-credentials token exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub grant_type: &'static str,
    pub scope: &'static str,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenRequest {
    pub fn client_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            grant_type: "client_credentials",
            scope: TOKEN_SCOPE,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Response of the token exchange
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_form_fields() {
        let request = TokenRequest::client_credentials("id", "secret");
        let encoded = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            encoded,
            "grant_type=client_credentials&scope=OrchestratorApiUserAccess&client_id=id&client_secret=secret"
        );
    }
}
