//! Agent configuration
//!
//! Defines all configurable parameters for the agent: orchestrator and
//! identity endpoints, client credentials, and the timing of the heartbeat
//! loop and its failure cooldown.

use std::time::Duration;

/// Agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Orchestrator base URL (e.g., "https://orchestrator.example.com")
    pub orchestrator_url: String,

    /// Identity service base URL issuing access tokens; defaults to the
    /// orchestrator URL when not set separately
    pub identity_url: String,

    /// OAuth client id for the client-credentials exchange
    pub client_id: String,

    /// OAuth client secret for the client-credentials exchange
    pub client_secret: String,

    /// Deployment-environment tag; the machine identifier is derived from it
    pub environment: String,

    /// How often the heartbeat loop polls for commands
    pub heartbeat_interval: Duration,

    /// Cooldown before the loop is restarted after a tick-level failure
    pub restart_delay: Duration,
}

impl Config {
    /// Creates a new configuration with default timings
    pub fn new(
        orchestrator_url: String,
        client_id: String,
        client_secret: String,
        environment: String,
    ) -> Self {
        Self {
            identity_url: orchestrator_url.clone(),
            orchestrator_url,
            client_id,
            client_secret,
            environment,
            heartbeat_interval: Duration::from_millis(2000),
            restart_delay: Duration::from_secs(60),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ORCHESTRATOR_URL (required)
    /// - CLIENT_ID (required)
    /// - CLIENT_SECRET (required)
    /// - IDENTITY_URL (optional, defaults to ORCHESTRATOR_URL)
    /// - ENVIRONMENT (optional, default: "dev")
    /// - HEARTBEAT_INTERVAL_MS (optional, default: 2000)
    /// - RESTART_DELAY_SECS (optional, default: 60)
    pub fn from_env() -> anyhow::Result<Self> {
        let orchestrator_url = std::env::var("ORCHESTRATOR_URL")
            .map_err(|_| anyhow::anyhow!("ORCHESTRATOR_URL environment variable not set"))?;

        let client_id = std::env::var("CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("CLIENT_ID environment variable not set"))?;

        let client_secret = std::env::var("CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("CLIENT_SECRET environment variable not set"))?;

        let identity_url =
            std::env::var("IDENTITY_URL").unwrap_or_else(|_| orchestrator_url.clone());

        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());

        let heartbeat_interval = std::env::var("HEARTBEAT_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(2000));

        let restart_delay = std::env::var("RESTART_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Ok(Self {
            orchestrator_url,
            identity_url,
            client_id,
            client_secret,
            environment,
            heartbeat_interval,
            restart_delay,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.client_id.is_empty() {
            anyhow::bail!("client_id cannot be empty");
        }

        if self.client_secret.is_empty() {
            anyhow::bail!("client_secret cannot be empty");
        }

        if self.environment.is_empty() {
            anyhow::bail!("environment cannot be empty");
        }

        for url in [&self.orchestrator_url, &self.identity_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("endpoint URLs must start with http:// or https://");
            }
        }

        if self.heartbeat_interval.is_zero() {
            anyhow::bail!("heartbeat_interval must be greater than 0");
        }

        if self.restart_delay.is_zero() {
            anyhow::bail!("restart_delay must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "http://localhost:8080".to_string(),
            "tinbot-dev".to_string(),
            "dev-secret".to_string(),
            "dev".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.heartbeat_interval, Duration::from_millis(2000));
        assert_eq!(config.restart_delay, Duration::from_secs(60));
        assert_eq!(config.identity_url, config.orchestrator_url);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        config.client_id = String::new();
        assert!(config.validate().is_err());

        config.client_id = "tinbot".to_string();
        config.orchestrator_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.orchestrator_url = "https://orchestrator.example.com".to_string();
        assert!(config.validate().is_ok());

        config.heartbeat_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
