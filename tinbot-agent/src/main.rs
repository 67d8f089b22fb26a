//! Tinbot Agent
//!
//! An unattended robot client for a remote job orchestrator.
//!
//! Architecture:
//! - Configuration: endpoints, credentials and timings from the environment
//! - Repository: HTTP communication with the orchestrator behind a trait
//! - Registry: explicit mapping from entry-point names to executable units
//! - Heartbeat loop: fixed-cadence poll-and-dispatch with a tick guard
//! - Lifecycle: clean start/stop and self-healing restart after failures
//!
//! The agent registers itself with the orchestrator, polls for commands
//! every two seconds, runs or stops the indicated jobs, and reports job
//! state and log lines back.

mod config;
mod dispatch;
mod entrypoints;
mod heartbeat;
mod lifecycle;
mod registry;
mod reporter;
mod repository;
mod runner;
mod state;
#[cfg(test)]
mod testutil;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::lifecycle::Agent;
use crate::registry::EntryPointRegistry;
use crate::repository::{HttpOrchestrator, Orchestrator};
use tinbot_client::{OrchestratorClient, RobotIdentity};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinbot_agent=info,tinbot_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tinbot Agent");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: environment={}, orchestrator_url={}",
        config.environment, config.orchestrator_url
    );

    // Derive the machine identity once; it stays stable for the process
    let identity = RobotIdentity::new(&config.environment, config.client_id.clone());
    info!(
        "Machine identifier derived: {}",
        identity.machine_name_encoded()
    );

    // Initialize orchestrator client
    let client = OrchestratorClient::new(&config.orchestrator_url, &config.identity_url, identity);
    let orchestrator: Arc<dyn Orchestrator> = Arc::new(HttpOrchestrator::new(
        client,
        &config.client_id,
        &config.client_secret,
    ));

    info!("Orchestrator client initialized");

    // Populate the entry-point registry
    let mut registry = EntryPointRegistry::new();
    entrypoints::register_builtin(&mut registry);
    info!("Registered {} entry point(s)", registry.len());

    let mut agent = Agent::new(&config, orchestrator, Arc::new(registry));

    info!(
        "Heartbeat interval: {:?}, restart delay: {:?}",
        config.heartbeat_interval, config.restart_delay
    );

    // Route process termination to the agent's stop path
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_signal().await;
        info!("termination signal received");
        let _ = shutdown_tx.send(true);
    });

    // Run until shutdown, then tear down cleanly
    info!("Starting agent loop");
    agent.run(shutdown_rx).await;
    agent.stop().await;

    info!("Agent stopped cleanly");
    Ok(())
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    match Config::from_env() {
        Ok(config) => {
            config.validate()?;
            Ok(config)
        }
        Err(_) => {
            info!("Failed to load config from environment, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Waits for a termination signal (ctrl-c, and SIGTERM on unix)
async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {e}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
