//! Lifecycle controller
//!
//! Owns the agent's start/stop contract: it (re)starts the heartbeat loop,
//! applies the failure cooldown between restarts, and runs the shutdown
//! sequence (stop-service notification, state teardown) exactly once per
//! call, no matter how often stop is invoked.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use crate::config::Config;
use crate::dispatch::CommandDispatcher;
use crate::heartbeat::HeartbeatLoop;
use crate::registry::EntryPointRegistry;
use crate::reporter::Reporter;
use crate::repository::Orchestrator;
use crate::runner::JobRunner;
use crate::state::AgentState;

pub struct Agent {
    config: Config,
    orchestrator: Arc<dyn Orchestrator>,
    heartbeat: HeartbeatLoop,
    state: AgentState,
}

impl Agent {
    pub fn new(
        config: &Config,
        orchestrator: Arc<dyn Orchestrator>,
        registry: Arc<EntryPointRegistry>,
    ) -> Self {
        let reporter = Reporter::new(Arc::clone(&orchestrator));
        let runner = JobRunner::new(registry, reporter);
        let dispatcher = CommandDispatcher::new(runner);
        let heartbeat = HeartbeatLoop::new(
            config.heartbeat_interval,
            Arc::clone(&orchestrator),
            dispatcher,
        );

        Self {
            config: config.clone(),
            orchestrator,
            heartbeat,
            state: AgentState::new(),
        }
    }

    /// Runs the agent until shutdown is signalled.
    ///
    /// A tick-level failure tears the heartbeat loop down; after the
    /// configured cooldown the loop is started again from a clean slate.
    /// Exactly one restart is scheduled per failure.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            self.start();

            match self.heartbeat.run(&mut self.state, &mut shutdown).await {
                Ok(()) => return,
                Err(e) => {
                    error!("heartbeat loop failed: {e:#}");
                    info!(
                        "restarting heartbeat loop in {:?}",
                        self.config.restart_delay
                    );
                    tokio::select! {
                        _ = shutdown.changed() => return,
                        _ = time::sleep(self.config.restart_delay) => {}
                    }
                }
            }
        }
    }

    /// Prepares a fresh session. Idempotent: an already-authenticated agent
    /// keeps its session untouched.
    fn start(&mut self) {
        if self.state.access_token.is_none() {
            self.state.reset();
        }
    }

    /// Shutdown sequence: notify the orchestrator, discard the credential,
    /// clear the in-flight set. Safe to call multiple times.
    pub async fn stop(&mut self) {
        if let Some(token) = self.state.access_token.take() {
            if let Err(e) = self.orchestrator.stop_service(&token).await {
                error!("failed to notify service stop: {e}");
            }
        }
        self.state.reset();
        info!("agent stopped");
    }
}
