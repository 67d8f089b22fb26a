//! Heartbeat loop
//!
//! The fixed-cadence poll that drives the whole agent. Each timer firing is
//! a tick: ensure a valid credential, poll for commands, dispatch them in
//! order. A tick that would overlap a still-running one is skipped entirely.
//! Any tick-level failure clears the cached token and tears the loop down;
//! the lifecycle controller restarts it after a cooldown.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::dispatch::CommandDispatcher;
use crate::repository::Orchestrator;
use crate::state::{AgentState, TickGuard};

pub struct HeartbeatLoop {
    interval: Duration,
    orchestrator: Arc<dyn Orchestrator>,
    dispatcher: CommandDispatcher,
    guard: TickGuard,
}

impl HeartbeatLoop {
    pub fn new(
        interval: Duration,
        orchestrator: Arc<dyn Orchestrator>,
        dispatcher: CommandDispatcher,
    ) -> Self {
        Self {
            interval,
            orchestrator,
            dispatcher,
            guard: TickGuard::new(),
        }
    }

    /// Runs the loop until shutdown is signalled or a tick fails.
    ///
    /// A missed timer firing is dropped, not queued; skipped commands are
    /// picked up only if the orchestrator re-delivers them on a later poll.
    pub async fn run(
        &self,
        state: &mut AgentState,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<()> {
        info!("starting heartbeat loop (interval: {:?})", self.interval);

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("shutdown requested, leaving heartbeat loop");
                    return Ok(());
                }
                _ = ticker.tick() => {}
            }

            let Some(_permit) = self.guard.try_begin() else {
                debug!("previous tick still in progress, skipping");
                continue;
            };

            if let Err(e) = self.tick(state).await {
                // The session may be stale; drop the token so the restart
                // begins from a clean exchange.
                state.access_token = None;
                return Err(e);
            }
        }
    }

    /// One poll-and-dispatch cycle.
    pub(crate) async fn tick(&self, state: &mut AgentState) -> Result<()> {
        self.ensure_token(state).await;

        let Some(token) = state.access_token.clone() else {
            // Still unauthenticated; the exchange is retried next tick.
            return Ok(());
        };

        let commands = self
            .orchestrator
            .heartbeat(&token)
            .await
            .context("heartbeat poll failed")?;

        if !commands.is_empty() {
            info!("received {} command(s)", commands.len());
        }

        self.dispatcher.dispatch_all(&token, state, commands).await;
        Ok(())
    }

    /// Acquires an access token if none is cached. Failures are logged and
    /// absorbed; "still no token afterwards" is the signal the tick acts on.
    async fn ensure_token(&self, state: &mut AgentState) {
        if state.access_token.is_some() {
            return;
        }

        match self.orchestrator.fetch_token().await {
            Ok(token) => {
                info!("access token acquired");
                if let Err(e) = self.orchestrator.start_service(&token).await {
                    warn!("failed to notify service start: {e}");
                }
                state.access_token = Some(token);
            }
            Err(e) => {
                error!("failed to acquire access token: {e}");
            }
        }
    }
}
