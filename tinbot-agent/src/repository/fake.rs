//! In-memory orchestrator fake for tests
//!
//! Records every call, lets tests script heartbeat batches and inject
//! failures, and tracks heartbeat overlap so tick-serialization can be
//! asserted directly.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tinbot_client::{ClientError, Result};
use tinbot_core::domain::command::Command;
use tinbot_core::domain::log::RobotLogEntry;
use tinbot_core::dto::job::JobStateReport;
use tokio::time::{self, Instant};

use super::Orchestrator;

#[derive(Default)]
pub struct FakeOrchestrator {
    pub fail_token: AtomicBool,
    pub fail_start_service: AtomicBool,
    pub fail_heartbeat: AtomicBool,
    pub fail_submit_state: AtomicBool,
    pub fail_submit_log: AtomicBool,

    /// Artificial latency for heartbeat responses
    pub heartbeat_delay: Mutex<Option<Duration>>,

    /// Scripted command batches, one per heartbeat; empty once drained
    pub batches: Mutex<VecDeque<Vec<Command>>>,

    pub token_fetches: AtomicUsize,
    pub start_service_calls: AtomicUsize,
    pub stop_service_calls: AtomicUsize,
    pub heartbeats: AtomicUsize,

    pub reports: Mutex<Vec<JobStateReport>>,
    pub logs: Mutex<Vec<RobotLogEntry>>,

    /// When each token fetch happened, for restart-cooldown assertions
    pub token_fetch_instants: Mutex<Vec<Instant>>,

    heartbeats_in_flight: AtomicUsize,
    pub max_heartbeat_overlap: AtomicUsize,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(&self, commands: Vec<Command>) {
        self.batches
            .lock()
            .expect("batches lock poisoned")
            .push_back(commands);
    }

    pub fn set_heartbeat_delay(&self, delay: Duration) {
        *self
            .heartbeat_delay
            .lock()
            .expect("heartbeat_delay lock poisoned") = Some(delay);
    }

    pub fn report_states(&self) -> Vec<i32> {
        self.reports
            .lock()
            .expect("reports lock poisoned")
            .iter()
            .map(|report| i32::from(report.job_state))
            .collect()
    }

    pub fn log_messages(&self) -> Vec<String> {
        self.logs
            .lock()
            .expect("logs lock poisoned")
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn injected(status: u16) -> ClientError {
        ClientError::api_error(status, "injected failure")
    }
}

#[async_trait]
impl Orchestrator for FakeOrchestrator {
    async fn fetch_token(&self) -> Result<String> {
        let attempt = self.token_fetches.fetch_add(1, Ordering::SeqCst) + 1;
        self.token_fetch_instants
            .lock()
            .expect("instants lock poisoned")
            .push(Instant::now());

        if self.fail_token.load(Ordering::SeqCst) {
            return Err(Self::injected(401));
        }
        Ok(format!("token-{attempt}"))
    }

    async fn start_service(&self, _token: &str) -> Result<()> {
        self.start_service_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_start_service.load(Ordering::SeqCst) {
            return Err(Self::injected(500));
        }
        Ok(())
    }

    async fn stop_service(&self, _token: &str) -> Result<()> {
        self.stop_service_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn heartbeat(&self, _token: &str) -> Result<Vec<Command>> {
        self.heartbeats.fetch_add(1, Ordering::SeqCst);

        let in_flight = self.heartbeats_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_heartbeat_overlap
            .fetch_max(in_flight, Ordering::SeqCst);

        let delay = *self
            .heartbeat_delay
            .lock()
            .expect("heartbeat_delay lock poisoned");
        if let Some(delay) = delay {
            time::sleep(delay).await;
        }

        self.heartbeats_in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_heartbeat.load(Ordering::SeqCst) {
            return Err(Self::injected(500));
        }

        let batch = self
            .batches
            .lock()
            .expect("batches lock poisoned")
            .pop_front()
            .unwrap_or_default();
        Ok(batch)
    }

    async fn submit_job_state(&self, _token: &str, report: &JobStateReport) -> Result<()> {
        if self.fail_submit_state.load(Ordering::SeqCst) {
            return Err(Self::injected(500));
        }
        self.reports
            .lock()
            .expect("reports lock poisoned")
            .push(report.clone());
        Ok(())
    }

    async fn submit_log(&self, _robot_secret: &str, entry: &RobotLogEntry) -> Result<()> {
        if self.fail_submit_log.load(Ordering::SeqCst) {
            return Err(Self::injected(500));
        }
        self.logs
            .lock()
            .expect("logs lock poisoned")
            .push(entry.clone());
        Ok(())
    }
}
