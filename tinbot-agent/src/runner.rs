//! Job runner
//!
//! Executes or stops one job and translates the outcome into state reports
//! and log entries. Execution failures are reported as Faulted and never
//! propagate to the heartbeat tick.

use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;
use tinbot_core::domain::command::Command;
use tinbot_core::domain::log::LogLevel;
use tinbot_core::dto::job::JobStateReport;
use tracing::{error, warn};

use crate::registry::EntryPointRegistry;
use crate::reporter::{ACTOR_NAME, Reporter};

pub struct JobRunner {
    registry: Arc<EntryPointRegistry>,
    reporter: Reporter,
}

impl JobRunner {
    pub fn new(registry: Arc<EntryPointRegistry>, reporter: Reporter) -> Self {
        Self { registry, reporter }
    }

    /// Runs a job's start path: Processing, then Succeeded or Faulted, with
    /// a log line on either side of the execution.
    pub async fn start_job(&self, token: &str, job: &Command) {
        self.reporter
            .report_state(token, JobStateReport::processing(job, ACTOR_NAME))
            .await;
        self.log_best_effort(job, "Execution started").await;

        match self.execute(job).await {
            Ok(output) => {
                self.reporter
                    .report_state(
                        token,
                        JobStateReport::succeeded(job, output.to_string(), ACTOR_NAME),
                    )
                    .await;
            }
            Err(e) => {
                // The report deliberately carries no failure detail; the
                // local log is the only place the cause survives.
                error!(job_key = %job.data.job_key, "job execution failed: {e:#}");
                self.reporter
                    .report_state(token, JobStateReport::faulted(job, ACTOR_NAME))
                    .await;
            }
        }

        self.log_best_effort(job, "Execution ended").await;
    }

    /// Runs a job's stop path. Stop is a reporting-only action: an
    /// in-progress execution is not interrupted.
    pub async fn stop_job(&self, token: &str, job: &Command) {
        self.reporter
            .report_state(token, JobStateReport::stopped(job, ACTOR_NAME))
            .await;
    }

    async fn execute(&self, job: &Command) -> anyhow::Result<Value> {
        let args = parse_input_arguments(&job.data.input_arguments)?;
        self.registry
            .invoke(&job.data.entry_point_path, args)
            .await
    }

    /// A failed log line never fails the job.
    async fn log_best_effort(&self, job: &Command, message: &str) {
        if let Err(e) = self
            .reporter
            .log_message(job, message, LogLevel::Information)
            .await
        {
            warn!(job_key = %job.data.job_key, "failed to submit log entry: {e}");
        }
    }
}

fn parse_input_arguments(raw: &str) -> anyhow::Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw).context("invalid input arguments")
}
