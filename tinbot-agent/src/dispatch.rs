//! Command dispatcher
//!
//! Consumes one heartbeat response: commands are processed strictly in
//! delivery order, sequentially within the tick. Duplicate start commands
//! for a job already in flight are skipped; the orchestrator may re-deliver
//! a start before the previous one is reflected on its side.

use tinbot_core::domain::command::{Command, CommandType};
use tracing::{debug, info, warn};

use crate::runner::JobRunner;
use crate::state::AgentState;

pub struct CommandDispatcher {
    runner: JobRunner,
}

impl CommandDispatcher {
    pub fn new(runner: JobRunner) -> Self {
        Self { runner }
    }

    /// Processes the commands of one heartbeat response, in order.
    pub async fn dispatch_all(
        &self,
        token: &str,
        state: &mut AgentState,
        commands: Vec<Command>,
    ) {
        for command in commands {
            self.dispatch(token, state, command).await;
        }
    }

    async fn dispatch(&self, token: &str, state: &mut AgentState, command: Command) {
        let job_key = command.data.job_key.clone();

        match &command.data.command_type {
            CommandType::StartProcess => {
                if !state.mark_in_flight(&job_key) {
                    debug!(%job_key, "start command for in-flight job, skipping");
                    return;
                }
                info!(%job_key, entry_point = %command.data.entry_point_path, "starting job");
                self.runner.start_job(token, &command).await;
            }
            CommandType::StopProcess => {
                info!(%job_key, "stopping job");
                self.runner.stop_job(token, &command).await;
                state.clear_in_flight(&job_key);
            }
            CommandType::Other(kind) => {
                warn!(%job_key, %kind, "unhandled command type");
            }
        }
    }
}
