//! Job and robot state codes
//!
//! The orchestrator speaks integer enumerations on the wire; these types keep
//! the codes in one place instead of scattering magic numbers through the
//! agent.

use serde::{Deserialize, Serialize};

/// Job lifecycle state as reported to the orchestrator
///
/// Wire codes: 1=Running, 2=Stopping, 3=Stopped, 4=Faulted, 5=Successful.
/// Codes 6 and 7 are both stopped variants; the agent reports 6 when a stop
/// command is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub enum JobState {
    Running,
    Stopping,
    Stopped,
    Faulted,
    Successful,
    StoppedByUser,
    StoppedByOrchestrator,
}

impl From<JobState> for i32 {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Running => 1,
            JobState::Stopping => 2,
            JobState::Stopped => 3,
            JobState::Faulted => 4,
            JobState::Successful => 5,
            JobState::StoppedByUser => 6,
            JobState::StoppedByOrchestrator => 7,
        }
    }
}

impl From<i32> for JobState {
    fn from(code: i32) -> Self {
        match code {
            1 => JobState::Running,
            2 => JobState::Stopping,
            3 => JobState::Stopped,
            5 => JobState::Successful,
            6 => JobState::StoppedByUser,
            7 => JobState::StoppedByOrchestrator,
            // 4 and anything the orchestrator invents later
            _ => JobState::Faulted,
        }
    }
}

/// Robot availability as reported alongside job state
///
/// Wire codes: 0=idle/available, 1=busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub enum RobotState {
    Idle,
    Busy,
}

impl From<RobotState> for i32 {
    fn from(state: RobotState) -> Self {
        match state {
            RobotState::Idle => 0,
            RobotState::Busy => 1,
        }
    }
}

impl From<i32> for RobotState {
    fn from(code: i32) -> Self {
        if code == 1 {
            RobotState::Busy
        } else {
            RobotState::Idle
        }
    }
}
