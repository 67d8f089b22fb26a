//! Job state submission DTOs

use serde::{Deserialize, Serialize};

use crate::domain::command::Command;
use crate::domain::job::{JobState, RobotState};

/// One job state report, as submitted to the orchestrator
///
/// The endpoint takes a one-element array of this shape. Reports are built
/// fresh for every state transition and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobStateReport {
    pub robot_key: String,
    pub job_key: String,
    pub process_key: String,
    pub input_arguments: Option<String>,
    pub robot_job_source: Option<String>,
    pub job_state: JobState,
    pub user_name: Option<String>,
    pub info: String,
    pub output_arguments: Option<String>,
    pub robot_state: RobotState,
}

impl JobStateReport {
    /// Base identity fields copied from the command; the lifecycle-specific
    /// fields are filled in by the builder methods below.
    fn base(command: &Command, state: JobState, info: &str, actor: &str) -> Self {
        Self {
            robot_key: command.robot_key.clone(),
            job_key: command.data.job_key.clone(),
            process_key: command.data.process_key.clone(),
            input_arguments: None,
            robot_job_source: None,
            job_state: state,
            user_name: Some(actor.to_string()),
            info: info.to_string(),
            output_arguments: None,
            robot_state: RobotState::Idle,
        }
    }

    /// Report for a job that just entered execution.
    pub fn processing(command: &Command, actor: &str) -> Self {
        Self {
            robot_state: RobotState::Busy,
            ..Self::base(command, JobState::Running, "Job started processing", actor)
        }
    }

    /// Report for a successfully completed job, carrying its serialized
    /// output arguments.
    pub fn succeeded(command: &Command, output_arguments: String, actor: &str) -> Self {
        Self {
            output_arguments: Some(output_arguments),
            ..Self::base(command, JobState::Successful, "Job completed", actor)
        }
    }

    /// Report for a faulted job. The underlying error is not forwarded.
    pub fn faulted(command: &Command, actor: &str) -> Self {
        Self::base(command, JobState::Faulted, "Job failed", actor)
    }

    /// Report for a job whose stop command was processed.
    pub fn stopped(command: &Command, actor: &str) -> Self {
        Self::base(command, JobState::StoppedByUser, "Job stopped", actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_command() -> Command {
        serde_json::from_value(serde_json::json!({
            "robotKey": "r-1",
            "robotName": "tin-01",
            "machineId": 42,
            "data": {
                "type": "StartProcess",
                "jobKey": "J1",
                "processKey": "p-1",
                "processName": "Sum",
                "packageVersion": "1.0.0",
                "folderId": 7,
                "entryPointPath": "sum.xaml",
                "inputArguments": "{\"x\":2,\"y\":3}"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_processing_report_wire_shape() {
        let report = JobStateReport::processing(&sample_command(), "tinbot");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "RobotKey": "r-1",
                "JobKey": "J1",
                "ProcessKey": "p-1",
                "InputArguments": null,
                "RobotJobSource": null,
                "JobState": 1,
                "UserName": "tinbot",
                "Info": "Job started processing",
                "OutputArguments": null,
                "RobotState": 1
            })
        );
    }

    #[test]
    fn test_succeeded_report_carries_output() {
        let report = JobStateReport::succeeded(&sample_command(), "5".to_string(), "tinbot");
        assert_eq!(report.job_state, JobState::Successful);
        assert_eq!(report.output_arguments.as_deref(), Some("5"));
        assert_eq!(report.robot_state, RobotState::Idle);
    }

    #[test]
    fn test_faulted_report_has_no_output() {
        let report = JobStateReport::faulted(&sample_command(), "tinbot");
        assert_eq!(report.job_state, JobState::Faulted);
        assert!(report.output_arguments.is_none());
        assert_eq!(report.robot_state, RobotState::Idle);
    }

    #[test]
    fn test_stopped_report_uses_stopped_variant_code() {
        let report = JobStateReport::stopped(&sample_command(), "tinbot");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["JobState"], 6);
        assert_eq!(json["Info"], "Job stopped");
        assert_eq!(json["RobotState"], 0);
    }
}
