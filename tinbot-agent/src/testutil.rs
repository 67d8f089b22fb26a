//! Shared test fixtures

use tinbot_core::domain::command::Command;

/// Builds a command of the given discriminant with the usual robot metadata.
pub fn command(kind: &str, job_key: &str, entry_point_path: &str, input_arguments: &str) -> Command {
    serde_json::from_value(serde_json::json!({
        "robotKey": "r-1",
        "robotName": "tin-01",
        "machineId": 42,
        "authSettings": {"Auth.OAuth.RobotOAuthSecret": "s3cret"},
        "data": {
            "type": kind,
            "jobKey": job_key,
            "processKey": "p-1",
            "processName": "Demo",
            "packageVersion": "1.0.0",
            "folderId": 7,
            "entryPointPath": entry_point_path,
            "inputArguments": input_arguments
        }
    }))
    .expect("fixture command must deserialize")
}

pub fn start_command(job_key: &str, entry_point_path: &str, input_arguments: &str) -> Command {
    command("StartProcess", job_key, entry_point_path, input_arguments)
}

pub fn stop_command(job_key: &str) -> Command {
    command("StopProcess", job_key, "", "")
}
