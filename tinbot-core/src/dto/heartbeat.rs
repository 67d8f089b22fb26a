//! Heartbeat DTOs

use serde::{Deserialize, Serialize};

use crate::domain::command::Command;

/// Body of a heartbeat poll
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeartbeatBody {
    pub service_user_name: Option<String>,
    pub command_state: i32,
    pub job_key: Option<String>,
}

impl Default for HeartbeatBody {
    fn default() -> Self {
        Self {
            service_user_name: None,
            command_state: 0,
            job_key: None,
        }
    }
}

/// Heartbeat response: the pending commands for this robot, in the order
/// they must be processed
#[derive(Debug, Clone, Deserialize)]
pub struct HeartbeatResponse {
    pub commands: Vec<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::CommandType;

    #[test]
    fn test_heartbeat_response_parses_command_sequence() {
        let json = r#"{
            "commands": [
                {"data": {"type": "StartProcess", "jobKey": "J1"}},
                {"data": {"type": "StopProcess", "jobKey": "J1"}},
                {"data": {"type": "ResumeProcess", "jobKey": "J2"}}
            ]
        }"#;

        let response: HeartbeatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.commands.len(), 3);
        assert_eq!(
            response.commands[0].data.command_type,
            CommandType::StartProcess
        );
        assert_eq!(
            response.commands[2].data.command_type,
            CommandType::Other("ResumeProcess".to_string())
        );
    }
}
