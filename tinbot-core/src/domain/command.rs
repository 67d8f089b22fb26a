//! Work commands delivered by the orchestrator
//!
//! A heartbeat response carries a sequence of commands. Each command is
//! consumed exactly once, in delivery order, and never retained across ticks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the robot-specific log submission secret is carried
/// inside a command's authentication settings.
pub const ROBOT_OAUTH_SECRET_KEY: &str = "Auth.OAuth.RobotOAuthSecret";

/// Command discriminant
///
/// Unknown discriminants are preserved as `Other(..)` so the agent can log
/// exactly what the orchestrator sent instead of failing to parse the whole
/// heartbeat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommandType {
    StartProcess,
    StopProcess,
    Other(String),
}

impl From<String> for CommandType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "StartProcess" => CommandType::StartProcess,
            "StopProcess" => CommandType::StopProcess,
            _ => CommandType::Other(value),
        }
    }
}

impl From<CommandType> for String {
    fn from(value: CommandType) -> Self {
        match value {
            CommandType::StartProcess => "StartProcess".to_string(),
            CommandType::StopProcess => "StopProcess".to_string(),
            CommandType::Other(other) => other,
        }
    }
}

/// Job-level payload of a command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandData {
    /// Command discriminant (`StartProcess`, `StopProcess`, ...)
    #[serde(rename = "type")]
    pub command_type: CommandType,

    /// Key identifying the job this command refers to
    pub job_key: String,

    /// Key of the process the job was launched from
    #[serde(default)]
    pub process_key: String,

    /// Human-readable process name, used in log entries
    #[serde(default)]
    pub process_name: String,

    /// Version of the deployed package, used in log entries
    #[serde(default)]
    pub package_version: String,

    /// Folder (organization unit) the process belongs to
    #[serde(default)]
    pub folder_id: i64,

    /// Path of the entry point to execute; a trailing `.xaml` suffix is
    /// stripped before registry lookup
    #[serde(default)]
    pub entry_point_path: String,

    /// Input arguments as a JSON document embedded in a string
    #[serde(default)]
    pub input_arguments: String,
}

/// A unit of work received from the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub data: CommandData,

    /// Key of the robot the command is addressed to
    #[serde(default)]
    pub robot_key: String,

    /// Display name of the robot, used in log entries
    #[serde(default)]
    pub robot_name: String,

    /// Machine identifier assigned by the orchestrator
    #[serde(default)]
    pub machine_id: i64,

    /// Per-robot authentication settings; carries the log submission secret
    #[serde(default)]
    pub auth_settings: HashMap<String, serde_json::Value>,
}

impl Command {
    /// Returns the robot-specific secret used to authenticate log submission,
    /// if the orchestrator provided one.
    pub fn robot_oauth_secret(&self) -> Option<&str> {
        self.auth_settings
            .get(ROBOT_OAUTH_SECRET_KEY)
            .and_then(|value| value.as_str())
    }
}
