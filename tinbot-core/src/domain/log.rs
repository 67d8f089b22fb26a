//! Robot log entries
//!
//! Log lines pushed to the orchestrator's logging endpoint. The endpoint has
//! a historical quirk: the JSON-encoded entry is itself re-encoded as an
//! escaped string inside a one-element array. [`RobotLogEntry::to_wire_payload`]
//! produces exactly that shape.

use chrono::{DateTime, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::command::Command;

/// Severity of a robot log entry (wire strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Information,
    Warning,
    Error,
}

/// A single log line reported for a job
///
/// Every entry gets a freshly generated fingerprint; the remaining
/// identifying metadata is copied from the command that triggered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotLogEntry {
    pub message: String,
    pub level: LogLevel,
    pub log_type: String,
    pub time_stamp: String,
    pub fingerprint: Uuid,
    pub windows_identity: String,
    pub machine_name: String,
    pub file_name: String,
    pub initiated_by: String,
    pub process_name: String,
    pub process_version: String,
    pub job_id: String,
    pub robot_name: String,
    pub machine_id: i64,
    pub organization_unit_id: i64,
}

impl RobotLogEntry {
    /// Builds a log entry for the job a command refers to.
    pub fn for_job(command: &Command, message: impl Into<String>, level: LogLevel, actor: &str) -> Self {
        Self {
            message: message.into(),
            level,
            log_type: "Default".to_string(),
            time_stamp: wire_timestamp(Local::now()),
            fingerprint: Uuid::new_v4(),
            windows_identity: format!("{actor}\\robot"),
            machine_name: actor.to_string(),
            file_name: "Main".to_string(),
            initiated_by: "Orchestrator".to_string(),
            process_name: command.data.process_name.clone(),
            process_version: command.data.package_version.clone(),
            job_id: command.data.job_key.clone(),
            robot_name: command.robot_name.clone(),
            machine_id: command.machine_id,
            organization_unit_id: command.data.folder_id,
        }
    }

    /// Encodes the entry as the logging endpoint expects it: the JSON
    /// document re-encoded as the single element of a JSON array of strings.
    pub fn to_wire_payload(&self) -> serde_json::Result<String> {
        let inner = serde_json::to_string(self)?;
        serde_json::to_string(&[inner])
    }
}

/// Formats a timestamp the way the logging endpoint expects: ISO-8601 with a
/// seven-digit fractional-second field and an explicit `+HH:MM` offset.
pub fn wire_timestamp<Tz: TimeZone>(moment: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let fraction = (moment.nanosecond() % 1_000_000_000) / 100;
    format!(
        "{}.{:07}{}",
        moment.format("%Y-%m-%dT%H:%M:%S"),
        fraction,
        moment.format("%:z")
    )
}
