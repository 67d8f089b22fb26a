//! Start/stop service notification DTOs

use serde::{Deserialize, Serialize};

/// Body of the StartService notification
///
/// The orchestrator expects both fields present and null for an unattended
/// robot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartServiceBody {
    pub service_user_name: Option<String>,
    pub job_key: Option<String>,
}

impl Default for StartServiceBody {
    fn default() -> Self {
        Self {
            service_user_name: None,
            job_key: None,
        }
    }
}

/// Body of the StopService notification; adds a zero command state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopServiceBody {
    pub command_state: i32,
    pub job_key: Option<String>,
    pub service_user_name: Option<String>,
}

impl Default for StopServiceBody {
    fn default() -> Self {
        Self {
            command_state: 0,
            job_key: None,
            service_user_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_service_body_shape() {
        let json = serde_json::to_value(StartServiceBody::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ServiceUserName": null, "JobKey": null})
        );
    }

    #[test]
    fn test_stop_service_body_shape() {
        let json = serde_json::to_value(StopServiceBody::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"CommandState": 0, "JobKey": null, "ServiceUserName": null})
        );
    }
}
