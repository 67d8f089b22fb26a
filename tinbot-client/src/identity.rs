//! Robot identity headers
//!
//! Every orchestrator call carries a fixed set of machine/version/installation
//! identification headers. The machine name is derived once at startup from
//! the deployment-environment tag and stays stable for the process lifetime.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::RequestBuilder;

/// Agent version advertised to the orchestrator
pub const ROBOT_VERSION: &str = "24.2.1";
/// Installation identifier advertised to the orchestrator
pub const INSTALLATION_ID: &str = "0987654321";
/// Platform tag advertised to the orchestrator
pub const ROBOT_AGENT: &str = "OS=Linux";

/// Stable identity of this agent instance
#[derive(Debug, Clone)]
pub struct RobotIdentity {
    /// Base64-encoded machine name, derived from the environment tag
    machine_name_encoded: String,
    /// Client id, sent as the robot license header on log submission
    client_id: String,
}

impl RobotIdentity {
    /// Derives the identity for a deployment environment.
    pub fn new(environment: &str, client_id: impl Into<String>) -> Self {
        Self {
            machine_name_encoded: BASE64.encode(format!("tinbot-{environment}")),
            client_id: client_id.into(),
        }
    }

    /// The encoded machine name sent with every request.
    pub fn machine_name_encoded(&self) -> &str {
        &self.machine_name_encoded
    }

    /// Attaches the identification headers shared by all orchestrator calls.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-ROBOT-MACHINE-ENCODED", &self.machine_name_encoded)
            .header("X-UIPATH-INSTALLATION-VERSION", ROBOT_VERSION)
            .header("X-UIPATH-INSTALLATION-ID", INSTALLATION_ID)
            .header("X-ROBOT-VERSION", ROBOT_VERSION)
            .header("X-ROBOT-AGENT", ROBOT_AGENT)
            .header("X-UIPATH-Localization", "en")
            .header("Accept", "application/json")
    }

    /// Attaches the extra headers the logging endpoint requires on top of the
    /// shared set.
    pub(crate) fn apply_for_logs(&self, builder: RequestBuilder) -> RequestBuilder {
        self.apply(builder)
            .header("X-ROBOT-LICENSE", &self.client_id)
    }
}
