//! Host/page bridge settings.

use lumen_common::IsolationMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the object exposed on the page's global scope.
    pub global_name: String,
    pub isolation: IsolationMode,
    /// Whether the host honours `request-devtools` from the page.
    pub allow_devtools_request: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            global_name: "electronAPI".into(),
            isolation: IsolationMode::Isolated,
            allow_devtools_request: true,
        }
    }
}
