use serde::{Deserialize, Serialize};

use crate::geometry::DimensionPolicy;

/// Shapes configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Batch file paths or glob patterns
    pub requests: Vec<String>,
    /// File to write results to instead of stdout
    pub output: Option<String>,
    /// Pretty-print JSON results
    pub pretty: bool,
    /// Negative width/height handling: "reject" or "normalize"
    pub dimension_policy: DimensionPolicy,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            version: 1,
            requests: Vec::new(),
            output: None,
            pretty: false,
            dimension_policy: DimensionPolicy::Reject,
        }
    }
}
