//! CPU configuration.

use serde::Deserialize;

use crate::error::Result;

/// Machine-level parameters for one CPU instance.
///
/// ```json
/// { "model": 8080, "status": 2, "multiplier": 1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Model number (e.g. 8080, 1145, 1170). Zero selects the crate default.
    pub model: u32,
    /// Status word to load after reset.
    pub status: Option<u16>,
    /// Clock multiplier: each instruction's state count is scaled by it.
    pub multiplier: u32,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            model: 0,
            status: None,
            multiplier: 1,
        }
    }
}

impl CpuConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
