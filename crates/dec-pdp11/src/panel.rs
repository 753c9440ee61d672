//! Front panel.
//!
//! The panel has no state of its own beyond its bindings. Each binding is a
//! query path answered by the CPU; `update_status` renders a point-in-time
//! view of every bound value and never writes back.

use emu_core::{Error, Observable, Result};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Panel {
    bindings: Vec<String>,
    powered: bool,
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a panel control to a CPU value.
    ///
    /// The request is passed to `target`; if it does not list the path the
    /// binding fails. Binding the same path twice is a no-op.
    pub fn bind(&mut self, binding: &str, target: &impl Observable) -> Result<()> {
        if !target.query_paths().contains(&binding) {
            return Err(Error::UnknownBinding(binding.to_string()));
        }
        if !self.bindings.iter().any(|b| b == binding) {
            self.bindings.push(binding.to_string());
        }
        Ok(())
    }

    #[must_use]
    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }

    /// `repower` is set when restoring a machine that was already running.
    pub fn power_up(&mut self, repower: bool) {
        self.powered = true;
        debug!(repower, bindings = self.bindings.len(), "panel power up");
    }

    pub fn power_down(&mut self) {
        self.powered = false;
        debug!("panel power down");
    }

    #[must_use]
    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    /// Render every bound value. Nothing is shown while powered down.
    #[must_use]
    pub fn update_status(&self, target: &impl Observable) -> Vec<(String, String)> {
        if !self.powered {
            return Vec::new();
        }
        self.bindings
            .iter()
            .filter_map(|b| target.query(b).map(|v| (b.clone(), v.to_string())))
            .collect()
    }
}
