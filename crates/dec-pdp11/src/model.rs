//! PDP-11 CPU models.

use std::fmt;

use emu_core::{Error, Result};

/// Selected PDP-11 CPU model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CpuModel {
    /// PDP-11/45.
    Pdp1145,
    /// PDP-11/70.
    #[default]
    Pdp1170,
}

impl CpuModel {
    /// Look up a model by its configuration number (1145 or 1170).
    pub fn from_number(number: u32) -> Result<Self> {
        match number {
            1145 => Ok(Self::Pdp1145),
            1170 => Ok(Self::Pdp1170),
            other => Err(Error::UnsupportedModel(other)),
        }
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Pdp1145 => 1145,
            Self::Pdp1170 => 1170,
        }
    }
}

impl fmt::Display for CpuModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdp1145 => write!(f, "PDP-11/45"),
            Self::Pdp1170 => write!(f, "PDP-11/70"),
        }
    }
}
