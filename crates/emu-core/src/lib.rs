//! Core traits and types for CPUs with lazily evaluated status flags.
//!
//! Arithmetic flags are not written after every ALU operation. The raw
//! outcome goes into a few result registers and the status word is
//! reassembled from them only when something reads it.

mod bus;
mod config;
mod control;
mod cpu;
mod error;
mod observable;
pub mod opcode;
pub mod parity;
pub mod result;
mod state;
pub mod status;

pub use bus::{Bus, SimpleBus};
pub use config::CpuConfig;
pub use control::{Boundary, ControlFlags, IntLayout, OpFlags};
pub use cpu::Cpu;
pub use error::{Error, Result};
pub use observable::{Observable, Value};
pub use opcode::OpcodeInfo;
pub use parity::{PARITY, parity_bit};
pub use result::{ResultFlags, ResultRegisters, Size};
pub use state::CpuState;
pub use status::{StatusLayout, StatusRegister};
