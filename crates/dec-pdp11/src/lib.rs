//! DEC PDP-11 status-flag model.
//!
//! Shares the lazy result-register engine with the 8080 but has no
//! internal overflow bit, takes interrupts at eight priority levels, and
//! carries a front panel that renders CPU state for display.

mod cpu;
pub mod flags;
mod model;
pub mod opcodes;
mod panel;
mod registers;

pub use cpu::CpuPdp11;
pub use model::CpuModel;
pub use panel::Panel;
pub use registers::Registers;
