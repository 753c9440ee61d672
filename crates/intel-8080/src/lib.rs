//! Intel 8080 status-flag model.
//!
//! Arithmetic flags are kept in result registers and rebuilt when the
//! status word is read. The opcode table, ALU primitives and control flags
//! are everything an execution loop needs to drive it.

pub mod alu;
mod cpu;
pub mod flags;
pub mod opcodes;
mod registers;

pub use cpu::{Cpu8080, MODEL_8080};
pub use opcodes::{OPCODES, cycles, flags_affected, opcode};
pub use registers::Registers;
