//! PDP-11 opcodes.
//!
//! The opcode definitions mirror the 8080 encoding, so lookups go to the
//! shared table in `emu-core`. There is no overflow bit to report.

pub use emu_core::opcode::OPCODES;
use emu_core::OpcodeInfo;

use crate::flags::LAYOUT;

pub const HLT: u8 = 0x76;
/// Add with carry immediate (affects PS.RESULT).
pub const ACI: u8 = 0xCE;
pub const CALL: u8 = 0xCD;
pub const RST0: u8 = 0xC7;

#[must_use]
pub fn opcode(op: u8) -> &'static OpcodeInfo {
    emu_core::opcode::opcode(op)
}

#[must_use]
pub fn cycles(op: u8, taken: bool) -> u8 {
    opcode(op).cycles_for(taken)
}

/// Status bits `op` may change.
#[must_use]
pub fn flags_affected(op: u8) -> u16 {
    opcode(op).flags_for(&LAYOUT)
}
