//! 8080 opcodes.
//!
//! Every one of the 256 opcode bytes has an entry in the shared table,
//! including the undocumented aliases (marked with `*`), so the dispatcher
//! can always ask how long an opcode runs and which flags it may touch.

pub use emu_core::opcode::OPCODES;
use emu_core::OpcodeInfo;

use crate::flags::LAYOUT;

pub const NOP: u8 = 0x00;
pub const HLT: u8 = 0x76;
pub const ADD_B: u8 = 0x80;
pub const SUB_B: u8 = 0x90;
pub const ANA_B: u8 = 0xA0;
pub const CMP_B: u8 = 0xB8;
pub const ADI: u8 = 0xC6;
/// Add with carry immediate (affects PS.ALL).
pub const ACI: u8 = 0xCE;
pub const SUI: u8 = 0xD6;
pub const CALL: u8 = 0xCD;
pub const RET: u8 = 0xC9;
pub const RNZ: u8 = 0xC0;
pub const CNZ: u8 = 0xC4;
pub const RST0: u8 = 0xC7;
pub const POP_PSW: u8 = 0xF1;
pub const PUSH_PSW: u8 = 0xF5;
pub const DI: u8 = 0xF3;
pub const EI: u8 = 0xFB;

/// Look up an opcode.
#[must_use]
pub fn opcode(op: u8) -> &'static OpcodeInfo {
    emu_core::opcode::opcode(op)
}

/// States taken by `op`; `taken` selects the longer count of conditional
/// calls and returns.
#[must_use]
pub fn cycles(op: u8, taken: bool) -> u8 {
    opcode(op).cycles_for(taken)
}

/// Status bits `op` may change, OF at bit 11 included.
#[must_use]
pub fn flags_affected(op: u8) -> u16 {
    opcode(op).flags_for(&LAYOUT)
}
