//! 8080 processor status (PS) bits and interrupt flags.
//!
//! The low byte is the flag byte pushed with A by `PUSH PSW`. IF and OF sit
//! above it: `status_word()` and `set_status_word()` reach them, but no
//! documented instruction can see them.

use emu_core::{IntLayout, StatusLayout};

/// Carry flag (bit 0).
pub const CF: u16 = 0x0001;
/// Reserved (bit 1) - always set.
pub const BIT1: u16 = 0x0002;
/// Parity flag (bit 2).
pub const PF: u16 = 0x0004;
/// Reserved (bit 3) - always clear.
pub const BIT3: u16 = 0x0008;
/// Auxiliary carry flag (bit 4).
pub const AF: u16 = 0x0010;
/// Reserved (bit 5) - always clear.
pub const BIT5: u16 = 0x0020;
/// Zero flag (bit 6).
pub const ZF: u16 = 0x0040;
/// Sign flag (bit 7).
pub const SF: u16 = 0x0080;
/// CF, PF, AF, ZF, SF.
pub const ALL: u16 = 0x00D5;
/// The flag byte visible to instructions.
pub const MASK: u16 = 0x00FF;
/// Interrupt enable (bit 9), internal.
pub const IF: u16 = 0x0200;
/// Overflow (bit 11), internal.
pub const OF: u16 = 0x0800;

/// Flags stored directly.
pub const DIRECT: u16 = IF;
/// Flags kept in the result registers.
pub const INDIRECT: u16 = CF | PF | AF | ZF | SF | OF;
/// Bits that always read as 1.
pub const SET: u16 = BIT1;

/// Status word layout for the 8080.
pub static LAYOUT: StatusLayout = StatusLayout {
    direct: DIRECT,
    result: INDIRECT,
    overflow: Some(OF),
    set: SET,
    visible: MASK,
};

/// Hardware interrupt requested.
pub const INTR: u16 = 0x01;
/// Halt (HLT) requested.
pub const HALT: u16 = 0x04;

/// INTFLAG layout for the 8080: one request line.
pub static INT_LAYOUT: IntLayout = IntLayout {
    intr: INTR,
    halt: HALT,
};
