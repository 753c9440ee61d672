//! PDP-11 processor status (PS) bits and interrupt flags.
//!
//! The arithmetic group shares the 8080 bit positions. Unlike the 8080
//! there is no internal overflow bit: the five `RESULT` flags are the whole
//! indirect set, and IF is the only internal bit outside `MASK`.

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
pub const ALL: u16 = 0x00D5;
pub const MASK: u16 = 0x00FF;
/// Interrupt enable (bit 9).
pub const IF: u16 = 0x0200;

/// Internal bits (outside `MASK`) that the status word can get and set.
pub const INTERNAL: u16 = IF;
/// Flags kept in the result registers.
pub const RESULT: u16 = CF | PF | AF | ZF | SF;
/// Bits that always read as 1.
pub const SET: u16 = BIT1;

pub static LAYOUT: StatusLayout = StatusLayout {
    direct: INTERNAL,
    result: RESULT,
    overflow: None,
    set: SET,
    visible: MASK,
};

/// One request bit per priority level 0-7.
pub const INTR: u16 = 0x00FF;
/// Halt (HLT/WAIT) requested.
pub const HALT: u16 = 0x0100;

/// INTFLAG layout for the PDP-11: eight priority levels.
pub static INT_LAYOUT: IntLayout = IntLayout {
    intr: INTR,
    halt: HALT,
};
