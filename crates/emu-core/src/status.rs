//! Processor status word assembled from direct bits and result registers.

use tracing::trace;

use crate::result::{ResultFlags, ResultRegisters};

/// Carry flag (bit 0).
pub const CF: u16 = 0x0001;
/// Parity flag (bit 2).
pub const PF: u16 = 0x0004;
/// Auxiliary carry flag (bit 4).
pub const AF: u16 = 0x0010;
/// Zero flag (bit 6).
pub const ZF: u16 = 0x0040;
/// Sign flag (bit 7).
pub const SF: u16 = 0x0080;

/// Interrupt enable (bit 9), stored directly on every target.
pub const IF: u16 = 0x0200;

/// Arithmetic flags shared by every layout.
pub const ARITH: u16 = CF | PF | AF | ZF | SF;

/// Per-target shape of the status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLayout {
    /// Bits stored verbatim (e.g. the interrupt-enable flag).
    pub direct: u16,
    /// Bits reconstructed from the result registers.
    pub result: u16,
    /// Position of an internal-only overflow flag, if the target has one.
    pub overflow: Option<u16>,
    /// Reserved bits that always read as 1.
    pub set: u16,
    /// Bits visible to documented instructions (pushed and popped with A).
    pub visible: u16,
}

impl StatusLayout {
    /// Every bit that `set` will accept from a caller.
    #[must_use]
    pub const fn writable(&self) -> u16 {
        self.direct | self.result
    }
}

/// A status word whose arithmetic flags are evaluated lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRegister {
    layout: &'static StatusLayout,
    direct: u16,
    result: ResultRegisters,
}

impl StatusRegister {
    /// All flags clear; reserved-set bits read as 1.
    #[must_use]
    pub fn new(layout: &'static StatusLayout) -> Self {
        Self {
            layout,
            direct: 0,
            result: ResultRegisters::default(),
        }
    }

    #[must_use]
    pub const fn layout(&self) -> &'static StatusLayout {
        self.layout
    }

    /// Result registers, for flag queries.
    #[must_use]
    pub const fn result(&self) -> &ResultRegisters {
        &self.result
    }

    /// Result registers, for the arithmetic primitives to update.
    pub fn result_mut(&mut self) -> &mut ResultRegisters {
        &mut self.result
    }

    /// The directly stored bits only; cheaper than `get` on hot paths.
    #[must_use]
    pub const fn direct(&self) -> u16 {
        self.direct
    }

    /// Assemble the full status word.
    #[must_use]
    pub fn get(&self) -> u16 {
        let r = &self.result;
        let mut word = self.direct | self.layout.set;
        if r.cf() {
            word |= CF;
        }
        if r.pf() {
            word |= PF;
        }
        if r.af() {
            word |= AF;
        }
        if r.zf() {
            word |= ZF;
        }
        if r.sf() {
            word |= SF;
        }
        word | self.layout.overflow.filter(|_| r.of()).unwrap_or(0)
    }

    /// Replace the status word.
    ///
    /// Direct bits are stored; arithmetic bits re-seed the result registers
    /// so that later reads reproduce them. Reserved bits are ignored.
    pub fn set(&mut self, value: u16) {
        self.direct = value & self.layout.direct;
        self.result = ResultRegisters::seeded(ResultFlags {
            cf: value & CF != 0,
            pf: value & PF != 0,
            af: value & AF != 0,
            zf: value & ZF != 0,
            sf: value & SF != 0,
            of: self.layout.overflow.is_some_and(|of| value & of != 0),
        });
        trace!("status word {value:#06X} -> {:#06X}", self.get());
    }

    /// The byte visible to documented instructions.
    #[must_use]
    pub fn visible(&self) -> u8 {
        (self.get() & self.layout.visible) as u8
    }

    /// Replace only the visible byte, keeping internal bits.
    pub fn set_visible(&mut self, value: u8) {
        let visible = self.layout.visible;
        self.set((self.get() & !visible) | (u16::from(value) & visible));
    }

    /// Check if a flag is set.
    #[must_use]
    pub fn is_set(&self, flag: u16) -> bool {
        self.get() & flag != 0
    }

    /// Set or clear a directly stored flag.
    pub fn set_direct(&mut self, flag: u16, on: bool) {
        debug_assert_eq!(flag & !self.layout.direct, 0, "{flag:#06X} is not a direct flag");
        if on {
            self.direct |= flag & self.layout.direct;
        } else {
            self.direct &= !flag;
        }
    }
}
