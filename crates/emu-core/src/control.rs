//! Per-instruction and per-CPU control flags.
//!
//! `OpFlags` live for one instruction: they are cleared at every instruction
//! boundary. The interrupt flags persist until an interrupt is accepted or
//! the CPU is reset.

use tracing::debug;

use crate::error::{Error, Result};

/// Flags an instruction may raise for the remainder of its own execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpFlags(u8);

impl OpFlags {
    /// Disable memory reads for the remainder of the current instruction.
    pub const NOREAD: Self = Self(0x01);
    /// Disable memory writes for the remainder of the current instruction.
    pub const NOWRITE: Self = Self(0x02);
    /// Delay interrupt acknowledgement (prefix, segment load, STI/EI).
    pub const NOINTR: Self = Self(0x04);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl core::ops::BitOr for OpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Per-target encoding of the interrupt flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLayout {
    /// Mask of interrupt-request bits; bit `n` is request level `n`.
    pub intr: u16,
    /// Halt-request bit.
    pub halt: u16,
}

impl IntLayout {
    /// Number of request levels the layout can carry.
    #[must_use]
    pub const fn levels(&self) -> u8 {
        self.intr.count_ones() as u8
    }
}

/// What the execution loop should do at an instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Fetch the next instruction.
    Fetch,
    /// Dispatch the interrupt at this request level.
    Interrupt(u8),
    /// Suspend fetch until an interrupt or reset.
    Halted,
}

/// OPFLAG and INTFLAG for one CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    layout: &'static IntLayout,
    op: OpFlags,
    int: u16,
}

impl ControlFlags {
    #[must_use]
    pub const fn new(layout: &'static IntLayout) -> Self {
        Self {
            layout,
            op: OpFlags::empty(),
            int: 0,
        }
    }

    #[must_use]
    pub const fn op_flags(&self) -> OpFlags {
        self.op
    }

    /// Raise an op flag for the rest of the current instruction.
    pub fn set_op(&mut self, flag: OpFlags) {
        self.op.insert(flag);
    }

    #[must_use]
    pub const fn can_read(&self) -> bool {
        !self.op.contains(OpFlags::NOREAD)
    }

    #[must_use]
    pub const fn can_write(&self) -> bool {
        !self.op.contains(OpFlags::NOWRITE)
    }

    /// Raw INTFLAG bits.
    #[must_use]
    pub const fn int_flags(&self) -> u16 {
        self.int
    }

    /// Bit for a request level, if the layout has that level.
    fn level_bit(&self, level: u8) -> Result<u16> {
        1u16.checked_shl(u32::from(level))
            .filter(|bit| bit & self.layout.intr != 0)
            .ok_or(Error::InvalidLevel(level))
    }

    /// Signal a hardware interrupt at `level`.
    pub fn request_interrupt(&mut self, level: u8) -> Result<()> {
        self.int |= self.level_bit(level)?;
        Ok(())
    }

    /// Withdraw a pending interrupt request.
    pub fn clear_interrupt(&mut self, level: u8) -> Result<()> {
        self.int &= !self.level_bit(level)?;
        Ok(())
    }

    #[must_use]
    pub const fn interrupt_pending(&self) -> bool {
        self.int & self.layout.intr != 0
    }

    /// HLT/WAIT: stop fetching until an interrupt is taken.
    pub fn request_halt(&mut self) {
        if self.int & self.layout.halt == 0 {
            debug!("halt requested");
        }
        self.int |= self.layout.halt;
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.int & self.layout.halt != 0
    }

    /// Clear both registers.
    pub fn reset(&mut self) {
        self.op.clear();
        self.int = 0;
    }

    /// Close the current instruction and decide what happens next.
    ///
    /// OPFLAG is always cleared. If the instruction raised NOINTR, pending
    /// interrupts are not sampled at this boundary.
    pub fn boundary(&mut self, interrupts_enabled: bool) -> Boundary {
        let deferred = self.op.contains(OpFlags::NOINTR);
        self.op.clear();

        let pending = self.int & self.layout.intr;
        if !deferred && interrupts_enabled && pending != 0 {
            let level = (15 - pending.leading_zeros()) as u8;
            let was_halted = self.is_halted();
            self.int &= !((1 << level) | self.layout.halt);
            debug!(level, was_halted, "interrupt accepted");
            return Boundary::Interrupt(level);
        }

        if self.is_halted() {
            Boundary::Halted
        } else {
            Boundary::Fetch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SINGLE: IntLayout = IntLayout {
        intr: 0x01,
        halt: 0x04,
    };

    static LEVELS: IntLayout = IntLayout {
        intr: 0x00FF,
        halt: 0x0100,
    };

    #[test]
    fn op_flags_clear_at_every_boundary() {
        let mut cf = ControlFlags::new(&SINGLE);
        for flags in [
            OpFlags::NOREAD,
            OpFlags::NOWRITE,
            OpFlags::NOINTR,
            OpFlags::NOREAD | OpFlags::NOWRITE | OpFlags::NOINTR,
        ] {
            cf.set_op(flags);
            assert_eq!(cf.op_flags(), flags);
            cf.boundary(true);
            assert!(cf.op_flags().is_empty());
            assert!(cf.can_read());
            assert!(cf.can_write());
        }
    }

    #[test]
    fn read_write_suppression() {
        let mut cf = ControlFlags::new(&SINGLE);
        cf.set_op(OpFlags::NOREAD);
        assert!(!cf.can_read());
        assert!(cf.can_write());
        cf.set_op(OpFlags::NOWRITE);
        assert!(!cf.can_write());
    }

    #[test]
    fn nointr_defers_exactly_one_boundary() {
        let mut cf = ControlFlags::new(&SINGLE);
        cf.request_interrupt(0).expect("level 0");
        cf.set_op(OpFlags::NOINTR);

        assert_eq!(cf.boundary(true), Boundary::Fetch);
        assert!(cf.interrupt_pending());
        assert_eq!(cf.boundary(true), Boundary::Interrupt(0));
        assert!(!cf.interrupt_pending());
    }

    #[test]
    fn interrupts_wait_for_enable() {
        let mut cf = ControlFlags::new(&SINGLE);
        cf.request_interrupt(0).expect("level 0");
        assert_eq!(cf.boundary(false), Boundary::Fetch);
        assert_eq!(cf.boundary(true), Boundary::Interrupt(0));
    }

    #[test]
    fn halt_until_interrupt() {
        let mut cf = ControlFlags::new(&SINGLE);
        cf.request_halt();
        assert_eq!(cf.boundary(true), Boundary::Halted);
        assert_eq!(cf.boundary(true), Boundary::Halted);

        cf.request_interrupt(0).expect("level 0");
        assert_eq!(cf.boundary(false), Boundary::Halted);
        assert_eq!(cf.boundary(true), Boundary::Interrupt(0));
        assert!(!cf.is_halted());
        assert_eq!(cf.int_flags(), 0);
    }

    #[test]
    fn highest_level_wins() {
        let mut cf = ControlFlags::new(&LEVELS);
        cf.request_interrupt(2).expect("level 2");
        cf.request_interrupt(6).expect("level 6");
        assert_eq!(cf.boundary(true), Boundary::Interrupt(6));
        assert_eq!(cf.boundary(true), Boundary::Interrupt(2));
        assert_eq!(cf.boundary(true), Boundary::Fetch);
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let mut single = ControlFlags::new(&SINGLE);
        assert!(matches!(single.request_interrupt(1), Err(Error::InvalidLevel(1))));

        let mut levels = ControlFlags::new(&LEVELS);
        assert!(levels.request_interrupt(7).is_ok());
        assert!(matches!(levels.request_interrupt(8), Err(Error::InvalidLevel(8))));
        assert!(matches!(levels.request_interrupt(200), Err(Error::InvalidLevel(200))));
        assert_eq!(LEVELS.levels(), 8);
        assert_eq!(SINGLE.levels(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut cf = ControlFlags::new(&LEVELS);
        cf.request_interrupt(3).expect("level 3");
        cf.request_halt();
        cf.set_op(OpFlags::NOWRITE);
        cf.reset();
        assert_eq!(cf.int_flags(), 0);
        assert!(cf.op_flags().is_empty());
    }
}
