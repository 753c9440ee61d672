//! CPU-side state shared by every target.
//!
//! Holds the status word, OPFLAG/INTFLAG and the state counter, and routes
//! bus accesses through the suppression flags. A target wraps this and adds
//! its registers and whatever differs about it.

use crate::bus::Bus;
use crate::config::CpuConfig;
use crate::control::{Boundary, ControlFlags, IntLayout, OpFlags};
use crate::error::Result;
use crate::result::ResultRegisters;
use crate::status::{IF, StatusLayout, StatusRegister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    ps: StatusRegister,
    control: ControlFlags,
    /// States elapsed since reset, scaled by `multiplier`.
    states: u64,
    /// Status word applied at reset, from configuration.
    initial_status: Option<u16>,
    multiplier: u32,
}

impl CpuState {
    #[must_use]
    pub fn new(status: &'static StatusLayout, int: &'static IntLayout) -> Self {
        Self {
            ps: StatusRegister::new(status),
            control: ControlFlags::new(int),
            states: 0,
            initial_status: None,
            multiplier: 1,
        }
    }

    /// Apply the status and multiplier settings, then reset.
    pub fn configure(&mut self, config: &CpuConfig) {
        self.initial_status = config.status;
        self.multiplier = config.multiplier.max(1);
        self.reset_state();
    }

    #[must_use]
    pub const fn status(&self) -> &StatusRegister {
        &self.ps
    }

    pub fn status_mut(&mut self) -> &mut StatusRegister {
        &mut self.ps
    }

    #[must_use]
    pub fn status_word(&self) -> u16 {
        self.ps.get()
    }

    pub fn set_status_word(&mut self, value: u16) {
        self.ps.set(value);
    }

    /// Result registers for the ALU primitives.
    pub fn result_mut(&mut self) -> &mut ResultRegisters {
        self.ps.result_mut()
    }

    /// Check a status flag (any PS bit, internal ones included).
    #[must_use]
    pub fn flag(&self, flag: u16) -> bool {
        self.ps.is_set(flag)
    }

    #[must_use]
    pub const fn control(&self) -> &ControlFlags {
        &self.control
    }

    /// Skip memory reads for the rest of this instruction.
    pub fn suppress_reads(&mut self) {
        self.control.set_op(OpFlags::NOREAD);
    }

    /// Skip memory writes for the rest of this instruction.
    pub fn suppress_writes(&mut self) {
        self.control.set_op(OpFlags::NOWRITE);
    }

    /// Delay interrupt sampling past the next boundary.
    pub fn inhibit_interrupts(&mut self) {
        self.control.set_op(OpFlags::NOINTR);
    }

    /// EI/STI: set IF. Sampling resumes after the following instruction.
    pub fn enable_interrupts(&mut self) {
        self.ps.set_direct(IF, true);
        self.inhibit_interrupts();
    }

    pub fn disable_interrupts(&mut self) {
        self.ps.set_direct(IF, false);
    }

    #[must_use]
    pub const fn interrupts_enabled(&self) -> bool {
        self.ps.direct() & IF != 0
    }

    /// HLT/WAIT.
    pub fn halt(&mut self) {
        self.control.request_halt();
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.control.is_halted()
    }

    pub fn interrupt(&mut self, level: u8) -> Result<()> {
        self.control.request_interrupt(level)
    }

    /// Read through the bus unless reads are suppressed.
    pub fn read<B: Bus>(&mut self, bus: &mut B, address: u16) -> Option<u8> {
        self.control.can_read().then(|| bus.read(address))
    }

    /// Write through the bus unless writes are suppressed.
    ///
    /// Returns whether the write reached the bus.
    pub fn write<B: Bus>(&mut self, bus: &mut B, address: u16, value: u8) -> bool {
        let allowed = self.control.can_write();
        if allowed {
            bus.write(address, value);
        }
        allowed
    }

    #[must_use]
    pub const fn total_states(&self) -> u64 {
        self.states
    }

    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Count an instruction's states and close it.
    pub fn retire(&mut self, states: u8) -> Boundary {
        self.states += u64::from(states) * u64::from(self.multiplier);
        self.boundary()
    }

    /// Instruction boundary without counting states (sampling while halted).
    pub fn boundary(&mut self) -> Boundary {
        self.control.boundary(self.interrupts_enabled())
    }

    /// Status word back to the configured value, control flags and
    /// counter cleared.
    pub fn reset_state(&mut self) {
        self.ps = StatusRegister::new(self.ps.layout());
        if let Some(status) = self.initial_status {
            self.ps.set(status);
        }
        self.control.reset();
        self.states = 0;
    }
}
