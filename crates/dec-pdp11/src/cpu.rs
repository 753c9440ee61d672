//! PDP-11 CPU state.

use std::ops::{Deref, DerefMut};

use emu_core::{Boundary, Cpu, CpuConfig, CpuState, Observable, Result, Value};
use tracing::debug;

use crate::flags::{AF, CF, INT_LAYOUT, LAYOUT, PF, SF, ZF};
use crate::model::CpuModel;
use crate::opcodes;
use crate::registers::Registers;

/// PDP-11 CPU state.
///
/// Same shape as the 8080 state object, without PSW or an overflow bit.
/// Interrupt requests come in at eight priority levels.
pub struct CpuPdp11 {
    pub regs: Registers,
    model: CpuModel,
    state: CpuState,
}

impl CpuPdp11 {
    #[must_use]
    pub fn new(model: CpuModel) -> Self {
        Self {
            regs: Registers::default(),
            model,
            state: CpuState::new(&LAYOUT, &INT_LAYOUT),
        }
    }

    /// Create a PDP-11 from machine configuration. Model 0 selects the 11/70.
    pub fn from_config(config: &CpuConfig) -> Result<Self> {
        let model = match config.model {
            0 => CpuModel::default(),
            number => CpuModel::from_number(number)?,
        };
        let mut cpu = Self::new(model);
        cpu.state.configure(config);
        Ok(cpu)
    }

    #[must_use]
    pub const fn model(&self) -> CpuModel {
        self.model
    }
}

impl Deref for CpuPdp11 {
    type Target = CpuState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for CpuPdp11 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl Cpu for CpuPdp11 {
    type Registers = Registers;

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc())
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn status_word(&self) -> u16 {
        self.state.status_word()
    }

    fn set_status_word(&mut self, value: u16) {
        self.state.set_status_word(value);
    }

    fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    /// Levels 0-7; higher levels are accepted first.
    fn interrupt(&mut self, level: u8) -> Result<()> {
        self.state.interrupt(level)
    }

    fn end_instruction(&mut self, opcode: u8, taken: bool) -> Boundary {
        self.state.retire(opcodes::cycles(opcode, taken))
    }

    fn poll(&mut self) -> Boundary {
        self.state.boundary()
    }

    fn reset(&mut self) {
        self.regs = Registers::default();
        self.state.reset_state();
        debug!(model = %self.model, status = self.state.status_word(), "PDP-11 reset");
    }
}

const PDP11_QUERY_PATHS: &[&str] = &[
    "r0", "r1", "r2", "r3", "r4", "r5", "sp", "pc",
    "ps",
    "flags.c", "flags.p", "flags.a", "flags.z", "flags.s", "flags.i",
    "opflags", "intflags", "halted",
    "states", "model",
];

impl Observable for CpuPdp11 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "r0" => Some(self.regs.r[0].into()),
            "r1" => Some(self.regs.r[1].into()),
            "r2" => Some(self.regs.r[2].into()),
            "r3" => Some(self.regs.r[3].into()),
            "r4" => Some(self.regs.r[4].into()),
            "r5" => Some(self.regs.r[5].into()),
            "r6" | "sp" => Some(self.regs.sp().into()),
            "r7" | "pc" => Some(self.regs.pc().into()),

            "ps" => Some(self.status_word().into()),
            "flags.c" => Some(self.flag(CF).into()),
            "flags.p" => Some(self.flag(PF).into()),
            "flags.a" => Some(self.flag(AF).into()),
            "flags.z" => Some(self.flag(ZF).into()),
            "flags.s" => Some(self.flag(SF).into()),
            "flags.i" => Some(self.interrupts_enabled().into()),

            "opflags" => Some(self.control().op_flags().bits().into()),
            "intflags" => Some(self.control().int_flags().into()),
            "halted" => Some(self.state.is_halted().into()),

            "states" => Some(self.total_states().into()),
            "model" => Some(self.model.to_string().as_str().into()),

            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        PDP11_QUERY_PATHS
    }
}
