//! 8080 CPU state: registers and PSW over the shared status and control state.

use std::ops::{Deref, DerefMut};

use emu_core::{Boundary, Cpu, CpuConfig, CpuState, Error, Observable, Result, Value};
use tracing::debug;

use crate::flags::{AF, CF, IF, INT_LAYOUT, LAYOUT, OF, PF, SF, ZF};
use crate::opcodes;
use crate::registers::Registers;

/// Model number accepted in configuration.
pub const MODEL_8080: u32 = 8080;

/// 8080 CPU state.
///
/// The execution loop owns this value and is its only writer. It decodes
/// and executes instructions itself, calling the ALU primitives on
/// `result_mut()` and `end_instruction()` after each opcode. Status word,
/// control flags and bus access come from the shared [`CpuState`].
pub struct Cpu8080 {
    /// Register file.
    pub regs: Registers,
    state: CpuState,
}

impl Cpu8080 {
    /// Create a new 8080 with all flags clear.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            state: CpuState::new(&LAYOUT, &INT_LAYOUT),
        }
    }

    /// Create an 8080 from machine configuration.
    pub fn from_config(config: &CpuConfig) -> Result<Self> {
        if config.model != 0 && config.model != MODEL_8080 {
            return Err(Error::UnsupportedModel(config.model));
        }
        let mut cpu = Self::new();
        cpu.state.configure(config);
        Ok(cpu)
    }

    /// A and the visible flag byte, as pushed by `PUSH PSW`.
    #[must_use]
    pub fn psw(&self) -> u16 {
        u16::from(self.regs.a) << 8 | u16::from(self.state.status().visible())
    }

    /// `POP PSW`: load A and the visible flag byte. IF and OF are kept.
    pub fn set_psw(&mut self, value: u16) {
        self.regs.a = (value >> 8) as u8;
        self.state.status_mut().set_visible(value as u8);
    }

    fn close(&mut self, boundary: Boundary) -> Boundary {
        if let Boundary::Interrupt(_) = boundary {
            // Accepting an interrupt disables further ones until EI.
            self.state.disable_interrupts();
        }
        boundary
    }
}

impl Default for Cpu8080 {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Cpu8080 {
    type Target = CpuState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for Cpu8080 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl Cpu for Cpu8080 {
    type Registers = Registers;

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc)
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

    fn interrupt(&mut self, level: u8) -> Result<()> {
        self.state.interrupt(level)
    }

    fn end_instruction(&mut self, opcode: u8, taken: bool) -> Boundary {
        let boundary = self.state.retire(opcodes::cycles(opcode, taken));
        self.close(boundary)
    }

    fn poll(&mut self) -> Boundary {
        let boundary = self.state.boundary();
        self.close(boundary)
    }

    fn reset(&mut self) {
        self.regs = Registers::default();
        self.state.reset_state();
        debug!(status = self.state.status_word(), "8080 reset");
    }
}

/// All query paths supported by the 8080.
const I8080_QUERY_PATHS: &[&str] = &[
    // Registers
    "a", "b", "c", "d", "e", "h", "l",
    "bc", "de", "hl", "sp", "pc",
    // Status
    "ps", "psw",
    "flags.c", "flags.p", "flags.a", "flags.z", "flags.s", "flags.o", "flags.i",
    // Control flags
    "opflags", "intflags", "halted",
    // Timing
    "states",
];

impl Observable for Cpu8080 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "a" => Some(self.regs.a.into()),
            "b" => Some(self.regs.b.into()),
            "c" => Some(self.regs.c.into()),
            "d" => Some(self.regs.d.into()),
            "e" => Some(self.regs.e.into()),
            "h" => Some(self.regs.h.into()),
            "l" => Some(self.regs.l.into()),
            "bc" => Some(self.regs.bc().into()),
            "de" => Some(self.regs.de().into()),
            "hl" => Some(self.regs.hl().into()),
            "sp" => Some(self.regs.sp.into()),
            "pc" => Some(self.regs.pc.into()),

            "ps" => Some(self.status_word().into()),
            "psw" => Some(self.psw().into()),
            "flags.c" => Some(self.flag(CF).into()),
            "flags.p" => Some(self.flag(PF).into()),
            "flags.a" => Some(self.flag(AF).into()),
            "flags.z" => Some(self.flag(ZF).into()),
            "flags.s" => Some(self.flag(SF).into()),
            "flags.o" => Some(self.flag(OF).into()),
            "flags.i" => Some(self.interrupts_enabled().into()),

            "opflags" => Some(self.control().op_flags().bits().into()),
            "intflags" => Some(self.control().int_flags().into()),
            "halted" => Some(self.state.is_halted().into()),

            "states" => Some(self.total_states().into()),

            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        I8080_QUERY_PATHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu;
    use crate::flags::{ALL, BIT1, HALT, INTR};

    #[test]
    fn fresh_cpu_reads_reserved_bit_only() {
        let cpu = Cpu8080::new();
        assert_eq!(cpu.status_word(), BIT1);
        assert_eq!(cpu.psw(), BIT1);
    }

    #[test]
    fn psw_round_trip_keeps_internal_bits() {
        let mut cpu = Cpu8080::new();
        cpu.set_status_word(IF | OF);
        cpu.set_psw(0x42FF);
        assert_eq!(cpu.regs.a, 0x42);
        assert_eq!(cpu.psw(), 0x4200 | ALL | BIT1);
        assert_eq!(cpu.status_word(), IF | OF | ALL | BIT1);
    }

    #[test]
    fn alu_results_show_in_status_word() {
        let mut cpu = Cpu8080::new();
        let a = alu::add(cpu.result_mut(), 0x80, 0x80);
        assert_eq!(a, 0x00);
        assert_eq!(cpu.status_word(), BIT1 | CF | ZF | PF | OF);
        assert_eq!(cpu.psw() & 0xFF, BIT1 | CF | ZF | PF);
    }

    #[test]
    fn suppressed_accesses_skip_the_bus() {
        let mut bus = emu_core::SimpleBus::new();
        bus.load(0x0100, &[0xAA]);
        let mut cpu = Cpu8080::new();

        cpu.suppress_reads();
        assert_eq!(cpu.read(&mut bus, 0x0100), None);
        cpu.suppress_writes();
        assert!(!cpu.write(&mut bus, 0x0100, 0x55));
        assert_eq!(bus.reads(), 0);
        assert_eq!(bus.writes(), 0);

        cpu.end_instruction(opcodes::NOP, false);
        assert_eq!(cpu.read(&mut bus, 0x0100), Some(0xAA));
        assert!(cpu.write(&mut bus, 0x0100, 0x55));
        assert_eq!(bus.peek(0x0100), 0x55);
    }

    #[test]
    fn accepted_interrupt_clears_enable_and_halt() {
        let mut cpu = Cpu8080::new();
        cpu.enable_interrupts();
        cpu.end_instruction(opcodes::EI, false);
        cpu.halt();
        assert_eq!(cpu.end_instruction(opcodes::HLT, false), Boundary::Halted);
        assert_eq!(cpu.query("intflags"), Some(Value::U16(HALT)));

        cpu.interrupt(0).expect("8080 has one request line");
        assert_eq!(cpu.query("intflags"), Some(Value::U16(HALT | INTR)));
        assert_eq!(cpu.poll(), Boundary::Interrupt(0));
        assert!(!cpu.is_halted());
        assert!(!cpu.flag(IF));
    }

    #[test]
    fn only_level_zero_exists() {
        let mut cpu = Cpu8080::new();
        assert!(matches!(cpu.interrupt(3), Err(Error::InvalidLevel(3))));
    }

    #[test]
    fn states_accumulate_from_the_table() {
        let mut cpu = Cpu8080::new();
        cpu.end_instruction(opcodes::ACI, false);
        cpu.end_instruction(opcodes::CALL, false);
        cpu.end_instruction(opcodes::RNZ, true);
        assert_eq!(cpu.total_states(), 7 + 17 + 11);
        assert_eq!(cpu.query("states"), Some(Value::U64(35)));
    }

    #[test]
    fn config_selects_model_and_initial_status() {
        let config = CpuConfig::from_json(r#"{ "model": 8080, "status": 513 }"#).expect("config");
        let mut cpu = Cpu8080::from_config(&config).expect("8080");
        assert_eq!(cpu.status_word(), IF | CF | BIT1);

        alu::xra(cpu.result_mut(), 0x01, 0x00);
        cpu.reset();
        assert_eq!(cpu.status_word(), IF | CF | BIT1);

        let other = CpuConfig { model: 1170, ..CpuConfig::default() };
        assert!(matches!(Cpu8080::from_config(&other), Err(Error::UnsupportedModel(1170))));
    }

    #[test]
    fn multiplier_scales_states() {
        let config = CpuConfig::from_json(r#"{ "multiplier": 4 }"#).expect("config");
        let mut cpu = Cpu8080::from_config(&config).expect("default model");
        cpu.end_instruction(opcodes::ACI, false);
        cpu.end_instruction(opcodes::RNZ, true);
        assert_eq!(cpu.total_states(), 4 * (7 + 11));
        assert_eq!(cpu.query("states"), Some(Value::U64(72)));

        cpu.halt();
        cpu.end_instruction(opcodes::HLT, false);
        cpu.poll();
        assert_eq!(cpu.total_states(), 4 * (7 + 11 + 7));
    }

    #[test]
    fn observable_flags() {
        let mut cpu = Cpu8080::new();
        alu::sub(cpu.result_mut(), 0x00, 0x01);
        assert_eq!(cpu.query("flags.c"), Some(Value::Bool(true)));
        assert_eq!(cpu.query("flags.s"), Some(Value::Bool(true)));
        assert_eq!(cpu.query("flags.z"), Some(Value::Bool(false)));
        assert_eq!(cpu.query("nonsense"), None);
        assert_eq!(cpu.snapshot().len(), cpu.query_paths().len());
    }
}
