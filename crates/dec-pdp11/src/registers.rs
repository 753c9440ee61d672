//! PDP-11 general registers.

/// Index of the stack pointer.
pub const SP: usize = 6;
/// Index of the program counter.
pub const PC: usize = 7;

/// R0-R7. R6 doubles as SP and R7 as PC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub r: [u16; 8],
}

impl Registers {
    #[must_use]
    pub const fn sp(&self) -> u16 {
        self.r[SP]
    }

    #[must_use]
    pub const fn pc(&self) -> u16 {
        self.r[PC]
    }

    pub fn set_sp(&mut self, value: u16) {
        self.r[SP] = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.r[PC] = value;
    }
}
