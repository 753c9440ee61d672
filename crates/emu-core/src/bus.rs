//! Memory bus interface.

/// Memory bus interface.
///
/// The bus itself lives outside the CPU crates. CPUs only route their
/// accesses through it, after checking the per-instruction suppression
/// flags.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64K RAM with access counters, for tests and tools.
pub struct SimpleBus {
    ram: Box<[u8; 0x1_0000]>,
    reads: u64,
    writes: u64,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x1_0000]),
            reads: 0,
            writes: 0,
        }
    }

    /// Copy bytes into RAM starting at `address`, wrapping at the top.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.ram[usize::from(address.wrapping_add(offset as u16))] = byte;
        }
    }

    /// Read without counting an access.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }

    #[must_use]
    pub const fn reads(&self) -> u64 {
        self.reads
    }

    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.reads += 1;
        self.ram[usize::from(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.writes += 1;
        self.ram[usize::from(address)] = value;
    }
}
