//! Opcode metadata and the shared opcode table.
//!
//! Both targets use the 8080 encoding, so one dense table serves them.
//! Flag bits are the shared status positions; the internal overflow bit is
//! recorded as a marker and mapped through each target's layout.

use crate::status::{AF, ARITH, CF, IF, PF, SF, StatusLayout, ZF};

/// What the dispatcher needs to know about one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    /// Instruction length in bytes, opcode included.
    pub length: u8,
    /// States when a condition is not met (or the only count).
    pub cycles: u8,
    /// States when a conditional call or return is taken.
    pub cycles_taken: u8,
    /// Status bits the instruction may change.
    pub flags: u16,
    /// The instruction rewrites the result registers, so a target's
    /// internal overflow bit changes too.
    pub overflow: bool,
}

impl OpcodeInfo {
    #[must_use]
    pub const fn new(mnemonic: &'static str, length: u8, cycles: u8, flags: u16) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            cycles_taken: cycles,
            flags,
            overflow: false,
        }
    }

    #[must_use]
    pub const fn conditional(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        cycles_taken: u8,
    ) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            cycles_taken,
            flags: 0,
            overflow: false,
        }
    }

    #[must_use]
    pub const fn with_overflow(mut self) -> Self {
        self.overflow = true;
        self
    }

    /// State count for this execution.
    #[must_use]
    pub const fn cycles_for(&self, taken: bool) -> u8 {
        if taken { self.cycles_taken } else { self.cycles }
    }

    #[must_use]
    pub const fn affects(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    /// Status bits changed on a target, its internal overflow bit included.
    #[must_use]
    pub const fn flags_for(&self, layout: &StatusLayout) -> u16 {
        match layout.overflow {
            Some(of) if self.overflow => self.flags | of,
            _ => self.flags,
        }
    }

    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.cycles != self.cycles_taken
    }
}

/// INR and DCR leave carry alone.
const INC_DEC: u16 = ZF | SF | PF | AF;

/// Metadata for every opcode byte. Undocumented aliases are marked `*`.
pub static OPCODES: [OpcodeInfo; 256] = [
    OpcodeInfo::new("NOP", 1, 4, 0), // 0x00
    OpcodeInfo::new("LXI B", 3, 10, 0), // 0x01
    OpcodeInfo::new("STAX B", 1, 7, 0), // 0x02
    OpcodeInfo::new("INX B", 1, 5, 0), // 0x03
    OpcodeInfo::new("INR B", 1, 5, INC_DEC).with_overflow(), // 0x04
    OpcodeInfo::new("DCR B", 1, 5, INC_DEC).with_overflow(), // 0x05
    OpcodeInfo::new("MVI B", 2, 7, 0), // 0x06
    OpcodeInfo::new("RLC", 1, 4, CF), // 0x07
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x08
    OpcodeInfo::new("DAD B", 1, 10, CF), // 0x09
    OpcodeInfo::new("LDAX B", 1, 7, 0), // 0x0A
    OpcodeInfo::new("DCX B", 1, 5, 0), // 0x0B
    OpcodeInfo::new("INR C", 1, 5, INC_DEC).with_overflow(), // 0x0C
    OpcodeInfo::new("DCR C", 1, 5, INC_DEC).with_overflow(), // 0x0D
    OpcodeInfo::new("MVI C", 2, 7, 0), // 0x0E
    OpcodeInfo::new("RRC", 1, 4, CF), // 0x0F
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x10
    OpcodeInfo::new("LXI D", 3, 10, 0), // 0x11
    OpcodeInfo::new("STAX D", 1, 7, 0), // 0x12
    OpcodeInfo::new("INX D", 1, 5, 0), // 0x13
    OpcodeInfo::new("INR D", 1, 5, INC_DEC).with_overflow(), // 0x14
    OpcodeInfo::new("DCR D", 1, 5, INC_DEC).with_overflow(), // 0x15
    OpcodeInfo::new("MVI D", 2, 7, 0), // 0x16
    OpcodeInfo::new("RAL", 1, 4, CF), // 0x17
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x18
    OpcodeInfo::new("DAD D", 1, 10, CF), // 0x19
    OpcodeInfo::new("LDAX D", 1, 7, 0), // 0x1A
    OpcodeInfo::new("DCX D", 1, 5, 0), // 0x1B
    OpcodeInfo::new("INR E", 1, 5, INC_DEC).with_overflow(), // 0x1C
    OpcodeInfo::new("DCR E", 1, 5, INC_DEC).with_overflow(), // 0x1D
    OpcodeInfo::new("MVI E", 2, 7, 0), // 0x1E
    OpcodeInfo::new("RAR", 1, 4, CF), // 0x1F
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x20
    OpcodeInfo::new("LXI H", 3, 10, 0), // 0x21
    OpcodeInfo::new("SHLD", 3, 16, 0), // 0x22
    OpcodeInfo::new("INX H", 1, 5, 0), // 0x23
    OpcodeInfo::new("INR H", 1, 5, INC_DEC).with_overflow(), // 0x24
    OpcodeInfo::new("DCR H", 1, 5, INC_DEC).with_overflow(), // 0x25
    OpcodeInfo::new("MVI H", 2, 7, 0), // 0x26
    OpcodeInfo::new("DAA", 1, 4, ARITH).with_overflow(), // 0x27
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x28
    OpcodeInfo::new("DAD H", 1, 10, CF), // 0x29
    OpcodeInfo::new("LHLD", 3, 16, 0), // 0x2A
    OpcodeInfo::new("DCX H", 1, 5, 0), // 0x2B
    OpcodeInfo::new("INR L", 1, 5, INC_DEC).with_overflow(), // 0x2C
    OpcodeInfo::new("DCR L", 1, 5, INC_DEC).with_overflow(), // 0x2D
    OpcodeInfo::new("MVI L", 2, 7, 0), // 0x2E
    OpcodeInfo::new("CMA", 1, 4, 0), // 0x2F
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x30
    OpcodeInfo::new("LXI SP", 3, 10, 0), // 0x31
    OpcodeInfo::new("STA", 3, 13, 0), // 0x32
    OpcodeInfo::new("INX SP", 1, 5, 0), // 0x33
    OpcodeInfo::new("INR M", 1, 10, INC_DEC).with_overflow(), // 0x34
    OpcodeInfo::new("DCR M", 1, 10, INC_DEC).with_overflow(), // 0x35
    OpcodeInfo::new("MVI M", 2, 10, 0), // 0x36
    OpcodeInfo::new("STC", 1, 4, CF), // 0x37
    OpcodeInfo::new("*NOP", 1, 4, 0), // 0x38
    OpcodeInfo::new("DAD SP", 1, 10, CF), // 0x39
    OpcodeInfo::new("LDA", 3, 13, 0), // 0x3A
    OpcodeInfo::new("DCX SP", 1, 5, 0), // 0x3B
    OpcodeInfo::new("INR A", 1, 5, INC_DEC).with_overflow(), // 0x3C
    OpcodeInfo::new("DCR A", 1, 5, INC_DEC).with_overflow(), // 0x3D
    OpcodeInfo::new("MVI A", 2, 7, 0), // 0x3E
    OpcodeInfo::new("CMC", 1, 4, CF), // 0x3F
    OpcodeInfo::new("MOV B,B", 1, 5, 0), // 0x40
    OpcodeInfo::new("MOV B,C", 1, 5, 0), // 0x41
    OpcodeInfo::new("MOV B,D", 1, 5, 0), // 0x42
    OpcodeInfo::new("MOV B,E", 1, 5, 0), // 0x43
    OpcodeInfo::new("MOV B,H", 1, 5, 0), // 0x44
    OpcodeInfo::new("MOV B,L", 1, 5, 0), // 0x45
    OpcodeInfo::new("MOV B,M", 1, 7, 0), // 0x46
    OpcodeInfo::new("MOV B,A", 1, 5, 0), // 0x47
    OpcodeInfo::new("MOV C,B", 1, 5, 0), // 0x48
    OpcodeInfo::new("MOV C,C", 1, 5, 0), // 0x49
    OpcodeInfo::new("MOV C,D", 1, 5, 0), // 0x4A
    OpcodeInfo::new("MOV C,E", 1, 5, 0), // 0x4B
    OpcodeInfo::new("MOV C,H", 1, 5, 0), // 0x4C
    OpcodeInfo::new("MOV C,L", 1, 5, 0), // 0x4D
    OpcodeInfo::new("MOV C,M", 1, 7, 0), // 0x4E
    OpcodeInfo::new("MOV C,A", 1, 5, 0), // 0x4F
    OpcodeInfo::new("MOV D,B", 1, 5, 0), // 0x50
    OpcodeInfo::new("MOV D,C", 1, 5, 0), // 0x51
    OpcodeInfo::new("MOV D,D", 1, 5, 0), // 0x52
    OpcodeInfo::new("MOV D,E", 1, 5, 0), // 0x53
    OpcodeInfo::new("MOV D,H", 1, 5, 0), // 0x54
    OpcodeInfo::new("MOV D,L", 1, 5, 0), // 0x55
    OpcodeInfo::new("MOV D,M", 1, 7, 0), // 0x56
    OpcodeInfo::new("MOV D,A", 1, 5, 0), // 0x57
    OpcodeInfo::new("MOV E,B", 1, 5, 0), // 0x58
    OpcodeInfo::new("MOV E,C", 1, 5, 0), // 0x59
    OpcodeInfo::new("MOV E,D", 1, 5, 0), // 0x5A
    OpcodeInfo::new("MOV E,E", 1, 5, 0), // 0x5B
    OpcodeInfo::new("MOV E,H", 1, 5, 0), // 0x5C
    OpcodeInfo::new("MOV E,L", 1, 5, 0), // 0x5D
    OpcodeInfo::new("MOV E,M", 1, 7, 0), // 0x5E
    OpcodeInfo::new("MOV E,A", 1, 5, 0), // 0x5F
    OpcodeInfo::new("MOV H,B", 1, 5, 0), // 0x60
    OpcodeInfo::new("MOV H,C", 1, 5, 0), // 0x61
    OpcodeInfo::new("MOV H,D", 1, 5, 0), // 0x62
    OpcodeInfo::new("MOV H,E", 1, 5, 0), // 0x63
    OpcodeInfo::new("MOV H,H", 1, 5, 0), // 0x64
    OpcodeInfo::new("MOV H,L", 1, 5, 0), // 0x65
    OpcodeInfo::new("MOV H,M", 1, 7, 0), // 0x66
    OpcodeInfo::new("MOV H,A", 1, 5, 0), // 0x67
    OpcodeInfo::new("MOV L,B", 1, 5, 0), // 0x68
    OpcodeInfo::new("MOV L,C", 1, 5, 0), // 0x69
    OpcodeInfo::new("MOV L,D", 1, 5, 0), // 0x6A
    OpcodeInfo::new("MOV L,E", 1, 5, 0), // 0x6B
    OpcodeInfo::new("MOV L,H", 1, 5, 0), // 0x6C
    OpcodeInfo::new("MOV L,L", 1, 5, 0), // 0x6D
    OpcodeInfo::new("MOV L,M", 1, 7, 0), // 0x6E
    OpcodeInfo::new("MOV L,A", 1, 5, 0), // 0x6F
    OpcodeInfo::new("MOV M,B", 1, 7, 0), // 0x70
    OpcodeInfo::new("MOV M,C", 1, 7, 0), // 0x71
    OpcodeInfo::new("MOV M,D", 1, 7, 0), // 0x72
    OpcodeInfo::new("MOV M,E", 1, 7, 0), // 0x73
    OpcodeInfo::new("MOV M,H", 1, 7, 0), // 0x74
    OpcodeInfo::new("MOV M,L", 1, 7, 0), // 0x75
    OpcodeInfo::new("HLT", 1, 7, 0), // 0x76
    OpcodeInfo::new("MOV M,A", 1, 7, 0), // 0x77
    OpcodeInfo::new("MOV A,B", 1, 5, 0), // 0x78
    OpcodeInfo::new("MOV A,C", 1, 5, 0), // 0x79
    OpcodeInfo::new("MOV A,D", 1, 5, 0), // 0x7A
    OpcodeInfo::new("MOV A,E", 1, 5, 0), // 0x7B
    OpcodeInfo::new("MOV A,H", 1, 5, 0), // 0x7C
    OpcodeInfo::new("MOV A,L", 1, 5, 0), // 0x7D
    OpcodeInfo::new("MOV A,M", 1, 7, 0), // 0x7E
    OpcodeInfo::new("MOV A,A", 1, 5, 0), // 0x7F
    OpcodeInfo::new("ADD B", 1, 4, ARITH).with_overflow(), // 0x80
    OpcodeInfo::new("ADD C", 1, 4, ARITH).with_overflow(), // 0x81
    OpcodeInfo::new("ADD D", 1, 4, ARITH).with_overflow(), // 0x82
    OpcodeInfo::new("ADD E", 1, 4, ARITH).with_overflow(), // 0x83
    OpcodeInfo::new("ADD H", 1, 4, ARITH).with_overflow(), // 0x84
    OpcodeInfo::new("ADD L", 1, 4, ARITH).with_overflow(), // 0x85
    OpcodeInfo::new("ADD M", 1, 7, ARITH).with_overflow(), // 0x86
    OpcodeInfo::new("ADD A", 1, 4, ARITH).with_overflow(), // 0x87
    OpcodeInfo::new("ADC B", 1, 4, ARITH).with_overflow(), // 0x88
    OpcodeInfo::new("ADC C", 1, 4, ARITH).with_overflow(), // 0x89
    OpcodeInfo::new("ADC D", 1, 4, ARITH).with_overflow(), // 0x8A
    OpcodeInfo::new("ADC E", 1, 4, ARITH).with_overflow(), // 0x8B
    OpcodeInfo::new("ADC H", 1, 4, ARITH).with_overflow(), // 0x8C
    OpcodeInfo::new("ADC L", 1, 4, ARITH).with_overflow(), // 0x8D
    OpcodeInfo::new("ADC M", 1, 7, ARITH).with_overflow(), // 0x8E
    OpcodeInfo::new("ADC A", 1, 4, ARITH).with_overflow(), // 0x8F
    OpcodeInfo::new("SUB B", 1, 4, ARITH).with_overflow(), // 0x90
    OpcodeInfo::new("SUB C", 1, 4, ARITH).with_overflow(), // 0x91
    OpcodeInfo::new("SUB D", 1, 4, ARITH).with_overflow(), // 0x92
    OpcodeInfo::new("SUB E", 1, 4, ARITH).with_overflow(), // 0x93
    OpcodeInfo::new("SUB H", 1, 4, ARITH).with_overflow(), // 0x94
    OpcodeInfo::new("SUB L", 1, 4, ARITH).with_overflow(), // 0x95
    OpcodeInfo::new("SUB M", 1, 7, ARITH).with_overflow(), // 0x96
    OpcodeInfo::new("SUB A", 1, 4, ARITH).with_overflow(), // 0x97
    OpcodeInfo::new("SBB B", 1, 4, ARITH).with_overflow(), // 0x98
    OpcodeInfo::new("SBB C", 1, 4, ARITH).with_overflow(), // 0x99
    OpcodeInfo::new("SBB D", 1, 4, ARITH).with_overflow(), // 0x9A
    OpcodeInfo::new("SBB E", 1, 4, ARITH).with_overflow(), // 0x9B
    OpcodeInfo::new("SBB H", 1, 4, ARITH).with_overflow(), // 0x9C
    OpcodeInfo::new("SBB L", 1, 4, ARITH).with_overflow(), // 0x9D
    OpcodeInfo::new("SBB M", 1, 7, ARITH).with_overflow(), // 0x9E
    OpcodeInfo::new("SBB A", 1, 4, ARITH).with_overflow(), // 0x9F
    OpcodeInfo::new("ANA B", 1, 4, ARITH).with_overflow(), // 0xA0
    OpcodeInfo::new("ANA C", 1, 4, ARITH).with_overflow(), // 0xA1
    OpcodeInfo::new("ANA D", 1, 4, ARITH).with_overflow(), // 0xA2
    OpcodeInfo::new("ANA E", 1, 4, ARITH).with_overflow(), // 0xA3
    OpcodeInfo::new("ANA H", 1, 4, ARITH).with_overflow(), // 0xA4
    OpcodeInfo::new("ANA L", 1, 4, ARITH).with_overflow(), // 0xA5
    OpcodeInfo::new("ANA M", 1, 7, ARITH).with_overflow(), // 0xA6
    OpcodeInfo::new("ANA A", 1, 4, ARITH).with_overflow(), // 0xA7
    OpcodeInfo::new("XRA B", 1, 4, ARITH).with_overflow(), // 0xA8
    OpcodeInfo::new("XRA C", 1, 4, ARITH).with_overflow(), // 0xA9
    OpcodeInfo::new("XRA D", 1, 4, ARITH).with_overflow(), // 0xAA
    OpcodeInfo::new("XRA E", 1, 4, ARITH).with_overflow(), // 0xAB
    OpcodeInfo::new("XRA H", 1, 4, ARITH).with_overflow(), // 0xAC
    OpcodeInfo::new("XRA L", 1, 4, ARITH).with_overflow(), // 0xAD
    OpcodeInfo::new("XRA M", 1, 7, ARITH).with_overflow(), // 0xAE
    OpcodeInfo::new("XRA A", 1, 4, ARITH).with_overflow(), // 0xAF
    OpcodeInfo::new("ORA B", 1, 4, ARITH).with_overflow(), // 0xB0
    OpcodeInfo::new("ORA C", 1, 4, ARITH).with_overflow(), // 0xB1
    OpcodeInfo::new("ORA D", 1, 4, ARITH).with_overflow(), // 0xB2
    OpcodeInfo::new("ORA E", 1, 4, ARITH).with_overflow(), // 0xB3
    OpcodeInfo::new("ORA H", 1, 4, ARITH).with_overflow(), // 0xB4
    OpcodeInfo::new("ORA L", 1, 4, ARITH).with_overflow(), // 0xB5
    OpcodeInfo::new("ORA M", 1, 7, ARITH).with_overflow(), // 0xB6
    OpcodeInfo::new("ORA A", 1, 4, ARITH).with_overflow(), // 0xB7
    OpcodeInfo::new("CMP B", 1, 4, ARITH).with_overflow(), // 0xB8
    OpcodeInfo::new("CMP C", 1, 4, ARITH).with_overflow(), // 0xB9
    OpcodeInfo::new("CMP D", 1, 4, ARITH).with_overflow(), // 0xBA
    OpcodeInfo::new("CMP E", 1, 4, ARITH).with_overflow(), // 0xBB
    OpcodeInfo::new("CMP H", 1, 4, ARITH).with_overflow(), // 0xBC
    OpcodeInfo::new("CMP L", 1, 4, ARITH).with_overflow(), // 0xBD
    OpcodeInfo::new("CMP M", 1, 7, ARITH).with_overflow(), // 0xBE
    OpcodeInfo::new("CMP A", 1, 4, ARITH).with_overflow(), // 0xBF
    OpcodeInfo::conditional("RNZ", 1, 5, 11), // 0xC0
    OpcodeInfo::new("POP B", 1, 10, 0), // 0xC1
    OpcodeInfo::new("JNZ", 3, 10, 0), // 0xC2
    OpcodeInfo::new("JMP", 3, 10, 0), // 0xC3
    OpcodeInfo::conditional("CNZ", 3, 11, 17), // 0xC4
    OpcodeInfo::new("PUSH B", 1, 11, 0), // 0xC5
    OpcodeInfo::new("ADI", 2, 7, ARITH).with_overflow(), // 0xC6
    OpcodeInfo::new("RST 0", 1, 11, 0), // 0xC7
    OpcodeInfo::conditional("RZ", 1, 5, 11), // 0xC8
    OpcodeInfo::new("RET", 1, 10, 0), // 0xC9
    OpcodeInfo::new("JZ", 3, 10, 0), // 0xCA
    OpcodeInfo::new("*JMP", 3, 10, 0), // 0xCB
    OpcodeInfo::conditional("CZ", 3, 11, 17), // 0xCC
    OpcodeInfo::new("CALL", 3, 17, 0), // 0xCD
    OpcodeInfo::new("ACI", 2, 7, ARITH).with_overflow(), // 0xCE
    OpcodeInfo::new("RST 1", 1, 11, 0), // 0xCF
    OpcodeInfo::conditional("RNC", 1, 5, 11), // 0xD0
    OpcodeInfo::new("POP D", 1, 10, 0), // 0xD1
    OpcodeInfo::new("JNC", 3, 10, 0), // 0xD2
    OpcodeInfo::new("OUT", 2, 10, 0), // 0xD3
    OpcodeInfo::conditional("CNC", 3, 11, 17), // 0xD4
    OpcodeInfo::new("PUSH D", 1, 11, 0), // 0xD5
    OpcodeInfo::new("SUI", 2, 7, ARITH).with_overflow(), // 0xD6
    OpcodeInfo::new("RST 2", 1, 11, 0), // 0xD7
    OpcodeInfo::conditional("RC", 1, 5, 11), // 0xD8
    OpcodeInfo::new("*RET", 1, 10, 0), // 0xD9
    OpcodeInfo::new("JC", 3, 10, 0), // 0xDA
    OpcodeInfo::new("IN", 2, 10, 0), // 0xDB
    OpcodeInfo::conditional("CC", 3, 11, 17), // 0xDC
    OpcodeInfo::new("*CALL", 3, 17, 0), // 0xDD
    OpcodeInfo::new("SBI", 2, 7, ARITH).with_overflow(), // 0xDE
    OpcodeInfo::new("RST 3", 1, 11, 0), // 0xDF
    OpcodeInfo::conditional("RPO", 1, 5, 11), // 0xE0
    OpcodeInfo::new("POP H", 1, 10, 0), // 0xE1
    OpcodeInfo::new("JPO", 3, 10, 0), // 0xE2
    OpcodeInfo::new("XTHL", 1, 18, 0), // 0xE3
    OpcodeInfo::conditional("CPO", 3, 11, 17), // 0xE4
    OpcodeInfo::new("PUSH H", 1, 11, 0), // 0xE5
    OpcodeInfo::new("ANI", 2, 7, ARITH).with_overflow(), // 0xE6
    OpcodeInfo::new("RST 4", 1, 11, 0), // 0xE7
    OpcodeInfo::conditional("RPE", 1, 5, 11), // 0xE8
    OpcodeInfo::new("PCHL", 1, 5, 0), // 0xE9
    OpcodeInfo::new("JPE", 3, 10, 0), // 0xEA
    OpcodeInfo::new("XCHG", 1, 5, 0), // 0xEB
    OpcodeInfo::conditional("CPE", 3, 11, 17), // 0xEC
    OpcodeInfo::new("*CALL", 3, 17, 0), // 0xED
    OpcodeInfo::new("XRI", 2, 7, ARITH).with_overflow(), // 0xEE
    OpcodeInfo::new("RST 5", 1, 11, 0), // 0xEF
    OpcodeInfo::conditional("RP", 1, 5, 11), // 0xF0
    OpcodeInfo::new("POP PSW", 1, 10, ARITH), // 0xF1
    OpcodeInfo::new("JP", 3, 10, 0), // 0xF2
    OpcodeInfo::new("DI", 1, 4, IF), // 0xF3
    OpcodeInfo::conditional("CP", 3, 11, 17), // 0xF4
    OpcodeInfo::new("PUSH PSW", 1, 11, 0), // 0xF5
    OpcodeInfo::new("ORI", 2, 7, ARITH).with_overflow(), // 0xF6
    OpcodeInfo::new("RST 6", 1, 11, 0), // 0xF7
    OpcodeInfo::conditional("RM", 1, 5, 11), // 0xF8
    OpcodeInfo::new("SPHL", 1, 5, 0), // 0xF9
    OpcodeInfo::new("JM", 3, 10, 0), // 0xFA
    OpcodeInfo::new("EI", 1, 4, IF), // 0xFB
    OpcodeInfo::conditional("CM", 3, 11, 17), // 0xFC
    OpcodeInfo::new("*CALL", 3, 17, 0), // 0xFD
    OpcodeInfo::new("CPI", 2, 7, ARITH).with_overflow(), // 0xFE
    OpcodeInfo::new("RST 7", 1, 11, 0), // 0xFF
];

/// Look up an opcode.
#[must_use]
pub fn opcode(op: u8) -> &'static OpcodeInfo {
    &OPCODES[usize::from(op)]
}
