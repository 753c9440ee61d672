//! Deferred arithmetic flags.
//!
//! Arithmetic primitives never write CF/PF/AF/ZF/SF/OF. They leave the raw
//! outcome in three result registers and the flags are derived from those
//! registers only when something reads the status word:
//!
//! ```text
//! CF: zero_carry & size
//! PF: parity(parity_sign & 0xFF)
//! AF: (parity_sign ^ aux_overflow) & 0x10
//! ZF: zero_carry & (size - 1)              (nonzero means ZF clear)
//! SF: parity_sign & (size >> 1)
//! OF: (parity_sign ^ aux_overflow ^ (parity_sign >> 1)) & (size >> 1)
//! ```
//!
//! `size` is 0x100 for byte operations and 0x10000 for word operations, so
//! one formula set serves both widths.

use crate::parity::parity_bit;

/// Size mask for byte arithmetic (after subtracting 1).
pub const SIZE_BYTE: u32 = 0x0_0100;
/// Size mask for word arithmetic (after subtracting 1).
pub const SIZE_WORD: u32 = 0x1_0000;

/// Toggles AF when XOR-ed into `aux_overflow`.
pub const AUXOVF_AF: u32 = 0x0_0010;
/// Toggles OF at either width when XOR-ed into `aux_overflow`.
pub const AUXOVF_OF: u32 = 0x0_8080;
/// Carry position for byte and word results.
pub const AUXOVF_CF: u32 = 0x1_0100;

/// Operand width of the last arithmetic operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    #[default]
    Byte,
    Word,
}

impl Size {
    /// The carry-out bit for this width (`SIZE_BYTE` or `SIZE_WORD`).
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => SIZE_BYTE,
            Self::Word => SIZE_WORD,
        }
    }

    /// The sign bit for this width.
    #[must_use]
    pub const fn sign(self) -> u32 {
        self.mask() >> 1
    }
}

/// The six arithmetic flags as plain booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFlags {
    pub cf: bool,
    pub pf: bool,
    pub af: bool,
    pub zf: bool,
    pub sf: bool,
    pub of: bool,
}

/// Result registers from which the arithmetic flags are reconstructed.
///
/// The execution loop is the only writer. Readers are pure: calling them
/// twice without an intervening write always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRegisters {
    pub zero_carry: u32,
    pub parity_sign: u32,
    pub aux_overflow: u32,
    pub size: Size,
}

impl Default for ResultRegisters {
    fn default() -> Self {
        Self::seeded(ResultFlags::default())
    }
}

impl ResultRegisters {
    /// Build registers that read back exactly the given flags.
    ///
    /// The registers are always seeded at byte width.
    #[must_use]
    pub fn seeded(flags: ResultFlags) -> Self {
        let mut zero_carry = 0;
        if flags.cf {
            zero_carry |= AUXOVF_CF;
        }
        if !flags.zf {
            zero_carry |= 0x01;
        }

        let mut parity_sign = if flags.sf { 0x80 } else { 0 };
        if (parity_bit(parity_sign as u8) != 0) != flags.pf {
            parity_sign |= 0x01;
        }

        // Start with AF and OF both clear, then toggle what was asked for.
        let mut aux_overflow = parity_sign;
        if flags.af {
            aux_overflow ^= AUXOVF_AF;
        }
        if flags.of {
            aux_overflow ^= AUXOVF_OF;
        }

        Self {
            zero_carry,
            parity_sign,
            aux_overflow,
            size: Size::Byte,
        }
    }

    /// Record an addition or subtraction.
    ///
    /// `value` is the unmasked result (`dst + src`, or `dst - src` with
    /// wrapping), so carry and borrow land above the operand width.
    pub fn set_arith(&mut self, dst: u32, src: u32, value: u32, size: Size) {
        self.zero_carry = value;
        self.parity_sign = value;
        self.aux_overflow = dst ^ src;
        self.size = size;
    }

    /// Record a logical result: CF, AF and OF read clear.
    pub fn set_logic(&mut self, value: u32, size: Size) {
        let value = value & (size.mask() - 1);
        self.zero_carry = value;
        self.parity_sign = value;
        self.aux_overflow = value;
        self.size = size;
    }

    /// Force CF without disturbing the other flags.
    pub fn set_carry(&mut self, carry: bool) {
        if self.cf() != carry {
            self.zero_carry ^= self.size.mask();
        }
    }

    /// Force AF without disturbing the other flags.
    pub fn set_aux(&mut self, aux: bool) {
        if self.af() != aux {
            self.aux_overflow ^= AUXOVF_AF;
        }
    }

    /// Force OF without disturbing the other flags.
    pub fn set_overflow(&mut self, overflow: bool) {
        if self.of() != overflow {
            self.aux_overflow ^= AUXOVF_OF;
        }
    }

    #[must_use]
    #[inline]
    pub fn cf(&self) -> bool {
        self.zero_carry & self.size.mask() != 0
    }

    #[must_use]
    #[inline]
    pub fn pf(&self) -> bool {
        parity_bit((self.parity_sign & 0xFF) as u8) != 0
    }

    #[must_use]
    #[inline]
    pub fn af(&self) -> bool {
        (self.parity_sign ^ self.aux_overflow) & AUXOVF_AF != 0
    }

    /// True when the last result was zero.
    #[must_use]
    #[inline]
    pub fn zf(&self) -> bool {
        self.zero_carry & (self.size.mask() - 1) == 0
    }

    #[must_use]
    #[inline]
    pub fn sf(&self) -> bool {
        self.parity_sign & self.size.sign() != 0
    }

    #[must_use]
    #[inline]
    pub fn of(&self) -> bool {
        (self.parity_sign ^ self.aux_overflow ^ (self.parity_sign >> 1)) & self.size.sign() != 0
    }

    /// Materialise all six flags.
    #[must_use]
    pub fn flags(&self) -> ResultFlags {
        ResultFlags {
            cf: self.cf(),
            pf: self.pf(),
            af: self.af(),
            zf: self.zf(),
            sf: self.sf(),
            of: self.of(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs(zero_carry: u32, parity_sign: u32, aux_overflow: u32, size: Size) -> ResultRegisters {
        ResultRegisters {
            zero_carry,
            parity_sign,
            aux_overflow,
            size,
        }
    }

    #[test]
    fn zero_flag_boundary_at_byte_width() {
        assert!(regs(0x100, 0, 0, Size::Byte).zf());
        assert!(!regs(0x1FF, 0, 0, Size::Byte).zf());
        assert!(regs(0x1_0000, 0, 0, Size::Word).zf());
        assert!(!regs(0x1_0100, 0, 0, Size::Word).zf());
    }

    #[test]
    fn readers_match_raw_formulas() {
        let samples = [
            0u32, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0xFF, 0x100, 0x1FF, 0x7FFF, 0x8000, 0xFFFF,
            0x1_0000, 0x1_8080, 0xFFFF_FFFF, 0x1234_5678,
        ];
        for size in [Size::Byte, Size::Word] {
            let mask = size.mask();
            for &zc in &samples {
                for &ps in &samples {
                    for &ao in &samples {
                        let r = regs(zc, ps, ao, size);
                        let ctx = format!("zc={zc:#X} ps={ps:#X} ao={ao:#X} size={mask:#X}");
                        assert_eq!(r.cf(), zc & mask != 0, "CF {ctx}");
                        assert_eq!(r.pf(), (ps & 0xFF).count_ones() % 2 == 0, "PF {ctx}");
                        assert_eq!(r.af(), (ps ^ ao) & 0x10 != 0, "AF {ctx}");
                        assert_eq!(r.zf(), zc & (mask - 1) == 0, "ZF {ctx}");
                        assert_eq!(r.sf(), ps & (mask >> 1) != 0, "SF {ctx}");
                        assert_eq!(r.of(), (ps ^ ao ^ (ps >> 1)) & (mask >> 1) != 0, "OF {ctx}");
                        assert_eq!(r.flags(), r.flags(), "idempotent read {ctx}");
                    }
                }
            }
        }
    }

    #[test]
    fn byte_add_with_carry_out() {
        // 0xC8 + 0x64 = 0x12C -> 0x2C, carry out of bit 7
        let (dst, src) = (0xC8u32, 0x64u32);
        let mut r = ResultRegisters::default();
        r.set_arith(dst, src, dst + src, Size::Byte);

        assert!(r.cf());
        assert!(!r.zf());
        assert!(!r.sf());
        assert!(!r.pf()); // 0x2C has three bits set
        assert!(!r.af()); // 0x8 + 0x4 stays inside the low nibble
        assert!(!r.of());
    }

    #[test]
    fn byte_add_nibble_carry() {
        let mut r = ResultRegisters::default();
        r.set_arith(0x0F, 0x01, 0x10, Size::Byte);
        assert!(r.af());
        assert!(!r.cf());

        r.set_arith(0x02, 0x03, 0x05, Size::Byte);
        assert!(!r.af());
    }

    #[test]
    fn byte_add_signed_overflow() {
        let mut r = ResultRegisters::default();
        r.set_arith(0x7F, 0x01, 0x80, Size::Byte);
        assert!(r.of());
        assert!(r.sf());
        assert!(!r.cf());

        r.set_arith(0xFF, 0x01, 0x100, Size::Byte);
        assert!(!r.of());
        assert!(r.zf());
        assert!(r.cf());
    }

    #[test]
    fn byte_sub_borrow() {
        let mut r = ResultRegisters::default();
        r.set_arith(0x00, 0x01, 0u32.wrapping_sub(1), Size::Byte);
        assert!(r.cf());
        assert!(r.af());
        assert!(r.sf());
        assert!(!r.zf());
        assert!(!r.of());

        r.set_arith(0x80, 0x01, 0x7F, Size::Byte);
        assert!(r.of());
        assert!(!r.cf());
    }

    #[test]
    fn word_add() {
        let mut r = ResultRegisters::default();
        r.set_arith(0xFFFF, 0x0001, 0x1_0000, Size::Word);
        assert!(r.cf());
        assert!(r.zf());
        assert!(!r.sf());

        r.set_arith(0x7FFF, 0x0001, 0x8000, Size::Word);
        assert!(r.of());
        assert!(r.sf());
        assert!(!r.cf());
    }

    #[test]
    fn logic_clears_carry_aux_overflow() {
        let mut r = ResultRegisters::seeded(ResultFlags {
            cf: true,
            af: true,
            of: true,
            ..ResultFlags::default()
        });
        r.set_logic(0x81, Size::Byte);
        assert!(!r.cf());
        assert!(!r.af());
        assert!(!r.of());
        assert!(r.sf());
        assert!(r.pf());
    }

    #[test]
    fn seeding_reproduces_every_combination() {
        for bits in 0u8..64 {
            let flags = ResultFlags {
                cf: bits & 0x01 != 0,
                pf: bits & 0x02 != 0,
                af: bits & 0x04 != 0,
                zf: bits & 0x08 != 0,
                sf: bits & 0x10 != 0,
                of: bits & 0x20 != 0,
            };
            assert_eq!(ResultRegisters::seeded(flags).flags(), flags, "{flags:?}");
        }
    }

    #[test]
    fn forcing_one_flag_leaves_the_rest() {
        for size in [Size::Byte, Size::Word] {
            let mut r = ResultRegisters::default();
            r.set_arith(0x7F, 0x01, 0x80, size);
            let before = r.flags();

            r.set_carry(!before.cf);
            assert_eq!(r.flags(), ResultFlags { cf: !before.cf, ..before });
            r.set_carry(before.cf);

            r.set_aux(!before.af);
            assert_eq!(r.flags(), ResultFlags { af: !before.af, ..before });
            r.set_aux(before.af);

            r.set_overflow(!before.of);
            assert_eq!(r.flags(), ResultFlags { of: !before.of, ..before });
            r.set_overflow(before.of);

            assert_eq!(r.flags(), before);
        }
    }

    #[test]
    fn default_reads_all_clear() {
        assert_eq!(ResultRegisters::default().flags(), ResultFlags::default());
    }
}
