//! ALU operations for the 8080.
//!
//! Each primitive returns its result and leaves the flag outcome in the
//! result registers; nothing here assembles a status word.

use emu_core::{ResultRegisters, Size};

/// Add with optional carry in.
pub fn adc(r: &mut ResultRegisters, a: u8, b: u8, carry: bool) -> u8 {
    let (dst, src) = (u32::from(a), u32::from(b));
    let value = dst + src + u32::from(carry);
    r.set_arith(dst, src, value, Size::Byte);
    value as u8
}

pub fn add(r: &mut ResultRegisters, a: u8, b: u8) -> u8 {
    adc(r, a, b, false)
}

/// Subtract with optional borrow in.
///
/// The 8080 subtracts by adding the complement, so AC reports a carry out
/// of bit 3 of that addition: it is set when there is no nibble borrow.
pub fn sbb(r: &mut ResultRegisters, a: u8, b: u8, borrow: bool) -> u8 {
    let (dst, src) = (u32::from(a), u32::from(b));
    let value = dst.wrapping_sub(src).wrapping_sub(u32::from(borrow));
    r.set_arith(dst, src, value, Size::Byte);
    r.set_aux(!r.af());
    value as u8
}

pub fn sub(r: &mut ResultRegisters, a: u8, b: u8) -> u8 {
    sbb(r, a, b, false)
}

/// Compare: subtract for the flags only.
pub fn cmp(r: &mut ResultRegisters, a: u8, b: u8) {
    sub(r, a, b);
}

/// AND. AC takes the OR of bit 3 of both operands.
pub fn ana(r: &mut ResultRegisters, a: u8, b: u8) -> u8 {
    let result = a & b;
    r.set_logic(u32::from(result), Size::Byte);
    r.set_aux((a | b) & 0x08 != 0);
    result
}

pub fn xra(r: &mut ResultRegisters, a: u8, b: u8) -> u8 {
    let result = a ^ b;
    r.set_logic(u32::from(result), Size::Byte);
    result
}

pub fn ora(r: &mut ResultRegisters, a: u8, b: u8) -> u8 {
    let result = a | b;
    r.set_logic(u32::from(result), Size::Byte);
    result
}

/// Increment; carry is preserved.
pub fn inr(r: &mut ResultRegisters, a: u8) -> u8 {
    let carry = r.cf();
    let result = add(r, a, 1);
    r.set_carry(carry);
    result
}

/// Decrement; carry is preserved.
pub fn dcr(r: &mut ResultRegisters, a: u8) -> u8 {
    let carry = r.cf();
    let result = sub(r, a, 1);
    r.set_carry(carry);
    result
}

/// 16-bit add into HL. Only carry changes.
pub fn dad(r: &mut ResultRegisters, hl: u16, rp: u16) -> u16 {
    let value = u32::from(hl) + u32::from(rp);
    r.set_carry(value > 0xFFFF);
    value as u16
}

/// Rotate left circular (bit 7 -> carry and bit 0).
pub fn rlc(r: &mut ResultRegisters, a: u8) -> u8 {
    r.set_carry(a & 0x80 != 0);
    a.rotate_left(1)
}

/// Rotate right circular (bit 0 -> carry and bit 7).
pub fn rrc(r: &mut ResultRegisters, a: u8) -> u8 {
    r.set_carry(a & 0x01 != 0);
    a.rotate_right(1)
}

/// Rotate left through carry.
pub fn ral(r: &mut ResultRegisters, a: u8) -> u8 {
    let result = (a << 1) | u8::from(r.cf());
    r.set_carry(a & 0x80 != 0);
    result
}

/// Rotate right through carry.
pub fn rar(r: &mut ResultRegisters, a: u8) -> u8 {
    let result = (a >> 1) | (u8::from(r.cf()) << 7);
    r.set_carry(a & 0x01 != 0);
    result
}

pub fn stc(r: &mut ResultRegisters) {
    r.set_carry(true);
}

pub fn cmc(r: &mut ResultRegisters) {
    r.set_carry(!r.cf());
}

/// Decimal adjust accumulator.
pub fn daa(r: &mut ResultRegisters, a: u8) -> u8 {
    let lsb = a & 0x0F;
    let msb = a >> 4;
    let mut carry = r.cf();
    let mut correction = 0u8;
    if r.af() || lsb > 9 {
        correction |= 0x06;
    }
    if carry || msb > 9 || (msb >= 9 && lsb > 9) {
        correction |= 0x60;
        carry = true;
    }
    let result = add(r, a, correction);
    r.set_carry(carry);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::ResultFlags;

    fn fresh() -> ResultRegisters {
        ResultRegisters::default()
    }

    #[test]
    fn add_carry_out_of_bit_7() {
        let mut r = fresh();
        assert_eq!(add(&mut r, 0xF0, 0x20), 0x10);
        assert_eq!(
            r.flags(),
            ResultFlags {
                cf: true,
                pf: false,
                af: false,
                zf: false,
                sf: false,
                of: false,
            }
        );
    }

    #[test]
    fn adc_uses_carry_in() {
        let mut r = fresh();
        assert_eq!(adc(&mut r, 0x0F, 0x00, true), 0x10);
        assert!(r.af());
        assert!(!r.cf());
    }

    #[test]
    fn sub_reports_borrow_and_8080_aux() {
        let mut r = fresh();
        assert_eq!(sub(&mut r, 0x3E, 0x3E), 0x00);
        assert!(r.zf());
        assert!(!r.cf());
        assert!(r.af()); // no nibble borrow
        assert!(r.pf());

        assert_eq!(sub(&mut r, 0x10, 0x01), 0x0F);
        assert!(!r.af()); // nibble borrow
        assert!(!r.cf());

        assert_eq!(sub(&mut r, 0x00, 0x01), 0xFF);
        assert!(r.cf());
        assert!(r.sf());
    }

    #[test]
    fn cmp_leaves_flags_only() {
        let mut r = fresh();
        cmp(&mut r, 0x0A, 0x05);
        assert!(!r.cf());
        assert!(!r.zf());
        cmp(&mut r, 0x02, 0x05);
        assert!(r.cf());
        assert!(r.sf());
    }

    #[test]
    fn logic_ops() {
        let mut r = fresh();
        stc(&mut r);
        assert_eq!(ana(&mut r, 0xFC, 0x0F), 0x0C);
        assert!(!r.cf());
        assert!(r.af());
        assert!(r.pf());

        assert_eq!(ana(&mut r, 0xF0, 0x30), 0x30);
        assert!(!r.af());

        assert_eq!(xra(&mut r, 0x5C, 0x5C), 0x00);
        assert!(r.zf());
        assert!(r.pf());
        assert!(!r.af());

        assert_eq!(ora(&mut r, 0x80, 0x01), 0x81);
        assert!(r.sf());
        assert!(!r.of());
    }

    #[test]
    fn inr_dcr_preserve_carry() {
        let mut r = fresh();
        stc(&mut r);
        assert_eq!(inr(&mut r, 0xFF), 0x00);
        assert!(r.zf());
        assert!(r.cf());
        assert!(r.af());

        cmc(&mut r);
        assert_eq!(inr(&mut r, 0xFF), 0x00);
        assert!(!r.cf());

        assert_eq!(dcr(&mut r, 0x10), 0x0F);
        assert!(!r.af());
        assert!(!r.cf());
        assert_eq!(dcr(&mut r, 0x11), 0x10);
        assert!(r.af());
    }

    #[test]
    fn inr_overflow_is_tracked_internally() {
        let mut r = fresh();
        assert_eq!(inr(&mut r, 0x7F), 0x80);
        assert!(r.of());
        assert!(r.sf());
    }

    #[test]
    fn dad_touches_only_carry() {
        let mut r = fresh();
        xra(&mut r, 0x00, 0x00);
        let before = r.flags();
        assert_eq!(dad(&mut r, 0xFFFF, 0x0002), 0x0001);
        assert_eq!(r.flags(), ResultFlags { cf: true, ..before });
        assert_eq!(dad(&mut r, 0x1000, 0x0234), 0x1234);
        assert_eq!(r.flags(), before);
    }

    #[test]
    fn rotates() {
        let mut r = fresh();
        assert_eq!(rlc(&mut r, 0xF2), 0xE5);
        assert!(r.cf());
        assert_eq!(rrc(&mut r, 0xF2), 0x79);
        assert!(!r.cf());

        assert_eq!(ral(&mut r, 0xB5), 0x6A);
        assert!(r.cf());
        assert_eq!(rar(&mut r, 0x6A), 0xB5);
        assert!(!r.cf());
    }

    #[test]
    fn daa_bcd_correction() {
        let mut r = fresh();
        assert_eq!(daa(&mut r, 0x9B), 0x01);
        assert!(r.cf());
        assert!(r.af());

        // 0x38 + 0x45 = 0x7D -> 83
        let sum = add(&mut r, 0x38, 0x45);
        assert_eq!(daa(&mut r, sum), 0x83);
        assert!(!r.cf());
    }
}
