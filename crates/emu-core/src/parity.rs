//! Byte parity lookup.

/// Parity of every byte value: 1 where the number of set bits is even.
///
/// Built at compile time so the arithmetic path never counts bits.
pub static PARITY: [u8; 256] = build_parity();

const fn build_parity() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = if (i as u8).count_ones() % 2 == 0 { 1 } else { 0 };
        i += 1;
    }
    table
}

/// Parity bit for a byte (1 if even number of 1 bits).
#[must_use]
#[inline]
pub fn parity_bit(value: u8) -> u8 {
    PARITY[value as usize]
}
