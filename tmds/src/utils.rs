//! Utilities.

use arrayvec::ArrayVec;

/// Returns the bit of `value` at `position` (0 is the least significant bit).
///
/// Positions beyond the width of `u32` read as 0.
pub const fn read_bit(value: u32, position: u32) -> u32 {
    match value.checked_shr(position) {
        Some(shifted) => shifted & 1,
        None => 0,
    }
}

/// Returns `value` with the bit at `position` replaced by `bit & 1`. Other bits are unchanged.
///
/// Positions beyond the width of `u32` leave `value` unchanged.
pub const fn write_bit(value: u32, position: u32, bit: u32) -> u32 {
    let mask = match 1u32.checked_shl(position) {
        Some(mask) => mask,
        None => return value,
    };
    if bit & 1 == 1 {
        value | mask
    } else {
        value & !mask
    }
}

/// Returns a mask covering the low `width` bits.
pub const fn low_mask(width: u32) -> u32 {
    match 1u32.checked_shl(width) {
        Some(bit) => bit - 1,
        None => u32::MAX,
    }
}

/// Counts the set bits among the low `width` bits of `value`.
pub const fn pop_count(value: u32, width: u32) -> u32 { (value & low_mask(width)).count_ones() }

/// Returns bit-represented value of an integer, least significant bit first.
pub fn u32_to_bits<const N: usize>(value: u32) -> [bool; N] {
    (0..N)
        .map(|i| if i >= u32::BITS as usize { false } else { (value & (1 << i)) != 0 })
        .collect::<ArrayVec<bool, N>>()
        .into_inner()
        .unwrap()
}

/// Returns the sized Verilog binary literal of `value`, e.g. `10'b0100000000`.
pub fn bin_literal(width: u32, value: u32) -> String {
    format!("{}'b{:0width$b}", width, value & low_mask(width), width = width as usize)
}

/// Indents every line in the string.
pub fn indent(str: String, indent: usize) -> String {
    str.lines().map(|l| format!("{}{}", " ".repeat(indent), l)).collect::<Vec<_>>().join("\n")
}
