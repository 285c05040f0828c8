//! TMDS 8b/10b symbol encoder.
//!
//! Stage 1 chains the data bits with XOR or XNOR to minimize transitions, stage 2 conditionally inverts the
//! chained word to keep the line DC-balanced.

use std::fmt;

use static_assertions::const_assert;

use crate::utils::*;

/// Width of a data byte.
pub const DATA_WIDTH: u32 = 8;

/// Width of an encoded symbol.
pub const SYMBOL_WIDTH: u32 = 10;

/// Bit recording the chaining rule: 1 for XOR, 0 for XNOR.
pub const CHAIN_BIT: u32 = 8;

/// Bit recording that the payload was inverted.
pub const INVERT_BIT: u32 = 9;

/// Number of set payload bits of a balanced word.
const BALANCED: u32 = DATA_WIDTH / 2;

const_assert!(INVERT_BIT < SYMBOL_WIDTH);
const_assert!(SYMBOL_WIDTH <= u16::BITS);

/// Running DC-balance preference of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiasHint {
    /// The line has an excess of ones; prefer symbols with fewer ones.
    FavorFewerOnes,

    /// The line has an excess of zeros; prefer symbols with more ones.
    FavorMoreOnes,
}

impl BiasHint {
    /// Enumeration order used to build tables.
    pub const ALL: [BiasHint; 2] = [BiasHint::FavorMoreOnes, BiasHint::FavorFewerOnes];

    /// Returns the value of the `bias` input of generated encoders.
    pub fn as_bit(self) -> u32 {
        match self {
            BiasHint::FavorFewerOnes => 1,
            BiasHint::FavorMoreOnes => 0,
        }
    }
}

/// Balance of a chained 8-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disparity {
    /// Exactly four ones.
    Balanced,

    /// More than four ones.
    ExcessOnes,

    /// Fewer than four ones.
    ExcessZeros,
}

impl Disparity {
    /// Classifies the low 8 bits of `word`.
    pub fn of(word: u32) -> Self {
        match pop_count(word, DATA_WIDTH) {
            BALANCED => Disparity::Balanced,
            n if n > BALANCED => Disparity::ExcessOnes,
            _ => Disparity::ExcessZeros,
        }
    }
}

/// 10-bit TMDS symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u16);

impl Symbol {
    /// Creates a symbol from the low 10 bits of `bits`.
    pub fn new(bits: u16) -> Self { Self(bits & low_mask(SYMBOL_WIDTH) as u16) }

    /// Raw 10-bit value.
    pub fn bits(self) -> u16 { self.0 }

    /// Transition-encoded payload, possibly inverted.
    pub fn payload(self) -> u8 { (self.0 & 0xFF) as u8 }

    /// Returns `true` if the payload was chained with XOR.
    pub fn is_xor(self) -> bool { read_bit(self.0.into(), CHAIN_BIT) == 1 }

    /// Returns `true` if the payload was inverted.
    pub fn is_inverted(self) -> bool { read_bit(self.0.into(), INVERT_BIT) == 1 }

    /// Sized Verilog literal of the symbol.
    pub fn to_literal(self) -> String { bin_literal(SYMBOL_WIDTH, self.0.into()) }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:010b}", self.0) }
}

/// Chains the data bits: `q[0] = d[0]`, `q[i] = q[i-1] ^ d[i] ^ xnor`.
fn chain(data: u32, xnor: bool) -> u32 {
    let bits = u32_to_bits::<8>(data);
    (1..DATA_WIDTH).fold(u32::from(bits[0]), |q, i| {
        let bit = read_bit(q, i - 1) ^ u32::from(bits[i as usize]) ^ u32::from(xnor);
        write_bit(q, i, bit)
    })
}

/// Encodes `byte` under `bias` and returns it with the resulting symbol.
pub fn encode(byte: u8, bias: BiasHint) -> (u8, Symbol) {
    let data = u32::from(byte);
    let ones = pop_count(data, DATA_WIDTH);
    let xnor = ones > BALANCED || (ones == BALANCED && read_bit(data, 0) == 0);

    let q = chain(data, xnor);
    let chain_bit = u32::from(!xnor);

    let (invert, inverted) = match (Disparity::of(q), bias) {
        (Disparity::Balanced, _) => (chain_bit ^ 1, chain_bit == 0),
        (Disparity::ExcessOnes, BiasHint::FavorFewerOnes) => (1, true),
        (Disparity::ExcessZeros, BiasHint::FavorMoreOnes) => (1, true),
        (_, _) => (0, false),
    };
    let payload = if inverted { q ^ 0xFF } else { q };

    let symbol = write_bit(write_bit(payload, CHAIN_BIT, chain_bit), INVERT_BIT, invert);
    (byte, Symbol::new(symbol as u16))
}

/// Recovers the data byte of `symbol` by undoing the inversion and then the chaining.
///
/// Every 10-bit value decodes to some byte; use [`crate::Table::decode`] to tell valid symbols apart.
pub fn decode(symbol: Symbol) -> u8 {
    let q = if symbol.is_inverted() { u32::from(symbol.payload()) ^ 0xFF } else { u32::from(symbol.payload()) };
    let xnor = u32::from(!symbol.is_xor());

    let data = (1..DATA_WIDTH)
        .fold(read_bit(q, 0), |data, i| write_bit(data, i, read_bit(q, i) ^ read_bit(q, i - 1) ^ xnor));
    data as u8
}
