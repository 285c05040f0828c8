//! Property-based tests for the TMDS encoder and its table.
//!
//! Properties are checked against the full table built by `build_table`, so every symbol the generated decoder
//! accepts is covered.

use std::collections::HashSet;

use proptest::prelude::*;
use tmds::{build_table, decode, encode, pop_count, BiasHint, Decoded, Disparity, Symbol, TABLE_SIZE};

fn bias() -> impl Strategy<Value = BiasHint> {
    prop_oneof![Just(BiasHint::FavorFewerOnes), Just(BiasHint::FavorMoreOnes)]
}

/// Number of transitions between adjacent payload bits.
fn transitions(symbol: Symbol) -> u32 {
    let payload = u32::from(symbol.payload());
    (payload ^ (payload >> 1)) & 0x7F
}

// =============================================================================
// Encoder properties
// =============================================================================

proptest! {
    /// decode(encode(b, h)) == b
    #[test]
    fn prop_decode_inverts_encode(byte in any::<u8>(), bias in bias()) {
        let (data, symbol) = encode(byte, bias);
        prop_assert_eq!(data, byte);
        prop_assert_eq!(decode(symbol), byte);
    }

    /// Disparity correction never overshoots.
    #[test]
    fn prop_correction_direction(byte in any::<u8>(), bias in bias()) {
        let (_, symbol) = encode(byte, bias);
        let ones = pop_count(symbol.payload().into(), 8);
        match bias {
            BiasHint::FavorFewerOnes => {
                prop_assert!(ones <= 4, "{} has {} ones", symbol, ones);
            }
            BiasHint::FavorMoreOnes => {
                prop_assert!(ones >= 4, "{} has {} ones", symbol, ones);
            }
        }
    }

    /// Balanced payloads are the only ones that ignore the bias.
    #[test]
    fn prop_bias_collapse_iff_balanced(byte in any::<u8>()) {
        let (_, fewer) = encode(byte, BiasHint::FavorFewerOnes);
        let (_, more) = encode(byte, BiasHint::FavorMoreOnes);
        let balanced = Disparity::of(fewer.payload().into()) == Disparity::Balanced;
        prop_assert_eq!(fewer == more, balanced);
    }

    /// The payload has at most four transitions.
    #[test]
    fn prop_transitions_bounded(byte in any::<u8>(), bias in bias()) {
        let (_, symbol) = encode(byte, bias);
        prop_assert!(transitions(symbol).count_ones() <= 4);
    }

    /// Encoding is deterministic.
    #[test]
    fn prop_encode_deterministic(byte in any::<u8>(), bias in bias()) {
        prop_assert_eq!(encode(byte, bias), encode(byte, bias));
    }
}

// =============================================================================
// Table properties
// =============================================================================

#[test]
fn table_is_complete() {
    let table = build_table().unwrap();
    assert_eq!(table.len(), TABLE_SIZE);

    let pairs = table.iter().map(|entry| (entry.byte, entry.symbol)).collect::<HashSet<_>>();
    assert_eq!(pairs.len(), TABLE_SIZE);

    let bytes = table.iter().map(|entry| entry.byte).collect::<HashSet<_>>();
    assert_eq!(bytes.len(), 256);
}

#[test]
fn table_round_trips() {
    let table = build_table().unwrap();
    for entry in table.iter() {
        assert_eq!(table.decode(entry.symbol), Decoded { out: entry.byte, error: false });
    }
}

#[test]
fn table_collapses_balanced_payloads() {
    let table = build_table().unwrap();
    let collapsed = (0..=u8::MAX)
        .filter(|&byte| encode(byte, BiasHint::FavorFewerOnes) == encode(byte, BiasHint::FavorMoreOnes))
        .count();
    assert_eq!(collapsed, 52);
    assert_eq!(table.len(), 2 * 256 - collapsed);
}

#[test]
fn balanced_bytes_do_not_always_collapse() {
    // 0x55 chains to a balanced payload, 0x0F does not.
    assert_eq!(encode(0x55, BiasHint::FavorFewerOnes), encode(0x55, BiasHint::FavorMoreOnes));
    assert_ne!(encode(0x0F, BiasHint::FavorFewerOnes), encode(0x0F, BiasHint::FavorMoreOnes));
}

#[test]
fn every_pattern_decodes_or_errors() {
    let table = build_table().unwrap();
    let mut valid = 0;
    for bits in 0u16..1024 {
        let symbol = Symbol::new(bits);
        match table.get(symbol) {
            Some(byte) => {
                valid += 1;
                assert_eq!(table.decode(symbol), Decoded { out: byte, error: false });
                assert_eq!(decode(symbol), byte);
            }
            None => assert_eq!(table.decode(symbol), Decoded { out: 0, error: true }, "symbol {}", symbol),
        }
    }
    assert_eq!(valid, TABLE_SIZE);
}
