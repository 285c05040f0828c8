//! Byte/symbol correspondence over the whole input space.

use itertools::iproduct;
use linked_hash_map::LinkedHashMap;
use static_assertions::const_assert;
use thiserror::Error;

use crate::encode::*;

/// Number of distinct symbols produced by [`encode`] over all bytes and biases.
pub const TABLE_SIZE: usize = 460;

const_assert!(TABLE_SIZE <= 2 * 256);

#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table has {found} entries, expected {expected}")]
    Size { expected: usize, found: usize },

    #[error("symbol {symbol} encodes both {existing:#04x} and {byte:#04x}")]
    Conflict { symbol: Symbol, existing: u8, byte: u8 },
}

/// Table entry: the symbol decodes to the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableEntry {
    /// Data byte.
    pub byte: u8,

    /// Encoded symbol.
    pub symbol: Symbol,
}

/// Decoder output for a received symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded byte, 0 on error.
    pub out: u8,

    /// Set if the symbol is not a valid data symbol.
    pub error: bool,
}

/// Deduplicated symbol table, keyed on symbol in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: LinkedHashMap<Symbol, u8>,
}

impl Table {
    /// Inserts an entry. Returns `Ok(false)` if the same pair is already present.
    fn insert(&mut self, byte: u8, symbol: Symbol) -> Result<bool, TableError> {
        match self.entries.get(&symbol) {
            Some(&existing) if existing == byte => Ok(false),
            Some(&existing) => Err(TableError::Conflict { symbol, existing, byte }),
            None => {
                let _ = self.entries.insert(symbol, byte);
                Ok(true)
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Byte encoded by `symbol`, if any.
    pub fn get(&self, symbol: Symbol) -> Option<u8> { self.entries.get(&symbol).copied() }

    /// Returns `true` if `symbol` is a valid data symbol.
    pub fn contains(&self, symbol: Symbol) -> bool { self.entries.contains_key(&symbol) }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TableEntry> + '_ {
        self.entries.iter().map(|(&symbol, &byte)| TableEntry { byte, symbol })
    }

    /// Looks up `symbol` the way the generated decoder does.
    pub fn decode(&self, symbol: Symbol) -> Decoded {
        match self.get(symbol) {
            Some(out) => Decoded { out, error: false },
            None => Decoded { out: 0, error: true },
        }
    }
}

/// Encodes every byte under every bias and collects the distinct entries.
///
/// Entries are ordered byte-major, then in [`BiasHint::ALL`] order.
pub fn build_table() -> Result<Table, TableError> {
    let mut table = Table::default();

    for (byte, bias) in iproduct!(0..=u8::MAX, BiasHint::ALL) {
        let (byte, symbol) = encode(byte, bias);
        let _ = table.insert(byte, symbol)?;
    }

    if table.len() != TABLE_SIZE {
        return Err(TableError::Size { expected: TABLE_SIZE, found: table.len() });
    }

    tracing::debug!("built TMDS table with {} entries", table.len());
    Ok(table)
}
