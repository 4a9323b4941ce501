//! Core types for the substring index
//!
//! The index works over one concatenated sequence of symbols rather than
//! raw strings. Every record contributes its case-folded characters shifted
//! up by [`SYMBOL_BASE`], followed by one [`SENTINEL`]. [`PAD`] is reserved
//! for reads past the end of the sequence, so stored text never contains 0
//! and "missing" always ranks as smallest.

use serde::{Deserialize, Serialize};

/// Position in the concatenated symbol text
pub type TextPosition = u32;

/// Identifier of an indexed record: its position in insertion order
pub type EntryId = u32;

/// One normalized character unit in the concatenated text
pub type Symbol = u32;

/// Value produced by any read past the end of the text; never stored
pub const PAD: Symbol = 0;

/// Separator appended after each record's text; sorts below every character
pub const SENTINEL: Symbol = 1;

/// Offset added to every character so `PAD` and `SENTINEL` stay reserved
pub const SYMBOL_BASE: u32 = 2;

/// Map a normalized character to its symbol value
#[inline]
pub fn char_symbol(c: char) -> Symbol {
    c as u32 + SYMBOL_BASE
}

/// Read a symbol, treating positions past the end as [`PAD`]
#[inline]
pub fn symbol_at(text: &[Symbol], pos: usize) -> Symbol {
    text.get(pos).copied().unwrap_or(PAD)
}

/// Statistics about a built index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Length of the concatenated text, record characters plus sentinels
    pub text_size: u64,
    /// Number of suffixes in the array (equals `text_size`)
    pub suffix_count: u64,
    /// Number of indexed records
    pub entry_count: u32,
}
