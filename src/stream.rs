//! Record text accumulation and position-to-record projection
//!
//! Concatenates every record's normalized text into a single symbol
//! sequence, separated by sentinels, and keeps the start offset of each
//! record so suffix positions can be projected back to the record that
//! owns them.

use crate::types::{EntryId, SENTINEL, Symbol, TextPosition, char_symbol};

/// Accumulates record text into the concatenated symbol sequence
///
/// Each record contributes its case-folded characters followed by one
/// sentinel, so even an empty record occupies a position and no suffix
/// continues into the next record unnoticed.
pub struct CharacterStream {
    /// Concatenated case-folded text, one symbol per character
    text: Vec<Symbol>,
    /// Start of each record's text, in record order
    entry_starts: Vec<TextPosition>,
}

impl CharacterStream {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            entry_starts: Vec::new(),
        }
    }

    /// Append one record's text and its trailing sentinel
    pub fn push_entry(&mut self, text: &str) {
        self.entry_starts.push(self.text.len() as TextPosition);
        let folded = text.to_lowercase();
        self.text.extend(folded.chars().map(char_symbol));
        self.text.push(SENTINEL);
    }

    /// Length of the accumulated text, sentinels included
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of records pushed so far
    pub fn entry_count(&self) -> usize {
        self.entry_starts.len()
    }

    /// Consume the stream, yielding the text and the entry start offsets
    pub fn into_parts(self) -> (Vec<Symbol>, Vec<TextPosition>) {
        (self.text, self.entry_starts)
    }
}

impl Default for CharacterStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Record owning a text position: the one with the greatest start offset
/// at or before it
///
/// Sentinel positions belong to the record they terminate. Returns `None`
/// only when no records were indexed.
pub fn entry_at(entry_starts: &[TextPosition], pos: TextPosition) -> Option<EntryId> {
    let idx = entry_starts.partition_point(|&start| start <= pos);
    idx.checked_sub(1).map(|i| i as EntryId)
}
