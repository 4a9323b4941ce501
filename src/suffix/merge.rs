//! Interleave of the two ranked position classes
//!
//! The comparator works on symbol and rank evidence only: when both
//! positions carry sample ranks the ranks decide outright; otherwise the
//! symbols decide, advancing both positions on a tie. The mod-3 structure
//! puts both positions in the sample class within two advances, so every
//! comparison is O(1).

use super::build::rank_at;
use crate::types::{Symbol, TextPosition, symbol_at};
use std::cmp::Ordering;

/// Compare the suffixes starting at `a` and `b`
///
/// `ranks` must hold exact 1-based sample ranks, with 0 for every mod-0
/// and past-end position.
pub(crate) fn compare_suffixes(
    text: &[Symbol],
    ranks: &[u32],
    mut a: TextPosition,
    mut b: TextPosition,
) -> Ordering {
    loop {
        if a % 3 != 0 && b % 3 != 0 {
            return rank_at(ranks, a).cmp(&rank_at(ranks, b));
        }
        let sym_a = symbol_at(text, a as usize);
        let sym_b = symbol_at(text, b as usize);
        if sym_a != sym_b {
            return sym_a.cmp(&sym_b);
        }
        a += 1;
        b += 1;
    }
}

/// Merge two suffix-sorted position sequences into one
pub(crate) fn merge(
    text: &[Symbol],
    ranks: &[u32],
    first: &[TextPosition],
    second: &[TextPosition],
) -> Vec<TextPosition> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut i = 0;
    let mut j = 0;

    while i < first.len() && j < second.len() {
        if compare_suffixes(text, ranks, first[i], second[j]) == Ordering::Less {
            merged.push(first[i]);
            i += 1;
        } else {
            merged.push(second[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::char_symbol;

    fn symbols(text: &str) -> Vec<Symbol> {
        text.chars().map(char_symbol).collect()
    }

    #[test]
    fn test_compare_decides_on_first_symbol() {
        let text = symbols("ba");
        let ranks = vec![0u32; text.len() + 3];
        assert_eq!(compare_suffixes(&text, &ranks, 0, 1), Ordering::Greater);
        assert_eq!(compare_suffixes(&text, &ranks, 1, 0), Ordering::Less);
    }

    #[test]
    fn test_compare_uses_sample_ranks() {
        // positions 1 and 2 are both sample-class, so ranks decide directly
        let text = symbols("aaaa");
        let mut ranks = vec![0u32; text.len() + 3];
        ranks[1] = 2; // suffix "aaa"
        ranks[2] = 1; // suffix "aa"
        assert_eq!(compare_suffixes(&text, &ranks, 1, 2), Ordering::Greater);
        assert_eq!(compare_suffixes(&text, &ranks, 2, 1), Ordering::Less);
    }

    #[test]
    fn test_compare_advances_past_equal_symbols() {
        // positions 0 and 2 share "ab"; two advances land both in the
        // sample class, where position 4 (past end) ranks 0
        let text = symbols("abab");
        let mut ranks = vec![0u32; text.len() + 3];
        ranks[2] = 1; // suffix "ab"
        ranks[1] = 2; // suffix "bab"
        assert_eq!(compare_suffixes(&text, &ranks, 0, 2), Ordering::Greater);
        assert_eq!(compare_suffixes(&text, &ranks, 2, 0), Ordering::Less);
    }

    #[test]
    fn test_merge_interleaves() {
        let text = symbols("ba");
        let mut ranks = vec![0u32; text.len() + 3];
        ranks[1] = 1;
        assert_eq!(merge(&text, &ranks, &[0], &[1]), vec![1, 0]);
    }

    #[test]
    fn test_merge_empty_side() {
        let text = symbols("a");
        let ranks = vec![0u32; text.len() + 3];
        assert_eq!(merge(&text, &ranks, &[0], &[]), vec![0]);
        assert_eq!(merge(&text, &ranks, &[], &[0]), vec![0]);
    }
}
