//! Skew suffix array construction
//!
//! Sorts every suffix of the symbol text by:
//! 1. Partitioning positions by residue mod 3 and ranking the mod-1/mod-2
//!    sample by symbol triples with three stable radix passes
//! 2. Recursing on the rank sequence while any triples tie, which re-sorts
//!    the sample exactly
//! 3. Ranking the mod-0 remainder off the sample ranks
//! 4. Merging both sorted classes with the rank/symbol comparator
//!
//! Each level does linear radix work on a problem roughly 2/3 the size, so
//! construction is linear overall with O(log n) recursion depth.

use super::merge::merge;
use super::radix::RadixSorter;
use crate::types::{Symbol, TextPosition, symbol_at};

/// Build the suffix array of `text`
///
/// `text` must not contain 0; reads past the end act as 0, which is what
/// orders a suffix before every longer suffix it prefixes. The result is
/// the permutation of `[0, text.len())` in lexicographic suffix order.
pub fn build_suffix_array(text: &[Symbol]) -> Vec<TextPosition> {
    let mut sorter = RadixSorter::new();
    sort_suffixes(text, &mut sorter)
}

/// Exact sample rank of a position, 0 at or past the end of the text
///
/// Ranks are 1-based so a genuine smallest sample rank can never be
/// confused with the past-end default.
#[inline]
pub(crate) fn rank_at(ranks: &[u32], pos: TextPosition) -> u32 {
    ranks.get(pos as usize).copied().unwrap_or(0)
}

fn sort_suffixes(text: &[Symbol], sorter: &mut RadixSorter) -> Vec<TextPosition> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Sample positions: residues 1 and 2 mod 3, B1 block then B2 block.
    // When n == 1 (mod 3) the past-end position n joins B1; its (0, 0, 0)
    // triple is the unique minimum and stops reduced-string comparisons
    // from running out of the B1 block into B2 ranks.
    let mut sample_order: Vec<TextPosition> = (1..n as TextPosition).step_by(3).collect();
    let has_dummy = n % 3 == 1;
    if has_dummy {
        sample_order.push(n as TextPosition);
    }
    sample_order.extend((2..n as TextPosition).step_by(3));

    // Rank the sample by symbol triples: three stable passes, least
    // significant offset first
    let mut sample_sorted = sample_order.clone();
    sorter.sort_by_window(&mut sample_sorted, text, 3);

    // Provisional ranks over the sorted sample; equal adjacent triples
    // share a rank and force the recursion
    let mut provisional = vec![0u32; n + 1];
    let mut duplicates_found = false;
    let mut current = 0u32;
    let mut previous: Option<[Symbol; 3]> = None;
    for &pos in &sample_sorted {
        let triple = triple_at(text, pos);
        match previous {
            Some(prev) if prev == triple => duplicates_found = true,
            _ => current += 1,
        }
        provisional[pos as usize] = current;
        previous = Some(triple);
    }

    if duplicates_found {
        // Reduced problem: provisional ranks in sample order; its suffix
        // array is the exact ordering of the sample
        let reduced: Vec<Symbol> = sample_order
            .iter()
            .map(|&pos| provisional[pos as usize])
            .collect();
        let reduced_sa = sort_suffixes(&reduced, sorter);
        sample_sorted = reduced_sa
            .iter()
            .map(|&ri| sample_order[ri as usize])
            .collect();
    }

    // The dummy sorts first; everything after it is the real sample
    let sample = if has_dummy {
        &sample_sorted[1..]
    } else {
        &sample_sorted[..]
    };

    // Exact 1-based ranks, dense over the position space; indices at or
    // past n stay 0 so past-end reads rank as smallest
    let mut ranks = vec![0u32; n + 3];
    for (i, &pos) in sample.iter().enumerate() {
        ranks[pos as usize] = i as u32 + 1;
    }

    // Mod-0 positions order by (own symbol, rank of successor); the
    // successor is always sample-class. Least significant key first.
    let mut b0: Vec<TextPosition> = (0..n as TextPosition).step_by(3).collect();
    sorter.sort_by_key(&mut b0, |pos| rank_at(&ranks, pos + 1));
    sorter.sort_by_key(&mut b0, |pos| symbol_at(text, pos as usize));

    merge(text, &ranks, &b0, sample)
}

/// Symbol triple starting at `pos`, padded with 0 past the end
#[inline]
fn triple_at(text: &[Symbol], pos: TextPosition) -> [Symbol; 3] {
    let p = pos as usize;
    [
        symbol_at(text, p),
        symbol_at(text, p + 1),
        symbol_at(text, p + 2),
    ]
}
