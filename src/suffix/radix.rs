//! Stable radix passes for suffix construction
//!
//! Counting sort over small integer keys, with the count and placement
//! buffers reused across passes. Two modes: a single stable pass by an
//! arbitrary key function, and a least-significant-first sweep over a
//! window of symbols for triple ranking. Key reads past the end of the
//! backing text yield [`PAD`], never an error.

use crate::types::{PAD, Symbol, TextPosition, symbol_at};

/// Reusable stable bucket sorter over `u32` keys
pub struct RadixSorter {
    /// Bucket offsets, indexed by key + 1 during counting
    counts: Vec<u32>,
    /// Stable placement buffer, swapped with the input each pass
    scratch: Vec<TextPosition>,
}

impl RadixSorter {
    pub fn new() -> Self {
        Self {
            counts: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Stable single-pass sort of `items` by `key`
    pub fn sort_by_key<K>(&mut self, items: &mut Vec<TextPosition>, key: K)
    where
        K: Fn(TextPosition) -> u32,
    {
        self.pass(items, key);
    }

    /// Stable least-significant-first sort of positions by the `width`
    /// symbols starting at each position
    ///
    /// The most significant offset runs last, so the result is in
    /// lexicographic order of the symbol windows. Windows running past the
    /// end of `text` read [`PAD`] there.
    pub fn sort_by_window(&mut self, items: &mut Vec<TextPosition>, text: &[Symbol], width: usize) {
        for offset in (0..width).rev() {
            self.pass(items, |pos| symbol_at(text, pos as usize + offset));
        }
    }

    /// One stable counting pass
    fn pass<K>(&mut self, items: &mut Vec<TextPosition>, key: K)
    where
        K: Fn(TextPosition) -> u32,
    {
        if items.is_empty() {
            return;
        }

        let max_key = items.iter().map(|&item| key(item)).max().unwrap_or(PAD) as usize;
        self.counts.clear();
        self.counts.resize(max_key + 2, 0);

        // counts[k + 1] holds the population of key k, so the prefix sum
        // leaves each bucket's start offset in counts[k]
        for &item in items.iter() {
            self.counts[key(item) as usize + 1] += 1;
        }
        for k in 1..self.counts.len() {
            self.counts[k] += self.counts[k - 1];
        }

        self.scratch.clear();
        self.scratch.resize(items.len(), 0);
        for &item in items.iter() {
            let slot = &mut self.counts[key(item) as usize];
            self.scratch[*slot as usize] = item;
            *slot += 1;
        }

        std::mem::swap(items, &mut self.scratch);
    }
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_key_stable() {
        let mut sorter = RadixSorter::new();
        // equal keys (tens digit) must keep input order
        let mut items: Vec<TextPosition> = vec![31, 11, 32, 12];
        sorter.sort_by_key(&mut items, |item| item / 10);
        assert_eq!(items, vec![11, 12, 31, 32]);
    }

    #[test]
    fn test_sort_by_window_lexicographic() {
        let mut sorter = RadixSorter::new();
        let text = vec![2, 1, 2, 1];
        let mut items: Vec<TextPosition> = vec![0, 1, 2, 3];
        sorter.sort_by_window(&mut items, &text, 2);
        // windows: 0 -> (2,1), 1 -> (1,2), 2 -> (2,1), 3 -> (1,PAD)
        assert_eq!(items, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_sort_empty() {
        let mut sorter = RadixSorter::new();
        let mut items: Vec<TextPosition> = Vec::new();
        sorter.sort_by_key(&mut items, |item| item);
        assert!(items.is_empty());
    }

    #[test]
    fn test_buffers_reused_across_sorts() {
        let mut sorter = RadixSorter::new();

        let mut first: Vec<TextPosition> = vec![3, 1, 2];
        sorter.sort_by_key(&mut first, |item| item);
        assert_eq!(first, vec![1, 2, 3]);

        let mut second: Vec<TextPosition> = vec![9, 7, 8, 0];
        sorter.sort_by_key(&mut second, |item| item);
        assert_eq!(second, vec![0, 7, 8, 9]);
    }
}
