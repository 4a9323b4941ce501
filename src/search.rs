//! Binary-search match engine over the suffix array
//!
//! Locates the contiguous run of suffixes that start with a query using
//! longest-common-prefix probes, then projects the run back to the records
//! owning each suffix.

use crate::types::{EntryId, PAD, Symbol, TextPosition, symbol_at};
use roaring::RoaringBitmap;

/// Which end of the matching run a boundary search locates
#[derive(Clone, Copy, PartialEq, Eq)]
enum Boundary {
    First,
    Last,
}

/// Longest-common-prefix evidence from one query-against-suffix probe
struct Lcp {
    /// Number of leading query symbols the suffix shares
    matched: usize,
    /// Whole query matched
    full: bool,
    /// Suffix-side symbol at the first difference; [`PAD`] when the suffix
    /// ran out first
    divergent: Symbol,
}

/// Borrowed view over a built index, answering substring queries
pub struct MatchEngine<'a> {
    text: &'a [Symbol],
    suffix_array: &'a [TextPosition],
    suffix_entries: &'a [EntryId],
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        text: &'a [Symbol],
        suffix_array: &'a [TextPosition],
        suffix_entries: &'a [EntryId],
    ) -> Self {
        Self {
            text,
            suffix_array,
            suffix_entries,
        }
    }

    /// Entries whose text contains the query, deduplicated, in order of
    /// first appearance in suffix order
    pub fn search(&self, query: &[Symbol]) -> Vec<EntryId> {
        let Some((first, last)) = self.find_range(query) else {
            return Vec::new();
        };

        let mut seen = RoaringBitmap::new();
        let mut entries = Vec::new();
        for slot in first..=last {
            let entry = self.suffix_entries[slot];
            if seen.insert(entry) {
                entries.push(entry);
            }
        }
        entries
    }

    /// Inclusive slot range of the suffixes starting with the query
    pub fn find_range(&self, query: &[Symbol]) -> Option<(usize, usize)> {
        let first = self.find_boundary(query, Boundary::First)?;
        let last = self.find_boundary(query, Boundary::Last)?;
        Some((first, last))
    }

    /// Narrowing search for one end of the matching run
    ///
    /// A full match at the midpoint is the boundary unless its neighbor in
    /// the requested direction also matches, in which case the window
    /// shrinks past the confirmed slot. On a mismatch the diverging symbol
    /// decides the half, since query and suffix agree on everything before
    /// it. Iterative, so probe depth is log of the suffix count with no
    /// call-stack growth.
    fn find_boundary(&self, query: &[Symbol], boundary: Boundary) -> Option<usize> {
        let mut lo = 0;
        let mut hi = self.suffix_array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let probe = self.lcp(query, self.suffix_array[mid]);

            if probe.full {
                match boundary {
                    Boundary::First => {
                        if mid == lo || !self.lcp(query, self.suffix_array[mid - 1]).full {
                            return Some(mid);
                        }
                        hi = mid;
                    }
                    Boundary::Last => {
                        if mid + 1 == hi || !self.lcp(query, self.suffix_array[mid + 1]).full {
                            return Some(mid);
                        }
                        lo = mid + 1;
                    }
                }
            } else if query[probe.matched] < probe.divergent {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        None
    }

    /// Compare the query against the suffix starting at `start`
    ///
    /// Total over any input: reads past the end of the text act as [`PAD`],
    /// so a suffix shorter than the query simply diverges with [`PAD`].
    fn lcp(&self, query: &[Symbol], start: TextPosition) -> Lcp {
        let mut matched = 0;
        while matched < query.len() {
            let symbol = symbol_at(self.text, start as usize + matched);
            if query[matched] != symbol {
                return Lcp {
                    matched,
                    full: false,
                    divergent: symbol,
                };
            }
            matched += 1;
        }
        Lcp {
            matched,
            full: true,
            divergent: PAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{CharacterStream, entry_at};
    use crate::suffix::build_suffix_array;
    use crate::types::char_symbol;

    struct Fixture {
        text: Vec<Symbol>,
        suffix_array: Vec<TextPosition>,
        suffix_entries: Vec<EntryId>,
    }

    impl Fixture {
        fn new(records: &[&str]) -> Self {
            let mut stream = CharacterStream::new();
            for record in records {
                stream.push_entry(record);
            }
            let (text, starts) = stream.into_parts();
            let suffix_array = build_suffix_array(&text);
            let suffix_entries = suffix_array
                .iter()
                .map(|&pos| entry_at(&starts, pos).unwrap_or(0))
                .collect();
            Self {
                text,
                suffix_array,
                suffix_entries,
            }
        }

        fn engine(&self) -> MatchEngine<'_> {
            MatchEngine::new(&self.text, &self.suffix_array, &self.suffix_entries)
        }
    }

    fn query(text: &str) -> Vec<Symbol> {
        text.to_lowercase().chars().map(char_symbol).collect()
    }

    #[test]
    fn test_search_single_record() {
        let fixture = Fixture::new(&["banana"]);
        let engine = fixture.engine();
        assert_eq!(engine.search(&query("ana")), vec![0]);
        assert_eq!(engine.search(&query("nab")), Vec::<EntryId>::new());
    }

    #[test]
    fn test_find_range_counts_occurrences() {
        let fixture = Fixture::new(&["banana"]);
        let engine = fixture.engine();

        let (first, last) = engine.find_range(&query("an")).unwrap();
        assert_eq!(last - first + 1, 2);

        let (first, last) = engine.find_range(&query("a")).unwrap();
        assert_eq!(last - first + 1, 3);

        assert!(engine.find_range(&query("nana n")).is_none());
    }

    #[test]
    fn test_search_multiple_records_in_suffix_order() {
        let fixture = Fixture::new(&["chris", "christopher", "john"]);
        let engine = fixture.engine();
        assert_eq!(engine.search(&query("chris")), vec![0, 1]);
        assert_eq!(engine.search(&query("christo")), vec![1]);
        // "ohn..." sorts before "opher...", so john's entry comes first
        assert_eq!(engine.search(&query("o")), vec![2, 1]);
        assert!(engine.search(&query("z")).is_empty());
    }

    #[test]
    fn test_search_deduplicates_preserving_first_occurrence() {
        let fixture = Fixture::new(&["papa", "map"]);
        let engine = fixture.engine();
        // "pa" occurs twice in the first record but reports it once
        assert_eq!(engine.search(&query("pa")), vec![0]);
        assert_eq!(engine.search(&query("p")), vec![1, 0]);
    }

    #[test]
    fn test_empty_query_matches_every_record() {
        let fixture = Fixture::new(&["alpha", "beta", "gamma"]);
        let engine = fixture.engine();
        let mut entries = engine.search(&query(""));
        entries.sort_unstable();
        assert_eq!(entries, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_index() {
        let fixture = Fixture::new(&[]);
        let engine = fixture.engine();
        assert!(engine.search(&query("a")).is_empty());
        assert!(engine.search(&query("")).is_empty());
    }

    #[test]
    fn test_query_longer_than_any_record() {
        let fixture = Fixture::new(&["ab"]);
        let engine = fixture.engine();
        assert!(engine.search(&query("abc")).is_empty());
        assert!(engine.search(&query("abab")).is_empty());
    }

    #[test]
    fn test_case_folded_query() {
        let fixture = Fixture::new(&["Hello World"]);
        let engine = fixture.engine();
        assert_eq!(engine.search(&query("WORLD")), vec![0]);
    }

    #[test]
    fn test_lcp_reports_divergence() {
        let fixture = Fixture::new(&["abc"]);
        let engine = fixture.engine();

        // suffix "abc" against "abd": two symbols shared, diverges on 'c'
        let probe = engine.lcp(&query("abd"), 0);
        assert_eq!(probe.matched, 2);
        assert!(!probe.full);
        assert_eq!(probe.divergent, char_symbol('c'));

        let probe = engine.lcp(&query("abc"), 0);
        assert_eq!(probe.matched, 3);
        assert!(probe.full);
    }
}
