//! Record collection model built on the suffix machinery
//!
//! [`SubstringIndex`] owns a snapshot of records together with the folded
//! character stream, its suffix array, and the per-suffix entry projection.
//! Snapshots are immutable: [`SubstringIndex::insert`] and
//! [`SubstringIndex::remove`] build a fresh index and leave the source
//! untouched, so readers can keep querying an old snapshot while a new one
//! is prepared.

use crate::search::MatchEngine;
use crate::stream::{CharacterStream, entry_at};
use crate::suffix::build_suffix_array;
use crate::types::{EntryId, IndexStats, Symbol, TextPosition, char_symbol};
use anyhow::{Context, Result};
use roaring::RoaringBitmap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Projects a record to the text the index should cover
pub type ExtractFn<R> = dyn Fn(&R) -> Result<String> + Send + Sync;

/// Immutable substring index over a snapshot of records
pub struct SubstringIndex<R> {
    records: Vec<R>,
    extract: Arc<ExtractFn<R>>,
    text: Vec<Symbol>,
    entry_starts: Vec<TextPosition>,
    suffix_array: Vec<TextPosition>,
    suffix_entries: Vec<EntryId>,
}

impl<R: Clone> SubstringIndex<R> {
    /// Build an index over `records`, extracting searchable text with
    /// `extract`
    pub fn construct<F>(records: Vec<R>, extract: F) -> Result<Self>
    where
        F: Fn(&R) -> Result<String> + Send + Sync + 'static,
    {
        Self::construct_with(records, Arc::new(extract))
    }

    fn construct_with(records: Vec<R>, extract: Arc<ExtractFn<R>>) -> Result<Self> {
        let extract_fn = extract.as_ref();
        let mut stream = CharacterStream::new();
        for (position, record) in records.iter().enumerate() {
            let text = extract_fn(record)
                .with_context(|| format!("failed to extract text from record {position}"))?;
            stream.push_entry(&text);
        }

        let (text, entry_starts) = stream.into_parts();
        let suffix_array = build_suffix_array(&text);
        let suffix_entries = suffix_array
            .iter()
            .map(|&pos| entry_at(&entry_starts, pos).unwrap_or(0))
            .collect();

        Ok(Self {
            records,
            extract,
            text,
            entry_starts,
            suffix_array,
            suffix_entries,
        })
    }

    /// Records containing `query` as a case-folded substring, ordered by
    /// first appearance in suffix order
    pub fn search(&self, query: &str) -> Vec<&R> {
        self.search_entries(query)
            .into_iter()
            .map(|id| &self.records[id as usize])
            .collect()
    }

    /// Entry ids of the records containing `query`
    pub fn search_entries(&self, query: &str) -> Vec<EntryId> {
        let symbols = query_symbols(query);
        MatchEngine::new(&self.text, &self.suffix_array, &self.suffix_entries).search(&symbols)
    }

    /// New index covering this snapshot's records plus `additions`
    pub fn insert<I>(&self, additions: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
    {
        let mut records = self.records.clone();
        records.extend(additions);
        Self::construct_with(records, Arc::clone(&self.extract))
    }

    /// New index without the records selected by `criteria`
    ///
    /// A record is dropped when any criterion selects it: its text contains
    /// one of `matching_strings` (resolved through this snapshot's own
    /// search), its text equals the extraction of one of
    /// `matching_entries`, or it fails one of `filter_functions`.
    pub fn remove(&self, criteria: &RemoveCriteria<R>) -> Result<Self> {
        if !criteria.has_any() {
            return Self::construct_with(self.records.clone(), Arc::clone(&self.extract));
        }

        let mut doomed = RoaringBitmap::new();
        if let Some(needles) = &criteria.matching_strings {
            for needle in needles {
                for entry in self.search_entries(needle) {
                    doomed.insert(entry);
                }
            }
        }

        let extract_fn = self.extract.as_ref();
        let mut doomed_texts = FxHashSet::default();
        if let Some(entries) = &criteria.matching_entries {
            for (position, entry) in entries.iter().enumerate() {
                let text = extract_fn(entry).with_context(|| {
                    format!("failed to extract text from removal entry {position}")
                })?;
                doomed_texts.insert(text);
            }
        }

        let mut survivors = Vec::with_capacity(self.records.len());
        for (position, record) in self.records.iter().enumerate() {
            if doomed.contains(position as EntryId) {
                continue;
            }
            if !doomed_texts.is_empty() {
                let text = extract_fn(record)
                    .with_context(|| format!("failed to extract text from record {position}"))?;
                if doomed_texts.contains(&text) {
                    continue;
                }
            }
            if let Some(filters) = &criteria.filter_functions {
                if !filters.iter().all(|keep| keep(record)) {
                    continue;
                }
            }
            survivors.push(record.clone());
        }

        Self::construct_with(survivors, Arc::clone(&self.extract))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            text_size: self.text.len() as u64,
            suffix_count: self.suffix_array.len() as u64,
            entry_count: self.records.len() as u32,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn text(&self) -> &[Symbol] {
        &self.text
    }

    pub fn entry_starts(&self) -> &[TextPosition] {
        &self.entry_starts
    }

    pub fn suffix_array(&self) -> &[TextPosition] {
        &self.suffix_array
    }

    pub fn suffix_entries(&self) -> &[EntryId] {
        &self.suffix_entries
    }
}

/// Selection criteria for [`SubstringIndex::remove`]
///
/// Every populated field selects records independently; a record matching
/// any of them is dropped. `filter_functions` are keep-predicates: a record
/// must pass all of them to survive.
pub struct RemoveCriteria<R> {
    pub matching_strings: Option<Vec<String>>,
    pub matching_entries: Option<Vec<R>>,
    pub filter_functions: Option<Vec<Box<dyn Fn(&R) -> bool>>>,
}

impl<R> RemoveCriteria<R> {
    fn has_any(&self) -> bool {
        self.matching_strings.is_some()
            || self.matching_entries.is_some()
            || self.filter_functions.is_some()
    }
}

impl<R> Default for RemoveCriteria<R> {
    fn default() -> Self {
        Self {
            matching_strings: None,
            matching_entries: None,
            filter_functions: None,
        }
    }
}

fn query_symbols(query: &str) -> Vec<Symbol> {
    query.to_lowercase().chars().map(char_symbol).collect()
}
