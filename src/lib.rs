//! # SXI - In-Memory Substring Index
//!
//! SXI indexes a collection of records in memory and answers substring
//! queries over them without scanning. A suffix array over the records'
//! concatenated text turns every lookup into a binary search, so query cost
//! grows with the query length and the log of the text size rather than
//! with the number of records.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`stream`] - Record-to-symbol encoding and entry offset tracking
//! - [`suffix`] - Suffix array construction (recursive sample-and-merge)
//! - [`search`] - Binary-search match engine over the suffix array
//! - [`model`] - [`model::SubstringIndex`]: records, snapshots, removal
//! - [`output`] - Terminal result formatting
//! - [`types`] - Shared aliases, symbol encoding, index statistics
//!
//! ## Quick Start
//!
//! ```ignore
//! use sxi::model::SubstringIndex;
//!
//! let names = vec!["Chris".to_string(), "Christopher".to_string()];
//! let index = SubstringIndex::construct(names, |name: &String| Ok(name.clone())).unwrap();
//!
//! // Case-insensitive substring search
//! assert_eq!(index.search("chris").len(), 2);
//!
//! // Snapshots are immutable; insert returns a new index
//! let grown = index.insert(["Christian".to_string()]).unwrap();
//! assert_eq!(grown.search("christian").len(), 1);
//! ```
//!
//! ## Index layout
//!
//! Records are case folded and concatenated into one symbol sequence, each
//! followed by a terminator that sorts below every real character. The
//! suffix array orders all suffixes of that sequence; a parallel table maps
//! each suffix back to the record it starts in. Matching suffixes form one
//! contiguous run in the array, so a query needs two boundary searches and
//! a deduplicating sweep between them.

pub mod model;
pub mod output;
pub mod search;
pub mod stream;
pub mod suffix;
pub mod types;
