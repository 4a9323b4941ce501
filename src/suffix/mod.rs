//! Suffix array construction (skew method)
//!
//! Builds the sorted suffix array of the concatenated record text with
//! linear work per recursion level over a geometrically shrinking problem.
//!
//! ## Architecture
//!
//! - `radix`: stable counting passes shared by every ranking step
//! - `build`: mod-3 partition, sample triple ranking, recursion on rank
//!   ties, remainder ranking
//! - `merge`: comparator-driven interleave of the two sorted classes
//!
//! The text must never contain the value 0. Every past-end read acts as 0
//! and sorts first, which is what places a suffix ahead of the longer
//! suffixes it prefixes.

pub mod build;
pub mod merge;
pub mod radix;

// Re-exports for convenience
pub use build::build_suffix_array;
#[allow(unused_imports)]
pub use radix::RadixSorter;
