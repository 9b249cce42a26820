//! Approximate string matching for filtering country lists as the user types.
//!
//! This crate provides:
//! - Levenshtein edit distance over Unicode scalar values
//! - A fuzzy match decision (substring fast path, length-scaled edit tolerance)
//! - Unicode case folding with optional diacritic stripping
//! - Batch filtering with optional parallelism
//! - WASM bindings for the browser front-end
//!
//! # Example
//!
//! ```
//! use countries_search::{edit_distance, is_fuzzy_match};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert!(is_fuzzy_match("Germany", "germny"));
//! assert!(!is_fuzzy_match("Germany", "France"));
//! ```

mod error;
pub mod filter;
mod fuzzy;
mod normalize;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use filter::{filter_by, filter_matches, filter_names_json};
pub use fuzzy::{
    edit_distance, is_fuzzy_match, is_fuzzy_match_with, match_threshold, matches_query,
    MatchOptions, DEFAULT_MIN_THRESHOLD, DEFAULT_RATIO,
};
pub use normalize::{normalize, CaseFolding};
