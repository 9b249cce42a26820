//! Fuzzy matching algorithms.

use crate::error::{Result, SearchError};
use crate::normalize::{normalize, CaseFolding};
use serde::{Deserialize, Serialize};

/// Default share of the candidate length tolerated as edits.
pub const DEFAULT_RATIO: f64 = 0.3;

/// Default lower bound for the edit tolerance.
pub const DEFAULT_MIN_THRESHOLD: usize = 2;

/// Calculate Levenshtein edit distance between two strings.
///
/// Works on Unicode scalar values, so "é" counts as one character. The full
/// `(n + 1) x (m + 1)` table is built, rows indexed by `b` and columns by `a`.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();
    let width = m + 1;

    let mut table = vec![0usize; (n + 1) * width];
    for j in 0..=m {
        table[j] = j;
    }
    for i in 0..=n {
        table[i * width] = i;
    }

    for i in 1..=n {
        for j in 1..=m {
            let diagonal = table[(i - 1) * width + (j - 1)];
            table[i * width + j] = if b_chars[i - 1] == a_chars[j - 1] {
                diagonal
            } else {
                let left = table[i * width + (j - 1)];
                let top = table[(i - 1) * width + j];
                1 + diagonal.min(left).min(top)
            };
        }
    }

    table[n * width + m]
}

/// Tuning for the fuzzy match decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Share of the normalized candidate length allowed as edits
    pub ratio: f64,
    /// Edit tolerance never drops below this
    pub min_threshold: usize,
    /// Folding applied to both candidate and query
    pub folding: CaseFolding,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            min_threshold: DEFAULT_MIN_THRESHOLD,
            folding: CaseFolding::Lowercase,
        }
    }
}

impl MatchOptions {
    /// Options with the given folding and default tolerances.
    pub fn with_folding(folding: CaseFolding) -> Self {
        Self { folding, ..Self::default() }
    }

    /// Rejects a ratio that is negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() || self.ratio < 0.0 {
            return Err(SearchError::InvalidOptions(format!(
                "ratio must be a finite, non-negative number (got {})",
                self.ratio
            )));
        }
        Ok(())
    }
}

/// Maximum edit distance still accepted for a candidate of `candidate_len`
/// characters: `max(floor(candidate_len * ratio), min_threshold)`.
#[inline]
pub fn match_threshold(candidate_len: usize, options: &MatchOptions) -> usize {
    let scaled = (candidate_len as f64 * options.ratio).floor() as usize;
    scaled.max(options.min_threshold)
}

/// Decide whether `candidate` matches `query` with default options.
///
/// An empty query matches everything. Otherwise both strings are lowercased,
/// a substring hit matches outright, and anything else must fall within
/// 30% of the candidate length in edits (at least 2).
///
/// # Example
/// ```
/// use countries_search::is_fuzzy_match;
///
/// assert!(is_fuzzy_match("Germany", "many"));
/// assert!(is_fuzzy_match("Germany", "Gremany"));
/// assert!(!is_fuzzy_match("Germany", "France"));
/// ```
pub fn is_fuzzy_match(candidate: &str, query: &str) -> bool {
    is_fuzzy_match_with(candidate, query, &MatchOptions::default())
}

/// [`is_fuzzy_match`] with explicit options.
pub fn is_fuzzy_match_with(candidate: &str, query: &str, options: &MatchOptions) -> bool {
    if query.is_empty() {
        return true;
    }

    let candidate = normalize(candidate, options.folding);
    let query = normalize(query, options.folding);

    if candidate.contains(query.as_str()) {
        return true;
    }

    let threshold = match_threshold(candidate.chars().count(), options);
    edit_distance(&candidate, &query) <= threshold
}

/// Absent-query entry point: `None` behaves exactly like `""`.
pub fn matches_query(candidate: &str, query: Option<&str>, options: &MatchOptions) -> bool {
    is_fuzzy_match_with(candidate, query.unwrap_or_default(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_same() {
        assert_eq!(edit_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_edit_distance_one_edit() {
        assert_eq!(edit_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_edit_distance_insert() {
        assert_eq!(edit_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_edit_distance_delete() {
        assert_eq!(edit_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_edit_distance_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn test_edit_distance_empty() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("côte", "cote"), 1);
        assert_eq!(edit_distance("日本", "日本国"), 1);
    }

    #[test]
    fn test_threshold_floor_and_minimum() {
        let options = MatchOptions::default();
        assert_eq!(match_threshold(0, &options), 2);
        assert_eq!(match_threshold(7, &options), 2);
        assert_eq!(match_threshold(10, &options), 3);
        assert_eq!(match_threshold(24, &options), 7);
    }

    #[test]
    fn test_fuzzy_match_exact() {
        assert!(is_fuzzy_match("Germany", "Germany"));
    }

    #[test]
    fn test_fuzzy_match_case_insensitive() {
        assert!(is_fuzzy_match("Germany", "germany"));
        assert!(is_fuzzy_match("GERMANY", "germany"));
    }

    #[test]
    fn test_fuzzy_match_partial() {
        assert!(is_fuzzy_match("Germany", "Ger"));
        assert!(is_fuzzy_match("Germany", "many"));
    }

    #[test]
    fn test_fuzzy_match_empty_query() {
        assert!(is_fuzzy_match("Germany", ""));
        assert!(is_fuzzy_match("", ""));
    }

    #[test]
    fn test_fuzzy_match_different() {
        assert!(!is_fuzzy_match("Germany", "France"));
    }

    #[test]
    fn test_fuzzy_match_threshold_boundary() {
        // "germany" has 7 chars, so the tolerance is 2 edits
        assert_eq!(edit_distance("germany", "gremany"), 2);
        assert!(is_fuzzy_match("Germany", "Gremany"));

        assert_eq!(edit_distance("germany", "germxyz"), 3);
        assert!(!is_fuzzy_match("Germany", "germxyz"));
    }

    #[test]
    fn test_threshold_uses_candidate_length() {
        // Long query against a short candidate: distance 11, tolerance 2
        assert!(!is_fuzzy_match("Chad", "Chadwick Island"));
        // Long candidate: tolerance 4 for 15 chars
        assert!(is_fuzzy_match("Solomon Islands", "Salomon Iselands"));
    }

    #[test]
    fn test_substring_wins_regardless_of_distance() {
        assert!(is_fuzzy_match("United Kingdom of Great Britain and Northern Ireland", "ireland"));
    }

    #[test]
    fn test_accents_with_lowercase_folding() {
        // Within tolerance even without stripping diacritics
        assert!(is_fuzzy_match("Côte d'Ivoire", "cote d'ivoire"));
        // Prefix typed without the accent misses the substring fast path
        assert!(!is_fuzzy_match("Réunion", "reun"));
    }

    #[test]
    fn test_accents_with_diacritic_folding() {
        let options = MatchOptions::with_folding(CaseFolding::Diacritics);
        assert!(is_fuzzy_match_with("Curaçao", "curacao", &options));
        assert!(is_fuzzy_match_with("Réunion", "reun", &options));
    }

    #[test]
    fn test_matches_query_absent() {
        let options = MatchOptions::default();
        assert!(matches_query("Germany", None, &options));
        assert!(matches_query("Germany", Some(""), &options));
        assert!(!matches_query("Germany", Some("France"), &options));
    }

    #[test]
    fn test_custom_tolerance() {
        let strict = MatchOptions { ratio: 0.0, min_threshold: 0, ..MatchOptions::default() };
        assert!(!is_fuzzy_match_with("Germany", "Germani", &strict));
        assert!(is_fuzzy_match_with("Germany", "erman", &strict));
    }

    #[test]
    fn test_validate_options() {
        assert!(MatchOptions::default().validate().is_ok());
        let negative = MatchOptions { ratio: -0.1, ..MatchOptions::default() };
        assert!(negative.validate().is_err());
        let nan = MatchOptions { ratio: f64::NAN, ..MatchOptions::default() };
        assert!(nan.validate().is_err());
    }
}
