//! Batch filtering with optional parallelism.
//!
//! A filtered list view re-runs the matcher over every candidate on each
//! keystroke; these helpers do that pass and keep the input order.

use crate::error::Result;
use crate::fuzzy::{matches_query, MatchOptions};

/// Indices of the candidates that match `query`, in input order.
///
/// # Example
/// ```
/// use countries_search::{filter_matches, MatchOptions};
///
/// let names = ["Germany", "France", "Georgia"];
/// let hits = filter_matches(&names, Some("ger"), &MatchOptions::default());
/// assert_eq!(hits, vec![0]);
/// ```
pub fn filter_matches<S>(candidates: &[S], query: Option<&str>, options: &MatchOptions) -> Vec<usize>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .enumerate()
            .filter(|(_, candidate)| matches_query(candidate.as_ref(), query, options))
            .map(|(index, _)| index)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| matches_query(candidate.as_ref(), query, options))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Keep the items whose key matches `query`, in input order.
///
/// # Arguments
/// * `items` - Items to filter
/// * `key` - Extracts the candidate string from an item
/// * `query` - User query; `None` or `""` keeps everything
/// * `options` - Match tuning
pub fn filter_by<'a, T, F>(
    items: &'a [T],
    key: F,
    query: Option<&str>,
    options: &MatchOptions,
) -> Vec<&'a T>
where
    T: Sync,
    F: Fn(&T) -> &str + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .filter(|item| matches_query(key(item), query, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .filter(|item| matches_query(key(item), query, options))
            .collect()
    }
}

/// Filter a JSON array of names, returning the matches as a JSON array.
///
/// Malformed input yields [`SearchError::Json`](crate::SearchError::Json).
pub fn filter_names_json(query: Option<&str>, names_json: &str, options: &MatchOptions) -> Result<String> {
    let names: Vec<String> = serde_json::from_str(names_json)?;

    let kept: Vec<&str> = filter_matches(&names, query, options)
        .into_iter()
        .map(|index| names[index].as_str())
        .collect();

    Ok(serde_json::to_string(&kept)?)
}
