//! WASM bindings for search utilities.
//!
//! Exposed with camelCase names so the front-end can call them the same way
//! it calls its own helpers.

use crate::{edit_distance, filter_names_json, is_fuzzy_match, MatchOptions};
use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen(js_name = editDistance)]
pub fn edit_distance_js(a: &str, b: &str) -> u32 {
    edit_distance(a, b) as u32
}

/// Check whether `candidate` fuzzily matches `query`.
///
/// `undefined` and `null` queries behave like an empty query and match.
#[wasm_bindgen(js_name = isFuzzyMatch)]
pub fn is_fuzzy_match_js(candidate: &str, query: Option<String>) -> bool {
    is_fuzzy_match(candidate, query.as_deref().unwrap_or_default())
}

/// Filter a list of names.
///
/// # Arguments
/// * `query` - Search query (`undefined`/`null` keeps every name)
/// * `names_json` - JSON array of strings
///
/// # Returns
/// JSON array of the matching names, in input order
#[wasm_bindgen(js_name = filterNames)]
pub fn filter_names(query: Option<String>, names_json: &str) -> Result<String, JsValue> {
    filter_names_json(query.as_deref(), names_json, &MatchOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
