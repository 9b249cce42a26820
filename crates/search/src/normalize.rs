//! Case folding applied to candidates and queries before comparison.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How text is folded before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    /// Unicode lowercase only. Accented letters stay distinct from
    /// their base letters.
    #[default]
    Lowercase,
    /// Canonical decomposition with combining marks removed, then
    /// lowercase. "Côte d'Ivoire" folds to "cote d'ivoire".
    Diacritics,
}

/// Fold `text` according to `folding`.
///
/// Both sides of a comparison must go through the same folding.
pub fn normalize(text: &str, folding: CaseFolding) -> String {
    match folding {
        CaseFolding::Lowercase => text.to_lowercase(),
        CaseFolding::Diacritics => text
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase(),
    }
}
