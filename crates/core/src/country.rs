//! Country domain types.
//!
//! Field names follow the REST Countries v2 payload so responses and dumps
//! deserialize without a mapping layer.

use serde::{Deserialize, Serialize};

/// A country as listed and shown in detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Common English name
    pub name: String,
    /// ISO 3166-1 alpha-3 code
    pub alpha3_code: String,
    /// Continental region ("Europe", "Americas", ...)
    pub region: String,
    /// Population count
    pub population: u64,
    /// Flag image URL
    pub flag: String,

    /// Capital city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,

    /// Subregion such as "Western Europe"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,

    /// Name in the country's main language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,

    /// Country-code top-level domains, e.g. `.de`
    #[serde(default)]
    pub top_level_domain: Vec<String>,

    /// Alpha-3 codes of bordering countries
    #[serde(default)]
    pub borders: Vec<String>,

    /// Currencies in use
    #[serde(default)]
    pub currencies: Vec<Currency>,

    /// Sovereign state flag, absent when the source omits it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent: Option<bool>,
}

impl Country {
    /// Returns true if this country's code equals `code`, ignoring case.
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        self.alpha3_code.eq_ignore_ascii_case(code)
    }

    /// Returns true if this country lies in `region`, ignoring case.
    #[inline]
    pub fn in_region(&self, region: &str) -> bool {
        self.region.to_lowercase() == region.to_lowercase()
    }
}

/// A currency in use in a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,
    /// English name
    pub name: String,
    /// Display symbol such as `€`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}
