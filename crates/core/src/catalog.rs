//! In-memory country catalog.
//!
//! Holds a loaded country list and answers the lookups the list and
//! detail views need: by code, by region, by fuzzy name search.

use crate::country::Country;
use crate::error::{Error, Result, ResultExt};
use countries_search::{filter_by, MatchOptions};
use std::collections::BTreeSet;
use std::path::Path;

/// Dataset embedded at build time.
const BUNDLED_COUNTRIES: &str = include_str!("../data/countries.json");

/// A searchable list of countries.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    options: MatchOptions,
}

impl CountryCatalog {
    /// Create a catalog over `countries` with default match options.
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            options: MatchOptions::default(),
        }
    }

    /// Replace the match options used by [`CountryCatalog::search`].
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a JSON array of countries.
    pub fn from_json(json: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        tracing::debug!(count = countries.len(), "Parsed country list");
        Ok(Self::new(countries))
    }

    /// Read and parse a JSON country file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Reading country data from {}", path.display()))?;
        Self::from_json(&content).context(format!("Parsing {}", path.display()))
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_COUNTRIES).context("Parsing bundled country data")
    }

    /// Match options in effect.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Every country, in load order.
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if no countries are loaded.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Look up a country by alpha-3 code, ignoring case.
    pub fn get_by_code(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.has_code(code))
    }

    /// Countries whose code appears in `codes`, in catalog order.
    pub fn get_by_codes<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| codes.iter().any(|code| c.has_code(code.as_ref())))
            .collect()
    }

    /// Countries in `region`, ignoring case. An empty region returns everything.
    pub fn by_region(&self, region: &str) -> Vec<&Country> {
        if region.is_empty() {
            return self.countries.iter().collect();
        }
        self.countries.iter().filter(|c| c.in_region(region)).collect()
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> Vec<&str> {
        self.countries
            .iter()
            .map(|c| c.region.as_str())
            .filter(|r| !r.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filter by region first, then fuzzy-match names against `query`.
    ///
    /// `None` and empty values disable the respective filter.
    pub fn search(&self, query: Option<&str>, region: Option<&str>) -> Vec<&Country> {
        let scoped: Vec<&Country> = match region {
            Some(r) if !r.is_empty() => self.by_region(r),
            _ => self.countries.iter().collect(),
        };

        let hits: Vec<&Country> = filter_by(&scoped, |c| c.name.as_str(), query, &self.options)
            .into_iter()
            .copied()
            .collect();

        tracing::debug!(
            query = query.unwrap_or_default(),
            region = region.unwrap_or_default(),
            scoped = scoped.len(),
            hits = hits.len(),
            "Country search"
        );

        hits
    }

    /// Neighbouring countries of `country` that are present in the catalog.
    pub fn borders_of(&self, country: &Country) -> Vec<&Country> {
        self.get_by_codes(&country.borders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_search::CaseFolding;
    use std::io::Write;

    fn catalog() -> CountryCatalog {
        CountryCatalog::bundled().unwrap()
    }

    fn names(countries: &[&Country]) -> Vec<String> {
        countries.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_bundled_loads() {
        let catalog = catalog();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.all().len());
    }

    #[test]
    fn test_get_by_code() {
        let catalog = catalog();
        assert_eq!(catalog.get_by_code("DEU").unwrap().name, "Germany");
        assert_eq!(catalog.get_by_code("fra").unwrap().name, "France");
        assert!(catalog.get_by_code("XYZ").is_none());
    }

    #[test]
    fn test_get_by_codes_keeps_catalog_order() {
        let catalog = catalog();
        let found = catalog.get_by_codes(&["FRA", "DEU", "XYZ"]);
        assert_eq!(names(&found), vec!["France", "Germany"]);
    }

    #[test]
    fn test_by_region() {
        let catalog = catalog();
        let oceania = catalog.by_region("oceania");
        assert_eq!(names(&oceania), vec!["Australia", "New Zealand"]);
        assert_eq!(catalog.by_region("").len(), catalog.len());
        assert!(catalog.by_region("Atlantis").is_empty());
    }

    #[test]
    fn test_regions() {
        let catalog = catalog();
        assert_eq!(
            catalog.regions(),
            vec!["Africa", "Americas", "Asia", "Europe", "Oceania"]
        );
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let catalog = catalog();
        assert_eq!(catalog.search(None, None).len(), catalog.len());
        assert_eq!(catalog.search(Some(""), None).len(), catalog.len());
    }

    #[test]
    fn test_search_substring() {
        let catalog = catalog();
        let hits = catalog.search(Some("land"), None);
        let hits = names(&hits);
        assert!(hits.contains(&"Finland".to_string()));
        assert!(hits.contains(&"Switzerland".to_string()));
        assert!(hits.contains(&"New Zealand".to_string()));
        assert!(!hits.contains(&"France".to_string()));
    }

    #[test]
    fn test_search_typo() {
        let catalog = catalog();
        let hits = catalog.search(Some("Grmany"), None);
        assert_eq!(names(&hits), vec!["Germany"]);
    }

    #[test]
    fn test_search_scoped_to_region() {
        let catalog = catalog();
        let hits = catalog.search(Some("land"), Some("Oceania"));
        assert_eq!(names(&hits), vec!["New Zealand"]);
    }

    #[test]
    fn test_search_with_diacritic_folding() {
        let plain = catalog();
        assert!(plain.search(Some("reun"), None).is_empty());

        let folded = catalog().with_options(MatchOptions::with_folding(CaseFolding::Diacritics));
        assert_eq!(names(&folded.search(Some("reun"), None)), vec!["Réunion"]);
    }

    #[test]
    fn test_borders_of() {
        let catalog = catalog();
        let france = catalog.get_by_code("FRA").unwrap();
        let borders = names(&catalog.borders_of(france));
        assert!(borders.contains(&"Germany".to_string()));
        assert!(borders.contains(&"Spain".to_string()));

        let japan = catalog.get_by_code("JPN").unwrap();
        assert!(catalog.borders_of(japan).is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"name":"Chad","alpha3Code":"TCD","region":"Africa","population":16425859,"flag":""}]"#,
        )
        .unwrap();

        let catalog = CountryCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_path_missing() {
        let err = CountryCatalog::from_path("/nonexistent/countries.json").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::FileNotFound);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = CountryCatalog::from_json("{not json").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::DataParseError);
    }
}
