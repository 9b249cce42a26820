//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use countries_core::format::format_population;
use countries_core::Country;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// One-line summary used in list views: code, name, region, population
pub fn country_line(country: &Country) -> String {
    format!(
        "{}  {}  ({}, pop. {})",
        country.alpha3_code,
        country.name,
        country.region,
        format_population(Some(country.population))
    )
}

/// Multi-line detail view. `borders` holds the resolved neighbour names.
pub fn country_detail(country: &Country, borders: &[&str]) -> String {
    let mut lines = vec![
        format!("Name:        {}", country.name),
        format!("Code:        {}", country.alpha3_code),
    ];

    if let Some(native) = &country.native_name {
        lines.push(format!("Native name: {}", native));
    }
    lines.push(format!("Population:  {}", format_population(Some(country.population))));
    lines.push(format!("Region:      {}", country.region));
    if let Some(sub) = &country.subregion {
        lines.push(format!("Sub region:  {}", sub));
    }
    lines.push(format!(
        "Capital:     {}",
        country.capital.as_deref().unwrap_or("N/A")
    ));
    if !country.top_level_domain.is_empty() {
        lines.push(format!("Domain:      {}", country.top_level_domain.join(", ")));
    }
    if !country.currencies.is_empty() {
        let currencies: Vec<&str> = country.currencies.iter().map(|c| c.name.as_str()).collect();
        lines.push(format!("Currencies:  {}", currencies.join(", ")));
    }
    if !borders.is_empty() {
        lines.push(format!("Borders:     {}", borders.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn germany() -> Country {
        serde_json::from_str(
            r#"{
                "name": "Germany",
                "alpha3Code": "DEU",
                "region": "Europe",
                "subregion": "Central Europe",
                "population": 83240525,
                "capital": "Berlin",
                "topLevelDomain": [".de"],
                "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}],
                "flag": "https://flagcdn.com/de.svg"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "country", "countries"), "1 country");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "country", "countries"), "5 countries");
        assert_eq!(format_count(0, "country", "countries"), "0 countries");
    }

    #[test]
    fn test_country_line() {
        assert_eq!(country_line(&germany()), "DEU  Germany  (Europe, pop. 83,240,525)");
    }

    #[test]
    fn test_country_detail() {
        let detail = country_detail(&germany(), &["France", "Poland"]);
        assert!(detail.contains("Capital:     Berlin"));
        assert!(detail.contains("Population:  83,240,525"));
        assert!(detail.contains("Currencies:  Euro"));
        assert!(detail.contains("Borders:     France, Poland"));
        assert!(!detail.contains("Native name"));
    }
}
