//! Display formatting for country figures.

/// Format a population with en-US thousands separators.
///
/// Missing figures render as `"N/A"`.
///
/// # Example
/// ```
/// use countries_core::format::format_population;
///
/// assert_eq!(format_population(Some(83_000_000)), "83,000,000");
/// assert_eq!(format_population(None), "N/A");
/// ```
pub fn format_population(population: Option<u64>) -> String {
    let Some(population) = population else {
        return "N/A".to_string();
    };

    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
