//! Subcommand implementations.

use countries_cli::output::{country_detail, country_line, format_count, Status};
use countries_core::config::Config;
use countries_core::{CountryCatalog, Error};
use countries_search::{edit_distance, match_threshold, matches_query, normalize};
use countries_telemetry::Timer;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

/// Settings shared by every subcommand.
pub struct Context {
    pub config: Config,
    pub data: Option<PathBuf>,
    pub json: bool,
}

impl Context {
    /// Load the catalog from `--data`, the configured path or the bundled set.
    fn catalog(&self) -> countries_core::Result<CountryCatalog> {
        let path = self.data.as_ref().or(self.config.schema.data.path.as_ref());
        let catalog = match path {
            Some(path) => CountryCatalog::from_path(path)?,
            None => CountryCatalog::bundled()?,
        };
        tracing::debug!(countries = catalog.len(), "Catalog loaded");
        Ok(catalog.with_options(self.config.schema.search))
    }
}

pub fn distance(ctx: &Context, a: &str, b: &str) -> anyhow::Result<ExitCode> {
    let distance = edit_distance(a, b);

    if ctx.json {
        println!("{}", json!({ "a": a, "b": b, "distance": distance }));
    } else {
        println!("{}", distance);
    }

    Ok(ExitCode::SUCCESS)
}

pub fn fuzzy_match(ctx: &Context, candidate: &str, query: Option<&str>) -> anyhow::Result<ExitCode> {
    let options = &ctx.config.schema.search;
    let matched = matches_query(candidate, query, options);

    let normalized = normalize(candidate, options.folding);
    let threshold = match_threshold(normalized.chars().count(), options);

    // An absent or empty query matches without computing a distance.
    let (distance, reason) = match query.filter(|q| !q.is_empty()) {
        None => (None, "empty_query"),
        Some(q) => {
            let q = normalize(q, options.folding);
            let distance = edit_distance(&normalized, &q);
            let reason = if normalized.contains(q.as_str()) {
                "substring"
            } else if matched {
                "within_threshold"
            } else {
                "too_distant"
            };
            (Some(distance), reason)
        }
    };

    if ctx.json {
        println!(
            "{}",
            json!({
                "candidate": candidate,
                "query": query,
                "matched": matched,
                "reason": reason,
                "distance": distance,
                "threshold": threshold,
            })
        );
    } else if matched {
        println!("match");
    } else {
        println!("no match");
    }

    Ok(if matched { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

pub fn search(
    ctx: &Context,
    query: Option<&str>,
    region: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<ExitCode> {
    let catalog = ctx.catalog()?;

    let timer = Timer::start("search");
    let mut hits = catalog.search(query, region);
    timer.stop();

    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(ExitCode::SUCCESS);
    }

    if hits.is_empty() {
        Status::warning("No countries match");
        return Ok(ExitCode::SUCCESS);
    }

    for country in &hits {
        println!("{}", country_line(country));
    }
    Status::info(&format!("{} found", format_count(hits.len(), "country", "countries")));

    Ok(ExitCode::SUCCESS)
}

pub fn show(ctx: &Context, code: &str) -> anyhow::Result<ExitCode> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::validation(format!("Invalid country code: {:?}", code))
            .with_suggestion("Country codes are three letters, e.g. DEU")
            .into());
    }

    let catalog = ctx.catalog()?;
    let country = catalog
        .get_by_code(code)
        .ok_or_else(|| Error::country_not_found(code))?;
    let borders: Vec<&str> = catalog
        .borders_of(country)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "country": country,
                "borderNames": borders,
            }))?
        );
    } else {
        Status::header(&country.name);
        println!("{}", country_detail(country, &borders));
    }

    Ok(ExitCode::SUCCESS)
}

pub fn regions(ctx: &Context) -> anyhow::Result<ExitCode> {
    let catalog = ctx.catalog()?;
    let regions = catalog.regions();

    if ctx.json {
        println!("{}", serde_json::to_string(&regions)?);
    } else {
        for region in regions {
            println!("{}", region);
        }
    }

    Ok(ExitCode::SUCCESS)
}
