//! countries: search and inspect country data from the command line.
//!
//! Filters the country list with the same approximate matcher the web
//! front-end uses, so typos like "Grmany" still find Germany.

use clap::{Parser, Subcommand};
use countries_cli::output::Status;
use countries_core::config::Config;
use countries_core::error::exit_codes;
use countries_telemetry::LogConfig;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Search and inspect country data
#[derive(Parser)]
#[command(name = "countries")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a countries.toml configuration file
    #[arg(short, long, global = true, env = "COUNTRIES_CONFIG")]
    config: Option<PathBuf>,

    /// JSON country data to use instead of the bundled dataset
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Check whether a candidate fuzzily matches a query (exit 1 if not)
    Match {
        candidate: String,

        /// Query; omitted or empty matches everything
        query: Option<String>,
    },

    /// List countries whose name matches a query
    Search {
        /// Query; omitted lists every country
        query: Option<String>,

        /// Only search within this region
        #[arg(short, long)]
        region: Option<String>,

        /// Maximum number of results (at least 1)
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,
    },

    /// Show details for a country by alpha-3 code
    Show {
        code: String,
    },

    /// List the regions present in the data
    Regions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&anyhow::Error::from(e), cli.json),
    };

    let log_config = if cli.verbose {
        LogConfig::with_level("countries=debug,countries_core=debug,countries_search=debug")
    } else {
        LogConfig {
            level: config.schema.logging.level.clone(),
            show_target: config.schema.logging.show_target,
            ..LogConfig::default()
        }
    };
    if let Err(e) = countries_telemetry::init_with_config(log_config) {
        Status::warning(&e.to_string());
    }

    let ctx_json = cli.json;
    let ctx = commands::Context {
        config,
        data: cli.data,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Distance { a, b } => commands::distance(&ctx, &a, &b),
        Commands::Match { candidate, query } => {
            commands::fuzzy_match(&ctx, &candidate, query.as_deref())
        }
        Commands::Search { query, region, limit } => {
            commands::search(&ctx, query.as_deref(), region.as_deref(), limit.map(NonZeroUsize::get))
        }
        Commands::Show { code } => commands::show(&ctx, &code),
        Commands::Regions => commands::regions(&ctx),
    };

    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, ctx_json),
    }
}

/// Print an error (as an `ErrorReport` in JSON mode) and pick the exit code
fn report_error(err: &anyhow::Error, json: bool) -> ExitCode {
    let core = err.downcast_ref::<countries_core::Error>();

    if json {
        let report = match core {
            Some(e) => serde_json::to_value(e.to_report()),
            None => Ok(serde_json::json!({ "message": err.to_string() })),
        };
        match report {
            Ok(report) => eprintln!("{}", report),
            Err(_) => Status::error(&err.to_string()),
        }
    } else {
        Status::error(&err.to_string());
    }

    let code = core.map(|e| e.exit_code()).unwrap_or(exit_codes::FAILURE);
    ExitCode::from(code as u8)
}
