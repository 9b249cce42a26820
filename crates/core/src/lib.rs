//! Core domain for the countries explorer
//!
//! This crate provides the pieces shared by the CLI and other front-ends:
//!
//! - **Domain types**: [`Country`] and [`Currency`] in REST Countries v2 shape
//! - **Catalog**: code, region and fuzzy name lookups over a country list
//! - **Formatting**: population figures for display
//! - **Configuration**: TOML-based configuration with validation
//! - **Error handling**: errors with codes, context and recovery suggestions
//!
//! # Example
//!
//! ```rust
//! use countries_core::CountryCatalog;
//!
//! let catalog = CountryCatalog::bundled().expect("bundled data parses");
//! let hits = catalog.search(Some("Grmany"), None);
//! assert_eq!(hits[0].alpha3_code, "DEU");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod country;
pub mod error;
pub mod format;

pub use catalog::CountryCatalog;
pub use country::{Country, Currency};
pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::CountryCatalog;
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::country::{Country, Currency};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::format::format_population;
    pub use countries_search::{CaseFolding, MatchOptions};
}
