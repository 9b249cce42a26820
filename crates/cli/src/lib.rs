//! Terminal output helpers for the countries tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Country list and detail rendering

#![warn(missing_docs)]

pub mod output;
