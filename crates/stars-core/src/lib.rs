//! Core types for star-history analysis.
//!
//! Holds the pair and weekday-total models, the error taxonomy, date
//! utilities, command-line settings and report formatting shared by the
//! data and binary crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, StarsError};
