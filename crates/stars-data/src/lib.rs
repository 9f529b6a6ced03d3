//! Data layer for star-history analysis.
//!
//! Reads the two-row star-history CSV, builds dated pairs, differences them,
//! aggregates the deltas per weekday and runs the top-level pipeline.

pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod reader;

pub use stars_core as core;
