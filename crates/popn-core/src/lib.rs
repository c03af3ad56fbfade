//! # popn-core
//!
//! Query engine for pop'n music chart catalogs.
//!
//! This crate provides:
//! - Chart records and their categorical fields (difficulty, sran level, folders)
//! - Snapshot loading from the chart database JSON export
//! - The filter-string language (`lv>=40h, diff=hx, -holds`)
//! - An immutable [`Catalog`] answering queries, structured filters and random samples

pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod query;
pub mod snapshot;

// Re-export from catalog module
pub use catalog::{Catalog, FilterOptions, IncludeOption};

// Re-export from chart module
pub use chart::{Chart, ChartBuilder, ChartContext, Difficulty, Folder, SranLevel};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from query module
pub use query::{Condition, ConditionSet, Flag, FlagCondition, FlagPolarity};

// Re-export from snapshot module
pub use snapshot::{load_snapshot, parse_snapshot};
