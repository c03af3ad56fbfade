//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod filter;
pub mod find;
pub mod parse;
pub mod query;
pub mod sample;
