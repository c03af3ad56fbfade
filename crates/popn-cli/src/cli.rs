//! CLI argument definitions for popn.

use clap::{Parser, Subcommand};
use popn_core::{IncludeOption, SranLevel};

#[derive(Parser)]
#[command(name = "popn")]
#[command(about = "Query pop'n music chart catalogs", version)]
pub struct Args {
    /// Catalog snapshot (JSON)
    #[arg(long, value_name = "FILE", env = "POPN_CATALOG")]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up charts by id
    Find {
        /// Chart ids, e.g. 1234h
        #[arg(required = true)]
        ids: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List charts matching a filter string
    Query {
        /// Filter string, e.g. "lv>=40h, diff=hx, -holds"
        #[arg(allow_hyphen_values = true)]
        filter: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick random charts matching a filter string
    Sample {
        /// Filter string
        #[arg(allow_hyphen_values = true)]
        filter: String,
        /// Number of charts to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List charts matching structured bounds
    Filter(FilterArgs),
    /// Show how a filter string is understood
    Parse {
        /// Filter string
        #[arg(allow_hyphen_values = true)]
        filter: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Lowest level
    #[arg(long, default_value = "1")]
    pub level_min: u8,
    /// Highest level
    #[arg(long, default_value = "50")]
    pub level_max: u8,
    /// Lowest rating
    #[arg(long, allow_hyphen_values = true)]
    pub rating_min: Option<f64>,
    /// Highest rating
    #[arg(long, allow_hyphen_values = true)]
    pub rating_max: Option<f64>,
    /// Lowest sran level, e.g. 01b
    #[arg(long)]
    pub sran_min: Option<SranLevel>,
    /// Highest sran level
    #[arg(long)]
    pub sran_max: Option<SranLevel>,
    /// Difficulty letters to keep (e, n, h, x)
    #[arg(long, default_value = "enhx")]
    pub difficulties: String,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub hardest: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub floor_infection: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub bugged_bpm: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub bpm_changes: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub holds: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub upper: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Include)]
    pub ura: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Exclude)]
    pub omnimix: IncludeOption,
    #[arg(long, value_name = "MODE", default_value_t = IncludeOption::Exclude)]
    pub lively: IncludeOption,
    /// Print the equivalent filter string before the results
    #[arg(long)]
    pub show_query: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
