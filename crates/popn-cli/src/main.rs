mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Without RUST_LOG only warnings and errors are shown
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("popn=warn,popn_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = args.catalog.as_deref();
    match args.command {
        Command::Find { ids, json } => commands::find::run(catalog, &ids, json),
        Command::Query { filter, json } => commands::query::run(catalog, &filter, json),
        Command::Sample {
            filter,
            count,
            seed,
            json,
        } => commands::sample::run(catalog, &filter, count, seed, json),
        Command::Filter(filter_args) => commands::filter::run(catalog, &filter_args),
        Command::Parse { filter } => commands::parse::run(&filter),
    }
}
