//! Find command for looking up charts by id.

use anyhow::Result;
use popn_core::export::format_chart_line;

use crate::cli_utils;

pub fn run(catalog: Option<&str>, ids: &[String], json: bool) -> Result<()> {
    let catalog = cli_utils::load_catalog(catalog)?;
    let found = catalog.find_many(ids);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    for (id, chart) in ids.iter().zip(&found) {
        match chart {
            Some(chart) => println!("{}", format_chart_line(chart)),
            None => println!("{}: not found", id),
        }
    }
    Ok(())
}
