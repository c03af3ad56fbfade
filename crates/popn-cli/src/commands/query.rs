//! Query command for listing charts that match a filter string.

use anyhow::Result;

use crate::cli_utils;

pub fn run(catalog: Option<&str>, filter: &str, json: bool) -> Result<()> {
    let catalog = cli_utils::load_catalog(catalog)?;
    let charts = catalog.query(filter)?;
    cli_utils::print_charts(&charts, json)
}
