//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result, bail};
use popn_core::export::format_chart_list;
use popn_core::{Catalog, Chart, load_snapshot};
use tracing::debug;

/// Load the catalog named by `--catalog` or `POPN_CATALOG`.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let Some(path) = path else {
        bail!("No catalog given; pass --catalog FILE or set POPN_CATALOG");
    };
    debug!("Loading catalog from {}", path);

    let charts =
        load_snapshot(path).with_context(|| format!("Failed to load catalog from {}", path))?;
    Ok(Catalog::new(charts)?)
}

/// Print charts as a console list or as pretty JSON.
pub fn print_charts(charts: &[&Chart], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(charts)?);
    } else {
        println!("{}", format_chart_list(charts));
    }
    Ok(())
}
