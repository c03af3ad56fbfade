//! Sample command for picking random charts.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli_utils;

pub fn run(
    catalog: Option<&str>,
    filter: &str,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let catalog = cli_utils::load_catalog(catalog)?;

    let charts = match seed {
        Some(seed) => catalog.sample_with_rng(count, filter, &mut StdRng::seed_from_u64(seed))?,
        None => catalog.sample(count, filter)?,
    };
    cli_utils::print_charts(&charts, json)
}
