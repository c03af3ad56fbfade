//! Filter command for listing charts that match structured bounds.

use anyhow::{Result, bail};
use popn_core::{Difficulty, FilterOptions};

use crate::cli::FilterArgs;
use crate::cli_utils;

pub fn run(catalog: Option<&str>, args: &FilterArgs) -> Result<()> {
    let options = to_options(args)?;
    let catalog = cli_utils::load_catalog(catalog)?;

    if args.show_query {
        eprintln!("query: {}", options.to_query());
    }
    let charts = catalog.filter(&options);
    cli_utils::print_charts(&charts, args.json)
}

fn to_options(args: &FilterArgs) -> Result<FilterOptions> {
    let mut selected = Vec::new();
    for letter in args.difficulties.to_lowercase().chars() {
        match Difficulty::from_letter(letter) {
            Some(difficulty) => selected.push(difficulty),
            None => bail!("Unknown difficulty letter '{}' (expected e, n, h or x)", letter),
        }
    }

    Ok(FilterOptions {
        level_min: args.level_min,
        level_max: args.level_max,
        rating_min: args.rating_min,
        rating_max: args.rating_max,
        sran_level_min: args.sran_min,
        sran_level_max: args.sran_max,
        include_easy: selected.contains(&Difficulty::Easy),
        include_normal: selected.contains(&Difficulty::Normal),
        include_hyper: selected.contains(&Difficulty::Hyper),
        include_ex: selected.contains(&Difficulty::Ex),
        hardest: args.hardest,
        floor_infection: args.floor_infection,
        bugged_bpm: args.bugged_bpm,
        bpm_changes: args.bpm_changes,
        holds: args.holds,
        upper: args.upper,
        ura: args.ura,
        omnimix: args.omnimix,
        lively: args.lively,
    })
}
