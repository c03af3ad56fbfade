//! BPM display string analysis.
//!
//! Display strings come in many shapes (`150`, `100-200`, `90/180`,
//! `100, 200, 50`); only the integer runs inside them matter here.

use std::sync::LazyLock;

use regex::Regex;

use crate::config;

static INTEGER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid integer run pattern"));

/// Every integer run in a BPM display string, in order of appearance.
///
/// Runs too large for `u32` are skipped.
pub fn bpm_values(display: &str) -> Vec<u32> {
    INTEGER_RUN
        .find_iter(display)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Whether a single tempo renders with visible timing jitter in game.
///
/// Happens when 3600 divides evenly by the tempo. Zero is never bugged.
pub fn is_bugged_bpm(bpm: u32) -> bool {
    bpm != 0 && config::bpm::BUGGED_DIVIDEND % bpm == 0
}

/// Whether any tempo of the display string is bugged.
pub fn has_bugged_bpm(display: &str) -> bool {
    bpm_values(display).into_iter().any(is_bugged_bpm)
}

/// Whether the display string lists more than one tempo.
pub fn has_bpm_changes(display: &str) -> bool {
    bpm_values(display).len() > 1
}
