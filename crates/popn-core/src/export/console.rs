//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::{Chart, Difficulty};
use crate::query::rating_text;

/// Format one chart as a single console line.
///
/// `1234h  [HYPER Lv.40]  srlv 05  rat +0.5  Title / Artist`
pub fn format_chart_line(chart: &Chart) -> String {
    let mut line = String::new();

    let _ = write!(
        line,
        "{:<10} [{} Lv.{:>2}]",
        chart.id,
        format_colored_difficulty(&chart.difficulty),
        chart.level
    );

    if let Some(sran_level) = chart.sran_level {
        let _ = write!(line, "  srlv {:<3}", sran_level.code());
    }
    if let Some(rating) = chart.rating {
        let _ = write!(line, "  rat {}", format_colored_rating(rating));
    }

    if !chart.title.is_empty() {
        let _ = write!(line, "  {}", chart.title.bold());
        if !chart.artist.is_empty() {
            let _ = write!(line, " / {}", chart.artist.dimmed());
        }
    }

    line
}

/// Format a list of charts followed by a match count.
pub fn format_chart_list(charts: &[&Chart]) -> String {
    let mut output = String::new();
    for chart in charts {
        let _ = writeln!(output, "{}", format_chart_line(chart));
    }
    let noun = if charts.len() == 1 { "chart" } else { "charts" };
    let _ = write!(output, "{}", format!("{} {}", charts.len(), noun).dimmed());
    output
}

/// Format difficulty with color
pub fn format_colored_difficulty(difficulty: &Difficulty) -> String {
    let name = difficulty.expand_name();
    match difficulty {
        Difficulty::Easy => name.blue().to_string(),
        Difficulty::Normal => name.green().to_string(),
        Difficulty::Hyper => name.yellow().to_string(),
        Difficulty::Ex => name.red().to_string(),
    }
}

/// Signed rating, red above the displayed level and cyan below it.
fn format_colored_rating(rating: f64) -> String {
    let text = rating_text(rating);
    if rating > 0.0 {
        format!("+{}", text).red().to_string()
    } else if text == "0" {
        text
    } else {
        text.cyan().to_string()
    }
}
