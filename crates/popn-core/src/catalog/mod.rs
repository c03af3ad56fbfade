//! In-memory chart catalog.
//!
//! A [`Catalog`] owns the chart records and answers filter queries against
//! them. It is immutable once built; every operation is a scan in catalog
//! order.

mod filter;
mod sample;

pub use filter::{FilterOptions, IncludeOption};
pub use sample::{sample_without_replacement, shuffle};

use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::{debug, error, info};

use crate::chart::{Chart, ChartContext, Difficulty};
use crate::error::{Error, Result};
use crate::query::ConditionSet;

#[derive(Debug, Clone)]
pub struct Catalog {
    charts: Vec<Chart>,
    hardest_by_song: HashMap<String, Difficulty>,
}

impl Catalog {
    /// Build a catalog from validated chart records.
    ///
    /// Fails on the first invalid record or repeated chart id.
    pub fn new(charts: Vec<Chart>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(charts.len());
        for chart in &charts {
            chart.validate()?;
            if !ids.insert(chart.id.as_str()) {
                return Err(Error::DuplicateChartId(chart.id.clone()));
            }
        }

        let mut hardest_by_song: HashMap<String, Difficulty> = HashMap::new();
        for chart in &charts {
            hardest_by_song
                .entry(chart.song_id.clone())
                .and_modify(|hardest| *hardest = (*hardest).max(chart.difficulty))
                .or_insert(chart.difficulty);
        }

        info!(
            "Catalog ready: {} charts across {} songs",
            charts.len(),
            hardest_by_song.len()
        );
        Ok(Self {
            charts,
            hardest_by_song,
        })
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Look up a chart by id, ignoring ASCII case (`1234EX` finds `1234ex`).
    pub fn find(&self, id: &str) -> Option<&Chart> {
        let id = id.trim();
        self.charts
            .iter()
            .find(|chart| chart.id.eq_ignore_ascii_case(id))
    }

    /// Look up several ids; the result lines up with the input.
    pub fn find_many<I, S>(&self, ids: I) -> Vec<Option<&Chart>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| self.find(id.as_ref())).collect()
    }

    /// Charts matching a filter string, in catalog order.
    ///
    /// A blank filter matches nothing. Omnimix and lively charts are left out
    /// unless the filter names them (`omnimix` or `+omnimix`).
    pub fn query(&self, query: &str) -> Result<Vec<&Chart>> {
        let conditions = ConditionSet::from_query(query)?;
        Ok(self.query_conditions(&conditions))
    }

    /// Charts matching an already parsed set, with the default exclusions.
    pub fn query_conditions(&self, conditions: &ConditionSet) -> Vec<&Chart> {
        let effective = conditions.with_default_exclusions();
        let matched: Vec<&Chart> = self
            .charts
            .iter()
            .filter(|chart| effective.is_satisfied_by(chart, self))
            .collect();

        debug!("Query [{}] matched {} chart(s)", effective, matched.len());
        matched
    }

    /// Up to `count` distinct random charts matching `query`.
    pub fn sample(&self, count: usize, query: &str) -> Result<Vec<&Chart>> {
        self.sample_with_rng(count, query, &mut rand::rng())
    }

    /// [`Catalog::sample`] with a caller-supplied random source.
    ///
    /// A zero count or blank filter is a caller error: it is logged and
    /// yields no charts rather than failing.
    pub fn sample_with_rng<R>(&self, count: usize, query: &str, rng: &mut R) -> Result<Vec<&Chart>>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            error!("Refusing to sample zero charts");
            return Ok(Vec::new());
        }
        if query.trim().is_empty() {
            error!("Refusing to sample with a blank filter");
            return Ok(Vec::new());
        }

        let matched = self.query(query)?;
        Ok(sample_without_replacement(matched, count, rng))
    }

    /// Charts matching structured filter options, in catalog order.
    ///
    /// Selects exactly what `query(&options.to_query())` selects.
    pub fn filter(&self, options: &FilterOptions) -> Vec<&Chart> {
        self.query_conditions(&options.to_condition_set())
    }

    /// Up to `count` distinct random charts matching `options`.
    pub fn sample_filtered<R>(&self, count: usize, options: &FilterOptions, rng: &mut R) -> Vec<&Chart>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            error!("Refusing to sample zero charts");
            return Vec::new();
        }
        sample_without_replacement(self.filter(options), count, rng)
    }
}

impl ChartContext for Catalog {
    fn hardest_difficulty(&self, song_id: &str) -> Option<Difficulty> {
        self.hardest_by_song.get(song_id).copied()
    }
}
