//! Catalog-wide facts a condition may need beyond a single chart.

use crate::chart::{Chart, Difficulty};

/// Access to facts that depend on the other charts of a catalog.
///
/// Implemented by plain chart slices (linear scan) and by
/// [`Catalog`](crate::catalog::Catalog) (precomputed lookup).
pub trait ChartContext {
    /// Highest difficulty among the charts of a song, if the song is known.
    fn hardest_difficulty(&self, song_id: &str) -> Option<Difficulty>;
}

impl ChartContext for [Chart] {
    fn hardest_difficulty(&self, song_id: &str) -> Option<Difficulty> {
        self.iter()
            .filter(|c| c.song_id == song_id)
            .map(|c| c.difficulty)
            .max()
    }
}

impl ChartContext for Vec<Chart> {
    fn hardest_difficulty(&self, song_id: &str) -> Option<Difficulty> {
        self.as_slice().hardest_difficulty(song_id)
    }
}

/// Whether `chart` is the hardest difficulty of its song.
///
/// Charts tied for the top difficulty all qualify.
pub fn is_hardest_for_song<C>(chart: &Chart, context: &C) -> bool
where
    C: ChartContext + ?Sized,
{
    context.hardest_difficulty(&chart.song_id) == Some(chart.difficulty)
}
