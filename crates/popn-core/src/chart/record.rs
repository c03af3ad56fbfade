use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::chart::{Difficulty, Folder, SranLevel, bpm};
use crate::config;
use crate::error::{Error, Result};

/// One playable difficulty of a song.
///
/// Built through [`ChartBuilder`], which enforces the field invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub id: String,
    pub song_id: String,
    pub difficulty: Difficulty,
    pub level: u8,
    /// Fine adjustment around `level`; `None` when the chart is unrated.
    pub rating: Option<f64>,
    pub sran_level: Option<SranLevel>,
    /// BPM as displayed in game, e.g. `150` or `100-200`.
    pub bpm: String,
    pub has_holds: bool,
    pub folders: Vec<Folder>,
    pub song_labels: BTreeSet<String>,
    pub title: String,
    pub genre: String,
    pub artist: String,
    pub notes: Option<u32>,
    /// Length in seconds.
    pub duration: Option<u32>,
}

impl Chart {
    pub fn builder(
        id: impl Into<String>,
        song_id: impl Into<String>,
        difficulty: Difficulty,
        level: u8,
    ) -> ChartBuilder {
        ChartBuilder::new(id, song_id, difficulty, level)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.song_labels.contains(label)
    }

    pub fn in_folder(&self, folder: Folder) -> bool {
        self.folders.contains(&folder)
    }

    pub fn has_bugged_bpm(&self) -> bool {
        bpm::has_bugged_bpm(&self.bpm)
    }

    pub fn has_bpm_changes(&self) -> bool {
        bpm::has_bpm_changes(&self.bpm)
    }

    /// Check the invariants a chart must hold to enter a catalog.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidChart {
            id: self.id.clone(),
            reason,
        };

        if self.id.is_empty() {
            return Err(invalid("empty id".to_string()));
        }
        if !(config::level::MIN..=config::level::MAX).contains(&self.level) {
            return Err(invalid(format!(
                "level {} outside {}..={}",
                self.level,
                config::level::MIN,
                config::level::MAX
            )));
        }
        if let Some(rating) = self.rating
            && !rating.is_finite()
        {
            return Err(invalid(format!("non-finite rating {}", rating)));
        }
        Ok(())
    }
}

/// Builder for [`Chart`].
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    chart: Chart,
}

impl ChartBuilder {
    pub fn new(
        id: impl Into<String>,
        song_id: impl Into<String>,
        difficulty: Difficulty,
        level: u8,
    ) -> Self {
        Self {
            chart: Chart {
                id: id.into(),
                song_id: song_id.into(),
                difficulty,
                level,
                rating: None,
                sran_level: None,
                bpm: String::new(),
                has_holds: false,
                folders: Vec::new(),
                song_labels: BTreeSet::new(),
                title: String::new(),
                genre: String::new(),
                artist: String::new(),
                notes: None,
                duration: None,
            },
        }
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.chart.rating = Some(rating);
        self
    }

    pub fn sran_level(mut self, sran_level: SranLevel) -> Self {
        self.chart.sran_level = Some(sran_level);
        self
    }

    pub fn bpm(mut self, bpm: impl Into<String>) -> Self {
        self.chart.bpm = bpm.into();
        self
    }

    pub fn holds(mut self, has_holds: bool) -> Self {
        self.chart.has_holds = has_holds;
        self
    }

    pub fn folder(mut self, folder: Folder) -> Self {
        if !self.chart.folders.contains(&folder) {
            self.chart.folders.push(folder);
        }
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.chart.song_labels.insert(label.into());
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chart
            .song_labels
            .extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.chart.title = title.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.chart.genre = genre.into();
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.chart.artist = artist.into();
        self
    }

    pub fn notes(mut self, notes: u32) -> Self {
        self.chart.notes = Some(notes);
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.chart.duration = Some(seconds);
        self
    }

    pub fn build(self) -> Result<Chart> {
        self.chart.validate()?;
        Ok(self.chart)
    }
}
