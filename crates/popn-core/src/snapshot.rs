//! JSON catalog snapshot reading.
//!
//! A snapshot is a JSON array of chart objects. Several catalog generations
//! exist, so a few fields accept more than one shape (see [`RawChart`]).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::chart::{Chart, Difficulty, Folder, SranLevel};
use crate::error::{Error, Result};

/// Debut tag marking charts from the CS lively packs.
const LIVELY_DEBUT: &str = "cslively";
const EEMALL_DEBUT: &str = "eemall";

/// One chart entry as stored in a snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChart {
    pub id: String,
    pub sid: RawId,
    pub diff: String,
    pub lv: u8,
    #[serde(default)]
    pub bpm: Option<RawBpm>,
    #[serde(default)]
    pub notes: Option<u32>,
    #[serde(default)]
    pub holds: u32,
    #[serde(default)]
    pub dur: Option<u32>,
    #[serde(default)]
    pub jk: Option<RawJk>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub debut: Option<String>,
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Song id, stored as text or as a number depending on the generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(u64),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBpm {
    pub disp: String,
}

/// Community difficulty data attached to a chart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJk {
    #[serde(default)]
    pub rating: Option<RawNumber>,
    #[serde(default)]
    pub srlv: Option<RawSranLevel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSranLevel {
    Number(u8),
    Code(String),
}

impl RawChart {
    /// Validate and convert into a [`Chart`].
    pub fn into_chart(self) -> Result<Chart> {
        let id = self.id;
        let invalid = |reason: String| Error::InvalidChart {
            id: id.clone(),
            reason,
        };

        let difficulty = Difficulty::parse(&self.diff).map_err(|e| invalid(e.to_string()))?;
        let mut builder = Chart::builder(id.clone(), self.sid.to_string(), difficulty, self.lv)
            .holds(self.holds > 0)
            .title(self.title)
            .genre(self.genre)
            .artist(self.artist)
            .labels(self.labels);

        if let Some(bpm) = self.bpm {
            builder = builder.bpm(bpm.disp);
        }
        if let Some(notes) = self.notes {
            builder = builder.notes(notes);
        }
        if let Some(duration) = self.dur {
            builder = builder.duration(duration);
        }

        let jk = self.jk.unwrap_or_default();
        if let Some(rating) = jk.rating {
            let value = match rating {
                RawNumber::Number(n) => n,
                RawNumber::Text(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("invalid rating {:?}", s)))?,
            };
            builder = builder.rating(value);
        }
        if let Some(srlv) = jk.srlv {
            let level = match srlv {
                RawSranLevel::Number(n) => SranLevel::from_number(n),
                RawSranLevel::Code(code) => SranLevel::parse(&code),
            }
            .map_err(|e| invalid(e.to_string()))?;
            builder = builder.sran_level(level);
        }

        for folder in &self.folders {
            builder = builder.folder(Folder::parse(folder).map_err(|e| invalid(e.to_string()))?);
        }

        match self.debut.as_deref() {
            Some(LIVELY_DEBUT) => builder = builder.label("lively"),
            Some(EEMALL_DEBUT) => builder = builder.label("eemall"),
            _ => {}
        }

        builder.build()
    }
}

/// Parse snapshot JSON into validated charts.
pub fn parse_snapshot(json: &str) -> Result<Vec<Chart>> {
    let raw: Vec<RawChart> = serde_json::from_str(json)?;
    let charts = raw
        .into_iter()
        .map(RawChart::into_chart)
        .collect::<Result<Vec<_>>>()?;

    let unrated = charts.iter().filter(|c| c.rating.is_none()).count();
    if !charts.is_empty() && unrated == charts.len() {
        warn!("Snapshot has no rated charts; rating conditions will match nothing");
    }

    Ok(charts)
}

/// Read and parse a snapshot file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Chart>> {
    let content = fs::read_to_string(&path)?;
    let charts = parse_snapshot(&content)?;
    info!(
        "Loaded {} charts from {}",
        charts.len(),
        path.as_ref().display()
    );
    Ok(charts)
}
