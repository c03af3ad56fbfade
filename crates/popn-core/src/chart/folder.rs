use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Error, Result};

/// Folder a song is listed under in the music select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Folder {
    /// Consumer-exclusive songs.
    Cs,
    /// Numbered arcade version folder.
    Version(u8),
    /// BEMANI crossover category.
    Bemani,
}

impl Folder {
    /// Parse a folder tag: `cs`, `bemani`, or a version number (`1`, `01`, `26`).
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "cs" => return Ok(Self::Cs),
            "bemani" => return Ok(Self::Bemani),
            _ => {}
        }

        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFolder(s.to_string()));
        }
        match s.parse::<u8>() {
            Ok(version) if (1..=config::folder::LATEST_VERSION).contains(&version) => {
                Ok(Self::Version(version))
            }
            _ => Err(Error::InvalidFolder(s.to_string())),
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cs => write!(f, "cs"),
            Self::Version(version) => write!(f, "{}", version),
            Self::Bemani => write!(f, "bemani"),
        }
    }
}

impl std::str::FromStr for Folder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Folder {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Folder> for String {
    fn from(value: Folder) -> Self {
        value.to_string()
    }
}
