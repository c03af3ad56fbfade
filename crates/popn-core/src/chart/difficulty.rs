use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Chart difficulty, declared in ascending order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[serde(rename = "e")]
    #[strum(to_string = "e", serialize = "easy")]
    Easy,
    #[serde(rename = "n")]
    #[strum(to_string = "n", serialize = "normal")]
    Normal,
    #[serde(rename = "h")]
    #[strum(to_string = "h", serialize = "hyper")]
    Hyper,
    #[serde(rename = "ex", alias = "x")]
    #[strum(to_string = "ex", serialize = "x", serialize = "extra")]
    Ex,
}

impl Difficulty {
    /// Parse any accepted spelling (`e`, `easy`, `ex`, `x`, ...).
    pub fn parse(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map_err(|_| Error::InvalidDifficulty(s.to_string()))
    }

    /// Map one letter of a `diff=` operand.
    ///
    /// The filter language spells EX as `x` so every difficulty is one letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'e' => Some(Self::Easy),
            'n' => Some(Self::Normal),
            'h' => Some(Self::Hyper),
            'x' => Some(Self::Ex),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::Easy => 'e',
            Self::Normal => 'n',
            Self::Hyper => 'h',
            Self::Ex => 'x',
        }
    }

    /// Canonical code (`e`, `n`, `h`, `ex`).
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hyper => "HYPER",
            Self::Ex => "EX",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
