use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Community "sran" difficulty, declared in ascending order.
///
/// Codes are zero padded, so ordinal order and lexicographic order of
/// [`SranLevel::code`] agree.
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
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum SranLevel {
    #[strum(serialize = "01a")]
    Lv01a,
    #[strum(serialize = "01b")]
    Lv01b,
    #[strum(serialize = "02a")]
    Lv02a,
    #[strum(serialize = "02b")]
    Lv02b,
    #[strum(serialize = "03")]
    Lv03,
    #[strum(serialize = "04")]
    Lv04,
    #[strum(serialize = "05")]
    Lv05,
    #[strum(serialize = "06")]
    Lv06,
    #[strum(serialize = "07")]
    Lv07,
    #[strum(serialize = "08")]
    Lv08,
    #[strum(serialize = "09")]
    Lv09,
    #[strum(serialize = "10")]
    Lv10,
    #[strum(serialize = "11")]
    Lv11,
    #[strum(serialize = "12")]
    Lv12,
    #[strum(serialize = "13")]
    Lv13,
    #[strum(serialize = "14")]
    Lv14,
    #[strum(serialize = "15")]
    Lv15,
    #[strum(serialize = "16")]
    Lv16,
    #[strum(serialize = "17")]
    Lv17,
    #[strum(serialize = "18")]
    Lv18,
    #[strum(serialize = "19")]
    Lv19,
}

impl SranLevel {
    /// Parse a sran code, normalizing the accepted spellings.
    ///
    /// `2a`, `2-`, `2弱` and `02a` all parse to [`SranLevel::Lv02a`];
    /// `+` and `強` mark the upper sublevel. Single digits are zero padded.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '弱' => 'a',
                '+' | '強' => 'b',
                other => other,
            })
            .collect();

        let (digits, sublevel) = match normalized.chars().last() {
            Some(c @ ('a' | 'b')) => (&normalized[..normalized.len() - 1], Some(c)),
            _ => (normalized.as_str(), None),
        };

        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidSranLevel(s.to_string()));
        }
        let number: u8 = digits
            .parse()
            .map_err(|_| Error::InvalidSranLevel(s.to_string()))?;

        let index = match (number, sublevel) {
            (1, Some('a')) => 0,
            (1, Some('b')) => 1,
            (2, Some('a')) => 2,
            (2, Some('b')) => 3,
            (3..=19, None) => number + 1,
            _ => return Err(Error::InvalidSranLevel(s.to_string())),
        };

        Self::from_repr(index).ok_or_else(|| Error::InvalidSranLevel(s.to_string()))
    }

    /// Map a bare numeric sran level.
    ///
    /// Some catalog generations store sran levels as plain integers; `1` and
    /// `2` then stand for the lower sublevel.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::Lv01a),
            2 => Ok(Self::Lv02a),
            3..=19 => Self::from_repr(number + 1)
                .ok_or_else(|| Error::InvalidSranLevel(number.to_string())),
            _ => Err(Error::InvalidSranLevel(number.to_string())),
        }
    }

    /// Canonical zero-padded code, e.g. `01a` or `12`.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SranLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for SranLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SranLevel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SranLevel> for String {
    fn from(value: SranLevel) -> Self {
        value.code().to_string()
    }
}
