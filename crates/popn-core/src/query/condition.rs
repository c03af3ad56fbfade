//! Single-clause conditions.
//!
//! Each clause of a filter string becomes one [`Condition`]. Parsing tries
//! the clause shapes of [`CLAUSE_PARSERS`] in order and keeps the first that
//! accepts the tokens; several shapes share a token count, so the order is
//! part of the grammar.

use tracing::debug;

use crate::chart::{Chart, ChartContext, Difficulty, Folder, SranLevel};
use crate::config;
use crate::error::{Error, Result};
use crate::query::flag::FlagCondition;
use crate::query::operator::{EmhOperator, EqualityOperator, Operator};
use crate::query::tokenizer::tokenize;

/// Half-level bucket of a chart, derived from its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Emh {
    /// Rated at least half a level easier than displayed.
    E,
    M,
    /// Rated at least half a level harder than displayed.
    H,
}

impl Emh {
    pub fn from_rating(rating: f64) -> Self {
        if rating <= config::rating::EASY_BUCKET_MAX {
            Self::E
        } else if rating >= config::rating::HARD_BUCKET_MIN {
            Self::H
        } else {
            Self::M
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'e' => Some(Self::E),
            'm' => Some(Self::M),
            'h' => Some(Self::H),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::E => 'e',
            Self::M => 'm',
            Self::H => 'h',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `diff=` or `ver=` with nothing after it: matches no chart.
    False,
    /// `lv>=40`
    Level { operator: Operator, value: u8 },
    /// `lv>=40h`: level plus half-level bucket, compared as a pair.
    LevelEmh {
        operator: EmhOperator,
        level: u8,
        emh: Emh,
    },
    /// `rat>0.3`
    Rating { operator: Operator, value: f64 },
    /// `srlv<=05`
    SranLevel {
        operator: Operator,
        value: SranLevel,
    },
    /// `diff=enh`: any of the listed difficulties.
    Difficulty {
        operator: EqualityOperator,
        value: Vec<Difficulty>,
    },
    /// `holds`, `-buggedbpm`, `+omnimix`
    Flag(FlagCondition),
    /// `ver=cs`, `folder!=26`
    Folder {
        operator: EqualityOperator,
        value: Folder,
    },
}

type ClauseParser = fn(&[String]) -> Option<Condition>;

/// Clause shapes in precedence order.
const CLAUSE_PARSERS: [ClauseParser; 8] = [
    parse_false,
    parse_level,
    parse_level_emh,
    parse_rating,
    parse_sran_level,
    parse_difficulty,
    parse_flag,
    parse_folder,
];

impl Condition {
    /// Parse one clause of a filter string.
    pub fn parse(clause: &str) -> Result<Self> {
        let tokens = tokenize(&clause.to_lowercase());

        match CLAUSE_PARSERS.iter().find_map(|parse| parse(&tokens)) {
            Some(condition) => {
                debug!("Parsed clause [{}] as {}", clause.trim(), condition.kind());
                Ok(condition)
            }
            None => Err(Error::InvalidCondition {
                clause: clause.trim().to_string(),
                tokens,
            }),
        }
    }

    /// Short name of the condition type, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::False => "false",
            Self::Level { .. } => "level",
            Self::LevelEmh { .. } => "levelemh",
            Self::Rating { .. } => "rating",
            Self::SranLevel { .. } => "sranlevel",
            Self::Difficulty { .. } => "difficulty",
            Self::Flag(_) => "flag",
            Self::Folder { .. } => "folder",
        }
    }

    pub fn is_satisfied_by<C>(&self, chart: &Chart, context: &C) -> bool
    where
        C: ChartContext + ?Sized,
    {
        match self {
            Self::False => false,
            Self::Level { operator, value } => operator.compare(&chart.level, value),
            Self::LevelEmh {
                operator,
                level,
                emh,
            } => chart.rating.is_some_and(|rating| {
                operator.compare(&(chart.level, Emh::from_rating(rating)), &(*level, *emh))
            }),
            Self::Rating { operator, value } => chart
                .rating
                .is_some_and(|rating| compare_rating(*operator, rating, *value)),
            Self::SranLevel { operator, value } => chart
                .sran_level
                .is_some_and(|sran_level| operator.compare(&sran_level, value)),
            Self::Difficulty { operator, value } => {
                operator.test(value.contains(&chart.difficulty))
            }
            Self::Flag(flag) => flag.is_satisfied_by(chart, context),
            Self::Folder { operator, value } => operator.test(chart.in_folder(*value)),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the canonical clause; parsing it back yields an equal condition.
impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::False => write!(f, "diff="),
            Self::Level { operator, value } => write!(f, "lv{}{}", operator.as_str(), value),
            Self::LevelEmh {
                operator,
                level,
                emh,
            } => write!(f, "lv{}{}{}", operator.as_str(), level, emh.letter()),
            Self::Rating { operator, value } => write!(f, "rat{}{}", operator.as_str(), value),
            Self::SranLevel { operator, value } => {
                write!(f, "srlv{}{}", operator.as_str(), value.code())
            }
            Self::Difficulty { operator, value } => {
                let letters: String = value.iter().map(Difficulty::letter).collect();
                write!(f, "diff{}{}", operator.as_str(), letters)
            }
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Folder { operator, value } => write!(f, "ver{}{}", operator.as_str(), value),
        }
    }
}

/// Text form used for rating (in)equality.
///
/// Rounds to a fixed number of decimals and trims trailing zeros, so values
/// that differ only by binary rounding noise compare equal.
pub fn rating_text(rating: f64) -> String {
    let fixed = format!("{:.*}", config::rating::TEXT_PRECISION, rating);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn compare_rating(operator: Operator, rating: f64, value: f64) -> bool {
    match operator {
        Operator::Eq => rating_text(rating) == rating_text(value),
        Operator::Ne => rating_text(rating) != rating_text(value),
        _ => operator.compare(&rating, &value),
    }
}

/// Level operand: one or two digits within the level range.
fn parse_level_number(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse()
        .ok()
        .filter(|level| (config::level::MIN..=config::level::MAX).contains(level))
}

fn parse_false(tokens: &[String]) -> Option<Condition> {
    match tokens {
        [field, operator] if operator == "=" && matches!(field.as_str(), "diff" | "ver" | "folder") => {
            Some(Condition::False)
        }
        _ => None,
    }
}

fn parse_level(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "lv" {
        return None;
    }
    Some(Condition::Level {
        operator: Operator::parse(operator)?,
        value: parse_level_number(value)?,
    })
}

fn parse_level_emh(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "lv" {
        return None;
    }
    let emh = value.chars().last().and_then(Emh::from_letter)?;
    let level = parse_level_number(&value[..value.len() - 1])?;
    Some(Condition::LevelEmh {
        operator: EmhOperator::parse(operator)?,
        level,
        emh,
    })
}

fn parse_rating(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "rat" {
        return None;
    }
    Some(Condition::Rating {
        operator: Operator::parse(operator)?,
        value: value.parse::<f64>().ok().filter(|v| v.is_finite())?,
    })
}

fn parse_sran_level(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "srlv" {
        return None;
    }
    Some(Condition::SranLevel {
        operator: Operator::parse(operator)?,
        value: SranLevel::parse(value).ok()?,
    })
}

fn parse_difficulty(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "diff" {
        return None;
    }
    let mut difficulties = Vec::new();
    for letter in value.chars() {
        let difficulty = Difficulty::from_letter(letter)?;
        if !difficulties.contains(&difficulty) {
            difficulties.push(difficulty);
        }
    }
    Some(Condition::Difficulty {
        operator: EqualityOperator::parse(operator)?,
        value: difficulties,
    })
}

fn parse_flag(tokens: &[String]) -> Option<Condition> {
    match tokens {
        [token] => FlagCondition::parse(token).map(Condition::Flag),
        _ => None,
    }
}

fn parse_folder(tokens: &[String]) -> Option<Condition> {
    let [field, operator, value] = tokens else {
        return None;
    };
    if field != "folder" && field != "ver" {
        return None;
    }
    Some(Condition::Folder {
        operator: EqualityOperator::parse(operator)?,
        value: Folder::parse(value).ok()?,
    })
}
