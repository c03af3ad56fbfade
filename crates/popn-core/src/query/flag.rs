use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::chart::{Chart, ChartContext, is_hardest_for_song};

/// Boolean facts a clause can test by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Flag {
    BuggedBpm,
    #[strum(to_string = "bpmchanges", serialize = "soflan")]
    BpmChanges,
    Hardest,
    Holds,
    FloorInfection,
    Upper,
    Ura,
    Eemall,
    Omnimix,
    Lively,
}

impl Flag {
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Song label backing this flag, for label-based flags.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::FloorInfection => Some("floor_infection"),
            Self::Upper => Some("upper"),
            Self::Ura => Some("ura"),
            Self::Eemall => Some("eemall"),
            Self::Omnimix => Some("omnimix"),
            Self::Lively => Some("lively"),
            Self::BuggedBpm | Self::BpmChanges | Self::Hardest | Self::Holds => None,
        }
    }

    /// Whether the fact holds for `chart`.
    pub fn holds_for<C>(&self, chart: &Chart, context: &C) -> bool
    where
        C: ChartContext + ?Sized,
    {
        match self {
            Self::BuggedBpm => chart.has_bugged_bpm(),
            Self::BpmChanges => chart.has_bpm_changes(),
            Self::Hardest => is_hardest_for_song(chart, context),
            Self::Holds => chart.has_holds,
            Self::FloorInfection
            | Self::Upper
            | Self::Ura
            | Self::Eemall
            | Self::Omnimix
            | Self::Lively => self.label().is_some_and(|label| chart.has_label(label)),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a flag clause uses its fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagPolarity {
    /// `holds`: the fact must hold.
    Require,
    /// `-holds` or `!holds`: the fact must not hold.
    Forbid,
    /// `+omnimix`: no constraint; cancels a default exclusion.
    Allow,
}

impl FlagPolarity {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Require => "",
            Self::Forbid => "-",
            Self::Allow => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagCondition {
    pub flag: Flag,
    pub polarity: FlagPolarity,
}

impl FlagCondition {
    pub fn new(flag: Flag, polarity: FlagPolarity) -> Self {
        Self { flag, polarity }
    }

    /// Parse a single flag token such as `holds`, `-ura` or `+omnimix`.
    pub fn parse(token: &str) -> Option<Self> {
        let (polarity, name) = if let Some(name) = token.strip_prefix('+') {
            (FlagPolarity::Allow, name)
        } else if let Some(name) = token.strip_prefix(['-', '!']) {
            (FlagPolarity::Forbid, name)
        } else {
            (FlagPolarity::Require, token)
        };
        Flag::parse(name).map(|flag| Self::new(flag, polarity))
    }

    pub fn is_satisfied_by<C>(&self, chart: &Chart, context: &C) -> bool
    where
        C: ChartContext + ?Sized,
    {
        match self.polarity {
            FlagPolarity::Require => self.flag.holds_for(chart, context),
            FlagPolarity::Forbid => !self.flag.holds_for(chart, context),
            FlagPolarity::Allow => true,
        }
    }

    /// Whether this clause opts back into `flag` (`flag` or `+flag`).
    pub fn opts_into(&self, flag: Flag) -> bool {
        self.flag == flag && self.polarity != FlagPolarity::Forbid
    }
}

impl std::fmt::Display for FlagCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.polarity.prefix(), self.flag)
    }
}
