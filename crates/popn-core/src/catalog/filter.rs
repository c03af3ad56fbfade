//! Structured filter options.
//!
//! [`FilterOptions`] expresses the common filters as explicit bounds instead
//! of a filter string. Options lower to a [`ConditionSet`], so both paths share
//! one evaluator; [`FilterOptions::to_query`] renders the equivalent string.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

use crate::chart::{Difficulty, SranLevel};
use crate::config;
use crate::query::{
    Condition, ConditionSet, EqualityOperator, Flag, FlagCondition, FlagPolarity, Operator,
};

/// What to do with charts that have a given fact.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IncludeOption {
    /// No constraint.
    #[default]
    Include,
    /// Drop charts with the fact.
    Exclude,
    /// Keep only charts with the fact.
    Only,
}

impl IncludeOption {
    fn polarity(self) -> FlagPolarity {
        match self {
            Self::Include => FlagPolarity::Allow,
            Self::Exclude => FlagPolarity::Forbid,
            Self::Only => FlagPolarity::Require,
        }
    }
}

impl std::fmt::Display for IncludeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub level_min: u8,
    pub level_max: u8,
    /// Unrated charts are dropped once either rating bound is set.
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    /// Charts without a sran level are dropped once either bound is set.
    pub sran_level_min: Option<SranLevel>,
    pub sran_level_max: Option<SranLevel>,
    pub include_easy: bool,
    pub include_normal: bool,
    pub include_hyper: bool,
    pub include_ex: bool,
    pub hardest: IncludeOption,
    pub floor_infection: IncludeOption,
    pub bugged_bpm: IncludeOption,
    pub bpm_changes: IncludeOption,
    pub holds: IncludeOption,
    pub upper: IncludeOption,
    pub ura: IncludeOption,
    pub omnimix: IncludeOption,
    pub lively: IncludeOption,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            level_min: config::level::MIN,
            level_max: config::level::MAX,
            rating_min: None,
            rating_max: None,
            sran_level_min: None,
            sran_level_max: None,
            include_easy: true,
            include_normal: true,
            include_hyper: true,
            include_ex: true,
            hardest: IncludeOption::Include,
            floor_infection: IncludeOption::Include,
            bugged_bpm: IncludeOption::Include,
            bpm_changes: IncludeOption::Include,
            holds: IncludeOption::Include,
            upper: IncludeOption::Include,
            ura: IncludeOption::Include,
            omnimix: IncludeOption::Exclude,
            lively: IncludeOption::Exclude,
        }
    }
}

impl FilterOptions {
    /// Difficulties selected by the `include_*` switches, ascending.
    pub fn difficulties(&self) -> Vec<Difficulty> {
        [
            (self.include_easy, Difficulty::Easy),
            (self.include_normal, Difficulty::Normal),
            (self.include_hyper, Difficulty::Hyper),
            (self.include_ex, Difficulty::Ex),
        ]
        .into_iter()
        .filter_map(|(included, difficulty)| included.then_some(difficulty))
        .collect()
    }

    fn flag_options(&self) -> [(Flag, IncludeOption); 9] {
        [
            (Flag::Hardest, self.hardest),
            (Flag::FloorInfection, self.floor_infection),
            (Flag::BuggedBpm, self.bugged_bpm),
            (Flag::BpmChanges, self.bpm_changes),
            (Flag::Holds, self.holds),
            (Flag::Upper, self.upper),
            (Flag::Ura, self.ura),
            (Flag::Omnimix, self.omnimix),
            (Flag::Lively, self.lively),
        ]
    }

    /// Lower the options to an equivalent condition set.
    pub fn to_condition_set(&self) -> ConditionSet {
        let mut conditions = Vec::new();

        if self.level_max < config::level::MIN
            || self.level_min > config::level::MAX
            || self.level_min > self.level_max
        {
            conditions.push(Condition::False);
        } else {
            if self.level_min > config::level::MIN {
                conditions.push(Condition::Level {
                    operator: Operator::Ge,
                    value: self.level_min,
                });
            }
            if self.level_max < config::level::MAX {
                conditions.push(Condition::Level {
                    operator: Operator::Le,
                    value: self.level_max,
                });
            }
        }

        for (bound, operator) in [(self.rating_min, Operator::Ge), (self.rating_max, Operator::Le)] {
            match bound {
                Some(value) if value.is_finite() => {
                    conditions.push(Condition::Rating { operator, value })
                }
                Some(value) => warn!("Ignoring non-finite rating bound {}", value),
                None => {}
            }
        }

        for (bound, operator) in [
            (self.sran_level_min, Operator::Ge),
            (self.sran_level_max, Operator::Le),
        ] {
            if let Some(value) = bound {
                conditions.push(Condition::SranLevel { operator, value });
            }
        }

        let difficulties = self.difficulties();
        if difficulties.is_empty() {
            conditions.push(Condition::False);
        } else if difficulties.len() < 4 {
            conditions.push(Condition::Difficulty {
                operator: EqualityOperator::Eq,
                value: difficulties,
            });
        }

        for (flag, option) in self.flag_options() {
            // Plain `Include` is a no-op except where it cancels a default exclusion.
            if option == IncludeOption::Include
                && !config::query::DEFAULT_EXCLUDED_FLAGS.contains(&flag)
            {
                continue;
            }
            conditions.push(Condition::Flag(FlagCondition::new(flag, option.polarity())));
        }

        ConditionSet::new(conditions)
    }

    /// Filter string selecting the same charts as these options.
    pub fn to_query(&self) -> String {
        self.to_condition_set().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_query() {
        assert_eq!(FilterOptions::default().to_query(), "-omnimix,-lively");
    }

    #[test]
    fn test_bounds_render_as_clauses() {
        let options = FilterOptions {
            level_min: 30,
            level_max: 45,
            rating_min: Some(-0.5),
            sran_level_max: Some(SranLevel::Lv05),
            include_easy: false,
            include_normal: false,
            hardest: IncludeOption::Only,
            bugged_bpm: IncludeOption::Exclude,
            omnimix: IncludeOption::Include,
            ..Default::default()
        };
        assert_eq!(
            options.to_query(),
            "lv>=30,lv<=45,rat>=-0.5,srlv<=05,diff=hx,hardest,-buggedbpm,+omnimix,-lively"
        );
    }

    #[test]
    fn test_no_difficulties_matches_nothing() {
        let options = FilterOptions {
            include_easy: false,
            include_normal: false,
            include_hyper: false,
            include_ex: false,
            ..Default::default()
        };
        assert!(options.to_condition_set().conditions().contains(&Condition::False));
    }

    #[test]
    fn test_impossible_level_range() {
        for (level_min, level_max) in [(40, 30), (0, 0), (51, 60)] {
            let options = FilterOptions {
                level_min,
                level_max,
                ..Default::default()
            };
            assert_eq!(options.to_condition_set().conditions()[0], Condition::False);
        }
    }

    #[test]
    fn test_out_of_range_bounds_are_clamped() {
        let options = FilterOptions {
            level_min: 0,
            level_max: 99,
            ..Default::default()
        };
        assert_eq!(options.to_query(), "-omnimix,-lively");
    }

    #[test]
    fn test_non_finite_rating_bound_ignored() {
        let options = FilterOptions {
            rating_max: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(options.to_query(), "-omnimix,-lively");
    }

    #[test]
    fn test_query_reparses_to_same_set() {
        let options = FilterOptions {
            level_min: 10,
            rating_max: Some(0.25),
            sran_level_min: Some(SranLevel::Lv01b),
            include_hyper: false,
            ura: IncludeOption::Only,
            lively: IncludeOption::Include,
            ..Default::default()
        };
        let reparsed = ConditionSet::from_query(&options.to_query()).unwrap();
        assert_eq!(reparsed, options.to_condition_set());
    }

    #[test]
    fn test_large_fractional_rating_bound_reparses() {
        let options = FilterOptions {
            rating_max: Some(12.5),
            ..Default::default()
        };
        assert_eq!(options.to_query(), "rat<=12.5,-omnimix,-lively");
        let reparsed = ConditionSet::from_query(&options.to_query()).unwrap();
        assert_eq!(reparsed, options.to_condition_set());
    }

    #[test]
    fn test_include_option_parse() {
        assert_eq!("only".parse::<IncludeOption>().unwrap(), IncludeOption::Only);
        assert_eq!("EXCLUDE".parse::<IncludeOption>().unwrap(), IncludeOption::Exclude);
        assert!("maybe".parse::<IncludeOption>().is_err());
        assert_eq!(IncludeOption::Include.to_string(), "include");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FilterOptions =
            serde_json::from_str(r#"{"level_min": 20, "hardest": "only"}"#).unwrap();
        assert_eq!(options.level_min, 20);
        assert_eq!(options.level_max, 50);
        assert_eq!(options.hardest, IncludeOption::Only);
        assert_eq!(options.omnimix, IncludeOption::Exclude);
    }
}
