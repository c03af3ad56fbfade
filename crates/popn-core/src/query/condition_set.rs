use tracing::debug;

use crate::chart::{Chart, ChartContext};
use crate::config;
use crate::error::{Error, Result};
use crate::query::condition::Condition;
use crate::query::flag::{Flag, FlagCondition, FlagPolarity};

/// Conjunction of conditions parsed from one filter string.
///
/// An empty set matches no chart, so a blank query never returns the whole
/// catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Parse a comma-separated filter string.
    ///
    /// Blank clauses are skipped, so `""` yields the empty set and a trailing
    /// comma is harmless. The first invalid clause fails the whole query.
    pub fn from_query(query: &str) -> Result<Self> {
        let conditions = query
            .split(config::query::CLAUSE_SEPARATOR)
            .filter(|clause| !clause.trim().is_empty())
            .map(Condition::parse)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Parsed query [{}] into {} condition(s)",
            query.trim(),
            conditions.len()
        );
        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a condition opts into `flag`, either bare (`omnimix`) or as an
    /// override (`+omnimix`).
    pub fn opts_into(&self, flag: Flag) -> bool {
        self.conditions.iter().any(|condition| match condition {
            Condition::Flag(flag_condition) => flag_condition.opts_into(flag),
            _ => false,
        })
    }

    /// A new set with the default exclusions appended.
    ///
    /// Each flag of [`config::query::DEFAULT_EXCLUDED_FLAGS`] is excluded
    /// unless this set opts into it. `self` is left untouched, and an empty
    /// set stays empty.
    pub fn with_default_exclusions(&self) -> Self {
        if self.is_empty() {
            return Self::default();
        }

        let exclusions = config::query::DEFAULT_EXCLUDED_FLAGS
            .into_iter()
            .filter(|flag| !self.opts_into(*flag))
            .map(|flag| Condition::Flag(FlagCondition::new(flag, FlagPolarity::Forbid)));

        Self {
            conditions: self.conditions.iter().cloned().chain(exclusions).collect(),
        }
    }

    /// Whether `chart` satisfies every condition.
    pub fn is_satisfied_by<C>(&self, chart: &Chart, context: &C) -> bool
    where
        C: ChartContext + ?Sized,
    {
        !self.conditions.is_empty()
            && self
                .conditions
                .iter()
                .all(|condition| condition.is_satisfied_by(chart, context))
    }
}

impl From<Vec<Condition>> for ConditionSet {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::new(conditions)
    }
}

impl std::str::FromStr for ConditionSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_query(s)
    }
}

/// Renders the canonical filter string, clauses joined by `,`.
impl std::fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", config::query::CLAUSE_SEPARATOR)?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;

    fn charts() -> Vec<Chart> {
        vec![
            Chart::builder("1h", "1", Difficulty::Hyper, 40)
                .rating(0.6)
                .holds(true)
                .build()
                .unwrap(),
            Chart::builder("2n", "2", Difficulty::Normal, 20)
                .rating(0.0)
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_blank_query_is_empty_set() {
        assert!(ConditionSet::from_query("").unwrap().is_empty());
        assert!(ConditionSet::from_query("   ").unwrap().is_empty());
        assert!(ConditionSet::from_query(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let charts = charts();
        let set = ConditionSet::default();
        assert!(charts.iter().all(|c| !set.is_satisfied_by(c, &charts)));
    }

    #[test]
    fn test_clauses_are_anded() {
        let charts = charts();
        let set = ConditionSet::from_query("lv>=40h, diff=enhx, holds").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.is_satisfied_by(&charts[0], &charts));
        assert!(!set.is_satisfied_by(&charts[1], &charts));

        let set = ConditionSet::from_query("lv>=40h, diff=enhx, !holds").unwrap();
        assert!(!set.is_satisfied_by(&charts[0], &charts));
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(ConditionSet::from_query("lv=1,").unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_clause_fails_whole_query() {
        let err = ConditionSet::from_query("lv=1, bogus, holds").unwrap_err();
        assert!(
            matches!(err, Error::InvalidCondition { ref clause, .. } if clause == "bogus")
        );
    }

    #[test]
    fn test_default_exclusions_appended() {
        let set = ConditionSet::from_query("lv=1").unwrap();
        let augmented = set.with_default_exclusions();
        assert_eq!(set.len(), 1);
        assert_eq!(augmented.to_string(), "lv=1,-omnimix,-lively");
    }

    #[test]
    fn test_default_exclusions_respect_opt_in() {
        let set = ConditionSet::from_query("lv=1,+omnimix").unwrap();
        assert_eq!(
            set.with_default_exclusions().to_string(),
            "lv=1,+omnimix,-lively"
        );

        let set = ConditionSet::from_query("lively, omnimix").unwrap();
        assert_eq!(set.with_default_exclusions().to_string(), "lively,omnimix");

        let set = ConditionSet::from_query("-omnimix").unwrap();
        assert!(!set.opts_into(Flag::Omnimix));
    }

    #[test]
    fn test_default_exclusions_keep_empty_set_empty() {
        assert!(ConditionSet::default().with_default_exclusions().is_empty());
    }

    #[test]
    fn test_display_round_trips() {
        let set = ConditionSet::from_query("LV >= 40h, diff = enhx, !holds, srlv=2-").unwrap();
        assert_eq!(set.to_string(), "lv>=40h,diff=enhx,-holds,srlv=02a");
        assert_eq!(ConditionSet::from_query(&set.to_string()).unwrap(), set);
    }
}
