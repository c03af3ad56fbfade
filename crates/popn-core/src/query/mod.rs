//! Filter-string language.
//!
//! A filter string is a comma-separated conjunction of clauses, e.g.
//! `lv>=40h, diff=enhx, !holds`. Clauses are tokenized
//! ([`tokenize`]), matched against the clause grammar ([`Condition`]) and
//! collected into a [`ConditionSet`].

mod condition;
mod condition_set;
mod flag;
mod operator;
mod tokenizer;

pub use condition::{Condition, Emh, rating_text};
pub use condition_set::ConditionSet;
pub use flag::{Flag, FlagCondition, FlagPolarity};
pub use operator::{EmhOperator, EqualityOperator, Operator};
pub use tokenizer::tokenize;
