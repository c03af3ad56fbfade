//! Parse command for showing how a filter string is understood.

use anyhow::Result;
use popn_core::ConditionSet;

/// Print each parsed condition, then the set actually evaluated.
pub fn run(filter: &str) -> Result<()> {
    let conditions = ConditionSet::from_query(filter)?;

    if conditions.is_empty() {
        println!("(empty filter: matches nothing)");
        return Ok(());
    }

    for condition in conditions.conditions() {
        println!("{:<10} {}", condition.kind(), condition);
    }
    println!("effective: {}", conditions.with_default_exclusions());
    Ok(())
}
