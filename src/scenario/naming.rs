//! Canonical scenario names
//!
//! `{ssp}_{rcp}_{Tech|Basic}_{supply initial}_{Reg|Mkt}_PR{rate}`, e.g.
//! `SSP2_4p5_Tech_M_Reg_PR50`.

use crate::scenario::params::ScenarioTuple;

pub const ADVANCED_TECHNOLOGY: &str = "Advanced";
pub const REGULATORY_ALLOCATION: &str = "Regulatory";

pub fn scenario_name(tuple: &ScenarioTuple) -> String {
    let tech_short = if tuple.technology == ADVANCED_TECHNOLOGY {
        "Tech"
    } else {
        "Basic"
    };
    let supply_initial: String = tuple
        .supply
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    let alloc_short = if tuple.allocation == REGULATORY_ALLOCATION {
        "Reg"
    } else {
        "Mkt"
    };

    format!(
        "{}_{}_{}_{}_{}_PR{}",
        tuple.ssp, tuple.rcp, tech_short, supply_initial, alloc_short, tuple.pr_rate
    )
}
