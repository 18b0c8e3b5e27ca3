//! Dry-run plan formatting.

use crate::error::ApiError;
use crate::scenario::{scenario_name, ScenarioTuple};
use comfy_table::Table;
use serde_json::json;

pub fn format_plan(tuples: &[ScenarioTuple], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        let scenarios: Vec<serde_json::Value> = tuples
            .iter()
            .map(|t| {
                json!({
                    "name": scenario_name(t),
                    "ssp": t.ssp,
                    "rcp": t.rcp,
                    "pr_rate": t.pr_rate,
                    "technology": t.technology,
                    "supply": t.supply,
                    "allocation": t.allocation,
                })
            })
            .collect();
        let out = json!({ "total": tuples.len(), "scenarios": scenarios });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    if tuples.is_empty() {
        return Ok("No scenarios match the current parameters and filter.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec![
        "#", "Scenario", "SSP", "RCP", "PR", "Technology", "Supply", "Allocation",
    ]);
    for (i, t) in tuples.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            scenario_name(t),
            t.ssp.clone(),
            t.rcp.clone(),
            t.pr_rate.to_string(),
            t.technology.clone(),
            t.supply.clone(),
            t.allocation.clone(),
        ]);
    }
    Ok(format!("{}\nTotal: {} scenarios", table, tuples.len()))
}
