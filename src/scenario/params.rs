//! Scenario parameter lists and their Cartesian product

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six categorical dimensions of the ensemble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Socioeconomic pathway ids (SSP1..SSP5)
    #[serde(default = "default_ssps")]
    pub ssps: Vec<String>,

    /// Emissions pathway ids (2p6, 4p5, 6p0, 8p5)
    #[serde(default = "default_rcps")]
    pub rcps: Vec<String>,

    /// Adoption-rate percentages
    #[serde(default = "default_pr_adoption_rates")]
    pub pr_adoption_rates: Vec<u32>,

    #[serde(default = "default_technology_levels")]
    pub technology_levels: Vec<String>,

    #[serde(default = "default_supply_capacities")]
    pub supply_capacities: Vec<String>,

    #[serde(default = "default_allocation_regulations")]
    pub allocation_regulations: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_ssps() -> Vec<String> {
    strings(&["SSP1", "SSP2", "SSP3", "SSP4", "SSP5"])
}

fn default_rcps() -> Vec<String> {
    strings(&["2p6", "4p5", "6p0", "8p5"])
}

fn default_pr_adoption_rates() -> Vec<u32> {
    vec![0, 25, 50, 75, 100]
}

fn default_technology_levels() -> Vec<String> {
    strings(&["Basic", "Advanced"])
}

fn default_supply_capacities() -> Vec<String> {
    strings(&["Low", "Medium", "High"])
}

fn default_allocation_regulations() -> Vec<String> {
    strings(&["Market-driven", "Regulatory"])
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            ssps: default_ssps(),
            rcps: default_rcps(),
            pr_adoption_rates: default_pr_adoption_rates(),
            technology_levels: default_technology_levels(),
            supply_capacities: default_supply_capacities(),
            allocation_regulations: default_allocation_regulations(),
        }
    }
}

impl ScenarioParameters {
    /// Number of combinations across all six lists.
    pub fn total_scenarios(&self) -> usize {
        self.ssps.len()
            * self.rcps.len()
            * self.pr_adoption_rates.len()
            * self.technology_levels.len()
            * self.supply_capacities.len()
            * self.allocation_regulations.len()
    }

    /// Every list must be non-empty and supply tiers need a leading character for naming.
    pub fn validate(&self) -> Result<(), String> {
        let lists = [
            ("ssps", self.ssps.len()),
            ("rcps", self.rcps.len()),
            ("pr_adoption_rates", self.pr_adoption_rates.len()),
            ("technology_levels", self.technology_levels.len()),
            ("supply_capacities", self.supply_capacities.len()),
            ("allocation_regulations", self.allocation_regulations.len()),
        ];
        let empty: Vec<&str> = lists
            .iter()
            .filter(|(_, len)| *len == 0)
            .map(|(name, _)| *name)
            .collect();
        if !empty.is_empty() {
            return Err(format!("Parameter lists cannot be empty: {}", empty.join(", ")));
        }
        if self.supply_capacities.iter().any(|s| s.trim().is_empty()) {
            return Err("Supply capacity tiers cannot be blank".to_string());
        }
        Ok(())
    }

    /// Enumerate the Cartesian product in list order.
    ///
    /// A non-empty `ssp_filter` restricts the first dimension to the ids it contains while
    /// keeping the configured order; other dimensions are untouched.
    pub fn combinations(&self, ssp_filter: Option<&[String]>) -> Vec<ScenarioTuple> {
        let ssps: Vec<&String> = match ssp_filter {
            Some(filter) if !filter.is_empty() => {
                self.ssps.iter().filter(|ssp| filter.contains(ssp)).collect()
            }
            _ => self.ssps.iter().collect(),
        };

        let mut tuples = Vec::with_capacity(
            ssps.len() * (self.total_scenarios() / self.ssps.len().max(1)),
        );
        for ssp in ssps {
            for rcp in &self.rcps {
                for pr_rate in &self.pr_adoption_rates {
                    for technology in &self.technology_levels {
                        for supply in &self.supply_capacities {
                            for allocation in &self.allocation_regulations {
                                tuples.push(ScenarioTuple {
                                    ssp: ssp.clone(),
                                    rcp: rcp.clone(),
                                    pr_rate: *pr_rate,
                                    technology: technology.clone(),
                                    supply: supply.clone(),
                                    allocation: allocation.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }
        tuples
    }
}

/// One element drawn from each parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioTuple {
    pub ssp: String,
    pub rcp: String,
    pub pr_rate: u32,
    pub technology: String,
    pub supply: String,
    pub allocation: String,
}

impl fmt::Display for ScenarioTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.ssp, self.rcp, self.pr_rate, self.technology, self.supply, self.allocation
        )
    }
}
