//! Scenario parameter space and canonical naming.

pub mod naming;
pub mod params;

pub use naming::scenario_name;
pub use params::{ScenarioParameters, ScenarioTuple};
