//! Ensemble generation: single-scenario pipeline, batch execution, and reporting.

pub mod executor;
pub mod pipeline;
pub mod report;

pub use executor::{EnsembleGenerator, ExecutionMode, DEFAULT_MAX_WORKERS};
pub use pipeline::{ScenarioOutcome, ScenarioPipeline};
pub use report::{GenerationReport, ScenarioFailure};
