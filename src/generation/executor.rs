//! Batch driver: enumerates scenario tuples and runs the pipeline for each one,
//! either in order or on a bounded pool of blocking workers. A failing scenario is
//! logged and left out of the result; it never stops the batch.

use crate::components::ComponentExtractor;
use crate::error::{ApiError, ScenarioError};
use crate::generation::pipeline::{ScenarioOutcome, ScenarioPipeline};
use crate::generation::report::{GenerationReport, ScenarioFailure};
use crate::scenario::{scenario_name, ScenarioParameters, ScenarioTuple};
use crate::template::TemplateManager;
use chrono::{SecondsFormat, Utc};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Upper bound on concurrent scenario workers.
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Concurrent { workers: usize },
}

/// Generates every configuration of a scenario ensemble.
pub struct EnsembleGenerator {
    parameters: ScenarioParameters,
    pipeline: ScenarioPipeline,
    max_workers: usize,
}

impl EnsembleGenerator {
    pub fn new(
        parameters: ScenarioParameters,
        template: TemplateManager,
        extractor: ComponentExtractor,
    ) -> Self {
        Self {
            parameters,
            pipeline: ScenarioPipeline::new(Arc::new(template), Arc::new(extractor)),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }

    /// Override the worker bound (clamped to at least one).
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    pub fn parameters(&self) -> &ScenarioParameters {
        &self.parameters
    }

    pub fn pipeline(&self) -> &ScenarioPipeline {
        &self.pipeline
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Tuples that a run with `ssp_filter` would generate, in enumeration order.
    pub fn plan(&self, ssp_filter: Option<&[String]>) -> Vec<ScenarioTuple> {
        self.parameters.combinations(ssp_filter)
    }

    /// Execution mode for `count` tuples. One tuple never needs a pool.
    pub fn execution_mode(&self, count: usize, concurrent: bool) -> ExecutionMode {
        if concurrent && count > 1 {
            ExecutionMode::Concurrent {
                workers: self.max_workers.min(count),
            }
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Generate all configurations and return the paths actually written.
    pub async fn generate_all(
        &self,
        output_dir: &Path,
        ssp_filter: Option<&[String]>,
        concurrent: bool,
    ) -> Result<Vec<PathBuf>, ApiError> {
        Ok(self
            .generate_report(output_dir, ssp_filter, concurrent)
            .await?
            .files)
    }

    /// Generate all configurations and report successes, failures, and timing.
    pub async fn generate_report(
        &self,
        output_dir: &Path,
        ssp_filter: Option<&[String]>,
        concurrent: bool,
    ) -> Result<GenerationReport, ApiError> {
        std::fs::create_dir_all(output_dir).map_err(|source| ApiError::OutputDirectory {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let started = Instant::now();
        let tuples = self.plan(ssp_filter);
        let requested = tuples.len();
        let mode = self.execution_mode(requested, concurrent);
        info!(
            total = requested,
            ?mode,
            "Generating {} scenario configurations...",
            requested
        );

        let output_dir = Arc::new(output_dir.to_path_buf());
        let outcomes = match mode {
            ExecutionMode::Sequential => self.run_sequential(tuples, output_dir).await,
            ExecutionMode::Concurrent { workers } => {
                self.run_concurrent(tuples, output_dir, workers).await
            }
        };

        let mut files = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome.result {
                Ok(path) => files.push(path),
                Err(e) => failures.push(ScenarioFailure {
                    scenario_name: outcome.scenario_name,
                    tuple: outcome.tuple,
                    error: e.to_string(),
                }),
            }
        }

        let report = GenerationReport {
            started_at,
            requested,
            concurrent: matches!(mode, ExecutionMode::Concurrent { .. }),
            workers: match mode {
                ExecutionMode::Sequential => 1,
                ExecutionMode::Concurrent { workers } => workers,
            },
            files,
            failures,
            elapsed: started.elapsed(),
        };
        info!(
            generated = report.generated_count(),
            failed = report.failed_count(),
            elapsed_secs = report.elapsed.as_secs_f64(),
            "Successfully generated {} configuration files",
            report.generated_count()
        );
        Ok(report)
    }

    async fn run_sequential(
        &self,
        tuples: Vec<ScenarioTuple>,
        output_dir: Arc<PathBuf>,
    ) -> Vec<ScenarioOutcome> {
        let total = tuples.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, tuple) in tuples.into_iter().enumerate() {
            let outcome = run_blocking(self.pipeline.clone(), tuple, Arc::clone(&output_dir)).await;
            log_outcome(&outcome, index + 1, total);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Fan out one blocking task per tuple, at most `workers` in flight, and collect
    /// outcomes as they complete.
    async fn run_concurrent(
        &self,
        tuples: Vec<ScenarioTuple>,
        output_dir: Arc<PathBuf>,
        workers: usize,
    ) -> Vec<ScenarioOutcome> {
        let total = tuples.len();
        let mut pending = stream::iter(tuples.into_iter().map(|tuple| {
            run_blocking(self.pipeline.clone(), tuple, Arc::clone(&output_dir))
        }))
        .buffer_unordered(workers);

        let mut outcomes = Vec::with_capacity(total);
        let mut completed = 0usize;
        while let Some(outcome) = pending.next().await {
            if outcome.result.is_ok() {
                completed += 1;
            }
            log_outcome(&outcome, completed, total);
            outcomes.push(outcome);
        }
        outcomes
    }
}

async fn run_blocking(
    pipeline: ScenarioPipeline,
    tuple: ScenarioTuple,
    output_dir: Arc<PathBuf>,
) -> ScenarioOutcome {
    let fallback_tuple = tuple.clone();
    match tokio::task::spawn_blocking(move || pipeline.outcome(tuple, &output_dir)).await {
        Ok(outcome) => outcome,
        Err(join_err) => ScenarioOutcome {
            scenario_name: scenario_name(&fallback_tuple),
            tuple: fallback_tuple,
            result: Err(ScenarioError::Worker(join_err.to_string())),
        },
    }
}

fn log_outcome(outcome: &ScenarioOutcome, position: usize, total: usize) {
    match &outcome.result {
        Ok(path) => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            info!(scenario = %outcome.scenario_name, "Generated ({}/{}): {}", position, total, file_name);
        }
        Err(e) => {
            error!(
                scenario = %outcome.scenario_name,
                tuple = %outcome.tuple,
                "Failed to generate scenario {}: {}",
                outcome.tuple,
                e
            );
        }
    }
}
