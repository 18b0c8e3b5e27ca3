//! Configuration System
//!
//! Layered configuration for ensemble generation: built-in defaults, a global user
//! file, workspace files, and `GCAM_ENSEMBLE_*` environment overrides.

use crate::logging::LoggingConfig;
use crate::scenario::ScenarioParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::{ConfigLoader, ENV_PREFIX};
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::ENV_NAME_VAR;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Paths and execution settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Scenario parameter lists
    #[serde(default)]
    pub parameters: ScenarioParameters,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base configuration template
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Directory holding `{ssp}_config.xml` component files
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    /// Directory receiving generated configurations
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Use the worker pool (default: true)
    #[serde(default = "default_true")]
    pub concurrent: bool,

    /// Worker pool bound
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Restrict generation to these SSP ids
    #[serde(default)]
    pub ssp_filter: Option<Vec<String>>,
}

fn default_template_path() -> PathBuf {
    PathBuf::from("configuration_reuse100.xml")
}

fn default_components_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("configs_ensemble_complete")
}

fn default_true() -> bool {
    true
}

fn default_max_workers() -> usize {
    crate::generation::DEFAULT_MAX_WORKERS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            components_dir: default_components_dir(),
            output_dir: default_output_dir(),
            concurrent: default_true(),
            max_workers: default_max_workers(),
            ssp_filter: None,
        }
    }
}

/// Generation paths resolved against a workspace root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub template_path: PathBuf,
    pub components_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl GenerationConfig {
    /// Validate generation settings
    pub fn validate(&self) -> Result<(), String> {
        if self.template_path.as_os_str().is_empty() {
            return Err("Template path cannot be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        if self.max_workers == 0 {
            return Err("max_workers must be at least 1".to_string());
        }
        Ok(())
    }

    /// Resolve relative paths against `workspace_root`; absolute paths are kept.
    pub fn resolve_paths(&self, workspace_root: &Path) -> ResolvedPaths {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                workspace_root.join(p)
            }
        };
        ResolvedPaths {
            template_path: resolve(&self.template_path),
            components_dir: resolve(&self.components_dir),
            output_dir: resolve(&self.output_dir),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Generation(String),
    Parameters(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Parameters(msg) => write!(f, "Parameters: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl EnsembleConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generation.validate() {
            errors.push(ValidationError::Generation(e));
        }
        if let Err(e) = self.parameters.validate() {
            errors.push(ValidationError::Parameters(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
