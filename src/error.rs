//! Error types for ensemble configuration generation.
//!
//! One enum per failure scope: a broken base template stops the process, a broken
//! pathway file only empties that pathway's component set, and a scenario failure
//! only removes that scenario from the batch result.

use std::path::PathBuf;
use thiserror::Error;

/// Base template errors. Fatal: no scenario can be generated without the template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Base template not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid XML in template {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Template I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pathway component file errors. Logged by the extractor and turned into an empty set.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("SSP file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse SSP file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to read SSP file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Single-scenario pipeline errors. The batch logs these and moves on.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("No components extracted for {ssp}")]
    NoComponents { ssp: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scenario worker failed: {0}")]
    Worker(String),
}

/// Command-level errors surfaced by the CLI and the batch entry point.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Output formatting failed: {0}")]
    Presentation(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Presentation(err.to_string())
    }
}
