//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, TemplateError};

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Template(TemplateError::NotFound(path)) => format!(
            "Base template not found: {}. Set generation.template_path or pass --template.",
            path.display()
        ),
        other => other.to_string(),
    }
}
