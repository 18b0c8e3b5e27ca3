//! Generation summary formatting.

use crate::error::ApiError;
use crate::generation::GenerationReport;
use owo_colors::OwoColorize;

/// Number of generated files listed by name in the text summary.
const SAMPLE_SIZE: usize = 10;

pub fn format_generation_report(report: &GenerationReport, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut s = format!(
        "{} Generated {} configuration files in {:.2}s",
        "✓".green().bold(),
        report.generated_count(),
        report.elapsed.as_secs_f64()
    );
    s.push_str(&format!(
        "\n  Requested: {}  Failed: {}  Workers: {}",
        report.requested,
        report.failed_count(),
        report.workers
    ));
    if let Some(avg) = report.average_secs_per_file() {
        s.push_str(&format!("\n  Average: {:.3} seconds per file", avg));
    }

    if !report.files.is_empty() {
        s.push_str("\n\nSample generated files:");
        for (i, path) in report.files.iter().take(SAMPLE_SIZE).enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            s.push_str(&format!("\n  {:2}. {}", i + 1, name));
        }
        if report.files.len() > SAMPLE_SIZE {
            s.push_str(&format!(
                "\n  ... and {} more files",
                report.files.len() - SAMPLE_SIZE
            ));
        }
    }

    if !report.failures.is_empty() {
        s.push_str(&format!(
            "\n\n{} ({}):",
            "Failures".red().bold(),
            report.failures.len()
        ));
        for failure in &report.failures {
            s.push_str(&format!("\n  - {}: {}", failure.scenario_name, failure.error));
        }
    }
    Ok(s)
}
