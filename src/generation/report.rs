use crate::scenario::ScenarioTuple;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioFailure {
    pub scenario_name: String,
    pub tuple: ScenarioTuple,
    pub error: String,
}

/// Summary of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// RFC 3339 start time
    pub started_at: String,
    pub requested: usize,
    pub concurrent: bool,
    pub workers: usize,
    pub files: Vec<PathBuf>,
    pub failures: Vec<ScenarioFailure>,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.files.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Seconds per written file, if any file was written.
    pub fn average_secs_per_file(&self) -> Option<f64> {
        if self.files.is_empty() {
            None
        } else {
            Some(self.elapsed.as_secs_f64() / self.files.len() as f64)
        }
    }
}
