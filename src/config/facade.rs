//! Config loading facade: one entry point composing defaults, files, and environment.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::EnsembleConfig;
use crate::logging::{LOG_ENV, LOG_FORMAT_ENV, LOG_OUTPUT_ENV};
use config::{ConfigError, Environment, File, Map};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `GCAM_ENSEMBLE_GENERATION__MAX_WORKERS=4`.
pub const ENV_PREFIX: &str = "GCAM_ENSEMBLE";

/// List settings overridable from the environment as comma-separated values.
const LIST_KEYS: &[&str] = &["generation.ssp_filter"];

/// Variables sharing the prefix that are read directly, not as config keys.
const RESERVED_VARS: &[&str] = &[
    LOG_ENV,
    LOG_FORMAT_ENV,
    LOG_OUTPUT_ENV,
    workspace_file::ENV_NAME_VAR,
];

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    /// Precedence (lowest first): defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<EnsembleConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from one explicit file; environment still overrides it.
    pub fn load_from_file(path: &Path) -> Result<EnsembleConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn environment() -> Environment {
        environment_from(std::env::vars())
    }
}

fn environment_from(vars: impl IntoIterator<Item = (String, String)>) -> Environment {
    let source: Map<String, String> = vars
        .into_iter()
        .filter(|(key, _)| !RESERVED_VARS.contains(&key.as_str()))
        .collect();
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .source(Some(source)),
        |env, key| env.with_list_parse_key(key),
    )
}
