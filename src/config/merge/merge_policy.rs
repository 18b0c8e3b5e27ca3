//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Parameter lists keep their serde defaults so a file can override one list only.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generation.template_path", "configuration_reuse100.xml")?
        .set_default("generation.components_dir", ".")?
        .set_default("generation.output_dir", "configs_ensemble_complete")?
        .set_default("generation.concurrent", true)?
        .set_default("generation.max_workers", 8)
}
