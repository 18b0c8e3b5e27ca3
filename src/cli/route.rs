//! CLI route: single route table and run context. Dispatches to the generator and
//! to presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_generation_report, format_plan};
use crate::cli::command_name;
use crate::components::ComponentExtractor;
use crate::config::{ConfigLoader, EnsembleConfig, GenerationConfig};
use crate::error::ApiError;
use crate::generation::EnsembleGenerator;
use crate::template::TemplateManager;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: workspace root and the loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: EnsembleConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: EnsembleConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                output,
                ssp,
                sequential,
                workers,
                template,
                components_dir,
                format,
            } => {
                let mut settings = self.config.generation.clone();
                apply_overrides(
                    &mut settings,
                    output.clone(),
                    *sequential,
                    *workers,
                    template.clone(),
                    components_dir.clone(),
                );
                settings.validate().map_err(ApiError::ConfigError)?;
                self.handle_generate(&settings, ssp, format)
            }
            Commands::Plan { ssp, format } => {
                let filter = self.ssp_filter(&self.config.generation, ssp);
                let tuples = self.config.parameters.combinations(filter.as_deref());
                format_plan(&tuples, format)
            }
        }
    }

    fn handle_generate(
        &self,
        settings: &GenerationConfig,
        ssp: &[String],
        format: &str,
    ) -> Result<String, ApiError> {
        let paths = settings.resolve_paths(&self.workspace_root);
        let template = TemplateManager::load(&paths.template_path)?;
        let extractor = ComponentExtractor::new(&paths.components_dir);
        let generator = EnsembleGenerator::new(self.config.parameters.clone(), template, extractor)
            .with_max_workers(settings.max_workers);
        info!(
            total = self.config.parameters.total_scenarios(),
            "Generating {} total scenario configurations...",
            self.config.parameters.total_scenarios()
        );

        let filter = self.ssp_filter(settings, ssp);
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::Runtime(format!("Failed to create tokio runtime: {}", e)))?;
        let report = runtime.block_on(generator.generate_report(
            &paths.output_dir,
            filter.as_deref(),
            settings.concurrent,
        ))?;
        format_generation_report(&report, format)
    }

    /// CLI `--ssp` values win over the configured filter.
    fn ssp_filter(&self, settings: &GenerationConfig, ssp: &[String]) -> Option<Vec<String>> {
        if ssp.is_empty() {
            settings.ssp_filter.clone()
        } else {
            Some(ssp.to_vec())
        }
    }
}

fn apply_overrides(
    settings: &mut GenerationConfig,
    output: Option<PathBuf>,
    sequential: bool,
    workers: Option<usize>,
    template: Option<PathBuf>,
    components_dir: Option<PathBuf>,
) {
    if let Some(output) = output {
        settings.output_dir = output;
    }
    if sequential {
        settings.concurrent = false;
    }
    if let Some(workers) = workers {
        settings.max_workers = workers;
    }
    if let Some(template) = template {
        settings.template_path = template;
    }
    if let Some(components_dir) = components_dir {
        settings.components_dir = components_dir;
    }
}
