//! CLI parse: clap types for gcam-ensemble. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gcam-ensemble - generate GCAM scenario ensembles from a base configuration
#[derive(Parser)]
#[command(name = "gcam-ensemble")]
#[command(about = "Generate combinatorial GCAM scenario configuration ensembles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory; relative config paths resolve against it
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one configuration file per scenario combination
    Generate {
        /// Output directory (default: generation.output_dir)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Only generate these SSP ids (repeatable)
        #[arg(long = "ssp")]
        ssp: Vec<String>,
        /// Generate in enumeration order on a single worker
        #[arg(long)]
        sequential: bool,
        /// Worker pool bound (default: generation.max_workers)
        #[arg(long)]
        workers: Option<usize>,
        /// Base template file (default: generation.template_path)
        #[arg(long)]
        template: Option<PathBuf>,
        /// Directory with {ssp}_config.xml files (default: generation.components_dir)
        #[arg(long)]
        components_dir: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// List the scenarios a generate run would produce, without writing anything
    Plan {
        /// Only list these SSP ids (repeatable)
        #[arg(long = "ssp")]
        ssp: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
