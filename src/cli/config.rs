use clap::{Parser, Subcommand};

use crate::script::config::GenerateConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "testscript-gen",
    version,
    about = "Generate page objects, test suites, and test data from recorded browser operation traces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: testscript-gen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate test scripts from one or more trace JSON files
    Generate {
        /// Trace files: JSON arrays of recorded operations, one per test
        /// result
        trace: Vec<String>,

        /// Output directory for generated sources
        #[arg(short, long, default_value = "generated_scripts")]
        output_dir: String,

        /// Emit synchronous single-scenario scripts instead of the
        /// graph-optimized async form
        #[arg(long)]
        simple: bool,

        /// Emit a data-driven suite plus test-data modules
        #[arg(long)]
        data_driven: bool,

        /// Upper bound on generated data combinations (0 = no bound)
        #[arg(long)]
        max_generation: Option<usize>,

        /// Emit multi-locator element lookups
        #[arg(long)]
        multi_locator: bool,
    },

    /// Render only the screen transition diagram for the given traces
    Diagram {
        /// Trace files: JSON arrays of recorded operations
        trace: Vec<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File (optional YAML)
// ============================================================================

/// Default config file name looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "testscript-gen.yaml";

/// Load the generation config from YAML.
///
/// A missing file falls back to defaults; a malformed file warns and
/// falls back, so a broken config never blocks generation.
pub fn load_config(path: Option<&str>) -> GenerateConfig {
    let path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", path, e);
                GenerateConfig::default()
            }
        },
        Err(_) => GenerateConfig::default(),
    }
}

/// Fold CLI overrides into a loaded config.
pub fn apply_overrides(
    mut config: GenerateConfig,
    simple: bool,
    data_driven: bool,
    max_generation: Option<usize>,
    multi_locator: bool,
) -> GenerateConfig {
    if simple {
        config.optimized = false;
    }
    if data_driven {
        config.test_data.use_data_driven = true;
    }
    if let Some(max) = max_generation {
        config.test_data.max_generation = max;
    }
    if multi_locator {
        config.use_multi_locator = true;
    }
    config
}
