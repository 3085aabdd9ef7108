//! Sequential run of the numscale pipeline
//!
//! ```text
//! START → [LOAD_CONFIG] → READ_DATA → TRANSFORM → WRITE → DONE
//! ```
//!
//! Each stage runs to completion before the next begins. The first error
//! aborts the run and is returned unchanged.

use std::fmt;
use std::path::PathBuf;

use crate::config::{ConfigMapping, load_config};
use crate::error::Result;
use crate::series::{DEFAULT_SCALE, read_series, scale, write_series};

/// Default results file name
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Inputs for a single pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Optional YAML configuration file
    pub config: Option<PathBuf>,

    /// Newline-delimited numeric input file
    pub data: PathBuf,

    /// Results file, replaced if it exists
    pub output: PathBuf,

    /// Factor applied to every value
    pub scale: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            config: None,
            data: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            scale: DEFAULT_SCALE,
        }
    }
}

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parse the optional configuration file
    LoadConfig,
    /// Read the numeric series
    ReadData,
    /// Apply the scale factor
    Transform,
    /// Write the results file
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadConfig => "load_config",
            Stage::ReadData => "read_data",
            Stage::Transform => "transform",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Configuration that was loaded, if a config file was given
    pub config: Option<ConfigMapping>,

    /// Number of values written
    pub values: usize,

    /// Where the results were written
    pub output: PathBuf,
}

/// Run every stage in order and return a summary
///
/// The configuration is loaded and logged but takes no part in reading,
/// scaling, or writing the series.
pub fn run(options: &PipelineOptions) -> Result<RunSummary> {
    let config = match &options.config {
        Some(path) => {
            tracing::debug!("Entering stage {}", Stage::LoadConfig);
            let config = load_config(path)?;
            tracing::info!("Loaded configuration: {:?}", config);
            Some(config)
        }
        None => None,
    };

    tracing::debug!("Entering stage {}", Stage::ReadData);
    tracing::info!("Reading data from {}", options.data.display());
    let data = read_series(&options.data)?;
    tracing::info!("Read {} values", data.len());

    tracing::debug!("Entering stage {}", Stage::Transform);
    tracing::info!("Processing data with scale factor: {}", options.scale);
    let results = scale(&data, options.scale);

    tracing::debug!("Entering stage {}", Stage::Write);
    write_series(&results, &options.output)?;

    Ok(RunSummary {
        config,
        values: results.len(),
        output: options.output.clone(),
    })
}
