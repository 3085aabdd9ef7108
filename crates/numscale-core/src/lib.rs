//! Numscale Core Library
//!
//! This crate provides the core functionality for numscale:
//! - Optional YAML configuration loading
//! - Reading a newline-delimited numeric series
//! - Scaling every value by a single factor
//! - Writing the scaled series back out
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Config    │  (loaded and logged only)
//! │   (YAML)    │
//! └─────────────┘
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Read series │────▶│    Scale    │────▶│    Write    │
//! │   (text)    │     │  transform  │     │   results   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use numscale_core::{PipelineOptions, pipeline};
//!
//! let options = PipelineOptions {
//!     data: "values.txt".into(),
//!     scale: 2.5,
//!     ..Default::default()
//! };
//! let summary = pipeline::run(&options)?;
//! println!("Wrote {} values to {}", summary.values, summary.output.display());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod series;

pub use config::{ConfigMapping, load_config};
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{DEFAULT_OUTPUT, PipelineOptions, RunSummary, Stage};
pub use series::{DEFAULT_SCALE, format_value, read_series, scale, write_series};
