//! Run the numscale pipeline

use anyhow::{Context, Result};
use numscale_core::{PipelineOptions, pipeline};

/// Run the pipeline described by `options`
pub fn run(options: &PipelineOptions) -> Result<()> {
    tracing::info!("Starting numscale");

    let summary = pipeline::run(options).with_context(|| {
        format!(
            "Failed to process {} into {}",
            options.data.display(),
            options.output.display()
        )
    })?;

    tracing::info!(
        "✓ Wrote {} values to {}",
        summary.values,
        summary.output.display()
    );
    tracing::info!("numscale finished");
    Ok(())
}
