//! Numscale CLI
//!
//! Reads a newline-delimited list of numbers, scales each one, and writes the
//! results to a file.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use numscale_core::{DEFAULT_OUTPUT, DEFAULT_SCALE, PipelineOptions};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod run;

/// Numscale - scale a list of numbers read from a file
#[derive(Parser, Debug)]
#[command(name = "numscale")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, env = "NUMSCALE_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the input data file (one number per line)
    #[arg(long, env = "NUMSCALE_DATA")]
    data: PathBuf,

    /// Path for the results file
    #[arg(long, env = "NUMSCALE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Scaling factor applied to every value
    #[arg(
        long,
        env = "NUMSCALE_SCALE",
        default_value_t = DEFAULT_SCALE,
        allow_negative_numbers = true
    )]
    scale: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            config: self.config.clone(),
            data: self.data.clone(),
            output: self.output.clone(),
            scale: self.scale,
        }
    }
}

fn main() -> ExitCode {
    // Before parsing, so .env can supply flag values and RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    match run::run(&cli.pipeline_options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error running numscale: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["numscale", "--data", "in.txt"]).unwrap();
        let options = cli.pipeline_options();
        assert_eq!(options.data, PathBuf::from("in.txt"));
        assert_eq!(options.output, PathBuf::from("output.txt"));
        assert_eq!(options.scale, 1.0);
        assert!(options.config.is_none());
        assert!(!cli.verbose);
    }

    #[rstest]
    #[case::negative("-2.5", -2.5)]
    #[case::exponent("1e3", 1000.0)]
    #[case::integer("4", 4.0)]
    #[case::zero("0", 0.0)]
    fn test_scale_values(#[case] raw: &str, #[case] expected: f64) {
        let cli = Cli::try_parse_from(["numscale", "--data", "in.txt", "--scale", raw]).unwrap();
        assert_eq!(cli.scale, expected);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let err = Cli::try_parse_from(["numscale", "--data", "in.txt", "--output", ""]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        let err = Cli::try_parse_from(["numscale", "--data", ""]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_data_is_required() {
        let err = Cli::try_parse_from(["numscale", "--scale", "2"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[rstest]
    #[case::word("big")]
    #[case::comma_decimal("2,5")]
    fn test_scale_must_be_numeric(#[case] raw: &str) {
        let err = Cli::try_parse_from(["numscale", "--data", "in.txt", "--scale", raw]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
