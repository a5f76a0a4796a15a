//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod config;
mod scale;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// pxscale - Edge-directed 2x upscaling for pixel art
#[derive(Parser)]
#[command(name = "pxscale")]
#[command(about = "pxscale - Edge-directed 2x upscaling for pixel art")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upscale images and save them as PNG
    Scale {
        /// Input images (any format the decoder supports)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file or directory.
        /// If omitted: {input}{suffix}.png
        /// If file (single input): output.png
        /// If file (multiple): output_{input}.png
        /// If directory (ends with /): dir/{input}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of 2x passes (1-4); overrides pxscale.toml
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        passes: Option<u8>,

        /// Worker threads (0 = all cores, 1 = serial); overrides pxscale.toml
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Config file to use instead of discovering pxscale.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print one JSON object per scaled image
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Config file to use instead of discovering pxscale.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scale { inputs, output, passes, jobs, config, json } => {
            scale::run_scale(&inputs, output.as_deref(), passes, jobs, config.as_deref(), json)
        }
        Commands::Config { config: path } => config::run_config(path.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter(Some("pxscale"), level).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scale_with_overrides() {
        let cli = Cli::try_parse_from([
            "pxscale", "scale", "a.png", "b.png", "-o", "out/", "--passes", "3", "-j", "2",
            "--json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Scale { inputs, output, passes, jobs, config, json } => {
                assert_eq!(inputs, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
                assert_eq!(output, Some(PathBuf::from("out/")));
                assert_eq!(passes, Some(3));
                assert_eq!(jobs, Some(2));
                assert_eq!(config, None);
                assert!(json);
            }
            Commands::Config { .. } => panic!("expected scale"),
        }
    }

    #[test]
    fn test_passes_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["pxscale", "scale", "a.png", "--passes", "5"]).is_err());
        assert!(Cli::try_parse_from(["pxscale", "scale", "a.png", "--passes", "0"]).is_err());
    }

    #[test]
    fn test_scale_requires_input() {
        assert!(Cli::try_parse_from(["pxscale", "scale"]).is_err());
    }
}
