//! Config command: print the effective configuration

use std::path::Path;
use std::process::ExitCode;

use crate::config::{find_config, load_config};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the config command
pub fn run_config(config_path: Option<&Path>) -> ExitCode {
    let source = config_path.map(Path::to_path_buf).or_else(find_config);
    let config = match load_config(source.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match &source {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults (no pxscale.toml found)"),
    }
    match toml::to_string_pretty(&config) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
