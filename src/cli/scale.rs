//! Scale command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::output::{generate_output_path, load_image, save_png};
use crate::scale2x::{upscale, Scale2xOptions};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the scale command
pub fn run_scale(
    inputs: &[PathBuf],
    output: Option<&Path>,
    passes: Option<u8>,
    jobs: Option<usize>,
    config_path: Option<&Path>,
    json: bool,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    merge_cli_overrides(&mut config, &CliOverrides { passes, jobs });

    let options = config.scale_options();
    if let Err(e) = options.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let suffix = config.effective_suffix();
    let is_single = inputs.len() == 1;

    let mut failures = 0usize;
    for input in inputs {
        let output_path = generate_output_path(
            input,
            output,
            is_single,
            &suffix,
            config.output.dir.as_deref(),
        );
        if let Err(e) = scale_file(input, &output_path, &options, json) {
            eprintln!("Error: {}: {}", input.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        if inputs.len() > 1 {
            eprintln!("Error: {} of {} images failed", failures, inputs.len());
        }
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn scale_file(
    input: &Path,
    output_path: &Path,
    options: &Scale2xOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_image(input)?;
    let (width, height) = image.dimensions();

    let scaled = upscale(&image, options)?;
    save_png(&scaled, output_path)?;

    log::info!(
        "{} ({}x{}) -> {} ({}x{})",
        input.display(),
        width,
        height,
        output_path.display(),
        scaled.width(),
        scaled.height()
    );

    if json {
        let line = serde_json::json!({
            "input": input.display().to_string(),
            "output": output_path.display().to_string(),
            "width": width,
            "height": height,
            "output_width": scaled.width(),
            "output_height": scaled.height(),
            "passes": options.passes,
        });
        println!("{}", line);
    }
    Ok(())
}
