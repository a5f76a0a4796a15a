//! pxscale - Command-line tool for upscaling pixel art

use std::process::ExitCode;

use pxscale::cli;

fn main() -> ExitCode {
    cli::run()
}
