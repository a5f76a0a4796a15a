//! Image loading, PNG output and file path generation

use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image decoding or encoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Load any image format the `image` crate can decode, converted to RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, OutputError> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Generate the output path for a scaled image.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` | `{dir}/{stem}{suffix}.png`, `dir` defaulting to the input's directory |
/// | `-o out.png` (single input) | `out.png` |
/// | `-o out.png` (multiple inputs) | `out_{stem}.png` |
/// | `-o dir/` | `dir/{stem}.png` |
///
/// # Arguments
///
/// * `input` - The input file path
/// * `output_arg` - The `-o` argument value, if provided
/// * `is_single_input` - Whether only one input is being scaled
/// * `suffix` - Appended to the input stem when no `-o` is given
/// * `default_dir` - Output directory from config, used when no `-o` is given
pub fn generate_output_path(
    input: &Path,
    output_arg: Option<&Path>,
    is_single_input: bool,
    suffix: &str,
    default_dir: Option<&Path>,
) -> PathBuf {
    let input_stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");

    match output_arg {
        Some(output) => {
            // Directory if it ends with / or already exists as one
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();

            if is_dir {
                output.join(format!("{}.png", input_stem))
            } else if is_single_input {
                output.to_path_buf()
            } else {
                let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
                join_parent(output.parent(), format!("{}_{}.png", stem, input_stem))
            }
        }
        None => {
            let dir = default_dir.or_else(|| input.parent());
            join_parent(dir, format!("{}{}.png", input_stem, suffix))
        }
    }
}

fn join_parent(parent: Option<&Path>, file_name: String) -> PathBuf {
    match parent {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
