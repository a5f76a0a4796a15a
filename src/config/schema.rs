//! Configuration schema types for `pxscale.toml`
//!
//! Defines the structure and validation rules for scaler configuration.

use crate::scale2x::{Scale2xOptions, MAX_PASSES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scaling section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Number of chained 2x passes (1..=4)
    #[serde(default = "default_passes")]
    pub passes: u8,
    /// Worker threads; 0 = all cores, 1 = serial
    #[serde(default)]
    pub jobs: usize,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self { passes: default_passes(), jobs: 0 }
    }
}

fn default_passes() -> u8 {
    1
}

/// Output naming section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Suffix appended to the input stem. Defaults to `_{factor}x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Directory for generated files. Defaults to the input's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Complete `pxscale.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PxscaleConfig {
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "scale.passes")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxscale.toml: '{}' {}", self.field, self.message)
    }
}

impl PxscaleConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.scale.passes == 0 || self.scale.passes > MAX_PASSES {
            errors.push(ConfigValidationError {
                field: "scale.passes".to_string(),
                message: format!("must be between 1 and {}", MAX_PASSES),
            });
        }

        if let Some(suffix) = &self.output.suffix {
            if suffix.contains(&['/', '\\'][..]) {
                errors.push(ConfigValidationError {
                    field: "output.suffix".to_string(),
                    message: "must not contain path separators".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Scaler options described by this configuration
    pub fn scale_options(&self) -> Scale2xOptions {
        Scale2xOptions { passes: self.scale.passes, jobs: self.scale.jobs }
    }

    /// Output suffix, falling back to `_{factor}x`
    pub fn effective_suffix(&self) -> String {
        match &self.output.suffix {
            Some(suffix) => suffix.clone(),
            None => format!("_{}x", self.scale_options().factor()),
        }
    }
}
