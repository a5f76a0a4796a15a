//! pxscale - Edge-directed 2x upscaling for pixel art
//!
//! This library provides:
//! - A RotSprite-style 2x magnification pass that never blends colors
//! - Serial and band-parallel drivers over pluggable pixel sources and targets
//! - `pxscale.toml` configuration and PNG output helpers used by the CLI

pub mod cli;
pub mod color;
pub mod config;
pub mod output;
pub mod scale2x;
pub mod surface;
