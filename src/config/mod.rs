//! Configuration for the scaler
//!
//! Provides types, discovery and parsing for `pxscale.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
