//! Generator configuration
//!
//! Every tunable constant of both pipelines as a typed, validated TOML
//! document. [`Config::default`] reproduces the built-in values.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::*;
