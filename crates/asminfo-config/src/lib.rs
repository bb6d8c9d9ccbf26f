//! Configuration management for asminfo.
//!
//! This crate handles loading the optional `asminfo.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_from, load_config, load_config_for};
pub use schema::{Config, DefaultsConfig, OutputConfig};
