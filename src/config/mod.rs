//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{load_config, load_config_from_str, locate_config, resolve_log_file};
pub use model::{Config, RuleValues};
