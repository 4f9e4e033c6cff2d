//! Configuration system for raub.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RAUB_*`)
//! 3. User config (`~/.raub/config.yaml`, or `config.yaml` in the data directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use raub::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Flying from {} on {}", config.origin(), config.flight_number());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, resolve_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ListFormat};
pub use validator::ConfigValidator;
