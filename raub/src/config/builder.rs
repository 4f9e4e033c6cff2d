//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{resolve_data_dir, ConfigLoader};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Assembles the final configuration from every source.
///
/// Sources are applied lowest precedence first: built-in defaults, the
/// user config file, `RAUB_*` environment variables, then the programmatic
/// override.
///
/// # Examples
///
/// ```
/// use raub::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { origin: Some("PENANG".to_string()), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.origin(), "PENANG");
/// assert_eq!(config.currency(), "RM");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config file from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips the config file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `RAUB_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, an
    /// environment variable holds an invalid value, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            let data_dir = resolve_data_dir(self.data_dir.as_deref())?;
            ConfigLoader::load_all(&data_dir)?
        };

        let mut config = ConfigMerger::merge(Config::with_defaults(), sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
