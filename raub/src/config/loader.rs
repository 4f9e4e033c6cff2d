//! Configuration file discovery and loading.
//!
//! This module locates the data directory and loads the user configuration
//! file that lives inside it.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RAUB_DATA_DIR";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use raub::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("/tmp/raub")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration file for `data_dir`, lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(data_dir: &Path) -> Result<Vec<ConfigSource>> {
        Ok(Self::load_user_config(data_dir)?.into_iter().collect())
    }

    /// Load `{data_dir}/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let config_path = data_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            log::debug!("No configuration file at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        log::debug!("Loaded configuration from {}", config_path.display());
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Returns the default data directory, `~/.raub`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".raub"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory.
///
/// The resolution order is:
/// 1. `explicit`, when given
/// 2. `$RAUB_DATA_DIR`, when set and non-empty
/// 3. `~/.raub`
///
/// # Errors
///
/// Returns an error if neither override is present and the home directory
/// cannot be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}
