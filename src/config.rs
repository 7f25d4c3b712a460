//! Runtime configuration
//!
//! Resolves where the address book, templates and logs live. Command-line
//! flags take precedence over environment variables, which take precedence
//! over the platform data directory.

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

// Environment variable names
pub const ENV_DATA_DIR: &str = "REACHOUT_DATA_DIR";
pub const ENV_TEMPLATE_DIR: &str = "REACHOUT_TEMPLATE_DIR";
pub const ENV_LOG_LEVEL: &str = "REACHOUT_LOG";

const APP_DIR_NAME: &str = "reachout";
const DATABASE_FILE_NAME: &str = "reachout.db";

/// Values given on the command line, if any
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Load configuration from overrides, then environment, then defaults
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    fn resolve(overrides: ConfigOverrides, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match overrides
            .data_dir
            .or_else(|| lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let template_dir = overrides
            .template_dir
            .or_else(|| lookup(ENV_TEMPLATE_DIR).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join("templates"));

        let log_level = overrides
            .log_level
            .or_else(|| lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| crate::logging::default_log_level().to_string());

        Ok(Self {
            data_dir,
            template_dir,
            log_level,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    fn default_data_dir() -> Result<PathBuf> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_DIR_NAME))
    }
}
