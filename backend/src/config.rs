//! # Application Configuration
//!
//! Settings live in `leanpawgress.yaml` at the root of the data directory and
//! are created with defaults on first start:
//!
//! ```yaml
//! data_directory: /home/me/Documents/LeanPawgress
//! server_port: 4000
//! food_catalog_path: null
//! hazard_catalog_path: null
//! static_directory: null
//! weight_tolerance_lb: 0.5
//! ```
//!
//! `LEANPAWGRESS_DATA_DIR` chooses where the config file is read from and
//! `PORT` overrides the server port. The `data_directory` entry may point the
//! stored data somewhere else than the config file itself.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::models::pet::DEFAULT_GOAL_TOLERANCE_LB;

pub const CONFIG_FILE_NAME: &str = "leanpawgress.yaml";
pub const DATA_DIR_ENV: &str = "LEANPAWGRESS_DATA_DIR";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_SERVER_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the stored documents
    pub data_directory: PathBuf,
    pub server_port: u16,
    /// Replaces the built-in food catalog
    pub food_catalog_path: Option<PathBuf>,
    /// Replaces the built-in hazard catalog
    pub hazard_catalog_path: Option<PathBuf>,
    /// Served as the web UI when set
    pub static_directory: Option<PathBuf>,
    pub weight_tolerance_lb: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            server_port: DEFAULT_SERVER_PORT,
            food_catalog_path: None,
            hazard_catalog_path: None,
            static_directory: None,
            weight_tolerance_lb: DEFAULT_GOAL_TOLERANCE_LB,
        }
    }
}

/// `~/Documents/LeanPawgress`, or `./LeanPawgress` when no home directory is known
pub fn default_data_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("LeanPawgress")
}

impl AppConfig {
    /// Load the configuration using the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load the configuration, reading environment variables through `env`
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config_directory = env(DATA_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_directory);

        let mut config = Self::load_or_create(&config_directory)?;
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Read `leanpawgress.yaml` from `directory`, writing a default one if missing
    pub fn load_or_create(directory: &Path) -> Result<Self> {
        let config_path = directory.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let yaml = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?;
            let config: AppConfig = serde_yaml::from_str(&yaml)
                .with_context(|| format!("Failed to parse {:?}", config_path))?;
            debug!("Loaded config from {:?}", config_path);
            return Ok(config);
        }

        let config = AppConfig {
            data_directory: directory.to_path_buf(),
            ..AppConfig::default()
        };
        config.save(directory)?;
        info!("Created default config at {:?}", config_path);
        Ok(config)
    }

    /// Write the config into `directory` (temp file, then rename)
    pub fn save(&self, directory: &Path) -> Result<()> {
        if !directory.exists() {
            fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create {:?}", directory))?;
        }
        let config_path = directory.join(CONFIG_FILE_NAME);
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;

        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, &config_path)?;
        Ok(())
    }

    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(port) = env(PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server_port = port,
                Err(_) => warn!("Ignoring invalid {} value: {}", PORT_ENV, port),
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.weight_tolerance_lb.is_finite() || self.weight_tolerance_lb < 0.0 {
            bail!(
                "weight_tolerance_lb must be a non-negative number (got {})",
                self.weight_tolerance_lb
            );
        }
        Ok(())
    }
}
