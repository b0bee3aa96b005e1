use std::{
    fs,
    path::{Path, PathBuf},
};

use miette::{miette, IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Image used when neither the command line nor the config file names one.
pub const DEFAULT_IMAGE: &str = "lhwsutil:test-env";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_image")]
    pub image: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            image: default_image(),
        }
    }
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

impl Config {
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| miette!("could not find config directory"))?
            .join("lhwsutil-dev")
            .join("config.toml"))
    }

    pub fn load_config() -> Result<Self> {
        let path = Self::config_file_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err("failed to read config file contents")?;

        let config = toml::from_str(&contents)
            .into_diagnostic()
            .wrap_err("failed to parse config file")?;

        Ok(config)
    }
}
