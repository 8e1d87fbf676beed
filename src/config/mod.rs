use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::core::schedule::ScheduleSettings;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory with members.json, catalog.json and tasks*.json
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Optional list of manual overrides loaded at start
    #[serde(default)]
    pub overrides_file: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(flatten)]
    pub schedule: ScheduleSettings,
}

fn default_data_dir() -> String {
    Config::config_dir().join("data").to_string_lossy().to_string()
}

fn default_currency() -> String {
    "₽".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            overrides_file: None,
            currency: default_currency(),
            schedule: ScheduleSettings::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftgrid")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftgrid")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftgrid.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn overrides_path(&self) -> Option<PathBuf> {
        self.overrides_file.as_deref().map(expand_tilde)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory and write a default config file.
    /// An existing file is left untouched. Returns the config path and
    /// whether it was written.
    pub fn init_all(is_test: bool) -> AppResult<(PathBuf, bool)> {
        let path = Self::config_file();

        if is_test || path.exists() {
            return Ok((path, false));
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok((path, true))
    }
}
