use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "config.json";
pub const LESSONS_FILE_ENV: &str = "LESSONS_FILE";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_lessons_file")]
    pub lessons_file: PathBuf,
}

fn default_theme_name() -> String {
    "Light".to_string()
}

fn default_lessons_file() -> PathBuf {
    PathBuf::from("lessons.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            lessons_file: default_lessons_file(),
        }
    }
}

impl Config {
    pub fn with_lessons_override(mut self, lessons_file: Option<String>) -> Self {
        if let Some(path) = lessons_file.filter(|p| !p.trim().is_empty()) {
            self.lessons_file = PathBuf::from(path);
        }
        self
    }
}

/// Reads `config.json` and applies the `LESSONS_FILE` override.
pub fn load_config() -> Config {
    load_config_from(Path::new(CONFIG_FILE))
        .with_lessons_override(std::env::var(LESSONS_FILE_ENV).ok())
}

/// Missing or unreadable files fall back to the defaults.
pub fn load_config_from(path: &Path) -> Config {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no config file, using defaults");
            return Config::default();
        }
    };
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "malformed config, using defaults");
        Config::default()
    })
}

pub fn save_config(config: &Config) -> ConfigResult<()> {
    save_config_to(Path::new(CONFIG_FILE), config)
}

pub fn save_config_to(path: &Path, config: &Config) -> ConfigResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
