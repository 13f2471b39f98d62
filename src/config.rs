//! Configuration loading
//!
//! Reads `~/.config/revu/config.toml`. A missing file is not an error; a
//! malformed one falls back to defaults and reports a warning so the app
//! can show it as a notification instead of refusing to start.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_SERVER_URL, ReviewConfig, SearchConfig, ServerConfig, UiConfig};

const CONFIG_DIR: &str = "revu";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config, using defaults: {}", e.message())),
        },
    }
}
