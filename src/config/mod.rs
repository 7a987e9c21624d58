use crate::core::window::CheckinWindow;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Check-in log file. `~/` expands to the home directory; relative
    /// paths resolve against the working directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// Listen address for `serve`, host:port.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Inclusive window bounds, "HH:MM:SS" (or "HH:MM").
    #[serde(default = "default_window_start")]
    pub window_start: String,
    #[serde(default = "default_window_end")]
    pub window_end: String,
}

fn default_store_file() -> String {
    "web_checkins.csv".to_string()
}
fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_window_start() -> String {
    "18:30:00".to_string()
}
fn default_window_end() -> String {
    "19:30:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            bind_addr: default_bind_addr(),
            window_start: default_window_start(),
            window_end: default_window_end(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Load configuration from the standard location, or return defaults
    /// if no file exists yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// The configured check-in window, validated.
    pub fn window(&self) -> AppResult<CheckinWindow> {
        CheckinWindow::from_bounds(&self.window_start, &self.window_end)
    }

    /// Path of the check-in log with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(self.store_file.trim())
    }

    /// Initialize configuration and check-in log files.
    /// Test mode leaves the per-user config file alone.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(file) = custom_store {
            config.store_file = file;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create an empty log so the page has something to read from
        // the first time it loads.
        let store_path = config.store_path();
        if !store_path.exists() {
            if let Some(parent) = store_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&store_path)?;
        }

        Ok(config)
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
