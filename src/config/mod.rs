use crate::core::FlowTimings;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Audible confirmation (terminal bell) on every decoded code
    #[serde(default = "default_beep")]
    pub beep: bool,
    #[serde(default = "default_saved_reset_secs")]
    pub saved_reset_secs: u64,
    #[serde(default = "default_notice_timeout_secs")]
    pub notice_timeout_secs: u64,
    /// Substring matched against device labels when no device is given
    #[serde(default = "default_preferred_camera")]
    pub preferred_camera: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_beep() -> bool {
    true
}
fn default_saved_reset_secs() -> u64 {
    2
}
fn default_notice_timeout_secs() -> u64 {
    5
}
fn default_preferred_camera() -> String {
    "back".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            beep: default_beep(),
            saved_reset_secs: default_saved_reset_secs(),
            notice_timeout_secs: default_notice_timeout_secs(),
            preferred_camera: default_preferred_camera(),
            log_level: default_log_level(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("qrattend")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".qrattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qrattend.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("qrattend.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn flow_timings(&self) -> FlowTimings {
        FlowTimings {
            saved_reset: chrono::Duration::seconds(self.saved_reset_secs as i64),
            notice_timeout: chrono::Duration::seconds(self.notice_timeout_secs as i64),
        }
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() { p.to_path_buf() } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path);

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
