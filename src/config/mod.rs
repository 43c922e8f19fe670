use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_primary_sheet() -> String {
    // The venue-booking export ships its data on a sheet literally named
    // "Sheet"; the second-party workbook uses "Events".
    "Sheet".to_string()
}
fn default_secondary_sheet() -> String {
    "Events".to_string()
}
fn default_date_display() -> String {
    "%a %b %d %Y".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_primary_sheet")]
    pub primary_sheet: String,
    #[serde(default = "default_secondary_sheet")]
    pub secondary_sheet: String,
    /// strftime pattern for dates in the printed report.
    #[serde(default = "default_date_display")]
    pub date_display: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_sheet: default_primary_sheet(),
            secondary_sheet: default_secondary_sheet(),
            date_display: default_date_display(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("schedrec")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".schedrec")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("schedrec.conf")
    }

    /// Load from the given file, or from the standard location. A missing
    /// file yields the defaults; an unreadable or malformed file is an
    /// error rather than a silent fallback.
    pub fn load_from(custom: Option<&str>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Materialize the default configuration file (the `init` command).
    pub fn init(custom: Option<&str>) -> AppResult<PathBuf> {
        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };
        Config::default().save_to(&path)?;
        Ok(path)
    }
}
