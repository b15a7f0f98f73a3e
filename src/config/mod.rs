use crate::core::checkin::{SessionOptions, StartAgainPolicy};
use crate::core::reconcile::MatchStrategy;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".rstudyplan";
const CONFIG_FILE: &str = "rstudyplan.conf";
const DB_FILE: &str = "rstudyplan.sqlite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// What "start again" on a completed slot does: append | reset
    #[serde(default)]
    pub start_again: StartAgainPolicy,
    /// How records are matched to timetable entries: triple | entry
    #[serde(default)]
    pub match_by: MatchStrategy,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            start_again: StartAgainPolicy::default(),
            match_by: MatchStrategy::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rstudyplan)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            match_by: self.match_by,
            start_again: self.start_again,
        }
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Resolve a user-supplied database name: absolute paths are kept,
    /// relative ones land in the config directory.
    pub fn resolve_db_path(name: Option<&str>) -> PathBuf {
        match name {
            Some(n) if Path::new(n).is_absolute() => PathBuf::from(n),
            Some(n) => Self::config_dir().join(n),
            None => Self::database_file(),
        }
    }

    /// Write the configuration file (skipped in test mode) and make sure
    /// the database directory exists. Returns the config written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = Self::resolve_db_path(custom_db);

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
