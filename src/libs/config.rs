//! Configuration management for the taskman application.
//!
//! Settings live in `config.json` inside the per-user data directory
//! resolved by [`DataStorage`]. Every section is optional so a missing file
//! or a partially filled one still yields working defaults.
//!
//! ## Resolution order for the database file
//!
//! 1. `TASKMAN_DB` environment variable (also read from `.env`)
//! 2. `database.path` in `config.json`
//! 3. `taskman.db` in the data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.db_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::{is_valid_format, DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment override for the database file path.
pub const DB_ENV_VAR: &str = "TASKMAN_DB";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Database file; defaults to `taskman.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// chrono format for due dates in tables.
    pub date_format: String,
    /// chrono format for created/updated timestamps.
    pub timestamp_format: String,
    /// Descriptions longer than this are truncated in the list table.
    pub description_width: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            description_width: 50,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads a config file, returning defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match self.database().path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "database".to_string(),
                name: "Database".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "database" => {
                    let default = config.database();
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.path.clone().unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.database = Some(DatabaseConfig {
                        path: if path.trim().is_empty() { None } else { Some(path.trim().to_string()) },
                        busy_timeout_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBusyTimeout.to_string())
                            .default(default.busy_timeout_ms)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        date_format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDateFormat.to_string())
                            .validate_with(check_format)
                            .default(default.date_format)
                            .interact_text()?,
                        timestamp_format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimestampFormat.to_string())
                            .validate_with(check_format)
                            .default(default.timestamp_format)
                            .interact_text()?,
                        description_width: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDescriptionWidth.to_string())
                            .default(default.description_width)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn check_format(input: &String) -> std::result::Result<(), String> {
    if is_valid_format(input) {
        Ok(())
    } else {
        Err(Message::InvalidDateFormat(input.clone()).to_string())
    }
}
