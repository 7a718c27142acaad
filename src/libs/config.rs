//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the platform data
//! directory (see [`DataStorage`]). Every field has a default, so a missing
//! file or a partial one is fine:
//!
//! ```json
//! {
//!   "storage_key": "task_dashboard_tasks_v1",
//!   "database": "taskdash.db",
//!   "default_filter": "all",
//!   "sort_ascending": true,
//!   "date_format": "%x"
//! }
//! ```
//!
//! ```rust,no_run
//! use taskdash::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.sort_ascending = false;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::dashboard::ViewState;
use super::data_storage::DataStorage;
use super::messages::Message;
use super::storage::DEFAULT_STORAGE_KEY;
use super::task::TaskFilter;
use crate::db::db::DB_FILE_NAME;
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// chrono's locale-preferred date representation.
pub const DEFAULT_DATE_FORMAT: &str = "%x";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Key under which the task collection is stored.
    pub storage_key: String,

    /// SQLite file name inside the data directory.
    pub database: String,

    /// Filter applied when a dashboard opens.
    pub default_filter: TaskFilter,

    /// Initial sort direction; `true` shows the earliest due date first.
    pub sort_ascending: bool,

    /// chrono `strftime` pattern for displaying due dates.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database: DB_FILE_NAME.to_string(),
            default_filter: TaskFilter::All,
            sort_ascending: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration file, or the defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Initial view state for a dashboard.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            filter: self.default_filter,
            sort_ascending: self.sort_ascending,
        }
    }

    /// The configured date format, or the default one if it does not parse.
    pub fn date_format(&self) -> &str {
        if is_valid_date_format(&self.date_format) {
            &self.date_format
        } else {
            DEFAULT_DATE_FORMAT
        }
    }

    /// Interactive wizard seeded with the current values.
    pub fn init() -> Result<Config> {
        let config = Config::read()?;
        let theme = ColorfulTheme::default();

        let storage_key: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptStorageKey.to_string())
            .default(config.storage_key)
            .interact_text()?;

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(config.database)
            .interact_text()?;

        let labels: Vec<&str> = TaskFilter::ALL.iter().map(|filter| filter.label()).collect();
        let current = TaskFilter::ALL
            .iter()
            .position(|&filter| filter == config.default_filter)
            .unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultFilter.to_string())
            .items(&labels)
            .default(current)
            .interact()?;

        let sort_ascending = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptSortAscending.to_string())
            .default(config.sort_ascending)
            .interact()?;

        let date_format: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(config.date_format)
            .validate_with(|input: &String| {
                if is_valid_date_format(input) {
                    Ok(())
                } else {
                    Err("unsupported format specifier")
                }
            })
            .interact_text()?;

        Ok(Config {
            storage_key,
            database,
            default_filter: TaskFilter::ALL[selected],
            sort_ascending,
            date_format,
        })
    }
}

pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
