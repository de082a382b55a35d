use crate::error::{Result, TickpadError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 80;
const MIN_LINE_WIDTH: usize = 20;
const DEFAULT_PAGE_TITLE: &str = "Tickpad";

/// Configuration for tickpad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickpadConfig {
    /// Ask before deleting an item
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,

    /// Width of terminal list output
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Title of the exported HTML page
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_confirm_delete() -> bool {
    true
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_string()
}

impl Default for TickpadConfig {
    fn default() -> Self {
        Self {
            confirm_delete: default_confirm_delete(),
            line_width: default_line_width(),
            page_title: default_page_title(),
        }
    }
}

impl TickpadConfig {
    pub const KEYS: [&'static str; 3] = ["confirm-delete", "line-width", "page-title"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TickpadError::Io)?;
        let config: TickpadConfig =
            serde_json::from_str(&content).map_err(TickpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TickpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TickpadError::Serialization)?;
        fs::write(config_path, content).map_err(TickpadError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "confirm-delete" => Ok(self.confirm_delete.to_string()),
            "line-width" => Ok(self.line_width.to_string()),
            "page-title" => Ok(self.page_title.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "confirm-delete" => {
                self.confirm_delete = parse_bool(value)?;
            }
            "line-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| TickpadError::Config(format!("Not a number: {}", value)))?;
                self.line_width = width.max(MIN_LINE_WIDTH);
            }
            "page-title" => {
                let title = value.trim();
                if title.is_empty() {
                    return Err(TickpadError::Config("Page title cannot be empty".into()));
                }
                self.page_title = title.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(TickpadError::Config(format!("Not a boolean: {}", other))),
    }
}

fn unknown_key(key: &str) -> TickpadError {
    TickpadError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        TickpadConfig::KEYS.join(", ")
    ))
}
