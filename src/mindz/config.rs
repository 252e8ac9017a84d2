use crate::error::{MindzError, Result};
use crate::model::DEFAULT_NEW_TEXT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for mindz, stored in .mindz/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MindzConfig {
    /// Label given to topics added without an explicit text
    #[serde(default = "default_new_topic_text")]
    pub new_topic_text: String,
}

fn default_new_topic_text() -> String {
    DEFAULT_NEW_TEXT.to_string()
}

impl Default for MindzConfig {
    fn default() -> Self {
        Self {
            new_topic_text: default_new_topic_text(),
        }
    }
}

impl MindzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MindzError::Io)?;
        let config: MindzConfig =
            serde_json::from_str(&content).map_err(MindzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MindzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MindzError::Serialization)?;
        fs::write(config_path, content).map_err(MindzError::Io)?;
        Ok(())
    }

    pub fn get_new_topic_text(&self) -> &str {
        &self.new_topic_text
    }

    /// Set the default topic text; an empty or all-whitespace value
    /// falls back to the built-in default.
    pub fn set_new_topic_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.new_topic_text = default_new_topic_text();
        } else {
            self.new_topic_text = trimmed.to_string();
        }
    }
}
