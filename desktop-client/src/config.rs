use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeSettings;
use common::HighScoreKey;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "grid_snake_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(file_path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeSettings,
    pub high_score: HighScoreConfig,
    pub ui: UiConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.high_score.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreConfig {
    pub file: String,
    pub key: HighScoreKey,
}

impl Default for HighScoreConfig {
    fn default() -> Self {
        Self {
            file: "grid_snake_high_score.yaml".to_string(),
            key: HighScoreKey::default(),
        }
    }
}

impl Validate for HighScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file.is_empty() {
            return Err("high_score.file must not be empty".to_string());
        }
        if self.key.as_str().is_empty() {
            return Err("high_score.key must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    pub cell_size: f32,
    pub event_log_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_size: 28.0,
            event_log_size: 8,
        }
    }
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8.0..=64.0).contains(&self.cell_size) {
            return Err("ui.cell_size must be between 8 and 64".to_string());
        }
        if self.event_log_size == 0 || self.event_log_size > 256 {
            return Err("ui.event_log_size must be between 1 and 256".to_string());
        }
        Ok(())
    }
}
