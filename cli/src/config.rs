use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use tictactoe_engine::Difficulty;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: usize,
    pub difficulty: Difficulty,
    // Fixed search depth; unset lets the engine pick its own mode.
    pub depth_limit: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: 3,
            difficulty: Difficulty::Hard,
            depth_limit: None,
            seed: None,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < 3 {
            return Err("board_size must be at least 3".to_string());
        }
        if self.board_size > 20 {
            return Err("board_size must not exceed 20".to_string());
        }
        if self.depth_limit == Some(0) {
            return Err("depth_limit must be at least 1".to_string());
        }
        Ok(())
    }
}

// A missing config file is not an error; the defaults apply.
pub fn load_config(path: &str) -> Result<Option<Config>, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_yaml_ng::from_str(&content)
            .map(Some)
            .map_err(|e| format!("Failed to deserialize config: {}", e)),
        Err(err) => match err.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(format!("Failed to read config file: {}", err)),
        },
    }
}
