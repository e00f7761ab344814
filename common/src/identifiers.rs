use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGH_SCORE_KEY: &str = "highScore";

/// Stable name a best score is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HighScoreKey(String);

impl HighScoreKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HighScoreKey {
    fn default() -> Self {
        Self(DEFAULT_HIGH_SCORE_KEY.to_string())
    }
}

impl From<String> for HighScoreKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HighScoreKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for HighScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
