mod file_store;
mod memory_store;

pub use file_store::{FileHighScoreStore, HighScoreTable};
pub use memory_store::MemoryHighScoreStore;

use crate::HighScoreKey;

/// Persistence port for the best score. Failures are reported, never fatal to a game.
pub trait HighScoreStore: Send + 'static {
    /// Returns 0 when nothing has been stored under `key` yet.
    fn load_high_score(&self, key: &HighScoreKey) -> Result<u32, String>;

    fn save_high_score(&self, key: &HighScoreKey, value: u32) -> Result<(), String>;
}
