use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::HighScoreKey;
use super::HighScoreStore;

/// Clones share the same table, so a test can keep a handle after moving one into a session.
#[derive(Clone, Default)]
pub struct MemoryHighScoreStore {
    scores: Arc<Mutex<HashMap<HighScoreKey, u32>>>,
    save_count: Arc<Mutex<usize>>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(key: &HighScoreKey, value: u32) -> Self {
        let store = Self::new();
        if let Ok(mut scores) = store.scores.lock() {
            scores.insert(key.clone(), value);
        }
        store
    }

    pub fn save_count(&self) -> usize {
        self.save_count.lock().map(|count| *count).unwrap_or(0)
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self, key: &HighScoreKey) -> Result<u32, String> {
        let scores = self
            .scores
            .lock()
            .map_err(|e| format!("High score lock poisoned: {}", e))?;
        Ok(scores.get(key).copied().unwrap_or(0))
    }

    fn save_high_score(&self, key: &HighScoreKey, value: u32) -> Result<(), String> {
        let mut scores = self
            .scores
            .lock()
            .map_err(|e| format!("High score lock poisoned: {}", e))?;
        scores.insert(key.clone(), value);
        let mut count = self
            .save_count
            .lock()
            .map_err(|e| format!("High score lock poisoned: {}", e))?;
        *count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_loads_zero() {
        let store = MemoryHighScoreStore::new();
        assert_eq!(store.load_high_score(&HighScoreKey::default()), Ok(0));
    }

    #[test]
    fn test_clones_share_scores() {
        let store = MemoryHighScoreStore::new();
        let handle = store.clone();
        let key = HighScoreKey::from("snake");
        store.save_high_score(&key, 9).unwrap();
        assert_eq!(handle.load_high_score(&key), Ok(9));
        assert_eq!(handle.save_count(), 1);
    }
}
