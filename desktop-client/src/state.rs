use common::games::snake::SnakeSnapshot;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex};

/// Everything the game task publishes for the UI thread.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<SnakeSnapshot>>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    high_score: Arc<Mutex<u32>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(event_log_size: usize, high_score: u32) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(event_log_size))),
            high_score: Arc::new(Mutex::new(high_score)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: Option<SnakeSnapshot>) {
        if let Some(ref snapshot) = snapshot {
            *self.high_score.lock().unwrap() = snapshot.high_score;
        }
        *self.snapshot.lock().unwrap() = snapshot;
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<SnakeSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_high_score(&self, value: u32) {
        *self.high_score.lock().unwrap() = value;
    }

    pub fn high_score(&self) -> u32 {
        *self.high_score.lock().unwrap()
    }

    pub fn add_event(&self, event: String) {
        self.event_log.lock().unwrap().enqueue(event);
        self.request_repaint();
    }

    /// Oldest first.
    pub fn events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().iter().cloned().collect()
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_keeps_latest_entries() {
        let state = SharedState::new(2, 0);
        state.add_event("one".to_string());
        state.add_event("two".to_string());
        state.add_event("three".to_string());
        assert_eq!(state.events(), vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_clearing_snapshot_keeps_high_score() {
        let state = SharedState::new(4, 3);
        state.set_snapshot(None);
        assert!(state.get_snapshot().is_none());
        assert_eq!(state.high_score(), 3);
    }
}
