use std::sync::{Arc, Mutex};

use crate::games::{GameEventSink, SnapshotSink};
use super::snapshot::SnakeSnapshot;
use super::types::GameEvent;

#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    snapshots: Arc<Mutex<Vec<SnakeSnapshot>>>,
    events: Arc<Mutex<Vec<GameEvent>>>,
    clears: Arc<Mutex<usize>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn snapshots(&self) -> Vec<SnakeSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    pub(crate) fn last_snapshot(&self) -> Option<SnakeSnapshot> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    pub(crate) fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn clear_count(&self) -> usize {
        *self.clears.lock().unwrap()
    }
}

impl SnapshotSink for RecordingSink {
    fn present(&self, snapshot: &SnakeSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot.clone());
    }

    fn clear(&self) {
        *self.clears.lock().unwrap() += 1;
    }
}

impl GameEventSink for RecordingSink {
    fn notify(&self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
