use crate::games::snake::{GameEvent, SnakeSnapshot};

/// Presentation side of a session. Receives a snapshot after every state change.
pub trait SnapshotSink: Send + 'static {
    fn present(&self, snapshot: &SnakeSnapshot);

    /// The session went back to idle and there is nothing to draw.
    fn clear(&self) {}
}

/// Sound and UI effects hook. Must not block.
pub trait GameEventSink: Send + 'static {
    fn notify(&self, event: &GameEvent);
}

/// Discards everything. Used by headless runs such as benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn present(&self, _snapshot: &SnakeSnapshot) {}
}

impl GameEventSink for NullSink {
    fn notify(&self, _event: &GameEvent) {}
}
