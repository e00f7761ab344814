mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::{GameEventSink, NullSink, SnapshotSink};
pub use session_rng::SessionRng;
