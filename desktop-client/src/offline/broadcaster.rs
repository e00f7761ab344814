use common::games::snake::{DeathReason, GameEvent, SnakeSnapshot};
use common::games::{GameEventSink, SnapshotSink};
use common::log;
use crate::state::SharedState;

/// Presentation and notification adapter: publishes into [`SharedState`] for the UI thread.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnapshotSink for LocalBroadcaster {
    fn present(&self, snapshot: &SnakeSnapshot) {
        self.shared_state.set_snapshot(Some(snapshot.clone()));
    }

    fn clear(&self) {
        self.shared_state.set_snapshot(None);
    }
}

impl GameEventSink for LocalBroadcaster {
    fn notify(&self, event: &GameEvent) {
        let message = describe_event(event);
        log!("{}", message);
        self.shared_state.add_event(message);
    }
}

pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Consumed { score, .. } => format!("Yum! Score: {}", score),
        GameEvent::Collided {
            reason,
            score,
            new_high_score,
        } => {
            let cause = match reason {
                DeathReason::WallCollision => "Hit the wall",
                DeathReason::SelfCollision => "Bit yourself",
            };
            if *new_high_score {
                format!("{}. New high score: {}!", cause, score)
            } else {
                format!("{}. Game over with score {}", cause, score)
            }
        }
    }
}
