use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::games::{GameEventSink, SnapshotSink};
use crate::high_score::HighScoreStore;
use crate::log;
use super::clock::StepClock;
use super::session::{SessionPhase, SnakeSession};
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    End,
    Turn(Direction),
    Shutdown,
}

/// Owns the session for its whole life: frames at `frame_interval`, steps whenever the
/// clock says one is due, and applies commands between frames. Returns the session on
/// `Shutdown` or when every sender is gone.
pub async fn run_session<P, N, S>(
    mut session: SnakeSession<P, N, S>,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) -> SnakeSession<P, N, S>
where
    P: SnapshotSink,
    N: GameEventSink,
    S: HighScoreStore,
{
    let mut frames = interval(session.settings().frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut clock = StepClock::new();
    let mut last_frame = Instant::now();

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_frame);
                last_frame = now;

                if session.phase() == SessionPhase::Active && clock.tick(elapsed, session.speed()) {
                    session.step();
                }
            }
            command = command_rx.recv() => {
                match command {
                    Some(SessionCommand::Start) => {
                        session.start();
                        clock.reset();
                    }
                    Some(SessionCommand::End) => session.end(),
                    Some(SessionCommand::Turn(direction)) => {
                        session.set_heading(direction);
                    }
                    Some(SessionCommand::Shutdown) | None => break,
                }
            }
        }
    }

    log!("Session driver stopped");
    session
}
