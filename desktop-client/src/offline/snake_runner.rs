use common::games::SessionRng;
use common::games::snake::{SessionCommand, SnakeSession, run_session};
use common::high_score::{FileHighScoreStore, HighScoreStore};
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::SharedState;
use super::LocalBroadcaster;

pub type LocalSession = SnakeSession<LocalBroadcaster, LocalBroadcaster, FileHighScoreStore>;

pub fn build_session(config: &Config, shared_state: &SharedState, seed: Option<u64>) -> LocalSession {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let store = FileHighScoreStore::from_yaml_file(config.high_score.file.as_str());

    SnakeSession::new(
        config.game.clone(),
        rng,
        config.high_score.key.clone(),
        broadcaster.clone(),
        broadcaster,
        store,
    )
}

/// Runs until the UI sends `Shutdown` or drops its sender.
pub async fn run_snake_game<S: HighScoreStore>(
    session: SnakeSession<LocalBroadcaster, LocalBroadcaster, S>,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let session = run_session(session, command_rx).await;
    log!(
        "Snake game task finished, best score {}",
        session.high_score()
    );
}
