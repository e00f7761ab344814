use crate::high_score::HighScoreStore;
use crate::games::{GameEventSink, SessionRng, SnapshotSink};
use crate::{HighScoreKey, log};
use super::game_state::{SnakeGameState, StepOutcome};
use super::settings::SnakeSettings;
use super::snapshot::SnakeSnapshot;
use super::types::{DeathReason, Direction, GameEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    GameOver,
}

/// Owns the current game and the three adapters around it.
///
/// `Idle -> Active` and `GameOver -> Active` on [`start`](Self::start),
/// `Active -> GameOver` on a fatal step, anything `-> Idle` on [`end`](Self::end).
pub struct SnakeSession<P, N, S>
where
    P: SnapshotSink,
    N: GameEventSink,
    S: HighScoreStore,
{
    settings: SnakeSettings,
    rng: SessionRng,
    game: Option<SnakeGameState>,
    high_score_key: HighScoreKey,
    high_score: u32,
    presenter: P,
    notifier: N,
    store: S,
}

impl<P, N, S> SnakeSession<P, N, S>
where
    P: SnapshotSink,
    N: GameEventSink,
    S: HighScoreStore,
{
    pub fn new(
        settings: SnakeSettings,
        rng: SessionRng,
        high_score_key: HighScoreKey,
        presenter: P,
        notifier: N,
        store: S,
    ) -> Self {
        let high_score = match store.load_high_score(&high_score_key) {
            Ok(value) => value,
            Err(e) => {
                log!("Failed to load high score '{}': {}", high_score_key, e);
                0
            }
        };
        log!("Session ready, seed {}, high score {}", rng.seed(), high_score);

        Self {
            settings,
            rng,
            game: None,
            high_score_key,
            high_score,
            presenter,
            notifier,
            store,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::Idle,
            Some(game) if game.is_active() => SessionPhase::Active,
            Some(_) => SessionPhase::GameOver,
        }
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game(&self) -> Option<&SnakeGameState> {
        self.game.as_ref()
    }

    /// Current speed in steps per second; the base speed when no game is running.
    pub fn speed(&self) -> f32 {
        self.game
            .as_ref()
            .map(|game| game.speed())
            .unwrap_or(self.settings.base_speed)
    }

    pub fn snapshot(&self) -> Option<SnakeSnapshot> {
        self.game.as_ref().map(|game| game.snapshot(self.high_score))
    }

    pub fn start(&mut self) {
        let game = SnakeGameState::new(&self.settings, &mut self.rng);
        log!(
            "Game started at ({}, {}) heading {:?}",
            game.head().x,
            game.head().y,
            game.heading()
        );
        self.presenter.present(&game.snapshot(self.high_score));
        self.game = Some(game);
    }

    pub fn end(&mut self) {
        if let Some(game) = self.game.take() {
            log!("Game ended by player with score {}", game.score());
        }
        self.presenter.clear();
    }

    /// Requests are ignored outside of an active game.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        match self.game.as_mut() {
            Some(game) if game.is_active() => game.set_heading(direction),
            _ => false,
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        let phase = self.phase();
        if phase != SessionPhase::Active {
            log!("Step ignored: session is {:?}", phase);
            return StepOutcome::Inactive;
        }
        let Some(game) = self.game.as_mut() else {
            return StepOutcome::Inactive;
        };

        let outcome = game.step(&self.settings, &mut self.rng);
        let score = game.score();
        let head = game.head();

        match outcome {
            StepOutcome::Consumed => {
                log!("Ate food at ({}, {}). Score: {}", head.x, head.y, score);
                self.notifier.notify(&GameEvent::Consumed {
                    position: head,
                    score,
                });
            }
            StepOutcome::Collided(reason) => self.finish_game(reason, score),
            StepOutcome::Moved | StepOutcome::Inactive => {}
        }

        if let Some(snapshot) = self.snapshot() {
            self.presenter.present(&snapshot);
        }
        outcome
    }

    fn finish_game(&mut self, reason: DeathReason, score: u32) {
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
            if let Err(e) = self.store.save_high_score(&self.high_score_key, score) {
                log!("Failed to save high score '{}': {}", self.high_score_key, e);
            } else {
                log!("New high score {} saved under '{}'", score, self.high_score_key);
            }
        }

        log!("Game over: {:?} with score {}", reason, score);
        self.notifier.notify(&GameEvent::Collided {
            reason,
            score,
            new_high_score,
        });
    }
}
