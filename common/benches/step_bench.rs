use criterion::{Criterion, criterion_group, criterion_main};
use common::HighScoreKey;
use common::games::snake::{
    Direction, SessionPhase, SnakeGameState, SnakeSession, SnakeSettings, StepOutcome,
};
use common::games::{NullSink, SessionRng};
use common::high_score::MemoryHighScoreStore;

/// Serpentine over the whole board, restarting on every collision.
fn run_steps(settings: &SnakeSettings, steps: usize, rng: &mut SessionRng) -> u32 {
    let mut game = SnakeGameState::new(settings, rng);
    let mut total_score = 0;

    for _ in 0..steps {
        let head = game.head();
        let heading = game.heading();
        if heading == Direction::Right && head.x == settings.field_size - 2 {
            game.set_heading(Direction::Down);
        } else if heading == Direction::Left && head.x == 2 {
            game.set_heading(Direction::Down);
        } else if heading == Direction::Down {
            let next = if head.x > settings.field_size / 2 { Direction::Left } else { Direction::Right };
            game.set_heading(next);
        }

        if let StepOutcome::Collided(_) = game.step(settings, rng) {
            total_score += game.score();
            game = SnakeGameState::new(settings, rng);
        }
    }

    total_score + game.score()
}

/// Full session path with presentation and persistence stubbed out.
fn run_session_steps(settings: &SnakeSettings, steps: usize, seed: u64) -> u32 {
    let mut session = SnakeSession::new(
        settings.clone(),
        SessionRng::new(seed),
        HighScoreKey::default(),
        NullSink,
        NullSink,
        MemoryHighScoreStore::new(),
    );
    session.start();

    for i in 0..steps {
        if session.phase() != SessionPhase::Active {
            session.start();
        }
        let turn = if i % 7 == 0 { Direction::Down } else { Direction::Right };
        session.set_heading(turn);
        session.step();
    }

    session.high_score()
}

fn criterion_benchmark(c: &mut Criterion) {
    let settings = SnakeSettings::default();

    c.bench_function("snake 1000 steps 18x18", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| run_steps(&settings, 1000, &mut rng))
    });

    let large = SnakeSettings {
        field_size: 100,
        ..SnakeSettings::default()
    };
    c.bench_function("snake 1000 steps 100x100", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| run_steps(&large, 1000, &mut rng))
    });

    c.bench_function("session 1000 steps 18x18", |b| {
        b.iter(|| run_session_steps(&settings, 1000, 42))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
