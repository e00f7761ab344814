mod clock;
mod driver;
mod entity;
mod food;
mod game_state;
mod heading;
mod session;
mod settings;
mod snapshot;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::StepClock;
pub use driver::{SessionCommand, run_session};
pub use entity::Snake;
pub use food::place_food;
pub use game_state::{SnakeGameState, StepOutcome};
pub use heading::HeadingController;
pub use session::{SessionPhase, SnakeSession};
pub use settings::{DEFAULT_FOOD_PALETTE, SnakeSettings};
pub use snapshot::SnakeSnapshot;
pub use types::{Axis, DeathReason, Direction, FieldSize, Food, GameEvent, Point};
