use crate::games::SessionRng;
use super::entity::Snake;
use super::food::{pick_color, place_food};
use super::heading::HeadingController;
use super::settings::SnakeSettings;
use super::snapshot::SnakeSnapshot;
use super::types::{DeathReason, Direction, FieldSize, Food, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Consumed,
    Collided(DeathReason),
    Inactive,
}

/// Everything one game owns between start and game over.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Food>,
    heading: HeadingController,
    field_size: FieldSize,
    score: u32,
    speed: f32,
    death_reason: Option<DeathReason>,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let field_size = settings.field();
        let snake = Snake::new(settings.start_position);

        let food = if snake.occupies(&settings.initial_food) {
            place_food(&field_size, &snake, &settings.food_palette, rng)
        } else {
            Some(Food {
                position: settings.initial_food,
                color: pick_color(&settings.food_palette, rng),
            })
        };

        Self {
            snake,
            food,
            heading: HeadingController::new(settings.start_direction),
            field_size,
            score: 0,
            speed: settings.base_speed,
            death_reason: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn heading(&self) -> Direction {
        self.heading.current()
    }

    pub fn set_heading(&mut self, direction: Direction) -> bool {
        self.heading.set_heading(direction)
    }

    pub fn step(&mut self, settings: &SnakeSettings, rng: &mut SessionRng) -> StepOutcome {
        if !self.is_active() {
            return StepOutcome::Inactive;
        }

        let direction = self.heading.commit();
        let next_head = self.snake.head().offset(direction);

        if let Err(reason) = self.check_collision(next_head) {
            self.death_reason = Some(reason);
            return StepOutcome::Collided(reason);
        }

        let ate = self
            .food
            .as_ref()
            .is_some_and(|food| food.position == next_head);

        if ate {
            self.score += settings.score_unit;
            self.speed += settings.speed_increment;
            self.snake.grow_to(next_head);
            self.food = place_food(&self.field_size, &self.snake, &settings.food_palette, rng);
            StepOutcome::Consumed
        } else {
            self.snake.advance_to(next_head);
            StepOutcome::Moved
        }
    }

    /// Checked against the body before it moves, tail included.
    fn check_collision(&self, next_head: Point) -> Result<(), DeathReason> {
        if self.snake.occupies(&next_head) {
            return Err(DeathReason::SelfCollision);
        }
        if !self.field_size.contains(next_head) {
            return Err(DeathReason::WallCollision);
        }
        Ok(())
    }

    pub fn snapshot(&self, high_score: u32) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: self.snake.segments().copied().collect(),
            food: self.food.clone(),
            heading: self.heading.current(),
            score: self.score,
            speed: self.speed,
            active: self.is_active(),
            high_score,
            field_size: self.field_size,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: &[Point]) {
        self.snake = Snake::from_segments(segments);
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, position: Point) {
        self.food = Some(Food {
            position,
            color: "#006400".to_string(),
        });
    }
}
