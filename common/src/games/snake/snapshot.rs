use super::types::{Direction, FieldSize, Food, Point};

/// Read-only view of a game handed to presentation after every step.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub segments: Vec<Point>,
    pub food: Option<Food>,
    pub heading: Direction,
    pub score: u32,
    pub speed: f32,
    pub active: bool,
    pub high_score: u32,
    pub field_size: FieldSize,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.segments.first().copied()
    }
}
