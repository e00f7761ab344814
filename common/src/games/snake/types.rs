use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Grid heading. `Idle` is the zero vector and only exists before the first start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Idle,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Idle => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            Direction::Idle => None,
            Direction::Left | Direction::Right => Some(Axis::Horizontal),
            Direction::Up | Direction::Down => Some(Axis::Vertical),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    /// Grid extent N. Playable cells are `1..N` on both axes.
    pub extent: i32,
}

impl FieldSize {
    pub fn new(extent: i32) -> Self {
        Self { extent }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x > 0 && point.x < self.extent && point.y > 0 && point.y < self.extent
    }

    pub fn interior(&self) -> impl Iterator<Item = Point> + '_ {
        (1..self.extent).flat_map(move |y| (1..self.extent).map(move |x| Point::new(x, y)))
    }

    pub fn interior_cell_count(&self) -> usize {
        let side = (self.extent - 1).max(0) as usize;
        side * side
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    /// `#RRGGBB`
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Consumed {
        position: Point,
        score: u32,
    },
    Collided {
        reason: DeathReason,
        score: u32,
        new_high_score: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(p.offset(Direction::Right), Point::new(4, 3));
        assert_eq!(p.offset(Direction::Up), Point::new(3, 2));
        assert_eq!(p.offset(Direction::Idle), p);
    }

    #[test]
    fn test_idle_has_no_axis_and_no_opposite() {
        assert_eq!(Direction::Idle.axis(), None);
        assert!(!Direction::Idle.is_opposite(&Direction::Left));
        assert!(Direction::Up.is_opposite(&Direction::Down));
    }

    #[test]
    fn test_field_contains_is_open_interval() {
        let field = FieldSize::new(18);
        assert!(field.contains(Point::new(1, 1)));
        assert!(field.contains(Point::new(17, 17)));
        assert!(!field.contains(Point::new(0, 5)));
        assert!(!field.contains(Point::new(18, 5)));
        assert!(!field.contains(Point::new(5, 0)));
        assert!(!field.contains(Point::new(5, 18)));
        assert_eq!(field.interior().count(), field.interior_cell_count());
        assert_eq!(field.interior_cell_count(), 17 * 17);
    }
}
