use std::collections::{HashSet, VecDeque};

use super::types::Point;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn grow_to(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    /// Each segment takes its predecessor's cell; the old tail cell is freed.
    pub fn advance_to(&mut self, new_head: Point) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Point]) -> Self {
        Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::from_segments(&[Point::new(3, 1), Point::new(2, 1), Point::new(1, 1)]);
        snake.advance_to(Point::new(4, 1));
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Point::new(4, 1), Point::new(3, 1), Point::new(2, 1)]
        );
        assert!(!snake.occupies(&Point::new(1, 1)));
    }

    #[test]
    fn test_grow_prepends_head() {
        let mut snake = Snake::new(Point::new(1, 1));
        snake.grow_to(Point::new(2, 1));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(2, 1));
        assert!(snake.occupies(&Point::new(1, 1)));
    }
}
