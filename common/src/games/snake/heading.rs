use super::types::Direction;

/// Committed heading plus at most one buffered turn.
#[derive(Clone, Debug)]
pub struct HeadingController {
    current: Direction,
    pending: Option<Direction>,
}

impl HeadingController {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Buffers `requested` for the next step. Returns false when the request was dropped.
    /// Validation is always against the committed heading, so the last accepted request
    /// between two steps wins.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        if requested == Direction::Idle {
            return false;
        }
        if requested.is_opposite(&self.current) {
            return false;
        }
        if self.current.axis().is_some() && requested.axis() == self.current.axis() {
            return false;
        }

        self.pending = Some(requested);
        true
    }

    pub fn commit(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.current = next;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_request_is_dropped() {
        let mut controller = HeadingController::new(Direction::Right);
        assert!(!controller.set_heading(Direction::Left));
        assert_eq!(controller.commit(), Direction::Right);
    }

    #[test]
    fn test_same_axis_request_is_dropped() {
        let mut controller = HeadingController::new(Direction::Up);
        assert!(!controller.set_heading(Direction::Up));
        assert_eq!(controller.pending(), None);
    }

    #[test]
    fn test_perpendicular_request_commits_on_next_step() {
        let mut controller = HeadingController::new(Direction::Right);
        assert!(controller.set_heading(Direction::Down));
        assert_eq!(controller.current(), Direction::Right);
        assert_eq!(controller.commit(), Direction::Down);
        assert_eq!(controller.pending(), None);
    }

    #[test]
    fn test_last_write_wins_between_steps() {
        let mut controller = HeadingController::new(Direction::Right);
        assert!(controller.set_heading(Direction::Up));
        assert!(controller.set_heading(Direction::Down));
        assert_eq!(controller.commit(), Direction::Down);
    }

    #[test]
    fn test_second_turn_needs_a_step_in_between() {
        let mut controller = HeadingController::new(Direction::Right);
        assert!(controller.set_heading(Direction::Up));
        // Left is on the committed axis until Up has been consumed by a step.
        assert!(!controller.set_heading(Direction::Left));
        controller.commit();
        assert!(controller.set_heading(Direction::Left));
        assert_eq!(controller.commit(), Direction::Left);
    }

    #[test]
    fn test_idle_accepts_any_heading_but_not_idle() {
        let mut controller = HeadingController::new(Direction::Idle);
        assert!(!controller.set_heading(Direction::Idle));
        assert!(controller.set_heading(Direction::Left));
        assert_eq!(controller.commit(), Direction::Left);
    }
}
