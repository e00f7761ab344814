use std::time::Duration;

/// Turns a stream of frame deltas into steps at `speed` steps per second.
#[derive(Clone, Debug, Default)]
pub struct StepClock {
    since_last_step: Duration,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_interval(speed: f32) -> Duration {
        Duration::from_secs_f32(1.0 / speed)
    }

    /// Returns true when a step is due. Leftover time is dropped, so a slow frame
    /// never produces a burst of catch-up steps.
    pub fn tick(&mut self, elapsed: Duration, speed: f32) -> bool {
        self.since_last_step += elapsed;
        if self.since_last_step < Self::step_interval(speed) {
            return false;
        }
        self.since_last_step = Duration::ZERO;
        true
    }

    pub fn reset(&mut self) {
        self.since_last_step = Duration::ZERO;
    }
}
