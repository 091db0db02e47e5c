use super::constants::MOTION_SETTLE_SECS;

/// Debounced "camera is moving" flag.
///
/// Every camera change re-arms the timer; the flag drops only after a full
/// `delay_secs` passes without another change, not when an animation ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSettle {
    delay_secs:     f32,
    remaining_secs: f32,
    moving:         bool,
}

impl Default for MotionSettle {
    fn default() -> Self { Self::new(MOTION_SETTLE_SECS) }
}

impl MotionSettle {
    pub const fn new(delay_secs: f32) -> Self {
        Self {
            delay_secs,
            remaining_secs: 0.0,
            moving: false,
        }
    }

    pub const fn set_delay(&mut self, delay_secs: f32) { self.delay_secs = delay_secs; }

    pub const fn notify(&mut self) {
        self.moving = true;
        self.remaining_secs = self.delay_secs;
    }

    pub fn tick(&mut self, delta_secs: f32) {
        if !self.moving {
            return;
        }
        self.remaining_secs -= delta_secs;
        if self.remaining_secs <= 0.0 {
            self.remaining_secs = 0.0;
            self.moving = false;
        }
    }

    pub const fn is_moving(&self) -> bool { self.moving }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_after_delay_without_changes() {
        let mut settle = MotionSettle::new(0.5);
        settle.notify();
        settle.tick(0.3);
        assert!(settle.is_moving());
        settle.tick(0.25);
        assert!(!settle.is_moving());
    }

    #[test]
    fn each_change_restarts_the_delay() {
        let mut settle = MotionSettle::new(0.5);
        settle.notify();
        for _ in 0..10 {
            settle.tick(0.3);
            settle.notify();
        }
        assert!(settle.is_moving());
        settle.tick(0.49);
        assert!(settle.is_moving());
        settle.tick(0.02);
        assert!(!settle.is_moving());
    }

    #[test]
    fn starts_settled() {
        let mut settle = MotionSettle::default();
        assert!(!settle.is_moving());
        settle.tick(1.0);
        assert!(!settle.is_moving());
    }
}
