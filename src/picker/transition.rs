//! Time-driven transition used between a tap and the sheet dismissal.

use std::time::Duration;

/// Default length of the selection transition.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(350);

/// Easing function: easeInCubic
fn ease_in(x: f32) -> f32 {
    x * x * x
}

/// An ease-in transition advanced by explicit frame deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    elapsed: Duration,
    duration: Duration,
}

impl Transition {
    pub fn ease_in(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advance by `dt`. Returns true once the transition has finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease_in(linear.clamp(0.0, 1.0))
    }
}
