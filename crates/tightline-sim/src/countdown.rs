//! Named per-state timers advanced by `tick`.

/// Slack for accumulated float error when stepping in fractions of a second.
const EXPIRY_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: f64,
}

impl Countdown {
    pub fn new(secs: f64) -> Self {
        Self { remaining: secs }
    }

    /// Advance by `dt`. Returns true once the countdown has run out.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.remaining -= dt;
        self.expired()
    }

    pub fn expired(&self) -> bool {
        self.remaining <= EXPIRY_EPSILON
    }

    pub fn remaining(&self) -> f64 {
        self.remaining.max(0.0)
    }
}
