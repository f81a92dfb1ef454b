//! Time-to-progress accumulator.

/// Advances a reveal distance by `speed * dt`, clamped to `[0, limit]`.
///
/// Pure and stateless; the engine owns the accumulated distance. Negative
/// `dt` values (clock skew in the host loop) never move the cursor backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealClock {
    speed: f64,
}

impl RevealClock {
    /// Create a clock running at `speed` units per second.
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Units per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Distance after `dt` seconds starting from `current`.
    pub fn advance(&self, current: f64, dt: f64, limit: f64) -> f64 {
        let step = self.speed * dt.max(0.0);
        (current + step).min(limit).max(0.0)
    }
}
