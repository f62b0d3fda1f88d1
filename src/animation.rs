//! Per-frame uniform animation.

/// A value that sweeps back and forth across `[0, 1]`.
///
/// Each [`step`](Self::step) adds the current increment; once the value has
/// gone past either bound the increment flips sign, so the value overshoots
/// by at most one increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPulse {
    value: f32,
    increment: f32,
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new(0.0, 0.05)
    }
}

impl ColorPulse {
    /// Start at `value`, moving upward by `increment` per step.
    #[must_use]
    pub fn new(value: f32, increment: f32) -> Self {
        Self {
            value,
            increment: increment.abs(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance one frame and return the new value.
    pub fn step(&mut self) -> f32 {
        if self.value > 1.0 {
            self.increment = -self.increment.abs();
        } else if self.value < 0.0 {
            self.increment = self.increment.abs();
        }
        self.value += self.increment;
        self.value
    }
}
