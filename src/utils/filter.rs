//! One-pole lowpass used for damping inside feedback loops.

use super::{flush_denormal, one_pole};

/// Single-coefficient lowpass: `y += k * (x - y)`.
///
/// `k = 1.0` passes the input through, smaller values lean on the previous
/// output and remove more high frequencies.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnePole {
    state: f32,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    pub fn state(&self) -> f32 {
        self.state
    }

    #[inline]
    pub fn process(&mut self, input: f32, coefficient: f32) -> f32 {
        one_pole(&mut self.state, input, coefficient);
        self.state = flush_denormal(self.state);
        self.state
    }
}
