//! Sine LFO for delay modulation.
//!
//! Keeps a 32-bit fixed-point phase accumulator that wraps on overflow, so the
//! rate stays exact however long it runs, and returns a cosine between -1.0 and
//! 1.0.

#[allow(unused_imports)]
use num_traits::float::Float;

const PHASE_SCALE: f64 = 4294967296.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct Lfo {
    phase: u32,
    initial_phase: u32,
    phase_increment: u32,
}

impl Lfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// `frequency` is normalized (cycles per sample), `phase` is in cycles.
    pub fn init(&mut self, frequency: f32, phase: f32) {
        let frequency = frequency as f64;
        let phase = phase as f64;
        self.phase_increment = ((frequency - frequency.floor()) * PHASE_SCALE) as u32;
        self.initial_phase = ((phase - phase.floor()) * PHASE_SCALE) as u32;
        self.start();
    }

    /// Rewinds to the initial phase.
    #[inline]
    pub fn start(&mut self) {
        self.phase = self.initial_phase;
    }

    /// Current phase in cycles, `0.0..1.0`.
    pub fn phase(&self) -> f32 {
        // Top 24 bits are exact in an f32 and never round up to 1.0.
        (self.phase >> 8) as f32 / 16777216.0
    }

    #[inline]
    pub fn value(&self) -> f32 {
        (2.0 * core::f32::consts::PI * self.phase()).cos()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.phase = self.phase.wrapping_add(self.phase_increment);
    }
}
