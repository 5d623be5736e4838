//! Delay line over borrowed storage.
//!
//! The capacity is a compile-time constant, the samples themselves live in a
//! block handed out by [`Arena`](super::arena::Arena). Taps are addressed by
//! their age: `0` is the most recent sample, `SIZE - 1` the oldest one.

// Based on MIT-licensed code (c) 2014 by Olivier Gillet (ol.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

#[derive(Debug)]
pub struct DelayLine<'a, const SIZE: usize> {
    write_ptr: usize,
    line: &'a mut [f32; SIZE],
}

impl<'a, const SIZE: usize> DelayLine<'a, SIZE> {
    pub fn new(line: &'a mut [f32; SIZE]) -> Self {
        let mut delay_line = Self { write_ptr: 0, line };
        delay_line.reset();

        delay_line
    }

    pub fn reset(&mut self) {
        self.line.fill(0.0);
        self.write_ptr = 0;
    }

    pub const fn max_delay(&self) -> usize {
        SIZE
    }

    /// Largest magnitude currently stored.
    pub fn peak(&self) -> f32 {
        self.line.iter().fold(0.0, |peak, x| peak.max(x.abs()))
    }

    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.line[self.write_ptr] = sample;
        self.write_ptr += 1;
        if self.write_ptr == SIZE {
            self.write_ptr = 0;
        }
    }

    /// Sample written `delay` writes before the most recent one.
    #[inline]
    pub fn read(&self, delay: usize) -> f32 {
        debug_assert!(delay < SIZE);
        self.line[(self.write_ptr + SIZE - 1 - delay) % SIZE]
    }

    /// Oldest sample, i.e. the one the next write replaces.
    #[inline]
    pub fn tail(&self) -> f32 {
        self.line[self.write_ptr]
    }

    /// Linear interpolation between the two taps around `delay`.
    #[inline]
    pub fn read_frac(&self, delay: f32) -> f32 {
        let delay = delay.clamp(0.0, (SIZE - 2) as f32);
        let delay_integral = delay as usize;
        let delay_fractional = delay - (delay_integral as f32);
        let a = self.read(delay_integral);
        let b = self.read(delay_integral + 1);

        a + (b - a) * delay_fractional
    }
}
