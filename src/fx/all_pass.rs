//! Scattering all-pass diffuser.

use crate::utils::delay_line::DelayLine;
use crate::utils::flush_denormal;

/// All-pass section with a delay of `SIZE` samples.
///
/// For `|k| < 1` the magnitude response is flat, so chains of these spread
/// transients in time without colouring the spectrum.
#[derive(Debug)]
pub struct AllPass<'a, const SIZE: usize> {
    line: DelayLine<'a, SIZE>,
}

impl<'a, const SIZE: usize> AllPass<'a, SIZE> {
    pub fn new(line: DelayLine<'a, SIZE>) -> Self {
        Self { line }
    }

    pub fn reset(&mut self) {
        self.line.reset();
    }

    pub fn peak(&self) -> f32 {
        self.line.peak()
    }

    #[inline]
    pub fn process(&mut self, input: f32, k: f32) -> f32 {
        let read = self.line.tail();
        self.scatter(input, read, k)
    }

    /// Same as [`process`](Self::process), reading the delayed sample at a
    /// fractional position.
    #[inline]
    pub fn process_modulated(&mut self, input: f32, k: f32, delay: f32) -> f32 {
        let read = self.line.read_frac(delay);
        self.scatter(input, read, k)
    }

    #[inline]
    fn scatter(&mut self, input: f32, read: f32, k: f32) -> f32 {
        let write = flush_denormal(input + k * read);
        self.line.write(write);

        read - k * write
    }
}
