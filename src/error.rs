//! Errors reported while bringing up a unit.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("no memory block provided")]
    Undefined,
    #[error("unsupported sample rate {0} Hz")]
    SampleRate(u32),
    #[error("unsupported channel geometry {input} in / {output} out")]
    Geometry { input: u8, output: u8 },
    #[error("memory block holds {available} samples, {required} required")]
    Memory { required: usize, available: usize },
}
