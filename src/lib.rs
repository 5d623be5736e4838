#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod fx;
pub mod params;
pub mod unit;
pub mod utils;

/// Sample rate the unit runs at, in Hz.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Number of interleaved channels on both input and output.
pub const NUM_CHANNELS: usize = 2;
