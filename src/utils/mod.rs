//! Building blocks shared by the effects.

#[allow(unused_imports)]
use num_traits::float::Float;

pub mod arena;
pub mod delay_line;
pub mod filter;
pub mod lfo;

#[inline]
pub fn one_pole(out: &mut f32, in_: f32, coefficient: f32) {
    *out += (coefficient) * ((in_) - *out);
}

/// Values smaller than this are flushed to zero in feedback paths.
pub const DENORMAL_THRESHOLD: f32 = 1e-20;

/// Replaces tiny values by an exact zero so recirculating state dies out
/// instead of settling on a subnormal limit cycle.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < DENORMAL_THRESHOLD {
        0.0
    } else {
        x
    }
}

#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}

/// Maps a 10-bit control value to `0.0..=1.0`.
#[inline]
pub fn param_10bit_to_f32(value: i32) -> f32 {
    value.clamp(0, 1023) as f32 / 1023.0
}
