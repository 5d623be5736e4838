//! Host-facing parameters and their mapping to reverb coefficients.
//!
//! Parameters are stored as the raw integers the host sends, so reading them
//! back gives exactly the (clamped) value that was set. Coefficients are derived
//! from a snapshot once per rendered block.

use crate::utils::{crossfade, param_10bit_to_f32};

/// Reverb time, 10-bit.
pub const TIME: u8 = 0;
/// Depth of the control selected by [`PARAM4`], 10-bit.
pub const DEPTH: u8 = 1;
/// Bipolar dry/wet, -1000..1000 (displayed as -100.0..100.0).
pub const MIX: u8 = 2;
/// Mode selector, see [`Mode`].
pub const PARAM4: u8 = 3;
pub const NUM_PARAMS: u8 = 4;

/// Returned when reading a parameter id that does not exist.
pub const PARAM_VALUE_UNDEFINED: i32 = i32::MIN;

const PARAM_10BIT_MAX: i32 = 1023;
const MIX_MAX: i32 = 1000;

const INPUT_GAIN: f32 = 0.2;
const MAX_DECAY: f32 = 0.985;
const DEFAULT_DIFFUSION: f32 = 0.625;
const MIN_DIFFUSION: f32 = 0.3;
const MAX_DIFFUSION: f32 = 0.8;
const DEFAULT_DAMPING: f32 = 0.7;
const MIN_DAMPING: f32 = 0.1;

/// Selects what DEPTH controls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Diffusion of the all-pass network.
    Diffuse,
    /// High frequency damping inside the loops.
    #[default]
    Damp,
    /// Modulation depth of the long delays.
    Shimmer,
    /// All of the above at once.
    Plate,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Diffuse, Mode::Damp, Mode::Shimmer, Mode::Plate];

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Diffuse => "DIFFUSE",
            Mode::Damp => "DAMP",
            Mode::Shimmer => "SHIMMER",
            Mode::Plate => "PLATE",
        }
    }
}

/// Per-block coefficients consumed by [`Reverb`](crate::fx::reverb::Reverb).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Gain applied to the summed input.
    pub input_gain: f32,
    /// All-pass coefficient, `|k| < 1`.
    pub diffusion: f32,
    /// One-pole coefficient in the loops, 1.0 is no damping.
    pub damping: f32,
    /// Loop decay, `|k| < 1`.
    pub decay: f32,
    /// Dry/wet amount, negative values blend towards the inverted wet signal.
    pub amount: f32,
    /// Scale of the LFO excursions, 0.0..1.0.
    pub modulation: f32,
}

impl Default for Coefficients {
    fn default() -> Self {
        Parameters::default().coefficients()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    time: i32,
    depth: i32,
    mix: i32,
    mode: Mode,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time: 256,
            depth: 256,
            mix: 0,
            mode: Mode::Damp,
        }
    }
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets a raw value. Out of range values are clamped, unknown ids ignored.
    pub fn set(&mut self, id: u8, value: i32) {
        match id {
            TIME => self.time = value.clamp(0, PARAM_10BIT_MAX),
            DEPTH => self.depth = value.clamp(0, PARAM_10BIT_MAX),
            MIX => self.mix = value.clamp(-MIX_MAX, MIX_MAX),
            PARAM4 => {
                let index = value.clamp(0, Mode::ALL.len() as i32 - 1);
                self.mode = Mode::from_index(index).unwrap_or_default();
            }
            _ => {}
        }
    }

    /// Raw value last set, or [`PARAM_VALUE_UNDEFINED`] for unknown ids.
    pub fn get(&self, id: u8) -> i32 {
        match id {
            TIME => self.time,
            DEPTH => self.depth,
            MIX => self.mix,
            PARAM4 => self.mode.index(),
            _ => PARAM_VALUE_UNDEFINED,
        }
    }

    /// Display label for string-typed parameters.
    pub fn str_value(id: u8, value: i32) -> Option<&'static str> {
        match id {
            PARAM4 => Mode::from_index(value).map(Mode::label),
            _ => None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn time(&self) -> f32 {
        param_10bit_to_f32(self.time)
    }

    pub fn depth(&self) -> f32 {
        param_10bit_to_f32(self.depth)
    }

    pub fn mix(&self) -> f32 {
        self.mix as f32 / MIX_MAX as f32
    }

    pub fn coefficients(&self) -> Coefficients {
        let depth = self.depth();
        let (diffuse, damp, shimmer) = match self.mode {
            Mode::Diffuse => (true, false, false),
            Mode::Damp => (false, true, false),
            Mode::Shimmer => (false, false, true),
            Mode::Plate => (true, true, true),
        };

        Coefficients {
            input_gain: INPUT_GAIN,
            diffusion: if diffuse {
                crossfade(MIN_DIFFUSION, MAX_DIFFUSION, depth)
            } else {
                DEFAULT_DIFFUSION
            },
            damping: if damp {
                crossfade(1.0, MIN_DAMPING, depth)
            } else {
                DEFAULT_DAMPING
            },
            decay: self.time().min(MAX_DECAY),
            amount: self.mix(),
            modulation: if shimmer { depth } else { 1.0 },
        }
    }
}
