//! Host-facing reverb unit.
//!
//! Wraps one [`Reverb`] and its [`Parameters`] behind the lifecycle a runtime
//! drives: init, render once per block, parameter access between blocks,
//! teardown. Parameters are sampled once at the start of each block.

use crate::error::InitError;
use crate::fx::reverb::Reverb;
use crate::params::Parameters;
use crate::{NUM_CHANNELS, SAMPLE_RATE};

/// What the runtime reports about itself at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    pub sample_rate: u32,
    pub input_channels: u8,
    pub output_channels: u8,
}

impl Default for RuntimeDesc {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE as u32,
            input_channels: NUM_CHANNELS as u8,
            output_channels: NUM_CHANNELS as u8,
        }
    }
}

impl RuntimeDesc {
    pub fn validate(&self) -> Result<(), InitError> {
        if self.sample_rate != SAMPLE_RATE as u32 {
            return Err(InitError::SampleRate(self.sample_rate));
        }
        if usize::from(self.input_channels) != NUM_CHANNELS
            || usize::from(self.output_channels) != NUM_CHANNELS
        {
            return Err(InitError::Geometry {
                input: self.input_channels,
                output: self.output_channels,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Unit<'a> {
    reverb: Option<Reverb<'a>>,
    parameters: Parameters,
    suspended: bool,
}

impl<'a> Unit<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the runtime and builds the reverb on `memory`.
    ///
    /// On failure the unit holds no engine and renders its input unchanged.
    pub fn init(
        &mut self,
        desc: &RuntimeDesc,
        memory: Option<&'a mut [f32]>,
    ) -> Result<(), InitError> {
        self.reverb = None;
        self.parameters.reset();
        self.suspended = false;

        let reverb = Self::build(desc, memory).inspect_err(|err| {
            log::warn!("Reverb init failed: {err}");
        })?;
        self.reverb = Some(reverb);
        log::debug!(
            "Reverb initialized with {} samples of delay memory",
            Reverb::REQUIRED_SAMPLES
        );

        Ok(())
    }

    fn build(desc: &RuntimeDesc, memory: Option<&'a mut [f32]>) -> Result<Reverb<'a>, InitError> {
        desc.validate()?;
        let memory = memory.ok_or(InitError::Undefined)?;

        Reverb::new(memory)
    }

    /// Drops the engine and with it the borrow of the memory block.
    pub fn teardown(&mut self) {
        if self.reverb.take().is_some() {
            log::debug!("Reverb torn down");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.reverb.is_some()
    }

    /// Silences the tail without touching parameters.
    pub fn reset(&mut self) {
        if let Some(reverb) = self.reverb.as_mut() {
            reverb.clear();
            log::debug!("Reverb reset");
        }
    }

    /// Bypasses processing until [`resume`](Self::resume), keeping the tail frozen.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Renders interleaved stereo frames.
    ///
    /// Passes the input through while suspended or without an engine.
    pub fn render(&mut self, input: &[f32], output: &mut [f32]) {
        let len = input.len().min(output.len()) / NUM_CHANNELS * NUM_CHANNELS;
        let coefficients = self.parameters.coefficients();

        match self.reverb.as_mut() {
            Some(reverb) if !self.suspended => {
                reverb.process(&coefficients, &input[..len], &mut output[..len]);
            }
            _ => output[..len].copy_from_slice(&input[..len]),
        }
    }

    pub fn set_param_value(&mut self, id: u8, value: i32) {
        self.parameters.set(id, value);
    }

    pub fn param_value(&self, id: u8) -> i32 {
        self.parameters.get(id)
    }

    pub fn param_str_value(&self, id: u8, value: i32) -> Option<&'static str> {
        Parameters::str_value(id, value)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
