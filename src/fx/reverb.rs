//! Griesinger reverb.
//!
//! Four all-pass diffusers on the summed input feed a figure-eight of two
//! loops. Each loop reads the long delay written by the other one, low-pass
//! filters it, diffuses it through two more all-passes and writes its own long
//! delay. The read of the first diffuser is modulated for additional smearing,
//! the long delays for a slow shimmer/chorus.

// Based on MIT-licensed code (c) 2014 by Emilie Gillet (emilie.o.gillet@gmail.com)

use super::all_pass::AllPass;
use crate::error::InitError;
use crate::params::Coefficients;
use crate::utils::arena::Arena;
use crate::utils::{crossfade, flush_denormal};
use crate::utils::delay_line::DelayLine;
use crate::utils::filter::OnePole;
use crate::utils::lfo::Lfo;
use crate::{NUM_CHANNELS, SAMPLE_RATE};

const AP1_SIZE: usize = 113;
const AP2_SIZE: usize = 162;
const AP3_SIZE: usize = 241;
const AP4_SIZE: usize = 399;
const DAP1A_SIZE: usize = 1653;
const DAP1B_SIZE: usize = 2038;
const DEL1_SIZE: usize = 3411;
const DAP2A_SIZE: usize = 1913;
const DAP2B_SIZE: usize = 1663;
const DEL2_SIZE: usize = 4782;

const SMEAR_DELAY: f32 = 100.0;
const SMEAR_AMPLITUDE: f32 = 10.0;
const DEL1_TAP: f32 = 3300.0;
const DEL2_TAP: f32 = 4680.0;
const TAP_AMPLITUDE: f32 = 100.0;

const WET_GAIN: f32 = 2.0;

const LFO_1_FREQUENCY: f32 = 0.5;
const LFO_2_FREQUENCY: f32 = 0.3;
const LFO_2_PHASE: f32 = 0.25;

#[derive(Debug)]
pub struct Reverb<'a> {
    ap1: AllPass<'a, AP1_SIZE>,
    ap2: AllPass<'a, AP2_SIZE>,
    ap3: AllPass<'a, AP3_SIZE>,
    ap4: AllPass<'a, AP4_SIZE>,

    dap1a: AllPass<'a, DAP1A_SIZE>,
    dap1b: AllPass<'a, DAP1B_SIZE>,
    del1: DelayLine<'a, DEL1_SIZE>,

    dap2a: AllPass<'a, DAP2A_SIZE>,
    dap2b: AllPass<'a, DAP2B_SIZE>,
    del2: DelayLine<'a, DEL2_SIZE>,

    lp_decay_1: OnePole,
    lp_decay_2: OnePole,
    lfo_1: Lfo,
    lfo_2: Lfo,
}

impl<'a> Reverb<'a> {
    /// Samples of external memory needed by all delay lines together.
    pub const REQUIRED_SAMPLES: usize = AP1_SIZE
        + AP2_SIZE
        + AP3_SIZE
        + AP4_SIZE
        + DAP1A_SIZE
        + DAP1B_SIZE
        + DEL1_SIZE
        + DAP2A_SIZE
        + DAP2B_SIZE
        + DEL2_SIZE;

    pub const REQUIRED_BYTES: usize = Self::REQUIRED_SAMPLES * core::mem::size_of::<f32>();

    /// Builds the reverb on top of `memory`, which must hold at least
    /// [`REQUIRED_SAMPLES`](Self::REQUIRED_SAMPLES) samples.
    pub fn new(memory: &'a mut [f32]) -> Result<Self, InitError> {
        let available = memory.len();
        let error = InitError::Memory {
            required: Self::REQUIRED_SAMPLES,
            available,
        };
        if available < Self::REQUIRED_SAMPLES {
            return Err(error);
        }

        Self::from_arena(&mut Arena::new(memory)).ok_or(error)
    }

    fn from_arena(arena: &mut Arena<'a>) -> Option<Self> {
        let mut reverb = Self {
            ap1: AllPass::new(DelayLine::new(arena.allocate::<AP1_SIZE>()?)),
            ap2: AllPass::new(DelayLine::new(arena.allocate::<AP2_SIZE>()?)),
            ap3: AllPass::new(DelayLine::new(arena.allocate::<AP3_SIZE>()?)),
            ap4: AllPass::new(DelayLine::new(arena.allocate::<AP4_SIZE>()?)),
            dap1a: AllPass::new(DelayLine::new(arena.allocate::<DAP1A_SIZE>()?)),
            dap1b: AllPass::new(DelayLine::new(arena.allocate::<DAP1B_SIZE>()?)),
            del1: DelayLine::new(arena.allocate::<DEL1_SIZE>()?),
            dap2a: AllPass::new(DelayLine::new(arena.allocate::<DAP2A_SIZE>()?)),
            dap2b: AllPass::new(DelayLine::new(arena.allocate::<DAP2B_SIZE>()?)),
            del2: DelayLine::new(arena.allocate::<DEL2_SIZE>()?),
            lp_decay_1: OnePole::new(),
            lp_decay_2: OnePole::new(),
            lfo_1: Lfo::new(),
            lfo_2: Lfo::new(),
        };
        reverb.init();

        Some(reverb)
    }

    pub fn init(&mut self) {
        self.lfo_1.init(LFO_1_FREQUENCY / SAMPLE_RATE, 0.0);
        self.lfo_2.init(LFO_2_FREQUENCY / SAMPLE_RATE, LFO_2_PHASE);
        self.lp_decay_1.reset();
        self.lp_decay_2.reset();
    }

    /// Silences all lines and filters and rewinds the LFOs.
    pub fn clear(&mut self) {
        self.ap1.reset();
        self.ap2.reset();
        self.ap3.reset();
        self.ap4.reset();
        self.dap1a.reset();
        self.dap1b.reset();
        self.del1.reset();
        self.dap2a.reset();
        self.dap2b.reset();
        self.del2.reset();
        self.lp_decay_1.reset();
        self.lp_decay_2.reset();
        self.lfo_1.start();
        self.lfo_2.start();
    }

    /// Renders interleaved stereo frames from `input` to `output`.
    ///
    /// Processes as many whole frames as both buffers hold.
    #[inline]
    pub fn process(&mut self, coefficients: &Coefficients, input: &[f32], output: &mut [f32]) {
        let c = *coefficients;

        for (frame_in, frame_out) in input
            .chunks_exact(NUM_CHANNELS)
            .zip(output.chunks_exact_mut(NUM_CHANNELS))
        {
            let (l, r) = self.tick(&c, frame_in[0], frame_in[1]);
            frame_out[0] = l;
            frame_out[1] = r;
        }
    }

    /// Renders interleaved stereo frames in place.
    #[inline]
    pub fn process_in_place(&mut self, coefficients: &Coefficients, in_out: &mut [f32]) {
        let c = *coefficients;

        for frame in in_out.chunks_exact_mut(NUM_CHANNELS) {
            let (l, r) = self.tick(&c, frame[0], frame[1]);
            frame[0] = l;
            frame[1] = r;
        }
    }

    #[inline]
    fn tick(&mut self, c: &Coefficients, in_l: f32, in_r: f32) -> (f32, f32) {
        let kap = c.diffusion;
        let klp = c.damping;
        let krt = c.decay;

        let lfo_1 = self.lfo_1.value();
        let lfo_2 = self.lfo_2.value();
        self.lfo_1.advance();
        self.lfo_2.advance();

        // Diffuse through 4 allpasses, smearing inside the first one.
        let mut apout = (in_l + in_r) * c.input_gain;
        apout = self.ap1.process_modulated(
            apout,
            kap,
            SMEAR_DELAY + SMEAR_AMPLITUDE * c.modulation * lfo_1,
        );
        apout = self.ap2.process(apout, kap);
        apout = self.ap3.process(apout, kap);
        apout = self.ap4.process(apout, kap);

        // Main reverb loop.
        let mut wet = self
            .del2
            .read_frac(DEL2_TAP + TAP_AMPLITUDE * c.modulation * lfo_2);
        wet = self.lp_decay_1.process(apout + wet * krt, klp);
        wet = self.dap1a.process(wet, -kap);
        wet = flush_denormal(self.dap1b.process(wet, kap));
        self.del1.write(wet);
        let wet_l = wet * WET_GAIN;

        wet = self
            .del1
            .read_frac(DEL1_TAP + TAP_AMPLITUDE * c.modulation * lfo_1);
        wet = self.lp_decay_2.process(apout + wet * krt, klp);
        wet = self.dap2a.process(wet, kap);
        wet = flush_denormal(self.dap2b.process(wet, -kap));
        self.del2.write(wet);
        let wet_r = wet * WET_GAIN;

        (
            crossfade(in_l, wet_l, c.amount),
            crossfade(in_r, wet_r, c.amount),
        )
    }
}
