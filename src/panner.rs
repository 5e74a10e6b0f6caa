//! Noise source amplitude-panned between two channels.

use crate::Signal;
use crate::noise::WhiteNoise;
use crate::oscillators::{Oscillator, SineOscillator};

/// Rate of the panning sweep in Hz: one full cycle every four seconds.
pub const PAN_RATE_HZ: f64 = 0.25;

/// Overall gain applied to the noise before panning.
const NOISE_LEVEL: f64 = 0.25;

/// Maps a pan position in [-1.0, 1.0] to a linear left/right gain pair.
///
/// The gains always sum to exactly 1.0, so the total level is conserved
/// as the position sweeps.
fn pan_gains(pan: f64) -> (f64, f64) {
    let left = pan * 0.5 + 0.5;
    (left, 1.0 - left)
}

/// Generates noise that sweeps between the left and right channels.
///
/// A sub-audible sine oscillator drives the stereo position; the noise
/// source supplies the material being panned. The oscillator phase survives
/// block boundaries and [`prepare`](Autopan::prepare) calls, so the sweep
/// is continuous no matter how the host slices its buffers.
///
/// The noise source defaults to [`WhiteNoise`] and can be any [`Signal`],
/// which also makes the processor easy to drive deterministically.
///
/// # Examples
///
/// ```
/// use autopan::Autopan;
///
/// let mut panner = Autopan::new(44100.0);
/// let mut left = vec![0.0; 512];
/// let mut right = vec![0.0; 512];
/// panner.process_block(&mut left, &mut right);
/// ```
pub struct Autopan<N: Signal = WhiteNoise> {
    pan_lfo: SineOscillator,
    noise: N,
}

impl Autopan<WhiteNoise> {
    /// Creates an autopanner over white noise.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    pub fn new(sample_rate: f64) -> Self {
        Self::with_noise(sample_rate, WhiteNoise::new())
    }
}

impl<N: Signal> Autopan<N> {
    /// Creates an autopanner over a custom noise source.
    ///
    /// The source is expected to produce full-scale samples in [-1.0, 1.0].
    pub fn with_noise(sample_rate: f64, noise: N) -> Self {
        Self {
            pan_lfo: SineOscillator::new(PAN_RATE_HZ, sample_rate),
            noise,
        }
    }

    /// Configures the panner for a (possibly new) host sample rate.
    ///
    /// Call once before processing and again whenever the sample rate
    /// changes. The sweep phase is left untouched, so re-preparing at an
    /// unchanged rate is inaudible.
    pub fn prepare(&mut self, sample_rate: f64) {
        self.pan_lfo.set_sample_rate(sample_rate);
        self.pan_lfo.set_frequency(PAN_RATE_HZ);
    }

    /// Generates one stereo frame.
    ///
    /// Each channel stays within ±0.125: the noise term is at most 0.5 in
    /// magnitude, scaled by 0.25, and the pan gains never exceed 1.0.
    pub fn next_frame(&mut self) -> (f64, f64) {
        let noise = 0.5 * self.noise.next_sample();
        let pan = self.pan_lfo.next_sample();
        let (gain_l, gain_r) = pan_gains(pan);

        (noise * NOISE_LEVEL * gain_l, noise * NOISE_LEVEL * gain_r)
    }

    /// Fills the two channel buffers in place, one frame per slot.
    ///
    /// The buffers are walked in lockstep; the shorter one bounds the
    /// number of frames generated.
    pub fn process_block(&mut self, left: &mut [f64], right: &mut [f64]) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let (out_l, out_r) = self.next_frame();
            *l = out_l;
            *r = out_r;
        }
    }
}
