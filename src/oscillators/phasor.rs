//! Phase-accumulating oscillator core.

use super::{Oscillator, Ramp, Sine, Waveform};
use crate::Signal;

/// A phase-accumulating oscillator.
///
/// `Phasor` keeps a phase that cycles through `[0.0, 1.0)` and advances once
/// per sample by `frequency / sample_rate`. Each sample is produced by a
/// [`Waveform`] shaping function applied to the raw phase, so every waveform
/// shares the same frequency and phase tracking: changing frequency
/// mid-stream never resets the phase, which keeps the output free of
/// discontinuities.
///
/// The shape is chosen at construction through the type parameter and
/// defaults to [`Ramp`], the raw phase itself.
///
/// # Examples
///
/// ```
/// use autopan::{Signal, SineOscillator};
///
/// // 0.25 Hz control oscillator at 44.1 kHz sample rate
/// let mut lfo = SineOscillator::new(0.25, 44100.0);
/// let sample = lfo.next_sample();
/// ```
pub struct Phasor<W: Waveform = Ramp> {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase advance per sample (frequency / sample_rate)
    phase_delta: f64,
    frequency: f64,
    sample_rate: f64,
    waveform: W,
}

/// Oscillator producing the raw phase ramp.
pub type RampOscillator = Phasor<Ramp>;

/// Sinusoidal oscillator built on the shared phase accumulator.
pub type SineOscillator = Phasor<Sine>;

impl<W: Waveform + Default> Phasor<W> {
    /// Creates a new oscillator.
    ///
    /// The sample rate must be strictly positive: a zero or negative rate
    /// turns the phase advance into a non-finite value that silently
    /// poisons every later sample.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz (negative sweeps the phase backwards)
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self::with_waveform(frequency, sample_rate, W::default())
    }
}

impl<W: Waveform> Phasor<W> {
    /// Creates a new oscillator with an explicit waveform shape.
    pub fn with_waveform(frequency: f64, sample_rate: f64, waveform: W) -> Self {
        Self {
            phase: 0.0,
            phase_delta: frequency / sample_rate,
            frequency,
            sample_rate,
            waveform,
        }
    }

    /// Changes the sample rate, keeping the current frequency and phase.
    ///
    /// As with [`new`](Phasor::new), the rate must be strictly positive.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.phase_delta = self.frequency / sample_rate;
    }

    /// Overwrites the phase accumulator directly (not range-checked).
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    /// Offsets the phase without wrapping, e.g. for phase modulation.
    ///
    /// The phase may sit outside `[0.0, 1.0)` until the wrap check on the
    /// next `next_sample()` call.
    pub fn offset_phase(&mut self, offset: f64) {
        self.phase += offset;
    }

    /// The raw phase accumulator.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl<W: Waveform> Signal for Phasor<W> {
    fn next_sample(&mut self) -> f64 {
        // Advance, then renormalize with a single subtraction. One
        // subtraction is enough while the per-sample advance stays below
        // one period; a delta of 1.0 or more leaves the phase above 1.0
        // until later advances pull it back.
        self.phase += self.phase_delta;
        if self.phase > 1.0 {
            self.phase -= 1.0;
        }

        self.waveform.shape(self.phase)
    }

    // Uses default implementation of process() from the trait
}

impl<W: Waveform> Oscillator for Phasor<W> {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.phase_delta = frequency / self.sample_rate;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
