//! Oscillators built on a shared phase accumulator.
//!
//! All waveforms derive from one phase generator, [`Phasor`], by supplying
//! a [`Waveform`] shaping function over its raw phase.

mod phasor;
mod traits;
mod waveforms;

pub use phasor::{Phasor, RampOscillator, SineOscillator};
pub use traits::Oscillator;
pub use waveforms::{Ramp, Sine, Waveform};
