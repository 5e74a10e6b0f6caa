//! Renders a few autopan sweep cycles to a stereo WAV file.
//!
//! Writes `autopan.wav` (eight seconds, two full sweeps) to the current
//! directory.

use anyhow::Result;
use autopan::{Autopan, WhiteNoise};
use rand::SeedableRng;

const SAMPLE_RATE: u32 = 44100;
const SECONDS: u32 = 8;

fn main() -> Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create("autopan.wav", spec)?;

    let noise = WhiteNoise::with_rng(rand::rngs::StdRng::seed_from_u64(17));
    let mut panner = Autopan::with_noise(SAMPLE_RATE as f64, noise);

    let amplitude = i16::MAX as f64;
    for _ in 0..(SAMPLE_RATE * SECONDS) {
        let (left, right) = panner.next_frame();
        writer.write_sample((left * amplitude) as i16)?;
        writer.write_sample((right * amplitude) as i16)?;
    }

    writer.finalize()?;
    println!("Wrote autopan.wav ({} seconds)", SECONDS);

    Ok(())
}
