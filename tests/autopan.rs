//! End-to-end behavior of the autopanner through the public API.

use autopan::{Autopan, WhiteNoise};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn block_size_never_changes_the_trajectory() {
    let mut chopped = Autopan::with_noise(48000.0, WhiteNoise::with_rng(StdRng::seed_from_u64(11)));
    let mut unchopped =
        Autopan::with_noise(48000.0, WhiteNoise::with_rng(StdRng::seed_from_u64(11)));

    // Process the same second of audio in uneven chunks and in one piece.
    let mut l_chopped = Vec::new();
    let mut r_chopped = Vec::new();
    for chunk in [1usize, 7, 64, 128, 313, 487] {
        let mut l = vec![0.0; chunk];
        let mut r = vec![0.0; chunk];
        chopped.process_block(&mut l, &mut r);
        l_chopped.extend_from_slice(&l);
        r_chopped.extend_from_slice(&r);
    }

    let total = l_chopped.len();
    let mut l_whole = vec![0.0; total];
    let mut r_whole = vec![0.0; total];
    unchopped.process_block(&mut l_whole, &mut r_whole);

    assert_eq!(l_chopped, l_whole);
    assert_eq!(r_chopped, r_whole);
}

#[test]
fn output_stays_within_an_eighth() {
    let mut panner = Autopan::with_noise(44100.0, WhiteNoise::with_rng(StdRng::seed_from_u64(1)));
    let mut left = vec![0.0; 44100];
    let mut right = vec![0.0; 44100];
    panner.process_block(&mut left, &mut right);

    for (l, r) in left.iter().zip(right.iter()) {
        assert!(l.abs() <= 0.125);
        assert!(r.abs() <= 0.125);
    }
}

#[test]
fn centered_source_is_silent_on_both_channels() {
    let mut panner = Autopan::with_noise(44100.0, 0.0_f64);
    for _ in 0..2048 {
        let (l, r) = panner.next_frame();
        assert_eq!(l, 0.0);
        assert_eq!(r, 0.0);
    }
}

#[test]
fn sweep_repeats_every_four_seconds() {
    // A constant full-scale source makes the output a pure image of the
    // pan gains, so the sweep itself becomes observable.
    let sample_rate = 1000.0;
    let cycle = 4 * sample_rate as usize; // 0.25 Hz
    let mut panner = Autopan::with_noise(sample_rate, 1.0_f64);

    let mut left = vec![0.0; 2 * cycle];
    let mut right = vec![0.0; 2 * cycle];
    panner.process_block(&mut left, &mut right);

    for i in 0..cycle {
        assert!(
            (left[i] - left[i + cycle]).abs() < 1e-9,
            "period drift at {}",
            i
        );
    }

    // The pan sweeps the full field: hard left and hard right are reached.
    let max = left.iter().cloned().fold(f64::MIN, f64::max);
    let min = left.iter().cloned().fold(f64::MAX, f64::min);
    assert!((max - 0.125).abs() < 1e-4);
    assert!(min.abs() < 1e-4);

    // Total level is conserved while the position moves.
    for (l, r) in left.iter().zip(right.iter()) {
        assert!((l + r - 0.125).abs() < 1e-12);
    }
}
