use anyhow::Result;
use rust_lockin::generation::{add_offset, sine_wave, square_wave};
use rust_lockin::lockin::{lock_in, LockinAmplifier, ReferenceShape};
use rust_lockin::utility::NoiseGenerator;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_sine_amplitude_recovery_without_noise() -> Result<()> {
    let signal = sine_wave(3.0, 5.0, 1000.0, 1.0)?;
    let reference = sine_wave(1.0, 5.0, 1000.0, 1.0)?;

    let output = lock_in(reference.amplitudes(), signal.amplitudes())?;

    // The closed time axis carries one extra zero-valued sample at t = 1,
    // which scales the ideal A/2 by (N - 1) / N
    let n = signal.len() as f64;
    assert!((output - 1.5 * (n - 1.0) / n).abs() < TOLERANCE, "output = {}", output);
    assert!((output - 1.5).abs() <= 1.5 / n, "output = {}", output);
    assert!((ReferenceShape::Sine.predicted_amplitude(output) - 3.0).abs() <= 3.0 / n);
    Ok(())
}

#[test]
fn test_square_amplitude_recovery_without_noise() -> Result<()> {
    let signal = square_wave(2.0, 5.0, 1000.0, 1.0)?;
    let reference = square_wave(1.0, 5.0, 1000.0, 1.0)?;

    let output = lock_in(reference.amplitudes(), signal.amplitudes())?;
    assert!((output - 2.0).abs() < TOLERANCE, "output = {}", output);
    Ok(())
}

#[test]
fn test_offset_is_rejected_by_zero_mean_reference() -> Result<()> {
    let reference = sine_wave(1.0, 5.0, 1000.0, 1.0)?;
    let signal = sine_wave(1.0, 5.0, 1000.0, 1.0)?;

    let low = add_offset(signal.amplitudes(), 2.0);
    let high = add_offset(signal.amplitudes(), 7.0);

    let out_low = lock_in(reference.amplitudes(), &low)?;
    let out_high = lock_in(reference.amplitudes(), &high)?;
    let out_none = lock_in(reference.amplitudes(), signal.amplitudes())?;

    assert!((out_low - out_high).abs() < TOLERANCE);
    assert!((out_low - out_none).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_sine_recovered_from_noise() -> Result<()> {
    let mut generator = NoiseGenerator::new(2024);
    let signal = sine_wave(0.5, 10.0, 10_000.0, 1.0)?;
    let reference = sine_wave(1.0, 10.0, 10_000.0, 1.0)?;
    let noise = generator.noise(0.0, 1.0, 10_000.0, 1.0)?;

    let noisy: Vec<f64> = signal
        .amplitudes()
        .iter()
        .zip(noise.iter())
        .map(|(s, n)| s + n)
        .collect();
    let noisy = signal.with_amplitudes(noisy)?;

    let reading = LockinAmplifier::new().measure(
        ReferenceShape::Sine,
        reference.amplitudes(),
        noisy.amplitudes(),
    )?;
    assert!(
        (reading.predicted_amplitude - 0.5).abs() < 0.1,
        "predicted = {}",
        reading.predicted_amplitude
    );
    Ok(())
}

#[test]
fn test_square_recovered_from_noise() -> Result<()> {
    let mut generator = NoiseGenerator::new(77);
    let signal = square_wave(0.3, 25.0, 10_000.0, 1.0)?;
    let reference = square_wave(1.0, 25.0, 10_000.0, 1.0)?;
    let noise = generator.noise(0.0, 2.0, 10_000.0, 1.0)?;

    let noisy: Vec<f64> = signal
        .amplitudes()
        .iter()
        .zip(noise.iter())
        .map(|(s, n)| s + n)
        .collect();

    let reading =
        LockinAmplifier::new().measure(ReferenceShape::Square, reference.amplitudes(), &noisy)?;
    assert!(
        (reading.predicted_amplitude - 0.3).abs() < 0.1,
        "predicted = {}",
        reading.predicted_amplitude
    );
    Ok(())
}
