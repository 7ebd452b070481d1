// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Deterministic waveform synthesis

use super::{linspace, sample_count, Waveform};
use crate::error::{ensure_finite, Result, SignalError};
use log::debug;
use std::f64::consts::PI;

/// Generate a sine wave sampled over `[0, duration]`.
///
/// Produces `floor(sample_rate * duration)` samples evenly spaced over the
/// closed interval, each equal to `amplitude * sin(2π * freq * t)`.
///
/// # Errors
///
/// `InvalidParameter` when `sample_rate` or `duration` is not strictly
/// positive, when their product yields no sample, or when `amplitude` or
/// `freq` is not finite.
///
/// # Examples
///
/// ```
/// use rust_lockin::generation::sine_wave;
///
/// let wave = sine_wave(2.0, 5.0, 1000.0, 1.0).unwrap();
/// assert_eq!(wave.len(), 1000);
/// assert_eq!(wave.times()[999], 1.0);
/// ```
pub fn sine_wave(amplitude: f64, freq: f64, sample_rate: f64, duration: f64) -> Result<Waveform> {
    ensure_finite("amplitude", amplitude)?;
    ensure_finite("freq", freq)?;
    let count = sample_count(sample_rate, duration)?;

    let times = linspace(0.0, duration, count);
    let amplitudes = times
        .iter()
        .map(|&t| amplitude * (2.0 * PI * freq * t).sin())
        .collect();

    debug!("Generated sine wave: {count} samples, {freq} Hz, amplitude {amplitude}");
    Ok(Waveform::from_parts(times, amplitudes))
}

/// Generate a 50% duty cycle square wave sampled over `[0, duration]`.
///
/// The time axis is built exactly like [`sine_wave`]. Within each cycle the
/// first half is `+amplitude` and the second half `-amplitude`. The cycle
/// position is `frac(freq * t)`, so `[0, 0.5)` is high and `[0.5, 1)` is low:
/// an exact rising zero-crossing, `t = 0` included, maps to `+amplitude`.
pub fn square_wave(
    amplitude: f64,
    freq: f64,
    sample_rate: f64,
    duration: f64,
) -> Result<Waveform> {
    ensure_finite("amplitude", amplitude)?;
    ensure_finite("freq", freq)?;
    let count = sample_count(sample_rate, duration)?;

    let times = linspace(0.0, duration, count);
    let amplitudes = times
        .iter()
        .map(|&t| amplitude * square_level(freq * t))
        .collect();

    debug!("Generated square wave: {count} samples, {freq} Hz, amplitude {amplitude}");
    Ok(Waveform::from_parts(times, amplitudes))
}

/// +1 on the first half of a cycle, -1 on the second half.
fn square_level(cycles: f64) -> f64 {
    if cycles.rem_euclid(1.0) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Generate a straight line `y = slope * x + intercept`.
///
/// `x` holds `number_of_samples` points evenly spaced over
/// `[0, number_of_samples]`.
pub fn line(slope: f64, intercept: f64, number_of_samples: usize) -> Result<Waveform> {
    ensure_finite("slope", slope)?;
    ensure_finite("intercept", intercept)?;
    if number_of_samples == 0 {
        return Err(SignalError::InvalidParameter {
            name: "number_of_samples",
            value: 0.0,
            reason: "yields zero samples",
        });
    }

    let x = linspace(0.0, number_of_samples as f64, number_of_samples);
    let y = x.iter().map(|&x| slope * x + intercept).collect();
    Ok(Waveform::from_parts(x, y))
}

/// Generate a pulse train with independent high and low durations.
///
/// The signal holds `amplitude` for `high_duration` sample intervals, then
/// `0` for `low_duration` sample intervals, and repeats over `[0, duration]`.
/// Sample instants are `t_k = k * duration / (N - 1)` for
/// `N = floor(sample_rate * duration)`.
///
/// Level changes are drawn as vertical edges: an instant where the level
/// changes strictly inside the window is emitted twice, first at the old
/// level then at the new one. A change falling exactly on the last instant
/// only contributes the old level. The output therefore holds
/// `N + transitions` points, where `transitions` counts the level changes at
/// instants `t_1 ..= t_(N-2)`.
///
/// # Errors
///
/// `InvalidParameter` when either duration is zero, when fewer than two
/// samples are requested, or for the conditions listed on [`sine_wave`].
pub fn variable_square_wave(
    amplitude: f64,
    high_duration: usize,
    low_duration: usize,
    sample_rate: f64,
    duration: f64,
) -> Result<Waveform> {
    ensure_finite("amplitude", amplitude)?;
    if high_duration == 0 {
        return Err(SignalError::InvalidParameter {
            name: "high_duration",
            value: 0.0,
            reason: "must span at least one sample interval",
        });
    }
    if low_duration == 0 {
        return Err(SignalError::InvalidParameter {
            name: "low_duration",
            value: 0.0,
            reason: "must span at least one sample interval",
        });
    }
    let count = sample_count(sample_rate, duration)?;
    if count < 2 {
        return Err(SignalError::InvalidParameter {
            name: "sample_rate * duration",
            value: sample_rate * duration,
            reason: "needs at least two samples to define a sample interval",
        });
    }

    let period = high_duration + low_duration;
    let instants = linspace(0.0, duration, count);
    let last = count - 1;

    let mut times = Vec::with_capacity(count + 2 * (count / period + 1));
    let mut amplitudes = Vec::with_capacity(times.capacity());
    let mut transitions = 0usize;

    for (k, &t) in instants.iter().enumerate() {
        let phase = k % period;
        let is_edge = k > 0 && (phase == 0 || phase == high_duration);
        // Level held on the interval that ends at this instant
        let before = if k > 0 && (phase == 0 || phase > high_duration) {
            0.0
        } else {
            amplitude
        };
        // Level held on the interval that starts at this instant
        let after = if phase < high_duration { amplitude } else { 0.0 };

        times.push(t);
        amplitudes.push(before);
        if is_edge && k < last {
            transitions += 1;
            times.push(t);
            amplitudes.push(after);
        }
    }

    debug!(
        "Generated variable square wave: {} samples, {} transitions, high={} low={}",
        count, transitions, high_duration, low_duration
    );
    Ok(Waveform::from_parts(times, amplitudes))
}
