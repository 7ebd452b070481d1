// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal generation module
//!
//! This module synthesises the sampled waveforms fed to the lock-in engine
//! (sine, square, variable duty cycle square and linear ramps) and provides
//! the elementwise transforms used to corrupt them (offsets, rectification).
//! Gaussian noise lives in [`crate::utility::noise_generator`] because it
//! owns a random source.

pub mod transforms;
pub mod waveforms;
#[cfg(test)]
mod waveforms_test;

pub use transforms::{add_offset, make_non_negative, make_non_negative_in_place};
pub use waveforms::{line, sine_wave, square_wave, variable_square_wave};

use crate::error::{ensure_positive, Result, SignalError};
use serde::{Deserialize, Serialize};

/// A sampled waveform stored as two parallel arrays.
///
/// `times` and `amplitudes` always have the same length. Generator outputs
/// have non-decreasing `times`. Deserialized documents with arrays of
/// different lengths are rejected with `ShapeMismatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WaveformRecord")]
pub struct Waveform {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

/// Unchecked wire form of [`Waveform`]
#[derive(Deserialize)]
struct WaveformRecord {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl TryFrom<WaveformRecord> for Waveform {
    type Error = SignalError;

    fn try_from(record: WaveformRecord) -> Result<Self> {
        if record.times.len() != record.amplitudes.len() {
            return Err(SignalError::ShapeMismatch {
                reference: record.times.len(),
                input: record.amplitudes.len(),
            });
        }
        Ok(Self::from_parts(record.times, record.amplitudes))
    }
}

impl Waveform {
    pub(crate) fn from_parts(times: Vec<f64>, amplitudes: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), amplitudes.len());
        Self { times, amplitudes }
    }

    /// Time axis (or x axis for ramps)
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Split the waveform into `(times, amplitudes)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.amplitudes)
    }

    /// Replace the amplitudes while keeping the time axis.
    ///
    /// Fails with `ShapeMismatch` when the new amplitudes do not cover the
    /// time axis exactly.
    pub fn with_amplitudes(self, amplitudes: Vec<f64>) -> Result<Self> {
        if amplitudes.len() != self.times.len() {
            return Err(SignalError::ShapeMismatch {
                reference: self.times.len(),
                input: amplitudes.len(),
            });
        }
        Ok(Self {
            times: self.times,
            amplitudes,
        })
    }

    /// Drop the final sample.
    ///
    /// Consecutive one-second blocks generated over `[0, 1]` share their
    /// boundary instant; dropping it lets blocks be concatenated without
    /// repeating that instant.
    pub fn without_last_sample(mut self) -> Self {
        self.times.pop();
        self.amplitudes.pop();
        self
    }
}

/// Largest number of samples a single generator call will produce
pub const MAX_SAMPLE_COUNT: usize = u32::MAX as usize;

/// Number of samples produced for `duration` seconds at `sample_rate`.
///
/// Both arguments must be strictly positive and their product must lie
/// between one sample and [`MAX_SAMPLE_COUNT`].
pub fn sample_count(sample_rate: f64, duration: f64) -> Result<usize> {
    ensure_positive("sample_rate", sample_rate)?;
    ensure_positive("duration", duration)?;

    let product = sample_rate * duration;
    let total = product.floor();
    if total < 1.0 {
        return Err(SignalError::InvalidParameter {
            name: "sample_rate * duration",
            value: product,
            reason: "yields zero samples",
        });
    }
    if !total.is_finite() || total > MAX_SAMPLE_COUNT as f64 {
        return Err(SignalError::InvalidParameter {
            name: "sample_rate * duration",
            value: product,
            reason: "exceeds the maximum sample count",
        });
    }
    Ok(total as usize)
}

/// `count` evenly spaced values over `[start, stop]`, both endpoints included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint so accumulated rounding never overshoots `stop`
            values[count - 1] = stop;
            values
        }
    }
}
