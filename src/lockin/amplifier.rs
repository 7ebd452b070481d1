// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Synchronous detection: multiply by a reference, then average

use crate::error::{Result, SignalError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Arithmetic mean of `data`.
///
/// # Errors
///
/// `EmptyInput` when `data` has no samples.
pub fn time_average(data: &[f64]) -> Result<f64> {
    mean_of("data", data)
}

fn mean_of(argument: &'static str, data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(SignalError::EmptyInput { argument });
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Lock `input` onto `reference`.
///
/// Computes the mean of the elementwise product `reference[i] * input[i]`.
/// Components of `input` correlated with the reference accumulate while
/// uncorrelated noise averages toward zero. For a sine of amplitude `A`
/// against a unit sine the output is close to `A / 2`; for a square wave of
/// amplitude `A` against a unit square wave it is `A`.
///
/// # Errors
///
/// `ShapeMismatch` when the arrays differ in length, `EmptyInput` when both
/// are empty.
///
/// # Examples
///
/// ```
/// use rust_lockin::lockin::lock_in;
///
/// let reference = [1.0, -1.0, 1.0, -1.0];
/// let input = [2.5, -1.5, 2.5, -1.5];
/// assert_eq!(lock_in(&reference, &input).unwrap(), 2.0);
/// ```
pub fn lock_in(reference: &[f64], input: &[f64]) -> Result<f64> {
    if reference.len() != input.len() {
        return Err(SignalError::ShapeMismatch {
            reference: reference.len(),
            input: input.len(),
        });
    }
    if input.is_empty() {
        return Err(SignalError::EmptyInput { argument: "input" });
    }

    let sum: f64 = reference.iter().zip(input.iter()).map(|(r, x)| r * x).sum();
    Ok(sum / input.len() as f64)
}

/// Elementwise product of `reference` and `input`, before averaging.
///
/// # Errors
///
/// `ShapeMismatch` when the arrays differ in length.
pub fn mix(reference: &[f64], input: &[f64]) -> Result<Vec<f64>> {
    if reference.len() != input.len() {
        return Err(SignalError::ShapeMismatch {
            reference: reference.len(),
            input: input.len(),
        });
    }
    Ok(reference.iter().zip(input.iter()).map(|(r, x)| r * x).collect())
}

/// Lock consecutive windows of `input` onto the same `reference`.
///
/// `input` is split into back-to-back windows of `reference.len()` samples
/// and each window is locked independently, producing one reading per
/// window. When the carrier amplitude is modulated slowly compared to the
/// window length, the readings trace the modulation envelope. Trailing
/// samples that do not fill a whole window are ignored.
///
/// # Errors
///
/// `EmptyInput` when `reference` is empty.
pub fn lock_in_segments(reference: &[f64], input: &[f64]) -> Result<Vec<f64>> {
    if reference.is_empty() {
        return Err(SignalError::EmptyInput {
            argument: "reference",
        });
    }

    let windows = input.chunks_exact(reference.len());
    let remainder = windows.remainder().len();
    if remainder > 0 {
        warn!(
            "Ignoring {} trailing samples that do not fill a {}-sample window",
            remainder,
            reference.len()
        );
    }

    let readings = windows
        .map(|window| lock_in(reference, window))
        .collect::<Result<Vec<f64>>>()?;
    debug!("Locked {} windows of {} samples", readings.len(), reference.len());
    Ok(readings)
}

/// Shape of the reference waveform used for detection.
///
/// The shape fixes the scale factor between the lock-in output and the
/// amplitude of the signal that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceShape {
    /// Unit sine reference: mean(sin²) = 1/2
    Sine,
    /// Unit square reference: mean(sign²) = 1
    Square,
}

impl ReferenceShape {
    /// Amplitude of the matched input signal that produced `output`.
    pub fn predicted_amplitude(self, output: f64) -> f64 {
        match self {
            ReferenceShape::Sine => output * 2.0,
            ReferenceShape::Square => output,
        }
    }
}

/// Result of one lock-in measurement.
///
/// Deserialization recomputes `predicted_amplitude` from `shape` and
/// `output`; a stored value is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LockinReadingRecord")]
pub struct LockinReading {
    /// Reference shape the input was locked onto
    pub shape: ReferenceShape,
    /// Raw lock-in output (mean of the product)
    pub output: f64,
    /// Back-calculated amplitude of the recovered signal
    pub predicted_amplitude: f64,
}

#[derive(Deserialize)]
struct LockinReadingRecord {
    shape: ReferenceShape,
    output: f64,
}

impl From<LockinReadingRecord> for LockinReading {
    fn from(record: LockinReadingRecord) -> Self {
        Self::new(record.shape, record.output)
    }
}

impl LockinReading {
    pub fn new(shape: ReferenceShape, output: f64) -> Self {
        Self {
            shape,
            output,
            predicted_amplitude: shape.predicted_amplitude(output),
        }
    }
}

/// Trait for implementing synchronous detection
pub trait SynchronousDetector: Send + Sync {
    /// Recover the component of `input` in phase with `reference`
    fn detect(&self, reference: &[f64], input: &[f64]) -> Result<f64>;
}

/// Stateless detector performing a plain multiply-and-average lock-in
#[derive(Debug, Default, Clone, Copy)]
pub struct LockinAmplifier;

impl LockinAmplifier {
    /// Create a new lock-in amplifier
    pub fn new() -> Self {
        Self
    }

    /// Lock `input` onto `reference` and scale the output for `shape`.
    pub fn measure(
        &self,
        shape: ReferenceShape,
        reference: &[f64],
        input: &[f64],
    ) -> Result<LockinReading> {
        Ok(LockinReading::new(shape, self.detect(reference, input)?))
    }
}

impl SynchronousDetector for LockinAmplifier {
    fn detect(&self, reference: &[f64], input: &[f64]) -> Result<f64> {
        lock_in(reference, input)
    }
}
