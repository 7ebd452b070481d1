// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Gaussian Noise Generator
//!
//! This module provides the noise source used to bury test signals before
//! recovering them with the lock-in engine:
//!
//! - Additive Gaussian noise with configurable mean and standard deviation
//! - Rectified (non-negative) noise, simulating a detector that cannot
//!   report negative readings
//!
//! ## Features
//!
//! * Random source owned by the generator, injectable for reproducible runs
//! * Box-Muller transform for Gaussian distribution
//! * Sample count derived from sample rate and duration, like the waveform
//!   generators
//!
//! ## Examples
//!
//! ```rust
//! use rust_lockin::utility::noise_generator::NoiseGenerator;
//!
//! // Seeded generator: the same seed always yields the same sequence
//! let mut generator = NoiseGenerator::new(12345);
//!
//! // 1 second of zero-mean noise at 1 kHz with a standard deviation of 0.5
//! let samples = generator.noise(0.0, 0.5, 1000.0, 1.0).unwrap();
//! assert_eq!(samples.len(), 1000);
//!
//! // Rectified noise never goes below zero
//! let positive = generator.positive_noise(0.0, 0.5, 1000.0, 1.0).unwrap();
//! assert!(positive.iter().all(|&x| x >= 0.0));
//! ```

use crate::error::{ensure_finite, ensure_positive, Result};
use crate::generation::{make_non_negative_in_place, sample_count};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Gaussian noise source backed by an explicit random number generator.
///
/// The generator owns its random source instead of relying on a process-wide
/// state, so tests can seed it and two generators never interfere.
///
/// # Examples
///
/// ```
/// use rust_lockin::utility::noise_generator::NoiseGenerator;
///
/// // Create a generator with a specific seed
/// let mut generator = NoiseGenerator::new(12345);
///
/// // Generate a random value from a standard Gaussian distribution
/// let gaussian_value = generator.random_gaussian();
/// assert!(gaussian_value.is_finite());
/// ```
pub struct NoiseGenerator<R: RngCore = StdRng> {
    /// Random source used for every draw.
    rng: R,
}

impl NoiseGenerator<StdRng> {
    /// Creates a new noise generator with a given seed.
    ///
    /// Using the same seed will produce the same sequence of noise samples.
    ///
    /// # Arguments
    ///
    /// * `seed` - A 64-bit unsigned integer used to seed a [`StdRng`]
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_lockin::utility::noise_generator::NoiseGenerator;
    ///
    /// let mut a = NoiseGenerator::new(7);
    /// let mut b = NoiseGenerator::new(7);
    /// assert_eq!(a.random_gaussian(), b.random_gaussian());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a new noise generator seeded from the operating system.
    ///
    /// Each call yields a different noise sequence, which is what the
    /// demonstrations want when they are run interactively.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: RngCore> NoiseGenerator<R> {
    /// Creates a noise generator drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a random value from a standard Gaussian (normal) distribution.
    ///
    /// # Mathematical Background
    ///
    /// The Box-Muller transform converts uniform random variables to normally
    /// distributed random variables using the formula:
    /// ```text
    /// z = sqrt(-2 * ln(u1)) * cos(2 * π * u2)
    /// ```
    /// where u1 is uniform in (0, 1] and u2 uniform in [0, 1).
    pub fn random_gaussian(&mut self) -> f64 {
        // 1 - [0, 1) keeps u1 away from zero, so ln(u1) stays finite
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Generates independent draws from Normal(`offset`, `standard_deviation`).
    ///
    /// # Arguments
    ///
    /// * `offset` - Mean of the distribution
    /// * `standard_deviation` - Spread of the distribution, strictly positive
    /// * `sample_rate` - Samples per second, strictly positive
    /// * `duration` - Length of the series in seconds, strictly positive
    ///
    /// # Returns
    ///
    /// `floor(sample_rate * duration)` samples, matching the length of the
    /// waveforms built with the same rate and duration.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the argument that is out of range, or
    /// `sample_rate * duration` when no sample would be produced.
    pub fn noise(
        &mut self,
        offset: f64,
        standard_deviation: f64,
        sample_rate: f64,
        duration: f64,
    ) -> Result<Vec<f64>> {
        ensure_finite("offset", offset)?;
        ensure_positive("standard_deviation", standard_deviation)?;
        let count = sample_count(sample_rate, duration)?;

        let samples = (0..count)
            .map(|_| offset + standard_deviation * self.random_gaussian())
            .collect();

        debug!("Generated {count} noise samples (mean {offset}, std {standard_deviation})");
        Ok(samples)
    }

    /// Generates Gaussian noise and rectifies it.
    ///
    /// Same draws as [`NoiseGenerator::noise`], each replaced by its
    /// magnitude: every returned sample is `>= 0`.
    pub fn positive_noise(
        &mut self,
        offset: f64,
        standard_deviation: f64,
        sample_rate: f64,
        duration: f64,
    ) -> Result<Vec<f64>> {
        let mut samples = self.noise(offset, standard_deviation, sample_rate, duration)?;
        make_non_negative_in_place(&mut samples);
        Ok(samples)
    }
}
