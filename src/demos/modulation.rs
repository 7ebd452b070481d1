// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Recovering a slow modulation envelope from a noisy square carrier

use crate::config::ModulationDemoConfig;
use crate::generation::{add_offset, make_non_negative, sine_wave, square_wave};
use crate::lockin::lock_in_segments;
use crate::utility::NoiseGenerator;
use crate::visualization::{Color, Figure, Panel, PlotSink, Series};
use anyhow::{Context, Result};
use log::{debug, info};
use rand::RngCore;
use serde::Serialize;

/// Length of each carrier block, and of the envelope, in seconds
const BLOCK_DURATION: f64 = 1.0;

/// How the carrier and the noise are shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarrierMode {
    /// Square carrier swinging between `-level` and `+level`, signed noise
    Bipolar,
    /// Square carrier lifted to `[0, 2 * level]`, rectified noise
    Positive,
}

/// Signals produced by a modulation demonstration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModulationOutcome {
    /// Time axis of the envelope
    pub envelope_times: Vec<f64>,
    /// Rectified modulation envelope, one level per carrier block
    pub envelope: Vec<f64>,
    /// Time axis of the concatenated carrier blocks
    pub carrier_times: Vec<f64>,
    /// Modulated carrier before noise
    pub modulated: Vec<f64>,
    /// Modulated carrier plus noise
    pub noisy: Vec<f64>,
    /// One lock-in reading per carrier block, tracking the envelope
    pub readout: Vec<f64>,
}

/// Recover the envelope of an amplitude-modulated square wave.
///
/// The envelope is a rectified 1 Hz sine of the configured amplitude sampled
/// at `modulation_sample_rate`. Each envelope sample sets the amplitude of a
/// one second block of square carrier; the blocks are concatenated, buried
/// in noise, then locked block by block against a unit square reference.
pub fn modulated_square_wave<R: RngCore>(
    config: &ModulationDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<ModulationOutcome> {
    run(CarrierMode::Bipolar, 1.0, config, generator, sink)
}

/// Recover the envelope of a modulated square wave that never goes negative.
///
/// Closer to a physical detector: every carrier block is offset by its own
/// level so it swings between zero and twice the level, and the noise is
/// rectified. The envelope is a rectified sine at half
/// `modulation_frequency`, so its bumps repeat at `modulation_frequency`.
pub fn modulated_positive_square_wave<R: RngCore>(
    config: &ModulationDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<ModulationOutcome> {
    let envelope_frequency = config.modulation_frequency / 2.0;
    run(CarrierMode::Positive, envelope_frequency, config, generator, sink)
}

fn run<R: RngCore>(
    mode: CarrierMode,
    envelope_frequency: f64,
    config: &ModulationDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<ModulationOutcome> {
    config.validate().context("Invalid modulation demonstration parameters")?;

    let (envelope_times, envelope) = sine_wave(
        config.amplitude,
        envelope_frequency,
        config.modulation_sample_rate,
        BLOCK_DURATION,
    )
    .context("Failed to generate the modulation envelope")?
    .into_parts();
    let envelope = make_non_negative(&envelope);

    let mut carrier_times = Vec::new();
    let mut modulated = Vec::new();
    let mut noisy = Vec::new();

    for (block, &level) in envelope.iter().enumerate() {
        // Blocks span [0, 1] and share their boundary instant, drop it
        let carrier = square_wave(level, config.frequency, config.sample_rate, BLOCK_DURATION)?
            .without_last_sample();
        let mut noise = match mode {
            CarrierMode::Bipolar => generator.noise(
                0.0,
                config.noise_standard_deviation,
                config.sample_rate,
                BLOCK_DURATION,
            )?,
            CarrierMode::Positive => generator.positive_noise(
                0.0,
                config.noise_standard_deviation,
                config.sample_rate,
                BLOCK_DURATION,
            )?,
        };
        noise.pop();

        let (times, levels) = carrier.into_parts();
        let levels = match mode {
            CarrierMode::Bipolar => levels,
            CarrierMode::Positive => add_offset(&levels, level),
        };

        let start = block as f64 * BLOCK_DURATION;
        carrier_times.extend(times.iter().map(|t| t + start));
        noisy.extend(levels.iter().zip(noise.iter()).map(|(s, n)| s + n));
        modulated.extend(levels);
    }

    let reference = square_wave(1.0, config.frequency, config.sample_rate, BLOCK_DURATION)?
        .without_last_sample();
    let readout = lock_in_segments(reference.amplitudes(), &noisy)
        .context("Block-wise lock-in failed")?;

    debug!(
        "Modulated carrier: {} blocks of {} samples",
        envelope.len(),
        reference.len()
    );
    info!("Recovered {} envelope readings", readout.len());

    let figure = Figure::new()
        .with_panel(
            Panel::new("Modulation Signal")
                .with_labels("Time", "Amplitude")
                .with_series(Series::new(
                    envelope_times.clone(),
                    envelope.clone(),
                    Color::Green,
                )),
        )
        .with_panel(
            Panel::new("Modulated Square wave Signal")
                .with_labels("Time", "Amplitude")
                .with_series(Series::new(
                    carrier_times.clone(),
                    modulated.clone(),
                    Color::Blue,
                )),
        )
        .with_panel(
            Panel::new("Signal plus Noise")
                .with_labels("Time", "Amplitude")
                .with_series(Series::new(carrier_times.clone(), noisy.clone(), Color::Blue)),
        )
        .with_panel(
            Panel::new("Predicted Modulation Signal")
                .with_labels("Time", "Amplitude")
                .with_series(Series::indexed(readout.clone(), Color::Red)),
        );
    sink.show(figure)?;

    Ok(ModulationOutcome {
        envelope_times,
        envelope,
        carrier_times,
        modulated,
        noisy,
        readout,
    })
}
