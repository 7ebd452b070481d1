// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Recovering a constant-amplitude signal, and rejecting offsets

use crate::config::{LockinDemoConfig, OffsetDemoConfig};
use crate::generation::{add_offset, sine_wave, square_wave, Waveform};
use crate::lockin::{mix, time_average, LockinAmplifier, LockinReading, ReferenceShape};
use crate::utility::NoiseGenerator;
use crate::visualization::{Color, Figure, Panel, PlotSink, Series};
use anyhow::{Context, Result};
use log::info;
use rand::RngCore;
use serde::Serialize;

/// Length of the signals used by the offset demonstration, in seconds
const OFFSET_DEMO_DURATION: f64 = 2.0;

/// Length of the signals used by the recovery demonstrations, in seconds
const RECOVERY_DURATION: f64 = 1.0;

/// Averages of the two offset signals once multiplied by the reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffsetAveragingOutcome {
    pub mean_first: f64,
    pub mean_second: f64,
}

/// Show that a DC offset on the input does not survive the lock-in.
///
/// A square wave is shifted by two different offsets and each copy is
/// multiplied by a zero-centred unit square reference. The products average
/// to the same value because the reference averages to zero over whole
/// cycles.
pub fn offset_signal_averaging(
    config: &OffsetDemoConfig,
    sink: &mut dyn PlotSink,
) -> Result<OffsetAveragingOutcome> {
    config.validate().context("Invalid offset demonstration parameters")?;

    let signal = square_wave(
        config.amplitude,
        config.frequency,
        config.sample_rate,
        OFFSET_DEMO_DURATION,
    )?;
    let reference = square_wave(1.0, config.frequency, config.sample_rate, OFFSET_DEMO_DURATION)?;

    let first = add_offset(signal.amplitudes(), config.offset_first);
    let second = add_offset(signal.amplitudes(), config.offset_second);

    let product_first = mix(reference.amplitudes(), &first)?;
    let product_second = mix(reference.amplitudes(), &second)?;
    let outcome = OffsetAveragingOutcome {
        mean_first: time_average(&product_first)?,
        mean_second: time_average(&product_second)?,
    };
    info!(
        "Offset {} average = {}, offset {} average = {}",
        config.offset_first, outcome.mean_first, config.offset_second, outcome.mean_second
    );

    let x = reference.times().to_vec();
    let figure = Figure::new()
        .with_panel(Panel::new("Reference Signal").with_series(Series::new(
            x.clone(),
            reference.amplitudes().to_vec(),
            Color::Black,
        )))
        .with_panel(
            Panel::new("Two Signals with Offsets")
                .with_series(Series::new(x.clone(), first, Color::Green))
                .with_series(Series::new(x.clone(), second, Color::Blue)),
        )
        .with_panel(
            Panel::new("Signals Multiplied by Reference and Average shown in red")
                .with_series(Series::new(x.clone(), product_first, Color::Green))
                .with_series(Series::new(x.clone(), product_second, Color::Blue))
                .with_series(Series::horizontal(x, outcome.mean_second, Color::Red)),
        );
    sink.show(figure)?;

    Ok(outcome)
}

/// Find a sine wave hidden in noise.
///
/// Logs the lock-in output and the predicted amplitude (twice the output),
/// plots the clean and noisy signals, and returns the reading.
pub fn sine_wave_recovery<R: RngCore>(
    config: &LockinDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<LockinReading> {
    recover(ReferenceShape::Sine, config, generator, sink)
}

/// Find a square wave hidden in noise.
///
/// The predicted amplitude equals the lock-in output.
pub fn square_wave_recovery<R: RngCore>(
    config: &LockinDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<LockinReading> {
    recover(ReferenceShape::Square, config, generator, sink)
}

fn generate(shape: ReferenceShape, amplitude: f64, config: &LockinDemoConfig) -> Result<Waveform> {
    let waveform = match shape {
        ReferenceShape::Sine => sine_wave(
            amplitude,
            config.frequency,
            config.sample_rate,
            RECOVERY_DURATION,
        ),
        ReferenceShape::Square => square_wave(
            amplitude,
            config.frequency,
            config.sample_rate,
            RECOVERY_DURATION,
        ),
    };
    Ok(waveform?)
}

fn recover<R: RngCore>(
    shape: ReferenceShape,
    config: &LockinDemoConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<LockinReading> {
    config.validate().context("Invalid recovery demonstration parameters")?;

    let signal = generate(shape, config.amplitude, config)?;
    let reference = generate(shape, 1.0, config)?;
    let noise = generator.noise(
        0.0,
        config.noise_standard_deviation,
        config.sample_rate,
        RECOVERY_DURATION,
    )?;

    let noisy: Vec<f64> = signal
        .amplitudes()
        .iter()
        .zip(noise.iter())
        .map(|(s, n)| s + n)
        .collect();

    let reading = LockinAmplifier::new()
        .measure(shape, reference.amplitudes(), &noisy)
        .context("Lock-in on the noisy signal failed")?;

    let label = match shape {
        ReferenceShape::Sine => "Sine",
        ReferenceShape::Square => "Square wave",
    };
    info!("{} lock-in output = {}", label, reading.output);
    info!("{} predicted signal amplitude = {}", label, reading.predicted_amplitude);

    let (times, clean) = signal.into_parts();
    let figure = Figure::new()
        .with_panel(
            Panel::new("Plot 1: Target Signal")
                .with_labels("Time", "Amplitude")
                .with_series(Series::new(times.clone(), clean, Color::Green)),
        )
        .with_panel(
            Panel::new(format!(
                "Plot 2: Target Hidden in Noise, predicted initial amplitude {}",
                reading.predicted_amplitude
            ))
            .with_labels("Time", "Amplitude")
            .with_series(Series::new(times, noisy, Color::Green)),
        );
    sink.show(figure)?;

    Ok(reading)
}
