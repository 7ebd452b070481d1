// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! Demonstrations module
//!
//! End-to-end scenarios combining the signal generator, the noise generator
//! and the lock-in engine: generate a signal, corrupt it, recover it, and
//! hand the arrays to a [`PlotSink`](crate::visualization::PlotSink).
//! Results are reported through the `log` facade.

pub mod modulation;
pub mod recovery;

pub use modulation::{modulated_positive_square_wave, modulated_square_wave, ModulationOutcome};
pub use recovery::{
    offset_signal_averaging, sine_wave_recovery, square_wave_recovery, OffsetAveragingOutcome,
};

use crate::config::DemoSuiteConfig;
use crate::utility::NoiseGenerator;
use crate::visualization::PlotSink;
use anyhow::{Context, Result};
use rand::RngCore;

/// Run every demonstration in turn, sharing one noise generator and sink
pub fn run_all<R: RngCore>(
    config: &DemoSuiteConfig,
    generator: &mut NoiseGenerator<R>,
    sink: &mut dyn PlotSink,
) -> Result<()> {
    config.validate().context("Invalid demonstration suite parameters")?;

    offset_signal_averaging(&config.offset, sink).context("Offset demonstration failed")?;
    sine_wave_recovery(&config.sine, generator, sink).context("Sine demonstration failed")?;
    square_wave_recovery(&config.square, generator, sink)
        .context("Square wave demonstration failed")?;
    modulated_square_wave(&config.modulation, generator, sink)
        .context("Modulated square wave demonstration failed")?;
    modulated_positive_square_wave(&config.modulation, generator, sink)
        .context("Positive modulated square wave demonstration failed")?;
    Ok(())
}
