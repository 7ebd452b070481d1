// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Destinations for finished figures

use super::figure::Figure;
use anyhow::{Context, Result};
use log::{info, trace};

/// Receives figures produced by the demonstrations.
///
/// Implementations decide how (and whether) a figure is rendered.
pub trait PlotSink {
    /// Hand over a finished figure
    fn show(&mut self, figure: Figure) -> Result<()>;
}

/// Sink keeping every figure in memory, in the order received
#[derive(Debug, Default)]
pub struct RecordingSink {
    figures: Vec<Figure>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl PlotSink for RecordingSink {
    fn show(&mut self, figure: Figure) -> Result<()> {
        self.figures.push(figure);
        Ok(())
    }
}

/// Sink that summarises each figure through the `log` facade.
///
/// Panel titles and series lengths are logged at info level; the full JSON
/// description is logged at trace level for an external renderer to pick up.
#[derive(Debug, Default)]
pub struct LogSink;

impl PlotSink for LogSink {
    fn show(&mut self, figure: Figure) -> Result<()> {
        for panel in &figure.panels {
            let lengths: Vec<usize> = panel.series.iter().map(|s| s.y.len()).collect();
            info!("Figure panel '{}': series lengths {:?}", panel.title, lengths);
        }
        if log::log_enabled!(log::Level::Trace) {
            let json = figure
                .to_json()
                .context("Failed to serialize figure description")?;
            trace!("{}", json);
        }
        Ok(())
    }
}
