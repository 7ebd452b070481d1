// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Plot descriptions handed to an external plotting facility

use serde::{Deserialize, Serialize};

/// Line colour of a plotted series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Green,
    Blue,
    Red,
}

/// Line width used by every demonstration plot
pub const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// One line on a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Color,
    pub line_width: f64,
}

impl Series {
    /// Series plotted against an explicit x axis
    pub fn new(x: Vec<f64>, y: Vec<f64>, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Series plotted against its sample index
    pub fn indexed(y: Vec<f64>, color: Color) -> Self {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self::new(x, y, color)
    }

    /// Horizontal line at `level` spanning the given x axis
    pub fn horizontal(x: Vec<f64>, level: f64, color: Color) -> Self {
        let y = vec![level; x.len()];
        Self::new(x, y, color)
    }
}

/// A set of axes with a title, optional axis labels and its series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub series: Vec<Series>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// A figure made of panels stacked vertically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure size in inches (width, height)
    pub size: (f64, f64),
    pub panels: Vec<Panel>,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            size: (8.0, 8.0),
            panels: Vec::new(),
        }
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Serialize the figure so a plotting process can render it
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
