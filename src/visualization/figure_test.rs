// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::figure::{Color, Figure, Panel, Series};
use super::sink::{LogSink, PlotSink, RecordingSink};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_builders() {
        let indexed = Series::indexed(vec![4.0, 5.0, 6.0], Color::Red);
        assert_eq!(indexed.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(indexed.line_width, 0.5);

        let level = Series::horizontal(vec![0.0, 0.5, 1.0], 2.5, Color::Red);
        assert_eq!(level.y, vec![2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_figure_json_description() {
        let figure = Figure::new().with_panel(
            Panel::new("Reference Signal")
                .with_labels("Time", "Amplitude")
                .with_series(Series::new(vec![0.0, 1.0], vec![1.0, -1.0], Color::Black)),
        );

        let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(json["size"], serde_json::json!([8.0, 8.0]));
        assert_eq!(json["panels"][0]["title"], "Reference Signal");
        assert_eq!(json["panels"][0]["x_label"], "Time");
        assert_eq!(json["panels"][0]["series"][0]["color"], "black");
        assert_eq!(json["panels"][0]["series"][0]["y"], serde_json::json!([1.0, -1.0]));
    }

    #[test]
    fn test_unlabelled_panel_omits_labels() {
        let figure = Figure::new().with_panel(Panel::new("Two Signals with Offsets"));
        let json = figure.to_json().unwrap();
        assert!(!json.contains("x_label"));
        assert!(!json.contains("y_label"));
    }

    #[test]
    fn test_sinks_accept_figures() {
        let mut recording = RecordingSink::new();
        recording.show(Figure::new()).unwrap();
        recording
            .show(Figure::new().with_panel(Panel::new("second")))
            .unwrap();
        assert_eq!(recording.figures().len(), 2);
        assert_eq!(recording.into_figures()[1].panels[0].title, "second");

        assert!(LogSink.show(Figure::new().with_panel(Panel::new("logged"))).is_ok());
    }
}
