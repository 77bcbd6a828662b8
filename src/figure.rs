//! Backend-neutral description of one chart.
//!
//! Views build a [`Figure`]; the SVG exporter and the egui viewer each draw
//! it their own way.

use std::ops::Range;

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// One vertical error bar: `y ± radius` at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone)]
pub enum Series {
    /// Bars rising from zero, centred on each x.
    Bars {
        label: String,
        color: Rgb,
        width: f64,
        bars: Vec<(f64, f64)>,
    },
    Scatter {
        label: String,
        color: Rgb,
        marker: Marker,
        points: Vec<(f64, f64)>,
    },
    /// Unlabelled polyline, used for reference lines.
    Line {
        color: Rgb,
        width: u32,
        points: Vec<(f64, f64)>,
    },
    /// Unlabelled error bars, drawn beneath the markers they belong to.
    ErrorBars { color: Rgb, bars: Vec<ErrorBar> },
}

impl Series {
    pub fn label(&self) -> Option<&str> {
        match self {
            Series::Bars { label, .. } | Series::Scatter { label, .. } => Some(label),
            Series::Line { .. } | Series::ErrorBars { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// Categorical tick positions; empty means numeric ticks.
    pub x_ticks: Vec<f64>,
    /// One data unit spans the same length on both axes.
    pub equal_aspect: bool,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            x_ticks: Vec::new(),
            equal_aspect: false,
            series: Vec::new(),
        }
    }

    pub fn has_legend(&self) -> bool {
        self.series.iter().any(|s| s.label().is_some())
    }

    /// Find a labelled series by its legend text.
    #[cfg(test)]
    pub fn series_named(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label() == Some(label))
    }
}
