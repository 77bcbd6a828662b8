//! Viewer widgets: side/top panels and the chart itself.

pub mod panels;
pub mod plot;
