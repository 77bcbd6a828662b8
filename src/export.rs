use std::error::Error;
use std::path::Path;

use plotters::element::ErrorBar as Whisker;
use plotters::prelude::*;

use crate::color::to_plotters;
use crate::error::ReportError;
use crate::figure::{Figure, Marker, Series};

// ---------------------------------------------------------------------------
// SVG export
// ---------------------------------------------------------------------------

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 640;
const MARGIN: u32 = 16;
const LABEL_AREA: u32 = 56;
const CAPTION_SIZE: u32 = 24;
const MARKER_SIZE: i32 = 4;
const CAP_WIDTH: u32 = 6;

/// Write `figure` as an SVG file at `path`.
pub fn export_svg(figure: &Figure, path: &Path) -> Result<(), ReportError> {
    draw(figure, path).map_err(|e| ReportError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Canvas size. Equal-aspect figures get a plotting area whose pixel
/// extents are proportional to the data extents.
fn canvas_size(figure: &Figure) -> (u32, u32) {
    if !figure.equal_aspect {
        return (WIDTH, HEIGHT);
    }
    let x_span = figure.x_range.end - figure.x_range.start;
    let y_span = figure.y_range.end - figure.y_range.start;
    if x_span <= 0.0 || y_span <= 0.0 {
        return (HEIGHT, HEIGHT);
    }

    let plot_width = HEIGHT - 2 * MARGIN - LABEL_AREA;
    let plot_height = (f64::from(plot_width) * y_span / x_span).round() as u32;
    // Caption height is approximately the font size plus its padding.
    let chrome = 2 * MARGIN + LABEL_AREA + CAPTION_SIZE + MARGIN;
    (HEIGHT, plot_height + chrome)
}

/// Only whole numbers are labelled on a categorical axis.
fn category_label(x: &f64) -> String {
    if (x - x.round()).abs() < 1e-9 {
        format!("{}", x.round() as i64)
    } else {
        String::new()
    }
}

fn draw(figure: &Figure, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, canvas_size(figure)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", CAPTION_SIZE))
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .light_line_style(WHITE);
        if !figure.x_ticks.is_empty() {
            mesh.x_labels(figure.x_ticks.len() + 2)
                .x_label_formatter(&category_label);
        }
        mesh.draw()?;
    }

    for series in &figure.series {
        match series {
            Series::Bars {
                label,
                color,
                width,
                bars,
            } => {
                let c = to_plotters(*color);
                let half = width / 2.0;
                chart
                    .draw_series(bars.iter().map(|&(x, y)| {
                        Rectangle::new([(x - half, 0.0), (x + half, y)], c.filled())
                    }))?
                    .label(label.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], c.filled()));
            }
            Series::Scatter {
                label,
                color,
                marker: Marker::Circle,
                points,
            } => {
                let c = to_plotters(*color);
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&p| Circle::new(p, MARKER_SIZE, c.filled())),
                    )?
                    .label(label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 6, y), MARKER_SIZE, c.filled()));
            }
            Series::Scatter {
                label,
                color,
                marker: Marker::Square,
                points,
            } => {
                let c = to_plotters(*color);
                let square = [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)];
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&p| EmptyElement::at(p) + Rectangle::new(square, c.filled())),
                    )?
                    .label(label.as_str())
                    .legend(move |(x, y)| {
                        EmptyElement::at((x + 6, y)) + Rectangle::new(square, c.filled())
                    });
            }
            Series::Line {
                color,
                width,
                points,
            } => {
                let c = to_plotters(*color);
                chart.draw_series(LineSeries::new(points.iter().copied(), c.stroke_width(*width)))?;
            }
            Series::ErrorBars { color, bars } => {
                let c = to_plotters(*color);
                chart.draw_series(bars.iter().map(|b| {
                    Whisker::new_vertical(
                        b.x,
                        b.y - b.radius,
                        b.y,
                        b.y + b.radius,
                        c.stroke_width(1),
                        CAP_WIDTH,
                    )
                }))?;
            }
        }
    }

    if figure.has_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::figure::ErrorBar;

    fn sample_figure() -> Figure {
        let mut figure = Figure::new("Scoring", "Candidate", "Score");
        figure.x_range = 0.25..3.75;
        figure.y_range = 0.0..6.0;
        figure.x_ticks = vec![1.0, 2.0, 3.0];
        figure.series.push(Series::ErrorBars {
            color: color::BLACK,
            bars: vec![ErrorBar { x: 1.0, y: 3.5, radius: 0.5 }],
        });
        figure.series.push(Series::Scatter {
            label: "SmartScan First".into(),
            color: color::ORANGE,
            marker: Marker::Square,
            points: vec![(1.0, 3.5), (2.0, 4.0)],
        });
        figure
    }

    #[test]
    fn writes_non_empty_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.svg");
        export_svg(&sample_figure(), &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Scoring"));
        assert!(svg.contains("SmartScan First"));
    }

    #[test]
    fn unwritable_destination_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scoring.svg");
        match export_svg(&sample_figure(), &path) {
            Err(ReportError::Export { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Export error, got {other:?}"),
        }
    }

    #[test]
    fn equal_aspect_canvas_matches_data_extent() {
        let mut figure = sample_figure();
        figure.equal_aspect = true;
        figure.x_range = 0.0..400.0;
        figure.y_range = 0.0..400.0;
        let (w, h) = canvas_size(&figure);
        assert_eq!(w - 2 * MARGIN - LABEL_AREA, h - (3 * MARGIN + LABEL_AREA + CAPTION_SIZE));
    }

    #[test]
    fn categorical_labels_skip_fractions() {
        assert_eq!(category_label(&3.0), "3");
        assert_eq!(category_label(&2.5), "");
    }
}
