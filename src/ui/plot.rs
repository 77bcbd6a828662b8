use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, PlotUi, Points};

use crate::color::to_color32;
use crate::figure::{ErrorBar, Figure, Marker, Series};

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

/// Half-width of an error bar cap, in data units.
const CAP_HALF_WIDTH: f64 = 0.05;

/// Draw one report figure with egui_plot.
pub fn figure_plot(ui: &mut Ui, figure: &Figure) {
    ui.heading(&figure.title);

    let mut plot = Plot::new(("figure", figure.title.as_str()))
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .include_x(figure.x_range.start)
        .include_x(figure.x_range.end)
        .include_y(figure.y_range.start)
        .include_y(figure.y_range.end)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if figure.equal_aspect {
        plot = plot.data_aspect(1.0);
    }

    plot.show(ui, |plot_ui| {
        for series in &figure.series {
            draw_series(plot_ui, series);
        }
    });
}

fn draw_series(plot_ui: &mut PlotUi, series: &Series) {
    match series {
        Series::Bars {
            label,
            color,
            width,
            bars,
        } => {
            let bars = bars
                .iter()
                .map(|&(x, y)| Bar::new(x, y).width(*width))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(label).color(to_color32(*color)));
        }
        Series::Scatter {
            label,
            color,
            marker,
            points,
        } => {
            let shape = match marker {
                Marker::Circle => MarkerShape::Circle,
                Marker::Square => MarkerShape::Square,
            };
            let points: PlotPoints = points.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.points(
                Points::new(points)
                    .name(label)
                    .color(to_color32(*color))
                    .shape(shape)
                    .filled(true)
                    .radius(4.0),
            );
        }
        Series::Line {
            color,
            width,
            points,
        } => {
            let points: PlotPoints = points.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(to_color32(*color))
                    .width(*width as f32),
            );
        }
        Series::ErrorBars { color, bars } => {
            for bar in bars {
                for segment in whisker_segments(bar) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(segment.to_vec()))
                            .color(to_color32(*color))
                            .width(1.0),
                    );
                }
            }
        }
    }
}

/// Stem plus both caps of one error bar.
fn whisker_segments(bar: &ErrorBar) -> [[[f64; 2]; 2]; 3] {
    let lo = bar.y - bar.radius;
    let hi = bar.y + bar.radius;
    [
        [[bar.x, lo], [bar.x, hi]],
        [[bar.x - CAP_HALF_WIDTH, lo], [bar.x + CAP_HALF_WIDTH, lo]],
        [[bar.x - CAP_HALF_WIDTH, hi], [bar.x + CAP_HALF_WIDTH, hi]],
    ]
}
