//! SmartScan vs Ultrasound scatter views with a y = x reference line.

use super::{View, groups, pick};
use crate::color;
use crate::data::derived::hundred_ceiling;
use crate::data::model::Dataset;
use crate::error::ReportError;
use crate::figure::{Figure, Marker, Series};
use crate::group::{self, Group, Modality};

/// Time spent per candidate, one modality against the other.
pub struct TimeView;

impl View for TimeView {
    fn name(&self) -> &'static str {
        "time"
    }

    fn file_stem(&self) -> &'static str {
        "time_spent"
    }

    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError> {
        let ss_column = Modality::SmartScan.column("Time");
        let us_column = Modality::Ultrasound.column("Time");
        let ss = dataset.numeric(&ss_column)?;
        let us = dataset.numeric(&us_column)?;
        let bound = hundred_ceiling(ss.iter().chain(&us))
            .ok_or_else(|| ReportError::NoValues(format!("{ss_column}, {us_column}")))?;
        parity_figure(dataset, "Time Spent in Seconds", &ss, &us, bound)
    }
}

/// Average score per candidate, one modality against the other.
pub struct ScoreView;

impl View for ScoreView {
    fn name(&self) -> &'static str {
        "score"
    }

    fn file_stem(&self) -> &'static str {
        "score_average"
    }

    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError> {
        let ss = dataset.numeric(&Modality::SmartScan.column("Score"))?;
        let us = dataset.numeric(&Modality::Ultrasound.column("Score"))?;
        parity_figure(dataset, "Average Score", &ss, &us, 6.0)
    }
}

/// Ultrasound on x, SmartScan on y, both axes `[0, bound]`.
fn parity_figure(
    dataset: &Dataset,
    title: &str,
    ss: &[f64],
    us: &[f64],
    bound: f64,
) -> Result<Figure, ReportError> {
    let groups = groups(dataset)?;
    let buckets = group::partition(&groups);

    let mut figure = Figure::new(
        title,
        Modality::Ultrasound.name(),
        Modality::SmartScan.name(),
    );
    figure.x_range = 0.0..bound;
    figure.y_range = 0.0..bound;
    figure.equal_aspect = true;

    figure.series.push(Series::Line {
        color: color::BLACK,
        width: 1,
        points: vec![(0.0, 0.0), (bound, bound)],
    });

    for group in Group::PARITY_ORDER {
        let Some(rows) = buckets.get(&group) else {
            continue;
        };
        figure.series.push(Series::Scatter {
            label: group.label().to_string(),
            color: group.color(),
            marker: Marker::Circle,
            points: pick(us, rows).into_iter().zip(pick(ss, rows)).collect(),
        });
    }

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    /// Study table with candidate 12 moved into the control group.
    fn with_control_row() -> Dataset {
        fixtures::dataset_with(|csv| csv.replacen("\n12;2;", "\n12;0;", 1))
    }

    #[test]
    fn time_bound_rounds_up_to_hundred() {
        let mut ds = fixtures::study_dataset();
        let figure = TimeView.render(&mut ds).unwrap();

        // Largest observed time is 347 s.
        assert_eq!(figure.x_range, 0.0..400.0);
        assert_eq!(figure.y_range, 0.0..400.0);
        assert!(figure.equal_aspect);

        let Some(Series::Line { points, .. }) = figure.series.first() else {
            panic!("parity line must come first");
        };
        assert_eq!(points, &vec![(0.0, 0.0), (400.0, 400.0)]);
    }

    #[test]
    fn scatter_is_ultrasound_against_smartscan() {
        let mut ds = fixtures::study_dataset();
        let figure = TimeView.render(&mut ds).unwrap();

        let Some(Series::Scatter { points, color, .. }) =
            figure.series_named("SmartScan First")
        else {
            panic!("missing SmartScan First series");
        };
        assert_eq!(*color, Group::SmartScanFirst.color());
        // Candidate 1: US_Time 185, SS_Time 210.
        assert_eq!(points[0], (185.0, 210.0));

        let labels: Vec<_> = figure.series.iter().filter_map(|s| s.label()).collect();
        assert_eq!(labels, ["Ultrasound First", "SmartScan First"]);
    }

    #[test]
    fn score_axes_are_fixed() {
        let mut ds = fixtures::study_dataset();
        let figure = ScoreView.render(&mut ds).unwrap();
        assert_eq!(figure.x_range, 0.0..6.0);
        assert_eq!(figure.x_label, "Ultrasound");
        assert_eq!(figure.y_label, "SmartScan");

        let Some(Series::Scatter { points, .. }) = figure.series_named("Ultrasound First") else {
            panic!("missing Ultrasound First series");
        };
        // Candidate 4: US_Score 3, SS_Score 3.
        assert_eq!(points[0], (3.0, 3.0));
    }

    #[test]
    fn control_group_comes_last_in_gray() {
        let mut ds = with_control_row();
        for view in [&TimeView as &dyn View, &ScoreView] {
            let figure = view.render(&mut ds).unwrap();
            let labels: Vec<_> = figure.series.iter().filter_map(|s| s.label()).collect();
            assert_eq!(
                labels,
                ["Ultrasound First", "SmartScan First", "Control"],
                "{}",
                view.name()
            );

            let Some(Series::Scatter { points, color: fill, .. }) = figure.series_named("Control")
            else {
                panic!("{}: missing Control series", view.name());
            };
            assert_eq!(*fill, color::GRAY);
            assert_eq!(points.len(), 1);
        }
    }

    #[test]
    fn time_without_any_values_fails() {
        let mut ds = fixtures::dataset_with(|csv| {
            csv.lines()
                .map(|line| {
                    let mut cells: Vec<&str> = line.split(';').collect();
                    if !line.starts_with("Candidate") {
                        cells[5] = "";
                        cells[6] = "";
                    }
                    cells.join(";")
                })
                .collect::<Vec<_>>()
                .join("\n")
        });
        match TimeView.render(&mut ds) {
            Err(ReportError::NoValues(columns)) => assert_eq!(columns, "SS_Time, US_Time"),
            other => panic!("expected NoValues, got {other:?}"),
        }
        // The score view does not read the time columns.
        assert!(ScoreView.render(&mut ds).is_ok());
    }
}
