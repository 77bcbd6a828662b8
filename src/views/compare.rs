//! Per-candidate average scores with HD/OC error bars.

use super::{View, candidate_axis, candidate_positions, groups, pick};
use crate::color;
use crate::data::derived::add_error_column;
use crate::data::model::Dataset;
use crate::error::ReportError;
use crate::figure::{ErrorBar, Figure, Marker, Series};
use crate::group::{self, Modality};

const SCORE_RANGE: std::ops::Range<f64> = 0.0..6.0;

/// Horizontal offset separating the two modalities in the combined view.
const PAIR_OFFSET: f64 = 0.1;

fn error_bars(xs: &[f64], ys: &[f64], radii: &[f64], offset: f64) -> Series {
    Series::ErrorBars {
        color: color::BLACK,
        bars: xs
            .iter()
            .zip(ys)
            .zip(radii)
            .map(|((&x, &y), &radius)| ErrorBar {
                x: x + offset,
                y,
                radius,
            })
            .collect(),
    }
}

/// One modality's average score per candidate, markers coloured by group.
pub struct CompareView {
    modality: Modality,
}

impl CompareView {
    pub fn new(modality: Modality) -> Self {
        Self { modality }
    }
}

impl View for CompareView {
    fn name(&self) -> &'static str {
        match self.modality {
            Modality::SmartScan => "compareSS",
            Modality::Ultrasound => "compareUS",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self.modality {
            Modality::SmartScan => "compare_ss_score_average",
            Modality::Ultrasound => "compare_us_score_average",
        }
    }

    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError> {
        let radii = add_error_column(dataset, self.modality)?;
        let candidates = candidate_positions(dataset)?;
        let averages = dataset.numeric(&self.modality.column("Avg"))?;
        let groups = groups(dataset)?;

        let title = format!("{} Scoring", self.modality.name());
        let mut figure = Figure::new(&title, "Candidate", "Score");
        candidate_axis(&mut figure, &candidates);
        figure.y_range = SCORE_RANGE;

        figure
            .series
            .push(error_bars(&candidates, &averages, &radii, 0.0));

        for (group, rows) in group::partition(&groups) {
            figure.series.push(Series::Scatter {
                label: group.label().to_string(),
                color: group.color(),
                marker: Marker::Square,
                points: pick(&candidates, &rows)
                    .into_iter()
                    .zip(pick(&averages, &rows))
                    .collect(),
            });
        }

        Ok(figure)
    }
}

/// Both modalities per candidate, Ultrasound left and SmartScan right.
pub struct CompareBothView;

impl View for CompareBothView {
    fn name(&self) -> &'static str {
        "compareBoth"
    }

    fn file_stem(&self) -> &'static str {
        "compare_score_averages"
    }

    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError> {
        let us_radii = add_error_column(dataset, Modality::Ultrasound)?;
        let ss_radii = add_error_column(dataset, Modality::SmartScan)?;
        let candidates = candidate_positions(dataset)?;

        let mut figure = Figure::new("Scoring", "Candidate", "Score");
        candidate_axis(&mut figure, &candidates);
        figure.y_range = SCORE_RANGE;

        let sides = [
            (Modality::Ultrasound, -PAIR_OFFSET, &us_radii),
            (Modality::SmartScan, PAIR_OFFSET, &ss_radii),
        ];
        let mut markers = Vec::with_capacity(sides.len());
        for (modality, offset, radii) in sides {
            let averages = dataset.numeric(&modality.column("Avg"))?;
            figure
                .series
                .push(error_bars(&candidates, &averages, radii, offset));
            markers.push(Series::Scatter {
                label: modality.name().to_string(),
                color: modality.color(),
                marker: Marker::Square,
                points: candidates
                    .iter()
                    .map(|x| x + offset)
                    .zip(averages)
                    .collect(),
            });
        }
        // Markers go on top of every error bar.
        figure.series.extend(markers);

        Ok(figure)
    }
}
