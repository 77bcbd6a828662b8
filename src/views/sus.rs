use super::{View, candidate_axis, candidate_positions};
use crate::color;
use crate::data::model::Dataset;
use crate::error::ReportError;
use crate::figure::{Figure, Series};

const BAR_WIDTH: f64 = 0.25;

/// Usability, SUS and Learnability side by side for each candidate.
pub struct SusView;

impl View for SusView {
    fn name(&self) -> &'static str {
        "sus"
    }

    fn file_stem(&self) -> &'static str {
        "sus_scores"
    }

    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError> {
        let candidates = candidate_positions(dataset)?;

        let mut figure = Figure::new("System Usability Scale", "Candidate", "Score");
        candidate_axis(&mut figure, &candidates);
        figure.y_range = 0.0..100.0;

        let measures = [
            ("Usability", -BAR_WIDTH, color::BLUE),
            ("SUS", 0.0, color::ORANGE),
            ("Learnability", BAR_WIDTH, color::GREEN),
        ];
        for (column, offset, color) in measures {
            let values = dataset.numeric(column)?;
            figure.series.push(Series::Bars {
                label: column.to_string(),
                color,
                width: BAR_WIDTH,
                bars: candidates
                    .iter()
                    .zip(values)
                    .map(|(&x, y)| (x + offset, y))
                    .collect(),
            });
        }

        Ok(figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn three_bars_per_candidate() {
        let mut ds = fixtures::study_dataset();
        let figure = SusView.render(&mut ds).unwrap();

        assert_eq!(figure.y_range, 0.0..100.0);
        assert_eq!(figure.x_ticks.len(), 12);
        assert_eq!(figure.series.len(), 3);

        let Some(Series::Bars { bars, width, .. }) = figure.series_named("Learnability") else {
            panic!("missing Learnability bars");
        };
        assert_eq!(*width, BAR_WIDTH);
        assert_eq!(bars[0], (1.25, 80.0));

        let Some(Series::Bars { bars, .. }) = figure.series_named("Usability") else {
            panic!("missing Usability bars");
        };
        assert_eq!(bars[11], (11.75, 67.5));
    }
}
