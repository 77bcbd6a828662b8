//! Analysis views: one chart per view, all built from the same table.
//!
//! Every view implements [`View`]; [`registry`] lists them in report order
//! and [`resolve`] turns requested names into renderers.

mod compare;
mod parity;
mod sus;

use crate::data::model::Dataset;
use crate::error::ReportError;
use crate::figure::Figure;
use crate::group::{Group, Modality};

pub use compare::{CompareBothView, CompareView};
pub use parity::{ScoreView, TimeView};
pub use sus::SusView;

/// A chart that can be built from the study table.
pub trait View {
    /// Registry name, e.g. `compareSS`.
    fn name(&self) -> &'static str;

    /// Output file name without extension.
    fn file_stem(&self) -> &'static str;

    /// Build the figure. Views that need derived columns add them to
    /// `dataset` first.
    fn render(&self, dataset: &mut Dataset) -> Result<Figure, ReportError>;
}

/// All views, in the order a full report renders them.
pub fn registry() -> Vec<Box<dyn View>> {
    vec![
        Box::new(SusView),
        Box::new(TimeView),
        Box::new(ScoreView),
        Box::new(CompareView::new(Modality::SmartScan)),
        Box::new(CompareView::new(Modality::Ultrasound)),
        Box::new(CompareBothView),
    ]
}

/// Look up the requested views by name, keeping request order.
///
/// Repeated names render once.
pub fn resolve(names: &[String]) -> Result<Vec<Box<dyn View>>, ReportError> {
    let mut available = registry();
    let mut selected: Vec<Box<dyn View>> = Vec::with_capacity(names.len());

    for name in names {
        if selected.iter().any(|v| v.name() == name) {
            log::warn!("View '{name}' requested more than once; rendering it once");
            continue;
        }
        let Some(idx) = available.iter().position(|v| v.name() == name) else {
            return Err(ReportError::UnknownView {
                name: name.clone(),
                available: registry()
                    .iter()
                    .map(|v| v.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };
        selected.push(available.remove(idx));
    }
    Ok(selected)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Candidate ids as x positions.
fn candidate_positions(dataset: &Dataset) -> Result<Vec<f64>, ReportError> {
    Ok(dataset
        .integers("Candidate")?
        .into_iter()
        .map(|c| c as f64)
        .collect())
}

fn groups(dataset: &Dataset) -> Result<Vec<Group>, ReportError> {
    dataset
        .integers("Group")?
        .into_iter()
        .map(Group::try_from)
        .collect()
}

/// Categorical candidate axis with a little room on either side.
fn candidate_axis(figure: &mut Figure, candidates: &[f64]) {
    let lo = candidates.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    figure.x_range = (lo - 0.75)..(hi + 0.75);
    figure.x_ticks = candidates.to_vec();
}

fn pick(values: &[f64], rows: &[usize]) -> Vec<f64> {
    rows.iter().map(|&r| values[r]).collect()
}
