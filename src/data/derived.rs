use super::model::Dataset;
use crate::error::ReportError;
use crate::group::Modality;

/// Symmetric error-bar radius from a pair of sub-measurements.
pub fn half_spread(high: f64, low: f64) -> f64 {
    (high - low).abs() / 2.0
}

/// Compute `<modality>_err` from the HD/OC split and store it on the table.
///
/// Returns the radii so the caller doesn't have to read them back.
pub fn add_error_column(dataset: &mut Dataset, modality: Modality) -> Result<Vec<f64>, ReportError> {
    let hd = dataset.numeric(&modality.column("Avg_HD"))?;
    let oc = dataset.numeric(&modality.column("Avg_OC"))?;
    let err: Vec<f64> = hd
        .iter()
        .zip(&oc)
        .map(|(&high, &low)| half_spread(high, low))
        .collect();

    log::debug!("{}: {:?}", modality.error_column(), err);
    dataset.insert_numeric(modality.error_column(), err.clone());
    Ok(err)
}

/// Smallest multiple of 100 at or above every observed value.
///
/// NaN cells are ignored; `None` when no value is finite.
pub fn hundred_ceiling<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<f64> {
    let largest = values
        .into_iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    largest
        .is_finite()
        .then(|| (largest / 100.0).ceil() * 100.0)
}
