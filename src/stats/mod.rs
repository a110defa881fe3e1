//! Statistical reduction of throughput samples
//!
//! Average and median over a finalized sample series. The median works on
//! a sorted local copy; the round-ordered series handed to the reporter is
//! never mutated here.


use crate::{
    error::{AppError, Result},
    models::SummaryStatistics,
};

/// Arithmetic mean of the given throughput values
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AppError::statistics("cannot average an empty series"));
    }

    let total: f64 = values.iter().sum();
    Ok(total / values.len() as f64)
}

/// Median of the given throughput values
///
/// Sorts an internal copy ascending; for an even count the two middle
/// elements are averaged, for an odd count the middle element is taken.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AppError::statistics("cannot take the median of an empty series"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Reduce a finalized series into its summary statistics
pub fn reduce(values: &[f64]) -> Result<SummaryStatistics> {
    Ok(SummaryStatistics {
        average_mbps: average(values)?,
        median_mbps: median(values)?,
    })
}
