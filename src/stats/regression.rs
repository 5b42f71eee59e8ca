use serde::{Deserialize, Serialize};

use crate::Error;

/// Result of an ordinary least squares fit, rounded to 3 decimal places.
/// `r_squared` is the squared Pearson correlation coefficient and is NaN when
/// either axis has zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    pub slope: f64,
    pub r_squared: f64,
}

/// Fit `values` on `timestamps` by ordinary least squares.
///
/// Everything is computed from accumulated sums, so the result does not
/// depend on the ordering of the input pairs. Timestamps may repeat and need
/// not be sorted.
pub fn fit_trendline(timestamps: &[f64], values: &[f64]) -> Result<TrendFit, Error> {
    if timestamps.len() != values.len() {
        return Err(Error::LengthMismatch(format!(
            "{} timestamps vs {} values",
            timestamps.len(),
            values.len()
        )));
    }

    let count = timestamps.len();
    if count < 2 {
        return Err(Error::Regression(format!(
            "at least 2 points required, got {}",
            count
        )));
    }

    let n = count as f64;
    let sum_x: f64 = timestamps.iter().sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xx: f64 = timestamps.iter().map(|x| x * x).sum();
    let sum_yy: f64 = values.iter().map(|y| y * y).sum();
    let sum_xy: f64 = timestamps.iter().zip(values).map(|(x, y)| x * y).sum();

    // Scaled (co)variances; the shared factor of n cancels in slope and r.
    let ss_xx = n * sum_xx - sum_x * sum_x;
    let ss_yy = n * sum_yy - sum_y * sum_y;
    let ss_xy = n * sum_xy - sum_x * sum_y;

    // All timestamps identical: slope and fit quality are undefined.
    let slope = if ss_xx == 0.0 { f64::NAN } else { ss_xy / ss_xx };

    let r = ss_xy / (ss_xx * ss_yy).sqrt();
    let r_squared = r * r;

    Ok(TrendFit {
        slope: round3(slope),
        r_squared: round3(r_squared),
    })
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
