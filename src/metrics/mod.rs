//! Evaluation metrics for regression models.
//!
//! Includes mean squared error (MSE) and the coefficient of
//! determination (R²). Both functions validate their inputs and surface
//! degenerate cases as errors instead of sentinel values.

use crate::error::{RegresarError, Result};
use crate::primitives::Vector;

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true` - `y_pred)²`
///
/// Exactly 0.0 when the two vectors are elementwise identical.
///
/// # Examples
///
/// ```
/// use regresar::metrics::mse;
/// use regresar::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
/// let y_pred = Vector::from_slice(&[2.0, 2.0, 2.0, -2.0]);
/// let error = mse(&y_true, &y_pred).unwrap();
/// assert!((error - 9.5).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns an error if the vectors have different lengths or are empty.
pub fn mse(y_true: &Vector<f32>, y_pred: &Vector<f32>) -> Result<f32> {
    check_lengths(y_true, y_pred)?;

    let n = y_true.len() as f32;

    let sum_sq_error: f32 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice().iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    Ok(sum_sq_error / n)
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// where `SS_res` is the residual sum of squares and `SS_tot` is the
/// total sum of squares around the mean of `y_true`.
///
/// # Examples
///
/// ```
/// use regresar::metrics::r_squared;
/// use regresar::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let y_pred = Vector::from_slice(&[1.0, 2.0, 2.0]);
/// let r2 = r_squared(&y_true, &y_pred).unwrap();
/// assert!((r2 - 0.5).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns an error if the vectors have different lengths, are empty, or
/// `SS_tot` is zero (all true values identical), in which case R² is
/// undefined.
pub fn r_squared(y_true: &Vector<f32>, y_pred: &Vector<f32>) -> Result<f32> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean();

    let ss_res: f32 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice().iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    let ss_tot: f32 = y_true.as_slice().iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Err(RegresarError::ConstantTarget);
    }

    Ok(1.0 - (ss_res / ss_tot))
}

fn check_lengths(y_true: &Vector<f32>, y_pred: &Vector<f32>) -> Result<()> {
    if y_true.is_empty() {
        return Err(RegresarError::empty_input("y_true"));
    }
    if y_true.len() != y_pred.len() {
        return Err(RegresarError::dimension_mismatch(
            "y_true.len()",
            y_true.len(),
            y_pred.len(),
        ));
    }
    Ok(())
}
