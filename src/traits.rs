//! Core traits for regression estimators.
//!
//! These traits define the API contract shared by all models.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Primary trait for supervised regression estimators.
///
/// Estimators implement fit/predict following sklearn conventions. A
/// model owns no state before `fit`; each subsequent `fit` call
/// overwrites the fitted coefficients.
///
/// # Examples
///
/// ```
/// use regresar::prelude::*;
///
/// // Design matrix with bias column, y = 2x + 1
/// let x = Matrix::from_vec(4, 2, vec![
///     1.0, 1.0,
///     1.0, 2.0,
///     1.0, 3.0,
///     1.0, 4.0,
/// ]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// let predictions = model.predict(&x).unwrap();
/// assert!((predictions[0] - 3.0).abs() < 1e-3);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (dimension mismatch, singular
    /// matrix, invalid hyperparameter).
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()>;

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the input column
    /// count differs from the fitted width.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vector<f32>>;
}
