//! Linear models fit via closed-form normal equations.
//!
//! Includes Ordinary Least Squares ([`LinearRegression`]) and
//! L2-regularized least squares ([`Ridge`]). Both consume a design
//! matrix that already carries its bias column (as produced by
//! [`PolynomialFeatures`](crate::preprocessing::PolynomialFeatures)),
//! so neither model fits a separate intercept.

use crate::error::{RegresarError, Result};
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::{Deserialize, Serialize};

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares:
///
/// ```text
/// β = (X^T X)^-1 X^T y
/// ```
///
/// solved via Cholesky decomposition of `X^T X`. A singular or
/// rank-deficient `X^T X` fails fast with a numerical-singularity error;
/// there is no pseudo-inverse fallback.
///
/// # Examples
///
/// ```
/// use regresar::prelude::*;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     1.0, 1.0,
///     1.0, 2.0,
///     1.0, 3.0,
///     1.0, 4.0,
/// ]).unwrap();
/// let y = Vector::from_slice(&[1.0, 2.0, 2.0, 1.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let beta = model.coefficients().unwrap();
/// assert!((beta[0] - 1.5).abs() < 1e-4);
/// assert!(beta[1].abs() < 1e-4);
/// ```
///
/// # Performance
///
/// Time complexity is O(n q² + q³) for n samples and q design columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Fitted coefficients, one per design column. `None` before `fit`.
    coefficients: Option<Vector<f32>>,
}

impl LinearRegression {
    /// Creates a new, unfitted `LinearRegression`.
    #[must_use]
    pub fn new() -> Self {
        Self { coefficients: None }
    }

    /// Returns the fitted coefficients.
    ///
    /// # Errors
    ///
    /// Returns a state error if the model has not been fitted.
    pub fn coefficients(&self) -> Result<&Vector<f32>> {
        self.coefficients.as_ref().ok_or(RegresarError::NotFitted)
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}

impl Estimator for LinearRegression {
    /// Fits the model by solving the normal equations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the number of rows of `x` doesn't match `y`,
    /// - `x` has no rows, or fewer rows than columns (underdetermined),
    /// - `X^T X` is singular (not positive definite).
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();
        validate_fit_shape(n_samples, n_features, y.len())?;

        let xt = x.transpose();
        let xtx = xt.matmul(x)?;
        let xty = xt.matvec(y)?;

        let beta = solve_normal_equations(&xtx, &xty)?;
        self.coefficients = Some(beta);

        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns a state error if the model is not fitted, or a shape
    /// error if the input column count differs from the fitted width.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vector<f32>> {
        let coefficients = self.coefficients.as_ref().ok_or(RegresarError::NotFitted)?;
        predict_with(coefficients, x)
    }
}

/// Ridge regression with L2 regularization.
///
/// Fits a linear model with an L2 penalty on coefficient magnitudes:
///
/// ```text
/// β = (X^T X + λI)^-1 X^T y
/// ```
///
/// λ is applied to every diagonal entry of `X^T X`. With `λ > 0` the
/// regularized matrix is positive definite even when `X^T X` is
/// rank deficient; `λ = 0` reduces to OLS.
///
/// # Examples
///
/// ```
/// use regresar::prelude::*;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     1.0, 1.0,
///     1.0, 2.0,
///     1.0, 3.0,
///     1.0, 4.0,
/// ]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = Ridge::new(0.1);
/// model.fit(&x, &y).unwrap();
/// let predictions = model.predict(&x).unwrap();
/// assert_eq!(predictions.len(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ridge {
    /// Regularization strength λ. Must be non-negative.
    alpha: f32,
    /// Fitted coefficients, one per design column. `None` before `fit`.
    coefficients: Option<Vector<f32>>,
}

impl Ridge {
    /// Creates a new `Ridge` with the given regularization strength.
    ///
    /// Larger `alpha` means more regularization; `0.0` is equivalent to
    /// OLS. Negative values are rejected when `fit` runs.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            coefficients: None,
        }
    }

    /// Returns the regularization strength.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the fitted coefficients.
    ///
    /// # Errors
    ///
    /// Returns a state error if the model has not been fitted.
    pub fn coefficients(&self) -> Result<&Vector<f32>> {
        self.coefficients.as_ref().ok_or(RegresarError::NotFitted)
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}

impl Estimator for Ridge {
    /// Fits the model by solving the regularized normal equations.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is negative, input shapes don't
    /// match, or the regularized matrix is not positive definite.
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        if self.alpha < 0.0 {
            return Err(RegresarError::InvalidHyperparameter {
                param: "alpha".to_string(),
                value: self.alpha.to_string(),
                constraint: ">= 0".to_string(),
            });
        }

        let (n_samples, n_features) = x.shape();
        validate_fit_shape(n_samples, n_features, y.len())?;

        let xt = x.transpose();
        let mut xtx = xt.matmul(x)?;

        // X^T X + λI
        for i in 0..n_features {
            let current = xtx.get(i, i);
            xtx.set(i, i, current + self.alpha);
        }

        let xty = xt.matvec(y)?;

        let beta = solve_normal_equations(&xtx, &xty)?;
        self.coefficients = Some(beta);

        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns a state error if the model is not fitted, or a shape
    /// error if the input column count differs from the fitted width.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vector<f32>> {
        let coefficients = self.coefficients.as_ref().ok_or(RegresarError::NotFitted)?;
        predict_with(coefficients, x)
    }
}

fn validate_fit_shape(n_samples: usize, n_features: usize, y_len: usize) -> Result<()> {
    if n_samples == 0 {
        return Err(RegresarError::empty_input("design matrix has no rows"));
    }
    if n_samples != y_len {
        return Err(RegresarError::dimension_mismatch(
            "x.n_rows()",
            n_samples,
            y_len,
        ));
    }
    if n_samples < n_features {
        return Err(RegresarError::DimensionMismatch {
            expected: format!("at least {n_features} samples for {n_features} columns"),
            actual: n_samples.to_string(),
        });
    }
    Ok(())
}

fn solve_normal_equations(xtx: &Matrix<f32>, xty: &Vector<f32>) -> Result<Vector<f32>> {
    match xtx.cholesky_solve(xty) {
        Ok(beta) => Ok(beta),
        Err("matrix is not positive definite") => Err(RegresarError::SingularMatrix {
            size: xtx.n_cols(),
        }),
        Err(msg) => Err(msg.into()),
    }
}

fn predict_with(coefficients: &Vector<f32>, x: &Matrix<f32>) -> Result<Vector<f32>> {
    if x.n_cols() != coefficients.len() {
        return Err(RegresarError::dimension_mismatch(
            "fitted width",
            coefficients.len(),
            x.n_cols(),
        ));
    }
    Ok(x.matvec(coefficients)?)
}
