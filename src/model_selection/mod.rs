//! Model selection utilities: reproducible k-fold splitting and
//! cross-validated evaluation.
//!
//! [`KFold`] deterministically partitions sample indices into folds;
//! [`cross_validate`] wires the splitter, the polynomial expander, a
//! model, and a metric into an averaged out-of-fold score.

use crate::error::{RegresarError, Result};
use crate::metrics::{mse, r_squared};
use crate::preprocessing::PolynomialFeatures;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::{Deserialize, Serialize};

/// One train/test index partition produced by [`KFold::split`].
///
/// `test_indices` keeps the permuted order in which the indices appear
/// in the shuffled sequence; `train_indices` is the sorted complement
/// with respect to `0..n_samples`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fold {
    /// Sorted complement of the test set.
    pub train_indices: Vec<usize>,
    /// Test indices in shuffled order.
    pub test_indices: Vec<usize>,
}

/// K-Fold cross-validator with deterministic, seeded shuffling.
///
/// Indices `0..n_samples` are permuted with rand's `StdRng` (currently
/// the ChaCha12 generator) seeded via `seed_from_u64`. The generator is
/// constructed fresh inside every [`split`](Self::split) call with no
/// other draws interleaved, so the folds depend only on
/// `(n_samples, n_splits, seed)` and re-running is bit-identical.
///
/// The permuted sequence is cut into `n_splits` contiguous chunks; when
/// `n_samples` is not divisible by `n_splits`, the first
/// `n_samples % n_splits` chunks receive one extra element, so chunk
/// sizes differ by at most 1.
///
/// # Example
///
/// ```
/// use regresar::model_selection::KFold;
///
/// let kfold = KFold::new(3).with_seed(5);
/// let folds = kfold.split(10).unwrap();
/// assert_eq!(folds.len(), 3);
///
/// let total: usize = folds.iter().map(|f| f.test_indices.len()).sum();
/// assert_eq!(total, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KFold {
    n_splits: usize,
    seed: u64,
}

impl KFold {
    /// Creates a new K-Fold cross-validator with seed 0.
    ///
    /// # Arguments
    ///
    /// * `n_splits` - Number of folds. Must satisfy
    ///   `1 <= n_splits <= n_samples` when `split` runs.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self { n_splits, seed: 0 }
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of folds.
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Generates the folds for `n_samples` observations.
    ///
    /// Across the returned folds the test sets are pairwise disjoint and
    /// their union is exactly `0..n_samples`; each fold's training set
    /// is the sorted complement of its test set.
    ///
    /// # Errors
    ///
    /// Returns a domain error unless `1 <= n_splits <= n_samples`.
    pub fn split(&self, n_samples: usize) -> Result<Vec<Fold>> {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        if self.n_splits < 1 || self.n_splits > n_samples {
            return Err(RegresarError::InvalidHyperparameter {
                param: "n_splits".to_string(),
                value: self.n_splits.to_string(),
                constraint: format!("1 <= n_splits <= n_samples ({n_samples})"),
            });
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();

        // Seeded immediately before the shuffle; no other draws touch
        // this generator.
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let fold_size = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;

        for i in 0..self.n_splits {
            let current_fold_size = if i < remainder {
                fold_size + 1
            } else {
                fold_size
            };
            let end = start + current_fold_size;

            let test_indices: Vec<usize> = indices[start..end].to_vec();

            let mut in_test = vec![false; n_samples];
            for &idx in &test_indices {
                in_test[idx] = true;
            }
            let train_indices: Vec<usize> = (0..n_samples).filter(|&idx| !in_test[idx]).collect();

            folds.push(Fold {
                train_indices,
                test_indices,
            });

            start = end;
        }

        Ok(folds)
    }
}

/// Metric used to score out-of-fold predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// Mean squared error (lower is better).
    Mse,
    /// Coefficient of determination (higher is better).
    RSquared,
}

impl Scoring {
    /// Scores predictions against true targets with the chosen metric.
    ///
    /// # Errors
    ///
    /// Propagates the metric's shape and degeneracy errors.
    pub fn evaluate(self, y_true: &Vector<f32>, y_pred: &Vector<f32>) -> Result<f32> {
        match self {
            Scoring::Mse => mse(y_true, y_pred),
            Scoring::RSquared => r_squared(y_true, y_pred),
        }
    }
}

/// Per-fold scores from cross-validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossValidationResult {
    /// Score for each fold, in fold order.
    pub scores: Vec<f32>,
}

impl CrossValidationResult {
    /// Calculate mean score across folds
    #[must_use]
    pub fn mean(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f32>() / self.scores.len() as f32
    }

    /// Calculate standard deviation of scores
    #[must_use]
    pub fn std(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|&score| (score - mean).powi(2))
            .sum::<f32>()
            / self.scores.len() as f32;
        variance.sqrt()
    }

    /// Get minimum score
    #[must_use]
    pub fn min(&self) -> f32 {
        self.scores.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Get maximum score
    #[must_use]
    pub fn max(&self) -> f32 {
        self.scores
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

/// Runs cross-validated evaluation of a model on raw features.
///
/// For each fold: selects train/test rows by index, expands each subset
/// with `expander`, fits a fresh clone of `estimator` on the expanded
/// training subset, predicts on the expanded test subset, and scores the
/// predictions with `scoring`.
///
/// # Errors
///
/// Returns an error on shape mismatches between `x`, `names`, and `y`,
/// or if any fold's expansion, fit, predict, or scoring step fails.
///
/// # Example
///
/// ```
/// use regresar::prelude::*;
/// use regresar::model_selection::{cross_validate, KFold, Scoring};
/// use regresar::preprocessing::PolynomialFeatures;
///
/// let x = Matrix::from_vec(20, 1, (0..20).map(|i| i as f32).collect()).unwrap();
/// let y = Vector::from_vec((0..20).map(|i| 2.0 * i as f32 + 1.0).collect());
///
/// let model = LinearRegression::new();
/// let expander = PolynomialFeatures::new(1);
/// let kfold = KFold::new(4).with_seed(42);
///
/// let result = cross_validate(&model, &x, &["x"], &y, &expander, &kfold, Scoring::Mse).unwrap();
/// assert!(result.mean() < 1e-3);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn cross_validate<E>(
    estimator: &E,
    x: &Matrix<f32>,
    names: &[&str],
    y: &Vector<f32>,
    expander: &PolynomialFeatures,
    cv: &KFold,
    scoring: Scoring,
) -> Result<CrossValidationResult>
where
    E: Estimator + Clone,
{
    let n_samples = x.n_rows();
    if n_samples != y.len() {
        return Err(RegresarError::dimension_mismatch(
            "x.n_rows()",
            n_samples,
            y.len(),
        ));
    }

    let folds = cv.split(n_samples)?;
    let mut scores = Vec::with_capacity(folds.len());

    for fold in &folds {
        let (x_train, y_train) = extract_samples(x, y, &fold.train_indices);
        let (x_test, y_test) = extract_samples(x, y, &fold.test_indices);

        let (x_train_exp, _) = expander.transform(&x_train, names)?;
        let (x_test_exp, _) = expander.transform(&x_test, names)?;

        let mut fold_model = estimator.clone();
        fold_model.fit(&x_train_exp, &y_train)?;

        let y_pred = fold_model.predict(&x_test_exp)?;
        scores.push(scoring.evaluate(&y_test, &y_pred)?);
    }

    Ok(CrossValidationResult { scores })
}

/// Helper function to extract samples by indices
fn extract_samples(
    x: &Matrix<f32>,
    y: &Vector<f32>,
    indices: &[usize],
) -> (Matrix<f32>, Vector<f32>) {
    let n_features = x.n_cols();
    let mut x_data = Vec::with_capacity(indices.len() * n_features);
    let mut y_data = Vec::with_capacity(indices.len());

    for &idx in indices {
        for j in 0..n_features {
            x_data.push(x.get(idx, j));
        }
        y_data.push(y[idx]);
    }

    let x_subset =
        Matrix::from_vec(indices.len(), n_features, x_data).expect("index subset keeps row shape");
    let y_subset = Vector::from_vec(y_data);

    (x_subset, y_subset)
}
