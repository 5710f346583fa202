//! Preprocessing transformers for feature engineering.
//!
//! Provides [`PolynomialFeatures`], which expands raw feature columns
//! into polynomial interaction terms while tracking a human-readable
//! name for every output column.
//!
//! # Example
//!
//! ```
//! use regresar::preprocessing::PolynomialFeatures;
//! use regresar::primitives::Matrix;
//!
//! let x = Matrix::from_vec(1, 2, vec![2.0, 3.0]).expect("valid matrix dimensions");
//!
//! let expander = PolynomialFeatures::new(2);
//! let (expanded, names) = expander.transform(&x, &["x", "y"]).unwrap();
//!
//! assert_eq!(expanded.as_slice(), &[1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
//! assert_eq!(names, vec!["1", "x", "y", "(x^2)", "(x)(y)", "(y^2)"]);
//! ```

use crate::error::{RegresarError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Expands a feature matrix with a bias column and all multiplicative
/// interaction terms up to a given degree.
///
/// Column layout of the output: the constant column `1` first, then the
/// original columns unchanged, then one column per unique multiset of
/// source columns of size 2, 3, ... up to `degree`, enumerated in
/// combinations-with-replacement order (non-decreasing index tuples,
/// lexicographic). Order-independent products collapse to a single
/// column: `x·x·y` and `x·y·x` both map to the `(x^2)(y)` column.
///
/// The output column count is `1 + p + Σ_{i=2}^{degree} C(p+i-1, i)`,
/// which grows combinatorially with `degree` and the input column count.
/// That blow-up is the dominant cost driver of the pipeline; it is never
/// truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialFeatures {
    /// Maximum total degree of the generated terms.
    degree: usize,
}

impl PolynomialFeatures {
    /// Creates a new expander for the given maximum degree.
    ///
    /// The degree is validated when [`transform`](Self::transform) runs;
    /// it must be at least 1.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// Returns the configured degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of output columns for `n_features` input
    /// columns: `1 + p + Σ_{i=2}^{degree} C(p+i-1, i)`.
    ///
    /// The formula is only meaningful for `degree >= 1`;
    /// [`transform`](Self::transform) rejects smaller degrees before
    /// any expansion happens.
    #[must_use]
    pub fn n_output_features(&self, n_features: usize) -> usize {
        let mut total = 1 + n_features;
        for i in 2..=self.degree {
            total += binomial(n_features + i - 1, i);
        }
        total
    }

    /// Expands the matrix and produces a parallel name vector.
    ///
    /// `names` supplies one human-readable label per input column; the
    /// returned names match the output columns position for position.
    ///
    /// # Errors
    ///
    /// Returns an error if `degree < 1`, if `names.len()` differs from
    /// the column count of `x`, or if `x` has no rows.
    pub fn transform(&self, x: &Matrix<f32>, names: &[&str]) -> Result<(Matrix<f32>, Vec<String>)> {
        if self.degree < 1 {
            return Err(RegresarError::InvalidHyperparameter {
                param: "degree".to_string(),
                value: self.degree.to_string(),
                constraint: ">= 1".to_string(),
            });
        }

        let (n_rows, n_cols) = x.shape();

        if names.len() != n_cols {
            return Err(RegresarError::dimension_mismatch(
                "names.len() == n_cols",
                n_cols,
                names.len(),
            ));
        }
        if n_rows == 0 {
            return Err(RegresarError::empty_input("feature matrix has no rows"));
        }

        // All index tuples for degrees 2..=degree, in enumeration order.
        let mut combos: Vec<Vec<usize>> = Vec::new();
        for size in 2..=self.degree {
            combos.extend(combinations_with_replacement(n_cols, size));
        }

        let n_out = 1 + n_cols + combos.len();
        debug_assert_eq!(n_out, self.n_output_features(n_cols));

        let mut data = Vec::with_capacity(n_rows * n_out);
        for i in 0..n_rows {
            data.push(1.0);
            for j in 0..n_cols {
                data.push(x.get(i, j));
            }
            for combo in &combos {
                let product: f32 = combo.iter().map(|&j| x.get(i, j)).product();
                data.push(product);
            }
        }

        let mut out_names = Vec::with_capacity(n_out);
        out_names.push("1".to_string());
        for name in names {
            out_names.push((*name).to_string());
        }
        for combo in &combos {
            out_names.push(term_name(names, combo));
        }

        let expanded = Matrix::from_vec(n_rows, n_out, data)?;
        Ok((expanded, out_names))
    }
}

/// Enumerates all non-decreasing index tuples of the given size over
/// `0..n`, in lexicographic order.
///
/// Each tuple represents one unique multiset of column indices, so every
/// multiset is visited exactly once.
fn combinations_with_replacement(n: usize, size: usize) -> Vec<Vec<usize>> {
    if n == 0 || size == 0 {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut current = vec![0usize; size];

    loop {
        result.push(current.clone());

        // Find the rightmost position that can still be incremented.
        let mut pos = size;
        while pos > 0 && current[pos - 1] == n - 1 {
            pos -= 1;
        }
        if pos == 0 {
            break;
        }

        // Increment it and reset everything to its right to the same
        // value, keeping the tuple non-decreasing.
        let next = current[pos - 1] + 1;
        for slot in current.iter_mut().skip(pos - 1) {
            *slot = next;
        }
    }

    result
}

/// Builds the symbolic name of one interaction column from a
/// non-decreasing index tuple.
///
/// Each distinct variable appears once, in order of first occurrence,
/// as `"(name)"` or `"(name^count)"` when repeated.
fn term_name(names: &[&str], combo: &[usize]) -> String {
    let mut result = String::new();
    let mut i = 0;
    while i < combo.len() {
        let mut j = i;
        while j < combo.len() && combo[j] == combo[i] {
            j += 1;
        }
        let count = j - i;
        let name = names[combo[i]];
        if count == 1 {
            result.push_str(&format!("({name})"));
        } else {
            result.push_str(&format!("({name}^{count})"));
        }
        i = j;
    }
    result
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names2() -> Vec<&'static str> {
        vec!["x", "y"]
    }

    #[test]
    fn test_degree_one_is_bias_plus_originals() {
        let x = Matrix::from_vec(2, 2, vec![2.0, 3.0, 4.0, 5.0]).unwrap();
        let expander = PolynomialFeatures::new(1);
        let (expanded, names) = expander.transform(&x, &names2()).unwrap();

        assert_eq!(expanded.shape(), (2, 3));
        assert_eq!(expanded.as_slice(), &[1.0, 2.0, 3.0, 1.0, 4.0, 5.0]);
        assert_eq!(names, vec!["1", "x", "y"]);
    }

    #[test]
    fn test_degree_two_single_row() {
        let x = Matrix::from_vec(1, 2, vec![2.0, 3.0]).unwrap();
        let expander = PolynomialFeatures::new(2);
        let (expanded, names) = expander.transform(&x, &names2()).unwrap();

        assert_eq!(expanded.as_slice(), &[1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
        assert_eq!(names, vec!["1", "x", "y", "(x^2)", "(x)(y)", "(y^2)"]);
    }

    #[test]
    fn test_degree_three_names() {
        let x = Matrix::from_vec(1, 2, vec![2.0, 3.0]).unwrap();
        let expander = PolynomialFeatures::new(3);
        let (expanded, names) = expander.transform(&x, &names2()).unwrap();

        assert_eq!(
            names,
            vec![
                "1", "x", "y", "(x^2)", "(x)(y)", "(y^2)", "(x^3)", "(x^2)(y)", "(x)(y^2)",
                "(y^3)"
            ]
        );
        // Degree-3 products: x³=8, x²y=12, xy²=18, y³=27
        assert_eq!(
            expanded.as_slice(),
            &[1.0, 2.0, 3.0, 4.0, 6.0, 9.0, 8.0, 12.0, 18.0, 27.0]
        );
    }

    #[test]
    fn test_column_count_matches_formula() {
        for p in 1..=4usize {
            for degree in 1..=4usize {
                let x = Matrix::from_vec(1, p, vec![1.0; p]).unwrap();
                let names: Vec<String> = (0..p).map(|j| format!("x{j}")).collect();
                let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

                let expander = PolynomialFeatures::new(degree);
                let (expanded, out_names) = expander.transform(&x, &name_refs).unwrap();

                assert_eq!(expanded.n_cols(), expander.n_output_features(p));
                assert_eq!(out_names.len(), expanded.n_cols());
            }
        }
    }

    #[test]
    fn test_no_duplicate_terms() {
        let x = Matrix::from_vec(1, 3, vec![2.0, 3.0, 5.0]).unwrap();
        let expander = PolynomialFeatures::new(3);
        let (_, names) = expander.transform(&x, &["a", "b", "c"]).unwrap();

        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len(), "term names must be unique");
    }

    #[test]
    fn test_row_count_agnostic() {
        let x = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let expander = PolynomialFeatures::new(2);
        let (expanded, _) = expander.transform(&x, &names2()).unwrap();

        assert_eq!(expanded.n_rows(), 3);
        // Row 1: [1, 3, 4, 9, 12, 16]
        assert_eq!(expanded.row(1).as_slice(), &[1.0, 3.0, 4.0, 9.0, 12.0, 16.0]);
    }

    #[test]
    fn test_degree_zero_is_error() {
        let x = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
        let expander = PolynomialFeatures::new(0);
        let result = expander.transform(&x, &["x"]);
        assert!(matches!(
            result,
            Err(RegresarError::InvalidHyperparameter { .. })
        ));
    }

    #[test]
    fn test_name_count_mismatch_is_error() {
        let x = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
        let expander = PolynomialFeatures::new(2);
        let result = expander.transform(&x, &["x"]);
        assert!(matches!(
            result,
            Err(RegresarError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_matrix_is_error() {
        let x = Matrix::from_vec(0, 2, vec![]).unwrap();
        let expander = PolynomialFeatures::new(2);
        let result = expander.transform(&x, &names2());
        assert!(matches!(result, Err(RegresarError::EmptyInput { .. })));
    }

    #[test]
    fn test_combinations_with_replacement_order() {
        let combos = combinations_with_replacement(3, 2);
        assert_eq!(
            combos,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2]
            ]
        );
    }

    #[test]
    fn test_combinations_single_column() {
        let combos = combinations_with_replacement(1, 3);
        assert_eq!(combos, vec![vec![0, 0, 0]]);
    }

    #[test]
    fn test_term_name_multiplicity() {
        assert_eq!(term_name(&["x", "y"], &[0, 0, 1]), "(x^2)(y)");
        assert_eq!(term_name(&["x", "y"], &[0, 1, 1]), "(x)(y^2)");
        assert_eq!(term_name(&["x", "y"], &[1, 1, 1]), "(y^3)");
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(binomial(6, 3), 20);
    }

    #[test]
    fn test_n_output_features() {
        // p=2, degree=2: 1 + 2 + C(3,2)=3 -> 6
        assert_eq!(PolynomialFeatures::new(2).n_output_features(2), 6);
        // p=2, degree=3: 6 + C(4,3)=4 -> 10
        assert_eq!(PolynomialFeatures::new(3).n_output_features(2), 10);
        // p=3, degree=2: 1 + 3 + C(4,2)=6 -> 10
        assert_eq!(PolynomialFeatures::new(2).n_output_features(3), 10);
    }
}
