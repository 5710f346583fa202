//! End-to-end pipeline tests: expansion, fitting, splitting, and
//! cross-validated evaluation working together.

use regresar::model_selection::{cross_validate, KFold, Scoring};
use regresar::prelude::*;

/// Builds a 16-row grid over two features: (a, b) for a, b in 0..4.
fn grid() -> Matrix<f32> {
    let mut data = Vec::with_capacity(32);
    for a in 0..4 {
        for b in 0..4 {
            data.push(a as f32);
            data.push(b as f32);
        }
    }
    Matrix::from_vec(16, 2, data).unwrap()
}

/// Evaluates y = 1 + 2a + 3b + 0.5a² + ab + 0.25b² on a row.
fn poly(a: f32, b: f32) -> f32 {
    1.0 + 2.0 * a + 3.0 * b + 0.5 * a * a + a * b + 0.25 * b * b
}

fn targets(x: &Matrix<f32>) -> Vector<f32> {
    let data: Vec<f32> = (0..x.n_rows())
        .map(|i| poly(x.get(i, 0), x.get(i, 1)))
        .collect();
    Vector::from_vec(data)
}

#[test]
fn ols_recovers_known_polynomial() {
    let x = grid();
    let y = targets(&x);

    let expander = PolynomialFeatures::new(2);
    let (design, names) = expander.transform(&x, &["a", "b"]).unwrap();
    assert_eq!(
        names,
        vec!["1", "a", "b", "(a^2)", "(a)(b)", "(b^2)"]
    );

    let mut model = LinearRegression::new();
    model.fit(&design, &y).unwrap();

    let beta = model.coefficients().unwrap();
    let expected = [1.0, 2.0, 3.0, 0.5, 1.0, 0.25];
    for (i, &want) in expected.iter().enumerate() {
        assert!(
            (beta[i] - want).abs() < 1e-2,
            "beta[{i}] ({}) = {}, want {want}",
            names[i],
            beta[i]
        );
    }

    let predictions = model.predict(&design).unwrap();
    let r2 = r_squared(&y, &predictions).unwrap();
    assert!(r2 > 0.9999);
}

#[test]
fn prediction_on_unseen_rows_matches_closed_form() {
    let x = grid();
    let y = targets(&x);

    let expander = PolynomialFeatures::new(2);
    let (design, _) = expander.transform(&x, &["a", "b"]).unwrap();

    let mut model = LinearRegression::new();
    model.fit(&design, &y).unwrap();

    let x_new = Matrix::from_vec(2, 2, vec![5.0, 1.0, 2.5, 3.5]).unwrap();
    let (design_new, _) = expander.transform(&x_new, &["a", "b"]).unwrap();
    let predictions = model.predict(&design_new).unwrap();

    assert!((predictions[0] - poly(5.0, 1.0)).abs() < 1e-2);
    assert!((predictions[1] - poly(2.5, 3.5)).abs() < 1e-2);
}

#[test]
fn ridge_tracks_ols_on_well_conditioned_data() {
    let x = grid();
    let y = targets(&x);

    let expander = PolynomialFeatures::new(2);
    let (design, _) = expander.transform(&x, &["a", "b"]).unwrap();

    let mut ols = LinearRegression::new();
    ols.fit(&design, &y).unwrap();
    let mut ridge = Ridge::new(0.0);
    ridge.fit(&design, &y).unwrap();

    let b_ols = ols.coefficients().unwrap();
    let b_ridge = ridge.coefficients().unwrap();
    for i in 0..design.n_cols() {
        assert!((b_ols[i] - b_ridge[i]).abs() < 1e-3);
    }
}

#[test]
fn cross_validated_quadratic_fit_scores_high() {
    let x = grid();
    let y = targets(&x);

    let model = LinearRegression::new();
    let expander = PolynomialFeatures::new(2);
    let kfold = KFold::new(4).with_seed(5);

    let result = cross_validate(
        &model,
        &x,
        &["a", "b"],
        &y,
        &expander,
        &kfold,
        Scoring::RSquared,
    )
    .unwrap();

    assert_eq!(result.scores.len(), 4);
    for &score in &result.scores {
        assert!(score > 0.99, "fold R² = {score}");
    }
}

#[test]
fn underfit_degree_scores_worse_than_matching_degree() {
    let x = grid();
    let y = targets(&x);

    let model = LinearRegression::new();
    let kfold = KFold::new(4).with_seed(5);

    let linear = cross_validate(
        &model,
        &x,
        &["a", "b"],
        &y,
        &PolynomialFeatures::new(1),
        &kfold,
        Scoring::Mse,
    )
    .unwrap();
    let quadratic = cross_validate(
        &model,
        &x,
        &["a", "b"],
        &y,
        &PolynomialFeatures::new(2),
        &kfold,
        Scoring::Mse,
    )
    .unwrap();

    assert!(quadratic.mean() < linear.mean());
}
