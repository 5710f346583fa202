//! Regresar: a minimal polynomial-regression toolkit in pure Rust.
//!
//! Regresar expands raw feature columns into polynomial interaction
//! terms with symbolic name tracking, fits linear models via closed-form
//! normal equations, partitions datasets into reproducible k-fold
//! splits, and scores predictions with standard regression metrics.
//!
//! # Quick Start
//!
//! ```
//! use regresar::prelude::*;
//!
//! // Raw feature column, y = 2x + 1
//! let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
//!
//! // Expand: bias column plus the original column
//! let expander = PolynomialFeatures::new(1);
//! let (design, names) = expander.transform(&x, &["x"]).unwrap();
//! assert_eq!(names, vec!["1", "x"]);
//!
//! // Fit OLS and predict
//! let mut model = LinearRegression::new();
//! model.fit(&design, &y).unwrap();
//! let predictions = model.predict(&design).unwrap();
//!
//! let r2 = r_squared(&y, &predictions).unwrap();
//! assert!(r2 > 0.99);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`preprocessing`]: Polynomial feature expansion with name tracking
//! - [`linear_model`]: OLS and ridge regression via normal equations
//! - [`model_selection`]: Seeded k-fold splitting and cross-validation
//! - [`metrics`]: Regression metrics (MSE, R²)
//!
//! All operations are synchronous and single-threaded; the only mutable
//! state is the fitted coefficient vector owned by each model. The cost
//! of the feature expansion grows combinatorially with the degree and
//! the input column count.

pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod traits;

pub use error::{RegresarError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Estimator;
