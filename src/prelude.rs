//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use regresar::prelude::*;
//! ```

pub use crate::linear_model::{LinearRegression, Ridge};
pub use crate::metrics::{mse, r_squared};
pub use crate::model_selection::{cross_validate, Fold, KFold, Scoring};
pub use crate::preprocessing::PolynomialFeatures;
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Estimator;
