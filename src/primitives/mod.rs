//! Core compute primitives (Vector, Matrix).
//!
//! These types provide the dense numeric foundation for the expander,
//! the linear models, and the metrics.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
