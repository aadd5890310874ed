//! Spectral threshold and eigenvalue extraction.
//!
//! A `d`-regular graph has largest adjacency eigenvalue exactly `d`;
//! the next-largest magnitude is the empirical spectral-gap estimate.
//! The Ramanujan bound `2*sqrt(d-1)` is the theoretical optimum for
//! that second value, and the lift generator uses it as its
//! acceptance threshold.

use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::Array2;

/// Ramanujan-like spectral bound `2*sqrt(d-1)` for a `d`-regular graph.
///
/// Returns `0.0` at `degree = 1` and `NaN` for `degree = 0`; callers
/// are expected to have validated `degree >= 1` up front (see
/// [`crate::lift::LiftConfig::validate`]).
pub fn ramanujan_threshold(degree: usize) -> f64 {
    2.0 * (degree as f64 - 1.0).sqrt()
}

/// Second-largest eigenvalue magnitude of a symmetric 0/1 adjacency.
///
/// Runs a full symmetric eigendecomposition, takes magnitudes
/// (the matrix is real-symmetric so eigenvalues are real; `abs()`
/// also folds the negative tail into the comparison), sorts ascending
/// and returns element `n-2`.
///
/// The matrix must be at least `2×2`, which config validation
/// guarantees (`d >= 1, k >= 1` implies `n >= 2`).
pub fn second_largest_magnitude(adjacency: &Array2<f64>) -> f64 {
    let n = adjacency.nrows();
    debug_assert!(n >= 2, "spectrum of a graph with fewer than 2 nodes");
    debug_assert_eq!(n, adjacency.ncols());

    let dense = DMatrix::from_fn(n, n, |i, j| adjacency[[i, j]]);
    let eigen = SymmetricEigen::new(dense);

    let mut magnitudes: Vec<f64> = eigen.eigenvalues.iter().map(|e| e.abs()).collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes[n - 2]
}
