//! Tour length evaluation.

use crate::distance::DistanceMatrix;

/// Sums the consecutive-edge distances over a node sequence.
///
/// Returns `0.0` for sequences of length 0 or 1. Works for open paths and
/// closed routes alike; a closed route simply carries the origin at both
/// ends of the sequence.
///
/// # Examples
///
/// ```
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// assert!((tour_length(&[0, 1, 2], &dm) - 2.0).abs() < 1e-10);
/// assert!((tour_length(&[0, 1, 2, 0], &dm) - 4.0).abs() < 1e-10);
/// assert_eq!(tour_length(&[0], &dm), 0.0);
/// ```
pub fn tour_length(nodes: &[usize], distances: &DistanceMatrix) -> f64 {
    nodes
        .windows(2)
        .map(|edge| distances.get(edge[0], edge[1]))
        .sum()
}

/// Rounds a value to the given number of decimal places.
///
/// A reporting-boundary helper only. Lengths are accumulated and compared
/// unrounded everywhere in the algorithms; rounding intermediate values
/// would compound error across merges.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
