//! TSP instance: a validated distance matrix plus a designated origin.

use anyhow::{anyhow, Result};

use crate::distance::DistanceMatrix;

/// Tolerance used when checking symmetry and the zero diagonal.
const VALIDATION_TOL: f64 = 1e-9;

/// A validated TSP instance.
///
/// Owns an immutable symmetric distance matrix over nodes `0..n` and the
/// origin (depot) node both heuristics start from. Construction fails fast
/// on malformed input, so a `TspInstance` in hand is always safe to solve:
/// the matrix is square, symmetric, non-negative, has a zero diagonal, and
/// the origin is in range.
///
/// # Examples
///
/// ```
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::models::TspInstance;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = TspInstance::new(dm, 0).unwrap();
/// assert_eq!(instance.num_nodes(), 3);
/// assert_eq!(instance.customers().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    distances: DistanceMatrix,
    origin: usize,
}

impl TspInstance {
    /// Creates an instance, validating the matrix and origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance has no nodes, the origin is out of
    /// range, or the matrix has a negative entry, a non-zero diagonal, or
    /// an asymmetric pair.
    pub fn new(distances: DistanceMatrix, origin: usize) -> Result<Self> {
        let n = distances.size();
        if n == 0 {
            return Err(anyhow!("instance must have at least one node"));
        }
        if origin >= n {
            return Err(anyhow!("origin {} out of range for {} nodes", origin, n));
        }
        if !distances.is_nonnegative() {
            return Err(anyhow!("distance matrix has a negative entry"));
        }
        if !distances.has_zero_diagonal(VALIDATION_TOL) {
            return Err(anyhow!("distance matrix has a non-zero diagonal entry"));
        }
        if !distances.is_symmetric(VALIDATION_TOL) {
            return Err(anyhow!("distance matrix is not symmetric"));
        }
        Ok(Self { distances, origin })
    }

    /// Returns the distance between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Returns the underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Total number of nodes, origin included.
    pub fn num_nodes(&self) -> usize {
        self.distances.size()
    }

    /// The designated origin (depot) node.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Iterates over all non-origin nodes in ascending id order.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes()).filter(move |&i| i != self.origin)
    }

    /// Number of non-origin nodes.
    pub fn num_customers(&self) -> usize {
        self.num_nodes() - 1
    }
}
