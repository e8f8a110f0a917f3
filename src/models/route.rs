//! Closed routes used by the savings heuristic.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;

/// A closed walk from the origin through one or more customers and back.
///
/// Stored as the full node sequence `[origin, a, .., b, origin]`. The
/// **head** is the first customer after the origin, the **tail** the last
/// customer before the return leg; for a trivial single-customer route the
/// two coincide.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Route;
///
/// let route = Route::singleton(0, 3);
/// assert_eq!(route.nodes(), &[0, 3, 0]);
/// assert_eq!(route.head(), 3);
/// assert_eq!(route.tail(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Creates the trivial out-and-back route for a single customer.
    pub fn singleton(origin: usize, customer: usize) -> Self {
        Self {
            nodes: vec![origin, customer, origin],
        }
    }

    /// The full node sequence, origin at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First customer after the origin.
    pub fn head(&self) -> usize {
        self.nodes[1]
    }

    /// Last customer before the return to the origin.
    pub fn tail(&self) -> usize {
        self.nodes[self.nodes.len() - 2]
    }

    /// Customers on this route, in visit order.
    pub fn customers(&self) -> &[usize] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Number of customers on this route.
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Number of edges in the closed walk.
    pub fn num_edges(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Joins this route onto another: this route minus its trailing origin,
    /// followed by the other route minus its leading origin.
    ///
    /// The joint edge runs from `self.tail()` to `other.head()`.
    pub fn join(&self, other: &Route) -> Route {
        let mut nodes = Vec::with_capacity(self.nodes.len() + other.nodes.len() - 2);
        nodes.extend_from_slice(&self.nodes[..self.nodes.len() - 1]);
        nodes.extend_from_slice(&other.nodes[1..]);
        Route { nodes }
    }

    /// Total distance of the closed walk.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        tour_length(&self.nodes, distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(nodes: &[usize]) -> Route {
        Route {
            nodes: nodes.to_vec(),
        }
    }

    #[test]
    fn test_singleton() {
        let r = Route::singleton(0, 5);
        assert_eq!(r.nodes(), &[0, 5, 0]);
        assert_eq!(r.head(), 5);
        assert_eq!(r.tail(), 5);
        assert_eq!(r.customers(), &[5]);
        assert_eq!(r.num_customers(), 1);
        assert_eq!(r.num_edges(), 2);
    }

    #[test]
    fn test_head_tail_multi() {
        let r = route(&[0, 2, 4, 1, 0]);
        assert_eq!(r.head(), 2);
        assert_eq!(r.tail(), 1);
        assert_eq!(r.customers(), &[2, 4, 1]);
        assert_eq!(r.num_edges(), 4);
    }

    #[test]
    fn test_join_drops_inner_origins() {
        let t1 = route(&[0, 1, 2, 0]);
        let t2 = route(&[0, 3, 4, 0]);
        let merged = t1.join(&t2);
        assert_eq!(merged.nodes(), &[0, 1, 2, 3, 4, 0]);
        assert_eq!(merged.head(), 1);
        assert_eq!(merged.tail(), 4);
    }

    #[test]
    fn test_join_singletons() {
        let merged = Route::singleton(0, 1).join(&Route::singleton(0, 2));
        assert_eq!(merged.nodes(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_length() {
        let dm =
            DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let r = route(&[0, 1, 2, 0]);
        // 0→1 + 1→2 + 2→0 = 1 + 1 + 2
        assert!((r.length(&dm) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_join_length_identity() {
        let dm = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 0.5),
            (3.0, 2.0),
        ]);
        let t1 = route(&[0, 1, 0]);
        let t2 = route(&[0, 2, 3, 0]);
        let merged = t1.join(&t2);
        let expected = t1.length(&dm) + t2.length(&dm) - dm.get(1, 0) - dm.get(0, 2)
            + dm.get(1, 2);
        assert!((merged.length(&dm) - expected).abs() < 1e-10);
    }
}
