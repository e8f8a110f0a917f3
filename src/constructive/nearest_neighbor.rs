//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single open path greedily: starting from the origin, always
//! visit the nearest unvisited node. The path is not closed back to the
//! origin.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal, but it provides a fast baseline.

use crate::models::{Path, TspInstance};

/// Builds an open path over every node using the nearest-neighbor rule.
///
/// Starting from the instance origin, repeatedly appends the unvisited
/// node with the strictly smallest distance from the current node.
/// Candidates are scanned in ascending id order under a strict `<`
/// comparison, so the first minimal candidate wins ties. Each choice is
/// irrevocable; there is no backtracking and no return edge.
///
/// # Arguments
///
/// * `instance` — Validated instance (symmetric matrix plus origin)
///
/// # Examples
///
/// ```
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::models::TspInstance;
/// use tsp_construct::constructive::nearest_neighbor;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = TspInstance::new(dm, 0).unwrap();
///
/// let path = nearest_neighbor(&instance);
/// assert_eq!(path.nodes(), &[0, 1, 2]);
/// assert!((path.total_length() - 2.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(instance: &TspInstance) -> Path {
    let n = instance.num_nodes();
    let mut visited = vec![false; n];
    visited[instance.origin()] = true;

    let mut path = Path::new(instance.origin());
    let mut current = instance.origin();

    while path.len() < n {
        // Find the nearest unvisited node; strict `<` keeps the first
        // minimal candidate in ascending id order.
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let d = instance.distance(current, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        let (next, d) = best.expect("an unvisited node remains while path is short");
        visited[next] = true;
        path.push(next, d);
        current = next;
    }

    path
}
