//! Open path produced by the nearest-neighbor builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluation::round_to;

/// An open path through every node of an instance.
///
/// Starts at the origin and visits each node exactly once; no return edge
/// to the origin is included. The total length is accumulated by the
/// builder as the path grows.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Path;
///
/// let mut path = Path::new(0);
/// path.push(1, 2.5);
/// path.push(2, 1.5);
/// assert_eq!(path.nodes(), &[0, 1, 2]);
/// assert!((path.total_length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<usize>,
    total_length: f64,
}

impl Path {
    /// Creates a path containing only the origin.
    pub fn new(origin: usize) -> Self {
        Self {
            nodes: vec![origin],
            total_length: 0.0,
        }
    }

    /// Appends a node reached over an edge of the given length.
    pub fn push(&mut self, node: usize, edge_length: f64) {
        self.nodes.push(node);
        self.total_length += edge_length;
    }

    /// The visited nodes in order, origin first.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// The node the path currently ends at.
    pub fn last(&self) -> usize {
        *self.nodes.last().expect("path always contains the origin")
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path holds only the origin.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Returns `true` if the node is already on the path.
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// Sum of the edge lengths accumulated so far.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Total length rounded for reporting.
    ///
    /// Rounding is a presentation policy only; the stored length is never
    /// rounded internally.
    pub fn rounded_length(&self, decimals: u32) -> f64 {
        round_to(self.total_length, decimals)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path {:?} length {}", self.nodes, self.rounded_length(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_starts_at_origin() {
        let p = Path::new(3);
        assert_eq!(p.nodes(), &[3]);
        assert_eq!(p.last(), 3);
        assert!(p.is_empty());
        assert_eq!(p.total_length(), 0.0);
    }

    #[test]
    fn test_path_push() {
        let mut p = Path::new(0);
        p.push(2, 1.25);
        p.push(1, 0.75);
        assert_eq!(p.nodes(), &[0, 2, 1]);
        assert_eq!(p.last(), 1);
        assert_eq!(p.len(), 3);
        assert!(p.contains(2));
        assert!(!p.contains(4));
        assert!((p.total_length() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounded_length() {
        let mut p = Path::new(0);
        p.push(1, 1.005);
        p.push(2, 2.001);
        assert!((p.rounded_length(2) - 3.01).abs() < 1e-10);
        // internal value stays unrounded
        assert!((p.total_length() - 3.006).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        let mut p = Path::new(0);
        p.push(1, 1.5);
        assert_eq!(format!("{p}"), "path [0, 1] length 1.5");
    }
}
