//! Route collection maintained by the savings merge loop.

use std::collections::HashMap;

use crate::distance::DistanceMatrix;
use crate::models::{Route, TspInstance};

/// The working collection of routes during the savings heuristic.
///
/// Routes are keyed by their `(head, tail)` customer pair. Each customer is
/// head of at most one route and tail of at most one route at any time;
/// auxiliary head and tail indexes keep the merge-eligibility lookup O(1)
/// without changing which merges occur. A merge consumes exactly two keys
/// and produces one, so the keys always partition the customer set.
///
/// # Examples
///
/// ```
/// use tsp_construct::distance::DistanceMatrix;
/// use tsp_construct::models::{RouteSet, TspInstance};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = TspInstance::new(dm, 0).unwrap();
/// let mut set = RouteSet::singletons(&instance);
/// assert_eq!(set.len(), 2);
/// assert!(set.try_merge(1, 2));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSet {
    routes: HashMap<(usize, usize), Route>,
    by_head: HashMap<usize, (usize, usize)>,
    by_tail: HashMap<usize, (usize, usize)>,
}

impl RouteSet {
    /// Builds the initial collection: one trivial out-and-back route per
    /// customer, keyed `(c, c)`.
    pub fn singletons(instance: &TspInstance) -> Self {
        let origin = instance.origin();
        let mut routes = HashMap::new();
        let mut by_head = HashMap::new();
        let mut by_tail = HashMap::new();
        for c in instance.customers() {
            routes.insert((c, c), Route::singleton(origin, c));
            by_head.insert(c, (c, c));
            by_tail.insert(c, (c, c));
        }
        Self {
            routes,
            by_head,
            by_tail,
        }
    }

    /// Number of routes currently in the collection.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the collection holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the route stored under the given `(head, tail)` key.
    pub fn get(&self, head: usize, tail: usize) -> Option<&Route> {
        self.routes.get(&(head, tail))
    }

    /// Iterates over the current routes in unspecified order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Iterates over the current `(head, tail)` keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.routes.keys().copied()
    }

    /// Returns the routes sorted by key, for deterministic reporting.
    pub fn sorted_routes(&self) -> Vec<Route> {
        let mut keys: Vec<_> = self.routes.keys().copied().collect();
        keys.sort_unstable();
        keys.iter().map(|k| self.routes[k].clone()).collect()
    }

    /// Attempts the merge for saving pair `(i, j)`.
    ///
    /// Eligible when some route ends at `i` and a different route starts at
    /// `j`; the two are then replaced by their join under the key
    /// `(t1.head, t2.tail)` in a single remove-two-insert-one step.
    /// Returns `false` (leaving the collection untouched) when no eligible
    /// pair exists.
    pub fn try_merge(&mut self, i: usize, j: usize) -> bool {
        let (k1, k2) = match (self.by_tail.get(&i), self.by_head.get(&j)) {
            (Some(&k1), Some(&k2)) if k1 != k2 => (k1, k2),
            _ => return false,
        };

        let t1 = self.routes.remove(&k1).expect("tail index points at a live route");
        let t2 = self.routes.remove(&k2).expect("head index points at a live route");
        let merged = t1.join(&t2);
        let key = (t1.head(), t2.tail());

        self.by_head.remove(&t2.head());
        self.by_tail.remove(&t1.tail());
        self.by_head.insert(merged.head(), key);
        self.by_tail.insert(merged.tail(), key);
        self.routes.insert(key, merged);
        true
    }

    /// Total distance across all routes in the collection.
    pub fn total_length(&self, distances: &DistanceMatrix) -> f64 {
        self.routes.values().map(|r| r.length(distances)).sum()
    }
}
