//! Clarke-Wright savings heuristic.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own trivial route (origin → customer → origin). Linking customer
//! `j` directly after customer `i` instead of returning to the origin
//! between them saves
//!
//! ```text
//! s(i, j) = d(i, 0) + d(0, j) - d(i, j)
//! ```
//!
//! Savings are computed once for every ordered pair of distinct customers,
//! ranked, and consumed from the highest down. A saving `(i, j)` merges
//! the route ending at `i` with the route starting at `j` when those are
//! two distinct routes; otherwise it is discarded. Savings are never
//! recomputed after a merge — recomputing would change which merges occur,
//! so the classic one-shot ranking is specified behavior here, not an
//! optimization target.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting
//! savings; eligibility lookups are O(1) through the route set's endpoint
//! indexes).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::models::{RouteSet, SavingsSolution, TspInstance};

/// A savings value for linking customer `j` directly after customer `i`.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Builds a tour (or a set of disjoint routes) with the Clarke-Wright
/// savings heuristic.
///
/// Starts with one trivial route per customer and merges routes in order
/// of decreasing savings. The loop stops when a single route remains or
/// the savings are exhausted; in the latter case the result holds several
/// disjoint routes, which is a valid outcome callers must accept.
///
/// Savings with no eligible route pair are skipped, counted, and reported
/// through [`SavingsSolution::skipped_savings`]; each skip also emits a
/// `tracing` debug event.
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
/// use tsp_construct::constructive::clarke_wright_savings;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = TspInstance::new(dm, 0).unwrap();
///
/// let solution = clarke_wright_savings(&instance);
/// assert!(solution.is_single_tour());
/// ```
pub fn clarke_wright_savings(instance: &TspInstance) -> SavingsSolution {
    let origin = instance.origin();
    let customers: Vec<usize> = instance.customers().collect();

    let mut routes = RouteSet::singletons(instance);

    // Savings for every ordered pair of distinct customers, computed once.
    let mut savings = Vec::with_capacity(customers.len() * customers.len().saturating_sub(1));
    for &i in &customers {
        for &j in &customers {
            if i == j {
                continue;
            }
            let value =
                instance.distance(i, origin) + instance.distance(origin, j) - instance.distance(i, j);
            savings.push(Saving { i, j, value });
        }
    }

    // Ascending sort so the highest saving pops off the end first; the
    // stable sort leaves equal values in generation order.
    savings.sort_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .expect("savings should not be NaN")
    });

    let mut merges = 0usize;
    let mut skipped = 0usize;

    while routes.len() > 1 {
        let Some(saving) = savings.pop() else {
            // Savings exhausted with disjoint routes left: residual
            // fragmentation, a valid terminal state.
            break;
        };
        if routes.try_merge(saving.i, saving.j) {
            merges += 1;
            tracing::trace!(i = saving.i, j = saving.j, value = saving.value, "merged routes");
        } else {
            skipped += 1;
            tracing::debug!(
                i = saving.i,
                j = saving.j,
                value = saving.value,
                "no eligible merge for saving"
            );
        }
    }

    let total_length = routes.total_length(instance.distances());
    SavingsSolution::new(routes.sorted_routes(), total_length, merges, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::tour_length;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn instance_from_points(points: &[(f64, f64)], origin: usize) -> TspInstance {
        TspInstance::new(DistanceMatrix::from_points(points), origin).expect("valid")
    }

    #[test]
    fn test_cw_line_merges_to_one_tour() {
        let instance =
            instance_from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], 0);
        let sol = clarke_wright_savings(&instance);
        assert!(sol.is_single_tour());
        // Highest saving links the far pair first, then extends inward
        assert_eq!(sol.routes()[0].nodes(), &[0, 3, 2, 1, 0]);
        assert!((sol.total_length() - 6.0).abs() < 1e-10);
        assert_eq!(sol.merges(), 2);
        assert_eq!(sol.skipped_savings(), 2);
    }

    #[test]
    fn test_cw_top_saving_links_close_pair() {
        // Customers 1 and 2 sit far out and next to each other, so their
        // saving dominates and their routes merge before anything else
        let instance =
            instance_from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 1.0), (0.0, 1.0)], 0);
        let sol = clarke_wright_savings(&instance);
        assert!(sol.is_single_tour());
        let nodes = sol.routes()[0].nodes();
        // 1 and 2 end up adjacent on the tour
        let pos1 = nodes.iter().position(|&n| n == 1).expect("on tour");
        let pos2 = nodes.iter().position(|&n| n == 2).expect("on tour");
        assert_eq!(pos1.abs_diff(pos2), 1);
        assert!((sol.total_length() - 22.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_single_customer() {
        let instance = instance_from_points(&[(0.0, 0.0), (3.0, 4.0)], 0);
        let sol = clarke_wright_savings(&instance);
        // No savings pairs exist; the trivial route survives untouched
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].nodes(), &[0, 1, 0]);
        assert!((sol.total_length() - 10.0).abs() < 1e-10);
        assert_eq!(sol.merges(), 0);
        assert_eq!(sol.skipped_savings(), 0);
    }

    #[test]
    fn test_cw_origin_only() {
        let instance = TspInstance::new(DistanceMatrix::new(1), 0).expect("valid");
        let sol = clarke_wright_savings(&instance);
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.total_length(), 0.0);
    }

    #[test]
    fn test_cw_nonzero_origin() {
        let instance =
            instance_from_points(&[(1.0, 0.0), (0.0, 0.0), (2.0, 0.0)], 1);
        let sol = clarke_wright_savings(&instance);
        for route in sol.routes() {
            let nodes = route.nodes();
            assert_eq!(*nodes.first().expect("non-empty"), 1);
            assert_eq!(*nodes.last().expect("non-empty"), 1);
        }
    }

    #[test]
    fn test_cw_total_matches_per_route_lengths() {
        let instance = instance_from_points(
            &[(0.0, 0.0), (4.0, 1.0), (2.0, 5.0), (7.0, 3.0), (1.0, 2.0), (6.0, 6.0)],
            0,
        );
        let sol = clarke_wright_savings(&instance);
        let summed: f64 = sol
            .routes()
            .iter()
            .map(|r| tour_length(r.nodes(), instance.distances()))
            .sum();
        assert!((sol.total_length() - summed).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_cw_routes_partition_customers(
            points in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..12)
        ) {
            let instance = instance_from_points(&points, 0);
            let sol = clarke_wright_savings(&instance);

            // every customer appears exactly once across all routes
            let mut seen = HashSet::new();
            for route in sol.routes() {
                prop_assert_eq!(*route.nodes().first().unwrap(), 0);
                prop_assert_eq!(*route.nodes().last().unwrap(), 0);
                for &c in route.customers() {
                    prop_assert!(seen.insert(c));
                }
            }
            let customers: HashSet<usize> = instance.customers().collect();
            prop_assert_eq!(seen, customers);

            // edge count identity over the terminal collection
            let edges: usize = sol.routes().iter().map(|r| r.num_edges()).sum();
            prop_assert_eq!(edges, instance.num_customers() + sol.num_routes());

            // report total equals the recomputed per-route sum
            let summed: f64 = sol
                .routes()
                .iter()
                .map(|r| tour_length(r.nodes(), instance.distances()))
                .sum();
            prop_assert!((sol.total_length() - summed).abs() < 1e-6);
        }
    }
}
