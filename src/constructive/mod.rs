//! Construction heuristics for approximate TSP tours.
//!
//! - [`nearest_neighbor`] — Greedy open-path construction, O(n²)
//! - [`clarke_wright_savings`] — Clarke-Wright savings route merging (1964), O(n² log n)
//!
//! Both consume the same validated [`TspInstance`](crate::models::TspInstance)
//! and run independently; neither re-optimizes its result.

mod clarke_wright;
mod nearest_neighbor;

pub use clarke_wright::clarke_wright_savings;
pub use nearest_neighbor::nearest_neighbor;
