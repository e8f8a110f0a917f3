//! # tsp-construct
//!
//! Approximate TSP tour construction over explicit distance matrices,
//! with two independent heuristics: greedy nearest neighbor and
//! Clarke-Wright savings.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (TspInstance, Path, Route, RouteSet, SavingsSolution)
//! - [`distance`] — Dense symmetric distance matrix
//! - [`constructive`] — Construction heuristics (Nearest Neighbor, Clarke-Wright)
//! - [`evaluation`] — Tour length evaluation and reporting-boundary rounding
//!
//! ## Example
//!
//! ```
//! use tsp_construct::constructive::{clarke_wright_savings, nearest_neighbor};
//! use tsp_construct::distance::DistanceMatrix;
//! use tsp_construct::models::TspInstance;
//!
//! let dm = DistanceMatrix::from_points(&[
//!     (0.0, 0.0),
//!     (2.0, 1.0),
//!     (3.0, 3.0),
//!     (1.0, 4.0),
//! ]);
//! let instance = TspInstance::new(dm, 0)?;
//!
//! let path = nearest_neighbor(&instance);
//! assert_eq!(path.nodes().len(), 4);
//!
//! let solution = clarke_wright_savings(&instance);
//! assert!(solution.is_single_tour());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
