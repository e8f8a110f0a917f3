//! Domain model types for TSP construction.
//!
//! Provides the core abstractions: a validated instance owning the
//! distance matrix and origin, the open path built by nearest neighbor,
//! closed routes and the keyed route collection used by the savings
//! heuristic, and the savings result type.

mod instance;
mod path;
mod route;
mod route_set;
mod solution;

pub use instance::TspInstance;
pub use path::Path;
pub use route::Route;
pub use route_set::RouteSet;
pub use solution::SavingsSolution;
