//! Distance matrices.
//!
//! Provides a dense symmetric distance matrix for TSP instances.

mod matrix;

pub use matrix::DistanceMatrix;
