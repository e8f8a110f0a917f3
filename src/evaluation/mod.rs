//! Length evaluation shared by both heuristics.

mod evaluator;

pub use evaluator::{round_to, tour_length};
