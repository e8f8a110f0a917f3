//! Savings heuristic result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluation::round_to;
use crate::models::Route;

/// The outcome of a Clarke-Wright savings run.
///
/// Usually a single closed tour, but when the savings list is exhausted
/// before all routes combine, the result is several disjoint routes; that
/// is a valid terminal state, not a failure, and callers must handle it.
/// The diagnostic counters record how many savings led to a merge and how
/// many were discarded with no eligible route pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsSolution {
    routes: Vec<Route>,
    total_length: f64,
    merges: usize,
    skipped_savings: usize,
}

impl SavingsSolution {
    /// Assembles a solution from the terminal route collection.
    pub fn new(routes: Vec<Route>, total_length: f64, merges: usize, skipped_savings: usize) -> Self {
        Self {
            routes,
            total_length,
            merges,
            skipped_savings,
        }
    }

    /// The terminal routes, sorted by head customer id.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of disjoint routes in the result.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the heuristic merged everything into one tour.
    pub fn is_single_tour(&self) -> bool {
        self.routes.len() <= 1
    }

    /// Total distance summed across all routes.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Total length rounded for reporting; never applied internally.
    pub fn rounded_length(&self, decimals: u32) -> f64 {
        round_to(self.total_length, decimals)
    }

    /// Number of successful merges performed.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Number of savings discarded with no eligible route pair.
    pub fn skipped_savings(&self) -> usize {
        self.skipped_savings
    }
}

impl fmt::Display for SavingsSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_tour() {
            if let Some(route) = self.routes.first() {
                return write!(
                    f,
                    "tour {:?} length {}",
                    route.nodes(),
                    self.rounded_length(2)
                );
            }
        }
        write!(
            f,
            "{} disjoint routes, total length {}",
            self.routes.len(),
            self.rounded_length(2)
        )
    }
}
