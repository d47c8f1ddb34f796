//! Error taxonomy for instance construction and internal invariant checking.

use thiserror::Error;

/// Errors surfaced by the solver's public entry points.
///
/// `InfeasibleInstance` (constructor exhausts the fleet with customers
/// remaining) is deliberately *not* a variant here: it is a non-fatal
/// diagnostic carried alongside a partial [`Solution`](crate::models::Solution)
/// rather than an error, since the GA is expected to keep working on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// A precondition of instance construction was violated.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A solution's customer multiset diverged from the instance's customer
    /// set at an operator boundary. This indicates a programming bug in the
    /// named operator, not a data problem.
    #[error("internal invariant violated in {operator}: {detail}")]
    InternalInvariantViolation {
        /// Name of the operator that produced the inconsistent solution
        /// (e.g. "relocate", "exchange", "brx", "local-search").
        operator: &'static str,
        /// Human-readable description of the mismatch.
        detail: String,
    },
}

/// Convenience alias for results returned by this crate's public API.
pub type Result<T> = std::result::Result<T, RoutingError>;
