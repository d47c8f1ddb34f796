//! # vrptw-solver
//!
//! Hybrid Solomon-I1 + genetic algorithm solver for the Vehicle Routing
//! Problem with Time Windows.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, Vehicle, Route, Solution)
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Forward time-simulation feasibility checking and fitness scoring
//! - [`constructive`] — Solomon-I1 insertion and randomised-greedy constructors
//! - [`local_search`] — Relocate, Exchange, and 2-opt operators
//! - [`ga`] — The genetic evolution loop ([`ga::run`])
//! - [`export`] — Stable, `serde`-serialisable solution export shape
//! - [`error`] — The [`error::RoutingError`] taxonomy
//!
//! ## Example
//!
//! ```
//! use vrptw_solver::models::{Customer, Instance};
//! use vrptw_solver::ga::{self, GaConfig};
//!
//! let depot = Customer::depot(0.0, 0.0);
//! let customers = vec![
//!     Customer::new(1, 1.0, 0.0, 10, 0.0),
//!     Customer::new(2, 2.0, 0.0, 10, 0.0),
//! ];
//! let instance = Instance::new("demo", depot, customers, 2, 20).unwrap();
//! let config = GaConfig { population_size: 6, generations: 2, ..GaConfig::default() };
//! config.validate().unwrap();
//! let (best, trace) = ga::run(&instance, &config);
//! assert_eq!(trace.len(), 2);
//! assert_eq!(best.num_served() + best.num_unassigned(), 2);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod ga;
pub mod local_search;
pub mod models;
