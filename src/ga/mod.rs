//! Hybrid genetic algorithm over VRPTW solutions (§4.4).
//!
//! [`run()`] drives the full evolution loop: tournament selection, Best-Route
//! Crossover, Relocate/Exchange/2-opt mutation, intra-route local search, and
//! diversity-aware elitist survivor selection, with a stagnation-triggered
//! partial restart.

mod config;
mod crossover;
mod diversity;
mod insertion;
mod mutation;
mod population;
mod run;
mod selection;

pub use config::GaConfig;
pub use crossover::brx_crossover;
pub use diversity::sequence_distance;
pub use insertion::insert_remaining;
pub use mutation::{apply_mutation, MutationKind};
pub use population::initial_population;
pub use run::{run, ConvergencePoint};
pub use selection::tournament_select;
