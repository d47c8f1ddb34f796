//! Constructive heuristics for building initial VRPTW solutions.
//!
//! - [`solomon_insertion`] — Solomon-I1 cheapest-feasible-insertion heuristic,
//!   the quality seed (§4.2).
//! - [`randomized_greedy`] — distance-weighted random packing, a cheap
//!   population diversifier (§4.2b).

mod randomized_greedy;
mod solomon_i1;

pub use randomized_greedy::randomized_greedy;
pub use solomon_i1::solomon_insertion;
