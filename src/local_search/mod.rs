//! Mutation and local-search operators over VRPTW solutions (§4.4 step 3-4).
//!
//! - [`relocate_mutate()`] — move one customer to another route
//! - [`exchange_mutate()`] — swap one customer between two routes
//! - [`two_opt_route()`] / [`two_opt_solution()`] — intra-route edge reversal

mod exchange;
mod relocate;
mod two_opt;

pub use exchange::exchange_mutate;
pub use relocate::relocate_mutate;
pub use two_opt::{two_opt_route, two_opt_solution};
