//! Route/solution evaluation: forward time simulation, violation detection,
//! and fitness scoring.

mod evaluator;
mod fitness;

pub use evaluator::RouteEvaluator;
pub use fitness::{penalty_from_violations, score, W_D, W_P, W_V};
