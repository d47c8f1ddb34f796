//! Exchange mutation: swap one customer between two routes.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1995). "An Exchange Heuristic for
//! Routeing Problems with Time Windows", *Journal of the Operational
//! Research Society* 46(12), 1433-1446.

use rand::Rng;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Picks two distinct non-empty routes and a random customer from each, and
/// swaps them iff both resulting loads stay within capacity (§4.4 step 3).
/// Temporal feasibility is deliberately not pre-checked here — the penalty
/// term in fitness guides selection away from time-window violations
/// introduced by a swap.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use vrptw_solver::models::{Customer, Instance};
/// use vrptw_solver::evaluation::RouteEvaluator;
/// use vrptw_solver::local_search::exchange_mutate;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 1.0, 1.0, 10, 0.0),
///     Customer::new(2, -1.0, -1.0, 10, 0.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 2, 20).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
/// let solution = evaluator.evaluate(&[vec![1], vec![2]]);
/// let mut rng = ChaCha8Rng::seed_from_u64(5);
/// let mutated = exchange_mutate(&solution, &instance, &mut rng);
/// assert_eq!(mutated.num_served(), 2);
/// ```
pub fn exchange_mutate<R: Rng>(solution: &Solution, instance: &Instance, rng: &mut R) -> Solution {
    let mut routes: Vec<Vec<usize>> = solution.routes().iter().map(|r| r.customer_ids()).collect();

    let non_empty: Vec<usize> = routes
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_empty())
        .map(|(i, _)| i)
        .collect();
    if non_empty.len() < 2 {
        return solution.clone();
    }

    let i1 = rng.random_range(0..non_empty.len() as u64) as usize;
    let mut i2 = rng.random_range(0..non_empty.len() as u64) as usize;
    while i2 == i1 {
        i2 = rng.random_range(0..non_empty.len() as u64) as usize;
    }
    let r1 = non_empty[i1];
    let r2 = non_empty[i2];

    let pos1 = rng.random_range(0..routes[r1].len() as u64) as usize;
    let pos2 = rng.random_range(0..routes[r2].len() as u64) as usize;
    let c1 = routes[r1][pos1];
    let c2 = routes[r2][pos2];

    let locations = instance.locations();
    let load1: i32 = routes[r1].iter().map(|&c| locations[c].demand()).sum();
    let load2: i32 = routes[r2].iter().map(|&c| locations[c].demand()).sum();
    let new_load1 = load1 - locations[c1].demand() + locations[c2].demand();
    let new_load2 = load2 - locations[c2].demand() + locations[c1].demand();

    if new_load1 > instance.capacity() || new_load2 > instance.capacity() {
        return solution.clone();
    }

    routes[r1][pos1] = c2;
    routes[r2][pos2] = c1;

    RouteEvaluator::new(instance).evaluate(&routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn instance() -> Instance {
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 1.0, 10, 0.0),
            Customer::new(2, -1.0, -1.0, 10, 0.0),
            Customer::new(3, 1.0, -1.0, 10, 0.0),
            Customer::new(4, -1.0, 1.0, 10, 0.0),
        ];
        Instance::new("demo", depot, customers, 2, 20).expect("valid")
    }

    #[test]
    fn test_exchange_single_route_is_noop() {
        let instance = instance();
        let evaluator = RouteEvaluator::new(&instance);
        let solution = evaluator.evaluate(&[vec![1, 2, 3, 4]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mutated = exchange_mutate(&solution, &instance, &mut rng);
        assert_eq!(mutated.num_served(), 4);
    }

    #[test]
    fn test_exchange_preserves_customer_count() {
        let instance = instance();
        let evaluator = RouteEvaluator::new(&instance);
        let solution = evaluator.evaluate(&[vec![1, 4], vec![3, 2]]);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mutated = exchange_mutate(&solution, &instance, &mut rng);
            assert_eq!(mutated.num_served(), 4);
        }
    }

    #[test]
    fn test_exchange_respects_capacity() {
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 0.0, 18, 0.0),
            Customer::new(2, -1.0, 0.0, 2, 0.0),
        ];
        let instance = Instance::new("demo", depot, customers, 2, 18).expect("valid");
        let evaluator = RouteEvaluator::new(&instance);
        let solution = evaluator.evaluate(&[vec![1], vec![2]]);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mutated = exchange_mutate(&solution, &instance, &mut rng);
            for route in mutated.routes() {
                assert!(route.total_load() <= 18);
            }
        }
    }
}
