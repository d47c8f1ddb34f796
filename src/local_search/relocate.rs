//! Relocate mutation: move a single customer from one route to another.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use rand::Rng;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Moves a uniformly-chosen customer from a randomly-picked non-empty route
/// to its best-cost (minimal distance delta) feasible position in another
/// randomly-picked route (§4.4 step 3). The destination may be an unused
/// vehicle slot if the instance's fleet has room for one. A move that would
/// exceed capacity at the destination is a no-op — the input solution is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use vrptw_solver::models::{Customer, Instance};
/// use vrptw_solver::evaluation::RouteEvaluator;
/// use vrptw_solver::local_search::relocate_mutate;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 1.0, 0.0, 10, 0.0),
///     Customer::new(2, 5.0, 0.0, 10, 0.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 2, 20).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
/// let solution = evaluator.evaluate(&[vec![1, 2]]);
/// let mut rng = ChaCha8Rng::seed_from_u64(5);
/// let mutated = relocate_mutate(&solution, &instance, &mut rng);
/// assert_eq!(mutated.num_served(), 2);
/// ```
pub fn relocate_mutate<R: Rng>(solution: &Solution, instance: &Instance, rng: &mut R) -> Solution {
    let mut routes: Vec<Vec<usize>> = solution.routes().iter().map(|r| r.customer_ids()).collect();
    if routes.len() < instance.num_vehicles() {
        routes.push(Vec::new());
    }

    let non_empty: Vec<usize> = routes
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_empty())
        .map(|(i, _)| i)
        .collect();
    if non_empty.is_empty() || routes.len() < 2 {
        return solution.clone();
    }

    let from = non_empty[rng.random_range(0..non_empty.len() as u64) as usize];
    let dest_candidates: Vec<usize> = (0..routes.len()).filter(|&i| i != from).collect();
    if dest_candidates.is_empty() {
        return solution.clone();
    }
    let to = dest_candidates[rng.random_range(0..dest_candidates.len() as u64) as usize];

    let remove_idx = rng.random_range(0..routes[from].len() as u64) as usize;
    let customer = routes[from][remove_idx];
    let demand = instance.locations()[customer].demand();

    let dest_load: i32 = routes[to]
        .iter()
        .map(|&c| instance.locations()[c].demand())
        .sum();
    if dest_load + demand > instance.capacity() {
        return solution.clone();
    }

    let distances = instance.distances();
    let mut best_pos = 0;
    let mut best_delta = f64::INFINITY;
    for pos in 0..=routes[to].len() {
        let prev = if pos == 0 { 0 } else { routes[to][pos - 1] };
        let next = if pos == routes[to].len() { 0 } else { routes[to][pos] };
        let delta =
            distances.get(prev, customer) + distances.get(customer, next) - distances.get(prev, next);
        if delta < best_delta {
            best_delta = delta;
            best_pos = pos;
        }
    }

    routes[from].remove(remove_idx);
    routes[to].insert(best_pos, customer);
    routes.retain(|r| !r.is_empty());

    RouteEvaluator::new(instance).evaluate(&routes)
}
