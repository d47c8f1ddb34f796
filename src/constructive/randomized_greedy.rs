//! Randomised-greedy constructor: a cheap stochastic diversifier used to
//! seed part of the initial population (§4.2b), not a competitor to
//! [`solomon_insertion`](super::solomon_insertion)'s solution quality.

use rand::Rng;

use crate::evaluation::RouteEvaluator;
use crate::models::Instance;
use crate::models::Solution;

/// Builds a solution by shuffling customers and packing them onto routes
/// with a distance-weighted random choice of "next" customer.
///
/// Only capacity is enforced while building; time windows are ignored, so
/// the returned solution may carry time-window penalty (it is evaluated
/// through the ordinary fitness path like any other individual). Every
/// customer is placed — the constructor opens vehicles until the instance's
/// fleet is exhausted, at which point it stops and leaves the remainder
/// unrouted (mirrors the fleet-exhaustion behavior of [`solomon_insertion`](super::solomon_insertion)).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use vrptw_solver::models::{Customer, Instance};
/// use vrptw_solver::constructive::randomized_greedy;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 1.0, 0.0, 10, 0.0),
///     Customer::new(2, 2.0, 0.0, 10, 0.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 2, 30).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let solution = randomized_greedy(&instance, &mut rng);
/// assert_eq!(solution.num_served(), 2);
/// ```
pub fn randomized_greedy<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let evaluator = RouteEvaluator::new(instance);
    let distances = instance.distances();
    let capacity = instance.capacity();

    let mut unrouted = instance.customer_ids();
    fisher_yates_shuffle(&mut unrouted, rng);

    let mut route_lists: Vec<Vec<usize>> = Vec::new();

    while !unrouted.is_empty() && route_lists.len() < instance.num_vehicles() {
        let mut route = Vec::new();
        let mut load: i32 = 0;

        loop {
            let candidates: Vec<usize> = unrouted
                .iter()
                .copied()
                .filter(|&c| load + instance.locations()[c].demand() <= capacity)
                .collect();
            if candidates.is_empty() {
                break;
            }

            let last = route.last().copied().unwrap_or(0);
            let weights: Vec<f64> = candidates
                .iter()
                .map(|&c| 1.0 / (distances.get(last, c) + 0.1))
                .collect();
            let chosen = weighted_choice(rng, &candidates, &weights);

            route.push(chosen);
            load += instance.locations()[chosen].demand();
            unrouted.retain(|&c| c != chosen);
        }

        if route.is_empty() {
            // No remaining customer fits in a fresh vehicle; further vehicles
            // cannot help either.
            break;
        }
        route_lists.push(route);
    }

    let mut solution = evaluator.evaluate(&route_lists);
    for &cid in &unrouted {
        solution.add_unassigned(cid);
    }
    solution
}

/// Picks one of `items` with probability proportional to its weight.
fn weighted_choice<R: Rng>(rng: &mut R, items: &[usize], weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let mut draw = rng.random::<f64>() * total;
    for (&item, &w) in items.iter().zip(weights.iter()) {
        if draw < w {
            return item;
        }
        draw -= w;
    }
    // Floating-point rounding may leave a sliver of probability mass
    // unaccounted for; fall back to the last candidate.
    *items.last().expect("candidates is non-empty")
}

fn fisher_yates_shuffle<R: Rng>(items: &mut [usize], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        items.swap(i, j);
    }
}
