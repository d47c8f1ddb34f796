//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of edges `(i, i+1)` and `(j, j+1)` in a route, compute the
//! change in distance from reversing the segment between them. A reversal
//! is accepted only if it is feasible (§4.1: capacity and time windows) and
//! strictly reduces route distance; the scan restarts after every accepted
//! move (first-improvement), capped at 50 outer passes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

const MAX_PASSES: usize = 50;

/// Applies first-improvement 2-opt to every route of length ≥ 4 in a
/// solution, returning the improved solution with refreshed fitness.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use vrptw_solver::models::{Customer, Instance};
/// use vrptw_solver::constructive::randomized_greedy;
/// use vrptw_solver::local_search::two_opt_solution;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 1.0, 1.0, 5, 0.0),
///     Customer::new(2, 2.0, 0.0, 5, 0.0),
///     Customer::new(3, 1.0, -1.0, 5, 0.0),
///     Customer::new(4, 0.0, 0.0, 5, 0.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 1, 100).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let initial = randomized_greedy(&instance, &mut rng);
/// let initial_dist = initial.total_distance();
/// let improved = two_opt_solution(&initial, &instance);
/// assert!(improved.total_distance() <= initial_dist + 1e-9);
/// ```
pub fn two_opt_solution(solution: &Solution, instance: &Instance) -> Solution {
    let evaluator = RouteEvaluator::new(instance);
    let route_lists: Vec<Vec<usize>> = solution
        .routes()
        .iter()
        .map(|r| {
            let ids = r.customer_ids();
            if ids.len() >= 4 {
                two_opt_route(&ids, instance)
            } else {
                ids
            }
        })
        .collect();
    evaluator.evaluate(&route_lists)
}

/// Runs first-improvement 2-opt on a single customer-id sequence.
pub fn two_opt_route(route: &[usize], instance: &Instance) -> Vec<usize> {
    let evaluator = RouteEvaluator::new(instance);
    let distances = instance.distances();
    let mut current = route.to_vec();

    for _ in 0..MAX_PASSES {
        let mut improved = false;
        let n = current.len();

        'scan: for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let delta = two_opt_delta(&current, distances, i, j);
                if delta < -1e-10 {
                    let mut candidate = current.clone();
                    candidate[i..=j].reverse();
                    if evaluator.is_feasible(&candidate) {
                        current = candidate;
                        improved = true;
                        break 'scan;
                    }
                }
            }
        }

        if !improved {
            break;
        }
    }

    current
}

fn two_opt_delta(
    route: &[usize],
    distances: &crate::distance::DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { 0 } else { route[i - 1] };
    let next_j = if j == n - 1 { 0 } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn line_instance() -> Instance {
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 0.0, 10, 0.0),
            Customer::new(2, 2.0, 0.0, 10, 0.0),
            Customer::new(3, 3.0, 0.0, 10, 0.0),
        ];
        Instance::new("demo", depot, customers, 1, 100).expect("valid")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let instance = line_instance();
        let improved = two_opt_route(&[1, 2, 3], &instance);
        assert_eq!(improved, vec![1, 2, 3]);
    }

    #[test]
    fn test_2opt_fixes_crossing() {
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 1.0, 10, 0.0),
            Customer::new(2, 2.0, 0.0, 10, 0.0),
            Customer::new(3, 1.0, -1.0, 10, 0.0),
            Customer::new(4, 0.0, 0.0, 10, 0.0),
        ];
        let instance = Instance::new("demo", depot, customers, 1, 100).expect("valid");
        let evaluator = RouteEvaluator::new(&instance);
        let (bad_route, _) = evaluator.build_route(0, &[1, 3, 2, 4]);
        let bad_dist = bad_route.total_distance();
        let improved = two_opt_route(&[1, 3, 2, 4], &instance);
        let (improved_route, _) = evaluator.build_route(0, &improved);
        assert!(improved_route.total_distance() <= bad_dist + 1e-9);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let depot = Customer::depot(5.0, 5.0);
        let customers = vec![
            Customer::new(1, 0.0, 0.0, 5, 0.0),
            Customer::new(2, 10.0, 0.0, 5, 0.0),
            Customer::new(3, 0.0, 10.0, 5, 0.0),
            Customer::new(4, 10.0, 10.0, 5, 0.0),
        ];
        let instance = Instance::new("demo", depot, customers, 1, 100).expect("valid");
        let evaluator = RouteEvaluator::new(&instance);
        let initial = vec![1, 4, 2, 3];
        let (initial_route, _) = evaluator.build_route(0, &initial);
        let improved = two_opt_route(&initial, &instance);
        let (improved_route, _) = evaluator.build_route(0, &improved);
        assert!(improved_route.total_distance() <= initial_route.total_distance() + 1e-9);
    }

    #[test]
    fn test_2opt_short_route_untouched() {
        let instance = line_instance();
        let improved = two_opt_route(&[2], &instance);
        assert_eq!(improved, vec![2]);
    }

    #[test]
    fn test_2opt_solution_preserves_customer_count() {
        let instance = line_instance();
        let evaluator = RouteEvaluator::new(&instance);
        let solution = evaluator.evaluate(&[vec![3, 1, 2]]);
        let improved = two_opt_solution(&solution, &instance);
        assert_eq!(improved.num_served(), 3);
    }
}
