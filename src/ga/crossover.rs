//! Best-Route Crossover (BRX) (§4.4 step 2).

use rand::Rng;

use super::insertion::insert_remaining;
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Produces one BRX child: copies `r = max(1, floor(non_empty_routes / 3))`
/// whole routes chosen uniformly without replacement from `donor`, then
/// repairs the instance's remaining customers via cheapest feasible
/// insertion in instance customer-id order (§4.5).
fn brx_child(donor: &Solution, instance: &Instance, rng: &mut impl Rng) -> Solution {
    let non_empty: Vec<Vec<usize>> = donor
        .routes()
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.customer_ids())
        .collect();

    if non_empty.is_empty() {
        let mut routes: Vec<Vec<usize>> = Vec::new();
        insert_remaining(&mut routes, &instance.customer_ids(), instance);
        return RouteEvaluator::new(instance).evaluate(&routes);
    }

    let r = (non_empty.len() / 3).max(1).min(non_empty.len());

    let mut order: Vec<usize> = (0..non_empty.len()).collect();
    for i in (1..order.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        order.swap(i, j);
    }
    let chosen = &order[..r];

    let mut routes: Vec<Vec<usize>> = chosen.iter().map(|&i| non_empty[i].clone()).collect();
    let used: std::collections::HashSet<usize> = routes.iter().flatten().copied().collect();

    let remaining: Vec<usize> = instance
        .customer_ids()
        .into_iter()
        .filter(|id| !used.contains(id))
        .collect();

    insert_remaining(&mut routes, &remaining, instance);

    RouteEvaluator::new(instance).evaluate(&routes)
}

/// Produces two children from a parent pair via BRX, symmetric in the
/// donor role.
pub fn brx_crossover(
    parent1: &Solution,
    parent2: &Solution,
    instance: &Instance,
    rng: &mut impl Rng,
) -> (Solution, Solution) {
    let child1 = brx_child(parent1, instance, rng);
    let child2 = brx_child(parent2, instance, rng);
    (child1, child2)
}
