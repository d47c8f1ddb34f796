//! Cheapest-feasible-insertion repair, shared by BRX and (conceptually) the
//! constructors (§4.5).

use crate::evaluation::RouteEvaluator;
use crate::models::Instance;

/// Inserts each of `customers`, in the given order, at the minimal
/// delta-distance position across `routes` that is both capacity-feasible
/// and temporally feasible (§4.1). Opens a new route containing just that
/// customer if no existing route can take it.
///
/// Deterministic given the input order: callers that need reproducibility
/// (BRX) must supply a stable order themselves.
pub fn insert_remaining(routes: &mut Vec<Vec<usize>>, customers: &[usize], instance: &Instance) {
    let evaluator = RouteEvaluator::new(instance);
    let distances = instance.distances();
    let locations = instance.locations();

    for &customer in customers {
        let demand = locations[customer].demand();
        let mut best: Option<(usize, usize, f64)> = None; // (route_idx, pos, delta)

        for (route_idx, route) in routes.iter().enumerate() {
            let load: i32 = route.iter().map(|&c| locations[c].demand()).sum();
            if load + demand > instance.capacity() {
                continue;
            }
            for pos in 0..=route.len() {
                let prev = if pos == 0 { 0 } else { route[pos - 1] };
                let next = if pos == route.len() { 0 } else { route[pos] };
                let delta =
                    distances.get(prev, customer) + distances.get(customer, next) - distances.get(prev, next);

                let mut candidate = route.clone();
                candidate.insert(pos, customer);
                if !evaluator.is_feasible(&candidate) {
                    continue;
                }

                if best.map(|(_, _, best_delta)| delta < best_delta).unwrap_or(true) {
                    best = Some((route_idx, pos, delta));
                }
            }
        }

        match best {
            Some((route_idx, pos, _)) => routes[route_idx].insert(pos, customer),
            None => routes.push(vec![customer]),
        }
    }
}
