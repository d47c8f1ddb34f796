//! Solomon's I1 insertion heuristic for VRPTW.
//!
//! # Algorithm
//!
//! A sequential insertion heuristic. For every empty vehicle slot while
//! unrouted customers remain: seed the route with the farthest unrouted
//! customer from the depot, then repeatedly insert the unrouted customer
//! and position minimising
//!
//! `C(i,u,j) = α·c1(i,u,j) + λ·c2(u)`
//!
//! where `c1 = d(i,u) + d(u,j) - μ·d(i,j)` is the geometric detour cost of
//! inserting `u` between `i` and `j`, and `c2 = u.ready_time - arrival_at_u`
//! is the temporal slack (positive means the vehicle would arrive early and
//! wait). Only capacity- and time-window-feasible insertions are considered.
//!
//! # Reference
//!
//! Solomon, M.M. (1987). "Algorithms for the Vehicle Routing and Scheduling
//! Problems with Time Window Constraints", *Operations Research* 35(2), 254-265.

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Constructs a VRPTW solution using Solomon's I1 insertion heuristic.
///
/// Opens vehicle slots one at a time, seeding each with the unrouted
/// customer farthest from the depot (ties broken by smaller id), then
/// greedily inserting the cheapest feasible (customer, position) pair until
/// none remains. If the instance's fleet is exhausted with customers still
/// unrouted, the returned solution is partial and the second element of the
/// tuple reports how many customers were left out (§6.2).
///
/// # Examples
///
/// ```
/// use vrptw_solver::models::{Customer, Instance, TimeWindow};
/// use vrptw_solver::constructive::solomon_insertion;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 1.0, 0.0, 10, 2.0)
///         .with_time_window(TimeWindow::new(0.0, 20.0).unwrap()),
///     Customer::new(2, 2.0, 0.0, 10, 2.0)
///         .with_time_window(TimeWindow::new(0.0, 20.0).unwrap()),
/// ];
/// let instance = Instance::new("demo", depot, customers, 2, 30).unwrap();
///
/// let (solution, unrouted) = solomon_insertion(&instance, 1.0, 1.0, 1.0);
/// assert_eq!(solution.num_served(), 2);
/// assert_eq!(unrouted, 0);
/// ```
pub fn solomon_insertion(instance: &Instance, alpha: f64, mu: f64, lambda: f64) -> (Solution, usize) {
    let n = instance.num_customers();
    if n == 0 {
        return (Solution::new(), 0);
    }

    let evaluator = RouteEvaluator::new(instance);
    let distances = instance.distances();

    let mut unrouted: Vec<usize> = instance.customer_ids();
    let mut route_lists: Vec<Vec<usize>> = Vec::new();

    while !unrouted.is_empty() && route_lists.len() < instance.num_vehicles() {
        let seed_idx = farthest_from_depot(&unrouted, distances);
        let seed = unrouted.remove(seed_idx);
        let mut route_customers = vec![seed];

        loop {
            let mut best_insert: Option<(usize, usize, f64)> = None; // (unrouted_idx, position, cost)

            for (ui, &cid) in unrouted.iter().enumerate() {
                let current_load: i32 = route_customers
                    .iter()
                    .map(|&c| instance.locations()[c].demand())
                    .sum();
                if current_load + instance.locations()[cid].demand() > instance.capacity() {
                    continue;
                }

                for pos in 0..=route_customers.len() {
                    let prev = if pos == 0 { 0 } else { route_customers[pos - 1] };
                    let next = if pos == route_customers.len() {
                        0
                    } else {
                        route_customers[pos]
                    };

                    let c1 = distances.get(prev, cid) + distances.get(cid, next)
                        - mu * distances.get(prev, next);

                    let mut test_route = route_customers.clone();
                    test_route.insert(pos, cid);
                    if !evaluator.is_feasible(&test_route) {
                        continue;
                    }

                    let arrival_at_u = arrival_time_at(&test_route, pos, instance);
                    let ready = instance.locations()[cid]
                        .time_window()
                        .map(|tw| tw.ready())
                        .unwrap_or(0.0);
                    let c2 = ready - arrival_at_u;

                    let cost = alpha * c1 + lambda * c2;

                    if best_insert.as_ref().is_none_or(|b| cost < b.2) {
                        best_insert = Some((ui, pos, cost));
                    }
                }
            }

            match best_insert {
                Some((ui, pos, _)) => {
                    let cid = unrouted.remove(ui);
                    route_customers.insert(pos, cid);
                }
                None => break,
            }
        }

        route_lists.push(route_customers);
    }

    let mut solution = evaluator.evaluate(&route_lists);
    for &cid in &unrouted {
        solution.add_unassigned(cid);
    }
    (solution, unrouted.len())
}

/// Returns the arrival time at the customer placed at `pos` in `route`,
/// forward-simulating from the depot. Used only for the `c2` slack term.
fn arrival_time_at(route: &[usize], pos: usize, instance: &Instance) -> f64 {
    let distances = instance.distances();
    let mut time = 0.0;
    let mut prev = 0usize;
    for (i, &cid) in route.iter().enumerate() {
        let arrival = time + distances.get(prev, cid);
        if i == pos {
            return arrival;
        }
        let customer = &instance.locations()[cid];
        let service_start = customer
            .time_window()
            .map(|tw| arrival + tw.waiting_time(arrival))
            .unwrap_or(arrival);
        time = service_start + customer.service_duration();
        prev = cid;
    }
    time
}

/// Finds the index of the farthest unrouted customer from the depot,
/// ties broken by smaller customer id.
fn farthest_from_depot(unrouted: &[usize], distances: &crate::distance::DistanceMatrix) -> usize {
    let mut best_idx = 0;
    let mut best_dist = -1.0;
    let mut best_id = usize::MAX;
    for (i, &cid) in unrouted.iter().enumerate() {
        let d = distances.get(0, cid);
        if d > best_dist || ((d - best_dist).abs() < 1e-12 && cid < best_id) {
            best_dist = d;
            best_idx = i;
            best_id = cid;
        }
    }
    best_idx
}
