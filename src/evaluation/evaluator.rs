//! Forward time-simulation evaluator: builds routes from customer-id
//! sequences, computing timing, load, and feasibility violations.

use crate::models::{Instance, Route, Solution, Violation, ViolationType, Visit};

use super::fitness;

/// Evaluates customer-id sequences against an [`Instance`], producing
/// [`Route`]s with cached timing/load and a structured violation list
/// (§4.1 of the feasibility kernel).
///
/// # Examples
///
/// ```
/// use vrptw_solver::models::{Customer, Instance};
/// use vrptw_solver::evaluation::RouteEvaluator;
///
/// let depot = Customer::depot(0.0, 0.0);
/// let customers = vec![
///     Customer::new(1, 3.0, 4.0, 10, 5.0),
///     Customer::new(2, 6.0, 8.0, 20, 5.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 2, 100).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
/// let (route, violations) = evaluator.build_route(0, &[1, 2]);
/// assert_eq!(route.len(), 2);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator bound to the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Forward-simulates a single route, returning the built [`Route`] and
    /// any feasibility violations found along the way (§4.1).
    pub fn build_route(&self, vehicle_id: usize, customer_ids: &[usize]) -> (Route, Vec<Violation>) {
        let locations = self.instance.locations();
        let distances = self.instance.distances();
        let capacity = self.instance.capacity();
        let max_route_time = self.instance.max_route_time();

        let mut route = Route::new(vehicle_id);
        let mut violations = Vec::new();
        let mut current_time = 0.0;
        let mut current_load: i32 = 0;
        let mut total_distance = 0.0;
        let mut prev = 0usize; // depot

        for &cid in customer_ids {
            let travel = distances.get(prev, cid);
            total_distance += travel;
            let arrival = current_time + travel;

            let customer = &locations[cid];
            let service_start = if let Some(tw) = customer.time_window() {
                if tw.is_violated(arrival) {
                    violations.push(Violation::new(ViolationType::TimeWindowViolated {
                        customer_id: cid,
                        arrival,
                        due: tw.due(),
                    }));
                }
                arrival + tw.waiting_time(arrival)
            } else {
                arrival
            };

            let departure = service_start + customer.service_duration();
            current_load += customer.demand();

            route.push_visit(Visit {
                customer_id: cid,
                arrival_time: arrival,
                departure_time: departure,
                load_after: current_load,
            });

            current_time = departure;
            prev = cid;
        }

        let return_travel = distances.get(prev, 0);
        total_distance += return_travel;
        let total_duration = current_time + return_travel;

        route.set_total_distance(total_distance);
        route.set_total_duration(total_duration);

        if current_load > capacity {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index: 0,
                load: current_load,
                capacity,
            }));
        }

        if total_duration > max_route_time {
            violations.push(Violation::new(ViolationType::MaxRouteTimeExceeded {
                route_index: 0,
                time: total_duration,
                max_route_time,
            }));
        }

        (route, violations)
    }

    /// Checks whether a candidate route is feasible in isolation, i.e. would
    /// produce no violations. Used by constructors and operators that only
    /// need a yes/no answer (§4.1, §4.5).
    pub fn is_feasible(&self, customer_ids: &[usize]) -> bool {
        self.build_route(0, customer_ids).1.is_empty()
    }

    /// Builds a complete solution from per-vehicle customer-id lists,
    /// computing fitness and feasibility. Empty lists are skipped — they
    /// never become a `Route` (so `num_vehicles` counts only used slots).
    pub fn evaluate(&self, route_customer_lists: &[Vec<usize>]) -> Solution {
        let mut solution = Solution::new();
        let mut all_violations = Vec::new();

        for (vehicle_id, customer_ids) in route_customer_lists.iter().enumerate() {
            if customer_ids.is_empty() {
                continue;
            }
            let (route, mut violations) = self.build_route(vehicle_id, customer_ids);
            for v in &mut violations {
                Self::set_route_index(&mut v.kind, solution.num_routes());
            }
            solution.add_route(route);
            all_violations.append(&mut violations);
        }

        let penalty = fitness::penalty_from_violations(&all_violations);
        solution.set_fitness(fitness::score(&solution, penalty));
        solution.set_feasible(penalty == 0.0);
        solution
    }

    /// Recomputes timing, load, fitness, and feasibility for an existing
    /// solution in place, preserving each route's vehicle id and customer
    /// sequence. Call after any operator mutates a solution's routes.
    pub fn reevaluate(&self, solution: &mut Solution) {
        let rebuilt: Vec<(usize, Vec<usize>)> = solution
            .routes()
            .iter()
            .map(|r| (r.vehicle_id(), r.customer_ids()))
            .collect();

        let mut all_violations = Vec::new();
        let mut new_routes = Vec::with_capacity(rebuilt.len());
        for (idx, (vehicle_id, customer_ids)) in rebuilt.iter().enumerate() {
            let (route, mut violations) = self.build_route(*vehicle_id, customer_ids);
            for v in &mut violations {
                Self::set_route_index(&mut v.kind, idx);
            }
            all_violations.append(&mut violations);
            new_routes.push(route);
        }

        *solution.routes_mut() = new_routes;
        let penalty = fitness::penalty_from_violations(&all_violations);
        solution.set_fitness(fitness::score(solution, penalty));
        solution.set_feasible(penalty == 0.0);
    }

    fn set_route_index(kind: &mut ViolationType, idx: usize) {
        match kind {
            ViolationType::CapacityExceeded { route_index, .. }
            | ViolationType::MaxRouteTimeExceeded { route_index, .. } => *route_index = idx,
            ViolationType::TimeWindowViolated { .. } => {}
        }
    }
}
