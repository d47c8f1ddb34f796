//! Solution and violation types.

use super::Route;

/// A type of constraint violation in a route or solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// Arrival after the customer's time window closes.
    TimeWindowViolated {
        /// Customer ID where violation occurred.
        customer_id: usize,
        /// Actual arrival time.
        arrival: f64,
        /// Time window due date.
        due: f64,
    },
    /// Route time (return to depot) exceeds the vehicle's maximum.
    MaxRouteTimeExceeded {
        /// Route index.
        route_index: usize,
        /// Actual route time.
        time: f64,
        /// Maximum allowed route time.
        max_route_time: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete solution to a VRPTW instance: an ordered list of routes.
///
/// Empty routes are legal — they represent an unused vehicle slot and are
/// excluded from [`num_vehicles`](Solution::num_vehicles) but still present
/// in [`routes`](Solution::routes). Fitness and feasibility are cached
/// (set by [`crate::evaluation`]) rather than recomputed on every access,
/// matching §3's "cached, recomputed after mutation" data-model note.
///
/// # Examples
///
/// ```
/// use vrptw_solver::models::{Solution, Route};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(0));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_vehicles(), 0); // the one route is empty
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
    fitness: f64,
    feasible: bool,
}

impl Solution {
    /// Creates an empty solution (no routes, nothing assigned).
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            unassigned: Vec::new(),
            fitness: 0.0,
            feasible: true,
        }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Marks a customer as unassigned (used by partial constructor output).
    pub fn add_unassigned(&mut self, customer_id: usize) {
        self.unassigned.push(customer_id);
    }

    /// Returns the routes in this solution, including empty ones.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Drops routes with no visits; keeps non-empty ones in order.
    ///
    /// Constructors and operators may accumulate empty routes as a side
    /// effect (e.g. relocate emptying a source route); callers that care
    /// about a canonical route list call this before export.
    pub fn drop_empty_routes(&mut self) {
        self.routes.retain(|r| !r.is_empty());
    }

    /// Returns the total number of route slots (including empty ones).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns the number of *used* vehicles, i.e. routes with at least one visit.
    pub fn num_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Returns the IDs of unassigned customers.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Returns the number of unassigned customers.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Returns the cached fitness (§4.3). Set by the evaluation layer.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the cached fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Returns `true` if the cached penalty is zero (§4.3).
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Sets the cached feasibility flag.
    pub fn set_feasible(&mut self, feasible: bool) {
        self.feasible = feasible;
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Total route time across all routes (§4.3 `total_time`).
    pub fn total_time(&self) -> f64 {
        self.routes.iter().map(|r| r.total_duration()).sum()
    }

    /// Total number of customers served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Flattened customer-id sequence across all non-empty routes, in route
    /// order then visit order. Used by the diversity score (§4.4 step 5).
    pub fn flattened_customer_ids(&self) -> Vec<usize> {
        self.routes.iter().flat_map(|r| r.customer_ids()).collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visit;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_vehicles(), 0);
        assert_eq!(sol.num_unassigned(), 0);
        assert_eq!(sol.fitness(), 0.0);
        assert!(sol.is_feasible());
        assert_eq!(sol.num_served(), 0);
    }

    #[test]
    fn test_solution_with_routes() {
        let mut sol = Solution::new();

        let mut r1 = Route::new(0);
        r1.push_visit(Visit {
            customer_id: 1,
            arrival_time: 0.0,
            departure_time: 0.0,
            load_after: 10,
        });
        r1.set_total_distance(50.0);

        let mut r2 = Route::new(1);
        r2.push_visit(Visit {
            customer_id: 2,
            arrival_time: 0.0,
            departure_time: 0.0,
            load_after: 5,
        });
        r2.push_visit(Visit {
            customer_id: 3,
            arrival_time: 0.0,
            departure_time: 0.0,
            load_after: 15,
        });
        r2.set_total_distance(80.0);

        sol.add_route(r1);
        sol.add_route(Route::new(2)); // unused vehicle slot
        sol.add_route(r2);
        sol.add_unassigned(4);

        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.num_vehicles(), 2);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.num_unassigned(), 1);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
        assert_eq!(sol.flattened_customer_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_empty_routes() {
        let mut sol = Solution::new();
        sol.add_route(Route::new(0));
        let mut r = Route::new(1);
        r.push_visit(Visit {
            customer_id: 1,
            arrival_time: 0.0,
            departure_time: 0.0,
            load_after: 1,
        });
        sol.add_route(r);
        sol.drop_empty_routes();
        assert_eq!(sol.num_routes(), 1);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            load: 250,
            capacity: 200,
        });
        assert_eq!(
            v.kind,
            ViolationType::CapacityExceeded {
                route_index: 0,
                load: 250,
                capacity: 200,
            }
        );
    }

    #[test]
    fn test_solution_default() {
        let sol = Solution::default();
        assert_eq!(sol.num_routes(), 0);
    }

    #[test]
    fn test_solution_fitness_cache() {
        let mut sol = Solution::new();
        sol.set_fitness(123.5);
        sol.set_feasible(false);
        assert_eq!(sol.fitness(), 123.5);
        assert!(!sol.is_feasible());
    }
}
