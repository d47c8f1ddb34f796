//! Fitness scoring: weighted sum of distance, fleet size, and soft penalty.

use crate::models::{Solution, Violation, ViolationType};

/// Weight on total distance.
pub const W_D: f64 = 1.0;
/// Weight on vehicle count.
pub const W_V: f64 = 1000.0;
/// Weight on accumulated penalty.
pub const W_P: f64 = 100_000.0;

/// Per-unit penalty coefficient for capacity overage and time lateness.
const PENALTY_COEFF: f64 = 1000.0;

/// Sums the penalty contribution of a violation list.
///
/// Capacity overage and time-window lateness both cost `1000` per unit of
/// overage; a route finishing after its maximum route time is treated the
/// same way, since the feasibility kernel checks it with the identical
/// "arrival past a due time" mechanism used for customer windows.
pub fn penalty_from_violations(violations: &[Violation]) -> f64 {
    violations
        .iter()
        .map(|v| match v.kind {
            ViolationType::CapacityExceeded { load, capacity, .. } => {
                PENALTY_COEFF * (load - capacity).max(0) as f64
            }
            ViolationType::TimeWindowViolated { arrival, due, .. } => {
                PENALTY_COEFF * (arrival - due).max(0.0)
            }
            ViolationType::MaxRouteTimeExceeded {
                time,
                max_route_time,
                ..
            } => PENALTY_COEFF * (time - max_route_time).max(0.0),
        })
        .sum()
}

/// Computes `fitness = w_d * total_distance + w_v * num_vehicles + w_p * penalty`.
pub fn score(solution: &Solution, penalty: f64) -> f64 {
    W_D * solution.total_distance() + W_V * solution.num_vehicles() as f64 + W_P * penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_capacity() {
        let v = vec![Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            load: 220,
            capacity: 200,
        })];
        assert_eq!(penalty_from_violations(&v), 20_000.0);
    }

    #[test]
    fn test_penalty_time_window() {
        let v = vec![Violation::new(ViolationType::TimeWindowViolated {
            customer_id: 3,
            arrival: 105.0,
            due: 100.0,
        })];
        assert_eq!(penalty_from_violations(&v), 5_000.0);
    }

    #[test]
    fn test_penalty_none() {
        assert_eq!(penalty_from_violations(&[]), 0.0);
    }

    #[test]
    fn test_score_feasible_solution() {
        use crate::models::{Route, Visit};
        let mut sol = Solution::new();
        let mut r = Route::new(0);
        r.push_visit(Visit {
            customer_id: 1,
            arrival_time: 5.0,
            departure_time: 10.0,
            load_after: 10,
        });
        r.set_total_distance(42.0);
        sol.add_route(r);
        assert_eq!(score(&sol, 0.0), 1.0 * 42.0 + 1000.0);
    }
}
