//! Stable, `serde`-serialisable export shape for a [`Solution`] (§6.3).
//!
//! This crate owns the shape only; writing it to disk or a network socket
//! is an external collaborator's job (§6).

use serde::Serialize;

use crate::models::Solution;

/// One route in an exported solution.
#[derive(Debug, Clone, Serialize)]
pub struct RouteExport {
    /// Vehicle id that served this route.
    pub vehicle_id: usize,
    /// Customer ids visited, in order.
    pub customers: Vec<usize>,
    /// Total load carried.
    pub load: i32,
    /// Total distance traveled.
    pub distance: f64,
    /// Total elapsed time (travel + waiting + service, depot-to-depot).
    pub time: f64,
}

/// A complete solution in its stable external shape.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionExport {
    /// Name of the method that produced this solution (e.g. `"solomon_i1"`,
    /// `"ga"`).
    pub method: String,
    /// Cached fitness (§4.3).
    pub fitness: f64,
    /// Sum of route distances.
    pub total_distance: f64,
    /// Sum of route times.
    pub total_time: f64,
    /// Number of non-empty routes.
    pub num_vehicles: usize,
    /// `true` iff the cached penalty is zero.
    pub feasible: bool,
    /// Non-empty routes only.
    pub routes: Vec<RouteExport>,
}

impl SolutionExport {
    /// Builds an export view of `solution`, tagging it with the method name
    /// that produced it. Empty routes are omitted.
    pub fn from_solution(solution: &Solution, method: impl Into<String>) -> Self {
        let routes = solution
            .routes()
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| RouteExport {
                vehicle_id: r.vehicle_id(),
                customers: r.customer_ids(),
                load: r.total_load(),
                distance: r.total_distance(),
                time: r.total_duration(),
            })
            .collect();

        Self {
            method: method.into(),
            fitness: solution.fitness(),
            total_distance: solution.total_distance(),
            total_time: solution.total_time(),
            num_vehicles: solution.num_vehicles(),
            feasible: solution.is_feasible(),
            routes,
        }
    }

    /// Serializes this export to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
