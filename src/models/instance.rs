//! Problem instance: depot, customers, and homogeneous fleet parameters.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;

use super::{Customer, Vehicle};

/// A fully validated VRPTW instance.
///
/// Holds the depot and every customer in a single id-indexed table (index 0
/// is always the depot), the fleet size, and the per-vehicle capacity and
/// maximum route time. Instances are immutable once built — every `Solution`
/// produced by a constructor or GA operator over this instance borrows its
/// customer table and distance matrix rather than copying them.
///
/// # Examples
///
/// ```
/// use vrptw_solver::models::{Customer, Instance};
///
/// let depot = Customer::depot(50.0, 50.0);
/// let customers = vec![
///     Customer::new(1, 55.0, 50.0, 5, 10.0),
///     Customer::new(2, 50.0, 55.0, 5, 10.0),
/// ];
/// let instance = Instance::new("demo", depot, customers, 3, 100).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    locations: Vec<Customer>,
    distances: DistanceMatrix,
    num_vehicles: usize,
    capacity: i32,
    max_route_time: f64,
}

impl Instance {
    /// Builds and validates a new instance.
    ///
    /// `max_route_time` defaults to the depot's `due_time` when the depot
    /// has a time window, or `f64::INFINITY` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidInstance`] if the customer set is
    /// empty, ids are not unique, any customer has `ready_time >= due_time`,
    /// or `capacity <= 0`.
    pub fn new(
        name: impl Into<String>,
        depot: Customer,
        customers: Vec<Customer>,
        num_vehicles: usize,
        capacity: i32,
    ) -> Result<Self, RoutingError> {
        Self::with_max_route_time(name, depot, customers, num_vehicles, capacity, None)
    }

    /// Builds a new instance with an explicit maximum route time.
    pub fn with_max_route_time(
        name: impl Into<String>,
        depot: Customer,
        customers: Vec<Customer>,
        num_vehicles: usize,
        capacity: i32,
        max_route_time: Option<f64>,
    ) -> Result<Self, RoutingError> {
        if customers.is_empty() {
            return Err(RoutingError::InvalidInstance(
                "customer set must not be empty".into(),
            ));
        }
        if capacity <= 0 {
            return Err(RoutingError::InvalidInstance(
                "vehicle capacity must be positive".into(),
            ));
        }

        let mut ids: Vec<usize> = customers.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        if ids.iter().zip(ids.iter().skip(1)).any(|(a, b)| a == b) {
            return Err(RoutingError::InvalidInstance(
                "customer ids must be unique".into(),
            ));
        }
        if ids.first() == Some(&0) {
            return Err(RoutingError::InvalidInstance(
                "customer id 0 is reserved for the depot".into(),
            ));
        }

        for c in &customers {
            if let Some(tw) = c.time_window() {
                if tw.ready() >= tw.due() {
                    return Err(RoutingError::InvalidInstance(format!(
                        "customer {} has ready_time >= due_time",
                        c.id()
                    )));
                }
            }
        }

        let max_route_time = max_route_time.unwrap_or_else(|| {
            depot
                .time_window()
                .map(|tw| tw.due())
                .unwrap_or(f64::INFINITY)
        });

        // Build an id-indexed location table: locations[0] = depot,
        // locations[id] = the customer with that id (ids need not be 1..=n
        // contiguous for validation above, but in practice they are).
        let max_id = ids.last().copied().unwrap_or(0);
        let mut locations: Vec<Option<Customer>> = vec![None; max_id + 1];
        locations[0] = Some(depot);
        for c in customers {
            let id = c.id();
            locations[id] = Some(c);
        }
        let locations: Vec<Customer> = locations
            .into_iter()
            .enumerate()
            .map(|(id, slot)| slot.unwrap_or_else(|| Customer::new(id, 0.0, 0.0, 0, 0.0)))
            .collect();

        let distances = DistanceMatrix::from_customers(&locations);

        Ok(Self {
            name: name.into(),
            locations,
            distances,
            num_vehicles,
            capacity,
            max_route_time,
        })
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The depot (location id 0).
    pub fn depot(&self) -> &Customer {
        &self.locations[0]
    }

    /// All locations indexed by id (index 0 = depot).
    pub fn locations(&self) -> &[Customer] {
        &self.locations
    }

    /// Customers only, excluding the depot, in id order.
    pub fn customers(&self) -> &[Customer] {
        &self.locations[1..]
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.locations.len() - 1
    }

    /// The instance's customer ids, in order (excludes the depot).
    pub fn customer_ids(&self) -> Vec<usize> {
        (1..self.locations.len()).collect()
    }

    /// Precomputed Euclidean distance matrix over all locations.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Fleet size hint (not a hard cap — see §9 open question 3).
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Per-vehicle capacity (homogeneous fleet).
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Per-vehicle maximum route time (homogeneous fleet).
    pub fn max_route_time(&self) -> f64 {
        self.max_route_time
    }

    /// Builds a fresh [`Vehicle`] with this instance's capacity and
    /// maximum route time, suitable for a route evaluator.
    pub fn vehicle(&self, id: usize) -> Vehicle {
        Vehicle::new(id, self.capacity).with_max_route_time(self.max_route_time)
    }
}
