//! Initial population construction (§4.4 "Initial population").

use rand::Rng;

use super::config::GaConfig;
use super::insertion::insert_remaining;
use super::mutation::apply_random_mutations;
use crate::constructive::{randomized_greedy, solomon_insertion};
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Repairs a possibly-partial constructor solution by inserting any
/// unassigned customers via cheapest feasible insertion (§4.5). This is the
/// "evolutionary layer is expected to repair it" step §6.2 promises for a
/// fleet-exhausted constructor run, applied once at population-construction
/// time so every individual that ever enters the population already
/// satisfies the conservation invariant (§8 property 1) — crossover only
/// reinserts customers missing from a *parent's routes*, so a population
/// seeded with an un-repaired partial solution would otherwise stay broken
/// across every generation where that individual is simply cloned.
pub(crate) fn repair_partial(solution: Solution, instance: &Instance) -> Solution {
    if solution.num_unassigned() == 0 {
        return solution;
    }
    let mut routes: Vec<Vec<usize>> = solution.routes().iter().map(|r| r.customer_ids()).collect();
    insert_remaining(&mut routes, solution.unassigned(), instance);
    RouteEvaluator::new(instance).evaluate(&routes)
}

/// Builds the generation-0 population: 40% Solomon-I1 draws with randomised
/// `(alpha, mu, lambda)`, 40% randomised-greedy, and the remainder mutated
/// clones of the best Solomon-I1 draw produced in this same call.
///
/// Sizes are rounded so the three groups sum exactly to
/// `config.population_size`.
pub fn initial_population(instance: &Instance, config: &GaConfig, rng: &mut impl Rng) -> Vec<Solution> {
    let total = config.population_size;
    let n_solomon = ((total as f64) * 0.4).round() as usize;
    let n_greedy = ((total as f64) * 0.4).round() as usize;
    let n_solomon = n_solomon.min(total);
    let n_greedy = n_greedy.min(total - n_solomon);
    let n_mutated = total - n_solomon - n_greedy;

    let mut population = Vec::with_capacity(total);
    let mut best_solomon: Option<Solution> = None;

    for _ in 0..n_solomon {
        let alpha = rng.random_range(0.5..=2.0);
        let mu = rng.random_range(0.5..=2.0);
        let lambda = rng.random_range(0.5..=3.0);
        let (solution, _unrouted) = solomon_insertion(instance, alpha, mu, lambda);
        let solution = repair_partial(solution, instance);
        if best_solomon
            .as_ref()
            .map(|b| solution.fitness() < b.fitness())
            .unwrap_or(true)
        {
            best_solomon = Some(solution.clone());
        }
        population.push(solution);
    }

    for _ in 0..n_greedy {
        let solution = repair_partial(randomized_greedy(instance, rng), instance);
        population.push(solution);
    }

    let seed = best_solomon.unwrap_or_else(|| {
        let (solution, _) = solomon_insertion(instance, 1.0, 1.0, 1.0);
        repair_partial(solution, instance)
    });
    for _ in 0..n_mutated {
        population.push(apply_random_mutations(&seed, instance, rng));
    }

    population
}

/// Returns the index of the lowest-fitness solution in `population`.
///
/// Ties resolve to the earliest index, matching §4.4's stable-ordering
/// tie-break rule.
pub fn best_index(population: &[Solution]) -> usize {
    let mut best = 0;
    for (i, s) in population.iter().enumerate().skip(1) {
        if s.fitness() < population[best].fitness() {
            best = i;
        }
    }
    best
}

/// Mean fitness across the population.
pub fn mean_fitness(population: &[Solution]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Solution::fitness).sum::<f64>() / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn instance() -> Instance {
        let depot = Customer::depot(0.0, 0.0);
        let customers: Vec<Customer> = (1..=12)
            .map(|i| Customer::new(i, (i % 4) as f64, (i / 4) as f64, 5, 0.0))
            .collect();
        Instance::new("demo", depot, customers, 5, 50).expect("valid")
    }

    #[test]
    fn test_initial_population_has_exact_size() {
        let instance = instance();
        let config = GaConfig {
            population_size: 17,
            ..GaConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let population = initial_population(&instance, &config, &mut rng);
        assert_eq!(population.len(), 17);
    }

    #[test]
    fn test_best_index_finds_minimum() {
        let mut a = Solution::new();
        a.set_fitness(5.0);
        let mut b = Solution::new();
        b.set_fitness(1.0);
        let mut c = Solution::new();
        c.set_fitness(3.0);
        assert_eq!(best_index(&[a, b, c]), 1);
    }

    #[test]
    fn test_mean_fitness_empty_population_is_zero() {
        assert_eq!(mean_fitness(&[]), 0.0);
    }

    #[test]
    fn test_initial_population_conserves_customers_despite_fleet_shortage() {
        // One vehicle, capacity only fits one customer at a time: both
        // Solomon-I1 and randomised-greedy will exhaust the fleet here, so
        // every population member must have come through repair_partial.
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 0.0, 80, 0.0),
            Customer::new(2, 2.0, 0.0, 80, 0.0),
            Customer::new(3, 3.0, 0.0, 80, 0.0),
        ];
        let instance = Instance::new("shortage", depot, customers, 1, 80).expect("valid");
        let config = GaConfig {
            population_size: 10,
            ..GaConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let population = initial_population(&instance, &config, &mut rng);

        for solution in &population {
            assert_eq!(solution.num_unassigned(), 0, "repair must clear unassigned");
            let mut ids = solution.flattened_customer_ids();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3], "every customer must be conserved");
        }
    }
}
