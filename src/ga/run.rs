//! Main evolution loop (§4.4 generation step, §6.3 `run`).

use rand::Rng;
use tracing::{debug, info, instrument};

use super::config::GaConfig;
use super::crossover::brx_crossover;
use super::diversity::survivor_select;
use super::mutation::{apply_mutation, apply_random_mutations, weighted_random_kind};
use super::population::{best_index, initial_population, mean_fitness, repair_partial};
use super::selection::select_parent_pair;
use crate::constructive::randomized_greedy;
use crate::local_search::two_opt_solution;
use crate::models::{Instance, Solution};

/// One `(best_fitness, mean_fitness)` sample per generation.
pub type ConvergencePoint = (f64, f64);

/// Runs the full genetic evolution loop and returns the best solution found
/// together with its per-generation convergence trace.
///
/// `config` must already be [validated](GaConfig::validate) by the caller;
/// this function does not re-validate it.
#[instrument(skip(instance, config), fields(population_size = config.population_size, generations = config.generations))]
pub fn run(instance: &Instance, config: &GaConfig) -> (Solution, Vec<ConvergencePoint>) {
    let mut rng = config.root_rng();
    let mut population = initial_population(instance, config, &mut rng);

    let mut global_best = population[best_index(&population)].clone();
    let mut stagnation = 0usize;
    let mut trace = Vec::with_capacity(config.generations);

    info!(initial_best = global_best.fitness(), "population initialized");

    for generation in 0..config.generations {
        let mut children = Vec::with_capacity(population.len());

        while children.len() < population.len() {
            let (i1, i2) = select_parent_pair(&population, config.tournament_size, &mut rng);
            let (parent1, parent2) = (&population[i1], &population[i2]);

            let (mut child1, mut child2) = if rng.random::<f64>() < config.crossover_rate {
                brx_crossover(parent1, parent2, instance, &mut rng)
            } else {
                (parent1.clone(), parent2.clone())
            };

            for child in [&mut child1, &mut child2] {
                if rng.random::<f64>() < config.mutation_rate {
                    let kind = weighted_random_kind(&mut rng);
                    *child = apply_mutation(kind, child, instance, &mut rng);
                }
                if rng.random::<f64>() < config.local_search_rate {
                    *child = two_opt_solution(child, instance);
                }
            }

            children.push(child1);
            if children.len() < population.len() {
                children.push(child2);
            }
        }

        let mut combined = population;
        combined.extend(children);
        population = survivor_select(combined, config.elite_size, config.population_size, &mut rng);

        let gen_best_idx = best_index(&population);
        let gen_best_fitness = population[gen_best_idx].fitness();
        let gen_mean_fitness = mean_fitness(&population);
        trace.push((gen_best_fitness, gen_mean_fitness));

        if gen_best_fitness < global_best.fitness() {
            global_best = population[gen_best_idx].clone();
            stagnation = 0;
        } else {
            stagnation += 1;
        }

        debug!(generation, best = gen_best_fitness, mean = gen_mean_fitness, stagnation, "generation complete");

        if stagnation >= config.stagnation_threshold {
            population = partial_restart(population, instance, &mut rng);
            stagnation = 0;
            info!(generation, "stagnation restart triggered");
        }
    }

    info!(final_best = global_best.fitness(), "evolution complete");
    (global_best, trace)
}

/// Retains the top half of the population by fitness; for each remaining
/// slot, independently with probability 0.7 clones a random retained
/// solution and applies 2-4 mutations, else generates a fresh
/// randomised-greedy solution (§4.4 step 7).
fn partial_restart(mut population: Vec<Solution>, instance: &Instance, rng: &mut impl Rng) -> Vec<Solution> {
    let total = population.len();
    population.sort_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap());
    let keep = (total / 2).max(1);
    let retained: Vec<Solution> = population.into_iter().take(keep).collect();

    let mut next = retained.clone();
    while next.len() < total {
        if rng.random::<f64>() < 0.7 {
            let donor = &retained[rng.random_range(0..retained.len() as u64) as usize];
            next.push(apply_random_mutations(donor, instance, rng));
        } else {
            next.push(repair_partial(randomized_greedy(instance, rng), instance));
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn small_instance() -> Instance {
        let depot = Customer::depot(0.0, 0.0);
        let customers: Vec<Customer> = (1..=10)
            .map(|i| Customer::new(i, (i % 5) as f64, (i / 5) as f64, 5, 0.0))
            .collect();
        Instance::new("demo", depot, customers, 4, 50).expect("valid")
    }

    #[test]
    fn test_run_produces_feasible_covering_solution() {
        let instance = small_instance();
        let config = GaConfig {
            population_size: 10,
            elite_size: 2,
            generations: 5,
            seed: 1,
            stagnation_threshold: 3,
            ..GaConfig::default()
        };
        config.validate().expect("valid config");
        let (best, trace) = run(&instance, &config);
        assert_eq!(trace.len(), 5);
        assert_eq!(best.num_served() + best.num_unassigned(), 10);
    }

    #[test]
    fn test_run_is_deterministic_given_seed() {
        let instance = small_instance();
        let config = GaConfig {
            population_size: 8,
            elite_size: 2,
            generations: 4,
            seed: 99,
            ..GaConfig::default()
        };
        let (best1, trace1) = run(&instance, &config);
        let (best2, trace2) = run(&instance, &config);
        assert_eq!(best1.fitness(), best2.fitness());
        assert_eq!(trace1, trace2);
    }

    #[test]
    fn test_stagnation_restart_preserves_population_size() {
        let instance = small_instance();
        let config = GaConfig {
            population_size: 12,
            elite_size: 3,
            generations: 20,
            seed: 2,
            stagnation_threshold: 2,
            ..GaConfig::default()
        };
        let (_best, trace) = run(&instance, &config);
        assert_eq!(trace.len(), 20);
    }
}

#[cfg(test)]
mod conservation_properties {
    use super::*;
    use crate::models::Customer;
    use proptest::prelude::*;

    /// Generates a small, always-buildable instance: 2-8 customers around a
    /// fixed depot, demand kept within a single vehicle's capacity so no
    /// customer is unconditionally unroutable.
    fn small_instance_strategy() -> impl Strategy<Value = Instance> {
        prop::collection::vec((0.0f64..50.0, 0.0f64..50.0, 1i32..15), 2..=8).prop_map(|specs| {
            let depot = Customer::depot(25.0, 25.0);
            let customers = specs
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, demand))| Customer::new(i + 1, x, y, demand, 0.0))
                .collect();
            Instance::new("prop", depot, customers, 3, 20).expect("valid instance")
        })
    }

    proptest! {
        /// Property 1 (conservation): every customer in the instance ends up
        /// either routed or reported unassigned, exactly once, never both and
        /// never neither — no generation step may silently drop or
        /// duplicate a customer.
        #[test]
        fn prop_run_conserves_every_customer(instance in small_instance_strategy(), seed in any::<u64>()) {
            let config = GaConfig {
                population_size: 10,
                elite_size: 2,
                generations: 5,
                seed,
                stagnation_threshold: 3,
                ..GaConfig::default()
            };
            let (best, _trace) = run(&instance, &config);

            let mut seen = best.flattened_customer_ids();
            seen.extend_from_slice(best.unassigned());
            seen.sort_unstable();

            let mut expected = instance.customer_ids();
            expected.sort_unstable();

            prop_assert_eq!(seen, expected);
        }
    }
}
