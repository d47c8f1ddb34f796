//! Mutation dispatch: choosing among Relocate, Exchange, and intra-route
//! 2-opt (§4.4 step 3, and the 2-4 mutation applications used to build
//! mutated-clone population members and stagnation-restart fillers).

use rand::Rng;

use crate::local_search::{exchange_mutate, relocate_mutate, two_opt_solution};
use crate::models::{Instance, Solution};

/// One of the three neighbourhood moves used as a GA mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Move one customer to another route.
    Relocate,
    /// Swap one customer between two routes.
    Exchange,
    /// Intra-route 2-opt edge reversal.
    TwoOpt,
}

/// Applies the named mutation to a solution.
///
/// 2-opt here runs on every route regardless of length (routes shorter than
/// 4 customers are left untouched by [`two_opt_solution`]'s own guard).
pub fn apply_mutation(
    kind: MutationKind,
    solution: &Solution,
    instance: &Instance,
    rng: &mut impl Rng,
) -> Solution {
    match kind {
        MutationKind::Relocate => relocate_mutate(solution, instance, rng),
        MutationKind::Exchange => exchange_mutate(solution, instance, rng),
        MutationKind::TwoOpt => two_opt_solution(solution, instance),
    }
}

/// Picks a mutation with the generation-step weights: Relocate 0.5,
/// Exchange 0.3, intra-route 2-opt 0.2 (§4.4 step 3).
pub fn weighted_random_kind(rng: &mut impl Rng) -> MutationKind {
    let draw = rng.random::<f64>();
    if draw < 0.5 {
        MutationKind::Relocate
    } else if draw < 0.8 {
        MutationKind::Exchange
    } else {
        MutationKind::TwoOpt
    }
}

/// Applies between 2 and 4 random mutations to a solution, each drawn with
/// the same Relocate 0.5 / Exchange 0.3 / 2-opt 0.2 weights as a single
/// generation-step mutation (§4.4 step 3), re-evaluating each time so the
/// next mutation sees a consistent state. Used when seeding mutated-clone
/// population members and stagnation-restart fillers.
pub fn apply_random_mutations(
    solution: &Solution,
    instance: &Instance,
    rng: &mut impl Rng,
) -> Solution {
    let count = rng.random_range(2..=4u64);
    let mut current = solution.clone();
    for _ in 0..count {
        let kind = weighted_random_kind(rng);
        current = apply_mutation(kind, &current, instance, rng);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::RouteEvaluator;
    use crate::models::Customer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn instance() -> Instance {
        let depot = Customer::depot(0.0, 0.0);
        let customers = vec![
            Customer::new(1, 1.0, 1.0, 10, 0.0),
            Customer::new(2, -1.0, -1.0, 10, 0.0),
            Customer::new(3, 1.0, -1.0, 10, 0.0),
            Customer::new(4, -1.0, 1.0, 10, 0.0),
        ];
        Instance::new("demo", depot, customers, 2, 20).expect("valid")
    }

    #[test]
    fn test_apply_random_mutations_preserves_customer_count() {
        let instance = instance();
        let evaluator = RouteEvaluator::new(&instance);
        let solution = evaluator.evaluate(&[vec![1, 2], vec![3, 4]]);
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mutated = apply_random_mutations(&solution, &instance, &mut rng);
            assert_eq!(mutated.num_served(), 4);
        }
    }

    #[test]
    fn test_weighted_random_kind_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut counts = [0; 3];
        for _ in 0..3000 {
            match weighted_random_kind(&mut rng) {
                MutationKind::Relocate => counts[0] += 1,
                MutationKind::Exchange => counts[1] += 1,
                MutationKind::TwoOpt => counts[2] += 1,
            }
        }
        // Roughly 0.5/0.3/0.2 split; loose bounds to avoid flakiness.
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
    }
}
