//! Sequence distance and diversity-aware survivor selection (§4.4 step 5).

use rand::Rng;

use crate::models::Solution;

/// Fraction of disagreeing positions between two flattened customer-id
/// sequences. Sequences of unequal length are maximally distant (`1.0`),
/// since a length mismatch already means the routes partition customers
/// differently.
pub fn sequence_distance(a: &[usize], b: &[usize]) -> f64 {
    if a.len() != b.len() {
        return 1.0;
    }
    if a.is_empty() {
        return 0.0;
    }
    let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    mismatches as f64 / a.len() as f64
}

/// Mean sequence distance from `candidate` to every solution already in
/// `survivors`. Solutions in an empty survivor set are maximally diverse
/// (`1.0`) so the first fill pick is driven by fitness alone.
fn diversity_score(candidate: &[usize], survivors: &[Solution]) -> f64 {
    if survivors.is_empty() {
        return 1.0;
    }
    let total: f64 = survivors
        .iter()
        .map(|s| sequence_distance(candidate, &s.flattened_customer_ids()))
        .sum();
    total / survivors.len() as f64
}

/// Builds the next generation's population from `combined` (parents and
/// children, `2P` entries), keeping the `elite_size` fittest unconditionally
/// and filling the remaining `target_size - elite_size` slots with a
/// diversity-weighted, without-replacement draw (§4.4 step 5):
/// `weight = 1 / (fitness + 1) + 0.3 * diversity_score`.
pub fn survivor_select(
    mut combined: Vec<Solution>,
    elite_size: usize,
    target_size: usize,
    rng: &mut impl Rng,
) -> Vec<Solution> {
    combined.sort_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap());

    let elite_size = elite_size.min(combined.len()).min(target_size);
    let mut remaining: Vec<Solution> = combined.split_off(elite_size);
    let mut survivors: Vec<Solution> = combined;

    while survivors.len() < target_size && !remaining.is_empty() {
        let weights: Vec<f64> = remaining
            .iter()
            .map(|c| {
                1.0 / (c.fitness() + 1.0)
                    + 0.3 * diversity_score(&c.flattened_customer_ids(), &survivors)
            })
            .collect();
        let total: f64 = weights.iter().sum();
        let pick = if total <= 0.0 {
            0
        } else {
            let mut draw = rng.random::<f64>() * total;
            let mut idx = weights.len() - 1;
            for (i, w) in weights.iter().enumerate() {
                if draw < *w {
                    idx = i;
                    break;
                }
                draw -= w;
            }
            idx
        };
        survivors.push(remaining.remove(pick));
    }

    survivors
}
