//! Tournament selection (§4.4 step 2).

use rand::Rng;

use crate::models::Solution;

/// Runs a single tournament of `tournament_size` distinct individuals drawn
/// without replacement from `population`, and returns the index of the
/// fittest (lowest fitness, since fitness is a cost to minimize — §4.3).
///
/// Each call to [`select_parent_pair`] runs a fresh tournament, so draws are
/// with replacement *across* tournaments, but no individual can appear twice
/// within the same tournament, matching the reference GA's
/// `np.random.choice(population, tournament_size, replace=False)`.
pub fn tournament_select(population: &[Solution], tournament_size: usize, rng: &mut impl Rng) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let size = tournament_size.max(1).min(population.len());

    // Partial Fisher-Yates: shuffle only the first `size` positions of an
    // index pool, which is equivalent to sampling `size` indices without
    // replacement but touches O(size) elements instead of O(population.len()).
    let mut indices: Vec<usize> = (0..population.len()).collect();
    for i in 0..size {
        let j = rng.random_range(i as u64..population.len() as u64) as usize;
        indices.swap(i, j);
    }

    let mut best_idx = indices[0];
    let mut best_fitness = population[best_idx].fitness();
    for &candidate in &indices[1..size] {
        let candidate_fitness = population[candidate].fitness();
        if candidate_fitness < best_fitness {
            best_fitness = candidate_fitness;
            best_idx = candidate;
        }
    }
    best_idx
}

/// Runs two tournaments to pick a (possibly identical) parent pair.
pub fn select_parent_pair(
    population: &[Solution],
    tournament_size: usize,
    rng: &mut impl Rng,
) -> (usize, usize) {
    let p1 = tournament_select(population, tournament_size, rng);
    let p2 = tournament_select(population, tournament_size, rng);
    (p1, p2)
}
