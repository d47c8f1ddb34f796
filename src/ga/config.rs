//! Validated configuration for the genetic evolution loop (§4.4).

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::RoutingError;

/// Fixed-per-run parameters for [`crate::ga::run`].
///
/// Defaults match the reference scenarios referenced by §8: population 100,
/// elite 20, 300 generations, crossover rate 0.8, mutation rate 0.3, local
/// search rate 0.5, tournament size 5, stagnation threshold 50.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Population size `P`.
    pub population_size: usize,
    /// Number of unconditional survivors per generation `E`.
    pub elite_size: usize,
    /// Number of generations to run `G`.
    pub generations: usize,
    /// Crossover probability `p_x` applied to each selected parent pair.
    pub crossover_rate: f64,
    /// Mutation probability `p_m` applied to each child.
    pub mutation_rate: f64,
    /// Local-search probability `p_ls` applied to each child.
    pub local_search_rate: f64,
    /// Tournament size `k` used by selection.
    pub tournament_size: usize,
    /// Random seed `s`. All draws in a run derive from this single seed.
    pub seed: u64,
    /// Generations without improvement before a partial restart `S`.
    pub stagnation_threshold: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_size: 20,
            generations: 300,
            crossover_rate: 0.8,
            mutation_rate: 0.3,
            local_search_rate: 0.5,
            tournament_size: 5,
            seed: 42,
            stagnation_threshold: 50,
        }
    }
}

impl GaConfig {
    /// Validates this configuration against §4.4's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidInstance`] if any rate is outside
    /// `[0, 1]`, `population_size` is zero, `elite_size` exceeds
    /// `population_size`, or `tournament_size` is zero.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let in_unit = |x: f64| (0.0..=1.0).contains(&x);
        if !in_unit(self.crossover_rate) || !in_unit(self.mutation_rate) || !in_unit(self.local_search_rate)
        {
            return Err(RoutingError::InvalidInstance(
                "crossover_rate, mutation_rate, and local_search_rate must be in [0, 1]".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(RoutingError::InvalidInstance(
                "population_size must be positive".into(),
            ));
        }
        if self.elite_size > self.population_size {
            return Err(RoutingError::InvalidInstance(
                "elite_size must not exceed population_size".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(RoutingError::InvalidInstance(
                "tournament_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Builds the run's root RNG from [`seed`](Self::seed).
    pub fn root_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Pre-draws `n` independent sub-seeds from `parent`, producing `n`
    /// sub-RNGs in a fixed, parent-RNG-consumption order.
    ///
    /// A parallel fitness pass (e.g. with `rayon`) can hand one sub-RNG to
    /// each independent individual's evaluation and remain bit-identical to
    /// the sequential reference, since the order sub-seeds are drawn in does
    /// not depend on how the resulting work is scheduled (§5). This core's
    /// shipped `run()` does not call this itself — it evaluates
    /// sequentially — but exposes it for callers that do.
    pub fn spawn_sub_rngs(&self, parent: &mut ChaCha8Rng, n: usize) -> Vec<ChaCha8Rng> {
        (0..n)
            .map(|_| ChaCha8Rng::seed_from_u64(parent.random()))
            .collect()
    }
}
