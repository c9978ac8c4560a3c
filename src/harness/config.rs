//! # RunConfig
//!
//! Everything a batch of runs needs, validated once before any search starts.
//!
//! ## Example
//!
//! ```rust
//! use queensearch::harness::{Algorithm, RunConfig};
//!
//! let config = RunConfig::builder()
//!     .board_size(8)
//!     .iterations(50)
//!     .algorithm(Algorithm::Genetic)
//!     .generation_size(16)
//!     .mutation_chance(0.5)
//!     .seed(Some(42))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.generation_size(), 16);
//! ```

use crate::board::BoardGeneration;
use crate::breeding::StarBreeding;
use crate::error::{QueensError, Result};
use crate::evolution::{EvolutionLauncher, EvolutionOptions};
use crate::local_search::{HillClimbing, Neighborhood};
use crate::selection::ElitistSelection;
use crate::successor::GoalBoundary;

/// The search strategy a batch runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    HillClimbing,
    Genetic,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RunConfig {
    board_size: usize,
    iterations: usize,
    algorithm: Algorithm,
    print_paths: bool,
    generation_size: usize,
    mutation_chance: f64,
    board_generation: BoardGeneration,
    neighborhood: Neighborhood,
    goal_boundary: GoalBoundary,
    sideways_limit: usize,
    max_steps: Option<usize>,
    seed: Option<u64>,
    workers: usize,
}

impl RunConfig {
    /// Returns a builder for creating a `RunConfig` instance.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Checks every field; `RunConfigBuilder::build` calls this.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidConfiguration` describing the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(QueensError::InvalidConfiguration(
                "Board size must be greater than 0".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(QueensError::InvalidConfiguration(
                "Iterations must be greater than 0".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(QueensError::InvalidConfiguration(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        match self.algorithm {
            Algorithm::HillClimbing => {
                self.hill_climber()?;
            }
            Algorithm::Genetic => {
                self.evolution_options()?;
                self.launcher()?;
            }
        }

        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether hill-climbing runs record the boards they visit.
    pub fn print_paths(&self) -> bool {
        self.print_paths
    }

    pub fn generation_size(&self) -> usize {
        self.generation_size
    }

    pub fn mutation_chance(&self) -> f64 {
        self.mutation_chance
    }

    pub fn board_generation(&self) -> BoardGeneration {
        self.board_generation
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn goal_boundary(&self) -> GoalBoundary {
        self.goal_boundary
    }

    pub fn sideways_limit(&self) -> usize {
        self.sideways_limit
    }

    /// Move cap (hill climbing) or generation cap (genetic).
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The hill climber described by this configuration.
    pub fn hill_climber(&self) -> Result<HillClimbing> {
        Ok(HillClimbing::new()
            .with_neighborhood(self.neighborhood)?
            .with_goal_boundary(self.goal_boundary)
            .with_sideways_limit(self.sideways_limit)
            .with_max_moves(self.max_steps)
            .with_path_recording(self.print_paths))
    }

    /// The genetic options described by this configuration.
    pub fn evolution_options(&self) -> Result<EvolutionOptions> {
        EvolutionOptions::new(self.generation_size, self.max_steps, self.board_generation)
    }

    /// The genetic launcher described by this configuration.
    pub fn launcher(&self) -> Result<EvolutionLauncher<ElitistSelection, StarBreeding>> {
        EvolutionLauncher::genetic(self.mutation_chance)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            iterations: 100,
            algorithm: Algorithm::default(),
            print_paths: false,
            generation_size: 20,
            mutation_chance: 1.0,
            board_generation: BoardGeneration::default(),
            neighborhood: Neighborhood::default(),
            goal_boundary: GoalBoundary::default(),
            sideways_limit: 0,
            max_steps: None,
            seed: None,
            workers: 1,
        }
    }
}

/// Builder for `RunConfig`.
///
/// Unset fields take the values of `RunConfig::default()`.
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn board_size(mut self, value: usize) -> Self {
        self.config.board_size = value;
        self
    }

    pub fn iterations(mut self, value: usize) -> Self {
        self.config.iterations = value;
        self
    }

    pub fn algorithm(mut self, value: Algorithm) -> Self {
        self.config.algorithm = value;
        self
    }

    pub fn print_paths(mut self, value: bool) -> Self {
        self.config.print_paths = value;
        self
    }

    pub fn generation_size(mut self, value: usize) -> Self {
        self.config.generation_size = value;
        self
    }

    pub fn mutation_chance(mut self, value: f64) -> Self {
        self.config.mutation_chance = value;
        self
    }

    pub fn board_generation(mut self, value: BoardGeneration) -> Self {
        self.config.board_generation = value;
        self
    }

    pub fn neighborhood(mut self, value: Neighborhood) -> Self {
        self.config.neighborhood = value;
        self
    }

    pub fn goal_boundary(mut self, value: GoalBoundary) -> Self {
        self.config.goal_boundary = value;
        self
    }

    pub fn sideways_limit(mut self, value: usize) -> Self {
        self.config.sideways_limit = value;
        self
    }

    pub fn max_steps(mut self, value: Option<usize>) -> Self {
        self.config.max_steps = value;
        self
    }

    pub fn seed(mut self, value: Option<u64>) -> Self {
        self.config.seed = value;
        self
    }

    pub fn workers(mut self, value: usize) -> Self {
        self.config.workers = value;
        self
    }

    /// Builds and validates the `RunConfig` instance.
    pub fn build(self) -> Result<RunConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(builder: RunConfigBuilder) -> String {
        match builder.build() {
            Err(QueensError::InvalidConfiguration(msg)) => msg,
            other => panic!("Expected InvalidConfiguration error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = RunConfig::builder().build().unwrap();
        assert_eq!(config.board_size(), 8);
        assert_eq!(config.algorithm(), Algorithm::HillClimbing);
        assert_eq!(config.workers(), 1);
    }

    #[test]
    fn test_rejects_zero_board_size() {
        let msg = rejected(RunConfig::builder().board_size(0));
        assert!(msg.contains("Board size"));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let msg = rejected(RunConfig::builder().iterations(0));
        assert!(msg.contains("Iterations"));
    }

    #[test]
    fn test_rejects_zero_workers() {
        let msg = rejected(RunConfig::builder().workers(0));
        assert!(msg.contains("Worker"));
    }

    #[test]
    fn test_rejects_odd_generation_for_genetic_only() {
        let msg = rejected(
            RunConfig::builder()
                .algorithm(Algorithm::Genetic)
                .generation_size(5),
        );
        assert!(msg.contains("even"));

        // Hill climbing ignores the generation size.
        assert!(RunConfig::builder().generation_size(5).build().is_ok());
    }

    #[test]
    fn test_rejects_mutation_chance_for_genetic() {
        for chance in [-0.5, 1.5] {
            let msg = rejected(
                RunConfig::builder()
                    .algorithm(Algorithm::Genetic)
                    .mutation_chance(chance),
            );
            assert!(msg.contains("Mutation chance"));
        }
    }

    #[test]
    fn test_rejects_empty_sample() {
        rejected(RunConfig::builder().neighborhood(Neighborhood::Sampled { samples: 0 }));
    }

    #[test]
    fn test_hill_climber_reflects_config() {
        let config = RunConfig::builder()
            .neighborhood(Neighborhood::ImprovingBucket)
            .build()
            .unwrap();
        assert_eq!(
            config.hill_climber().unwrap().neighborhood(),
            Neighborhood::ImprovingBucket
        );
    }
}
