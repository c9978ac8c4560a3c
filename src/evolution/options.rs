//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the knobs of a genetic run: how many
//! boards make up a generation, how the first generation is drawn, and an
//! optional generation cap. The mutation chance belongs to the breeding
//! strategy.
//!
//! ## Example
//!
//! ```rust
//! use queensearch::evolution::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .max_generations(Some(5_000))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.population_size(), 20);
//! ```
//!
//! Population sizes must be even: selection keeps `size / 2 + 1` boards and the
//! elite pairs with each of the others, which breeds `size` children again.
//! Very small generations tend to collapse onto one board, so the size is
//! a tunable rather than a stable default.

use crate::board::BoardGeneration;
use crate::error::{QueensError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    max_generations: Option<usize>,
    board_generation: BoardGeneration,
}

impl EvolutionOptions {
    /// Creates validated options.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidConfiguration` if the population size is
    /// zero or odd.
    pub fn new(
        population_size: usize,
        max_generations: Option<usize>,
        board_generation: BoardGeneration,
    ) -> Result<Self> {
        let options = Self {
            population_size,
            max_generations,
            board_generation,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(QueensError::InvalidConfiguration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(QueensError::InvalidConfiguration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        Ok(())
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn board_generation(&self) -> BoardGeneration {
        self.board_generation
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_generations: None,
            board_generation: BoardGeneration::default(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    board_generation: Option<BoardGeneration>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of boards per generation.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Caps the number of generations; `None` runs until solved.
    pub fn max_generations(mut self, value: Option<usize>) -> Self {
        self.max_generations = value;
        self
    }

    /// Sets how the first generation's boards are drawn.
    pub fn board_generation(mut self, value: BoardGeneration) -> Self {
        self.board_generation = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        EvolutionOptions::new(
            self.population_size.unwrap_or(defaults.population_size),
            self.max_generations,
            self.board_generation.unwrap_or(defaults.board_generation),
        )
    }
}
