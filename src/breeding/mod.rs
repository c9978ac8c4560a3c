//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn the
//! survivors of one generation into the next generation.
pub mod operators;
pub mod star;

use std::fmt::Debug;

use crate::{error::Result, rng::RandomNumberGenerator, state::State};

/// # BreedStrategy
///
/// Breeds a fresh generation from the selected survivors of the previous one.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds new individuals from `selected`, which is ordered best first.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The selected slice is empty
    /// - The parents' boards differ in size
    fn breed(&self, selected: &[State], rng: &mut RandomNumberGenerator) -> Result<Vec<State>>;
}

pub use operators::{crossover, crossover_at, mutate};
pub use star::StarBreeding;
