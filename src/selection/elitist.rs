use crate::error::{QueensError, Result};
use crate::selection::selection_strategy::SelectionStrategy;
use crate::state::State;

/// Keeps the cheapest half of an even population plus one.
///
/// Individuals are sorted by ascending cost (a stable sort, so equal costs keep
/// their population order) and the first `size / 2 + 1` survive. The odd-sized
/// survivor set lets the elite pair with each of the `size / 2` others, which
/// breeds exactly `size` children.
///
/// # Examples
///
/// ```
/// use queensearch::board::Board;
/// use queensearch::selection::{ElitistSelection, SelectionStrategy};
/// use queensearch::state::State;
///
/// let population: Vec<State> = [
///     vec![0, 0, 0, 0],
///     vec![0, 1, 2, 3],
///     vec![1, 3, 0, 2],
///     vec![0, 2, 1, 3],
/// ]
/// .into_iter()
/// .map(|rows| State::new(Board::new(rows).unwrap()))
/// .collect();
///
/// let selected = ElitistSelection::new().select(&population).unwrap();
///
/// assert_eq!(selected.len(), 3);
/// assert_eq!(selected[0].cost(), 0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Number of survivors kept from a population of `population_size`.
    pub fn survivors(population_size: usize) -> usize {
        population_size / 2 + 1
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(&self, population: &[State]) -> Result<Vec<State>> {
        if population.is_empty() {
            return Err(QueensError::EmptyPopulation);
        }

        if population.len() % 2 != 0 {
            return Err(QueensError::InvalidConfiguration(format!(
                "Generation sizes must be even, got {}",
                population.len()
            )));
        }

        let mut ranked: Vec<&State> = population.iter().collect();
        ranked.sort_by_key(|state| state.cost());

        Ok(ranked
            .into_iter()
            .take(Self::survivors(population.len()))
            .cloned()
            .collect())
    }
}
