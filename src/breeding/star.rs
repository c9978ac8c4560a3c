//! # StarBreeding
//!
//! The fittest survivor (the elite) is crossed with every other survivor, each
//! pairing producing two children that are then mutated independently. The
//! elite itself is not carried over unchanged.

use super::operators::{crossover, mutate};
use super::BreedStrategy;
use crate::{
    error::{QueensError, Result},
    rng::RandomNumberGenerator,
    state::State,
};

/// Star-topology crossover centred on the elite, followed by mutation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct StarBreeding {
    mutation_chance: f64,
}

impl StarBreeding {
    /// Creates a strategy mutating each child with probability `mutation_chance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mutation_chance` is not within `[0, 1]`.
    pub fn new(mutation_chance: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_chance) {
            return Err(QueensError::InvalidConfiguration(format!(
                "Mutation chance must be between 0.0 and 1.0, got {}",
                mutation_chance
            )));
        }
        Ok(Self { mutation_chance })
    }

    /// A strategy that never mutates.
    pub fn without_mutation() -> Self {
        Self {
            mutation_chance: 0.0,
        }
    }

    pub fn mutation_chance(&self) -> f64 {
        self.mutation_chance
    }
}

impl Default for StarBreeding {
    fn default() -> Self {
        Self::without_mutation()
    }
}

impl BreedStrategy for StarBreeding {
    /// Produces `2 * (selected.len() - 1)` children.
    ///
    /// ## Errors
    ///
    /// Returns `EmptyPopulation` for no survivors, `InvalidConfiguration` for
    /// a lone survivor, and `InvalidBoard` when board sizes differ.
    fn breed(&self, selected: &[State], rng: &mut RandomNumberGenerator) -> Result<Vec<State>> {
        let Some((elite, partners)) = selected.split_first() else {
            return Err(QueensError::EmptyPopulation);
        };

        if partners.is_empty() {
            return Err(QueensError::InvalidConfiguration(
                "Breeding needs the elite and at least one partner".to_string(),
            ));
        }

        let mut children = Vec::with_capacity(2 * partners.len());
        for partner in partners {
            let (first, second) = crossover(elite.board(), partner.board(), rng)?;
            children.push(State::new(mutate(first, self.mutation_chance, rng)));
            children.push(State::new(mutate(second, self.mutation_chance, rng)));
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn states(boards: &[&[usize]]) -> Vec<State> {
        boards
            .iter()
            .map(|rows| State::new(Board::new(rows.to_vec()).unwrap()))
            .collect()
    }

    #[test]
    fn test_breed_doubles_partners() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let selected = states(&[&[1, 3, 0, 2], &[0, 0, 0, 0], &[3, 3, 3, 3], &[0, 1, 2, 3]]);

        let children = StarBreeding::new(0.5)
            .unwrap()
            .breed(&selected, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 6);
        for child in &children {
            assert_eq!(child.cost(), child.board().cost());
        }
    }

    #[test]
    fn test_children_come_from_elite_and_partner() {
        let mut rng = RandomNumberGenerator::from_seed(22);
        let selected = states(&[&[0, 0, 0, 0, 0], &[4, 4, 4, 4, 4]]);

        let children = StarBreeding::without_mutation()
            .breed(&selected, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 2);
        let (a, b) = (children[0].board(), children[1].board());
        for column in 0..5 {
            // Without mutation the two children are complementary.
            assert_eq!(a.row(column) + b.row(column), 4);
        }
    }

    #[test]
    fn test_invalid_mutation_chance() {
        assert!(StarBreeding::new(-0.1).is_err());
        assert!(StarBreeding::new(1.5).is_err());
        assert!(StarBreeding::new(f64::NAN).is_err());
        assert!(StarBreeding::new(1.0).is_ok());
    }

    #[test]
    fn test_breed_empty() {
        let mut rng = RandomNumberGenerator::new();
        let result = StarBreeding::default().breed(&[], &mut rng);
        assert!(matches!(result, Err(QueensError::EmptyPopulation)));
    }

    #[test]
    fn test_breed_lone_survivor() {
        let mut rng = RandomNumberGenerator::new();
        let selected = states(&[&[0, 1]]);
        let result = StarBreeding::default().breed(&selected, &mut rng);
        assert!(matches!(result, Err(QueensError::InvalidConfiguration(_))));
    }
}
