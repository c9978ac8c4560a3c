use std::time::Instant;

use tracing::{debug, trace};

use super::options::EvolutionOptions;
use crate::{
    board::Board,
    breeding::{BreedStrategy, StarBreeding},
    error::{OptionExt, QueensError, Result},
    outcome::{Outcome, RunResult},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy},
    state::State,
};

/// Drives generations of a genetic search using a selection and a breeding
/// strategy.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Selection, Breeding>
where
    Selection: SelectionStrategy,
    Breeding: BreedStrategy,
{
    selection: Selection,
    breeding: Breeding,
}

impl EvolutionLauncher<ElitistSelection, StarBreeding> {
    /// The classic configuration: elitist selection, star crossover around the
    /// elite and per-child mutation with probability `mutation_chance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mutation_chance` is not within `[0, 1]`.
    pub fn genetic(mutation_chance: f64) -> Result<Self> {
        Ok(Self::new(
            ElitistSelection::new(),
            StarBreeding::new(mutation_chance)?,
        ))
    }
}

impl<Selection, Breeding> EvolutionLauncher<Selection, Breeding>
where
    Selection: SelectionStrategy,
    Breeding: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified strategies.
    pub fn new(selection: Selection, breeding: Breeding) -> Self {
        Self {
            selection,
            breeding,
        }
    }

    /// Draws a random first generation of `board_size` boards and evolves it.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - `board_size` is zero
    /// - The generation cap in `options` is reached
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        board_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult> {
        options.validate()?;

        let population = (0..options.population_size())
            .map(|_| Board::random(board_size, options.board_generation(), rng).map(State::new))
            .collect::<Result<Vec<_>>>()?;

        self.evolve_population(population, options.max_generations(), rng)
    }

    /// Evolves `population` until one of the selected boards is a goal.
    ///
    /// The returned step count is the number of generations bred before the
    /// goal showed up; a first generation that already holds a solution
    /// returns 0. Every generation is a fresh vector built by the breeding
    /// strategy.
    ///
    /// # Errors
    ///
    /// Returns `NotConverged` once `max_generations` generations were bred
    /// without a solution, and propagates selection and breeding errors.
    pub fn evolve_population(
        &self,
        population: Vec<State>,
        max_generations: Option<usize>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult> {
        let start = Instant::now();
        let mut generation = population;
        let mut generations = 0;

        debug!(population = generation.len(), "starting evolution");

        loop {
            let selected = self.selection.select(&generation)?;

            if let Some(winner) = selected.iter().find(|state| state.is_goal()) {
                debug!(generations, "evolution found a solution");
                return Ok(RunResult::new(
                    winner.clone(),
                    Outcome::Solved,
                    generations,
                    None,
                    start.elapsed(),
                ));
            }

            if let Some(cap) = max_generations {
                if generations >= cap {
                    let best = selected
                        .first()
                        .ok_or_else_queens(|| QueensError::EmptyPopulation)?;
                    debug!(cap, best = best.cost(), "evolution hit its generation cap");
                    return Err(QueensError::NotConverged { steps: cap });
                }
            }

            generation = self.breeding.breed(&selected, rng)?;
            generations += 1;

            trace!(
                generations,
                best = selected[0].cost(),
                size = generation.len(),
                "bred generation"
            );
        }
    }
}
