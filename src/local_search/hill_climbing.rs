use std::time::Instant;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{QueensError, Result};
use crate::outcome::{Outcome, RunResult};
use crate::rng::RandomNumberGenerator;
use crate::state::State;
use crate::successor::{better_moves, neighborhood_size, successors, GoalBoundary, Move};

use super::LocalSearch;

/// Which neighbours a hill-climbing step looks at.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// Evaluate all `N * (N - 1)` single-queen moves and take a best one.
    #[default]
    SteepestAscent,
    /// Take a move from the bucket of lowest-cost improving successors,
    /// bounded below by the configured `GoalBoundary`.
    ImprovingBucket,
    /// Draw `samples` random one-row neighbours per step and take the best
    /// strictly improving one.
    Sampled { samples: usize },
}

/// Steepest-ascent hill climbing over single-queen moves.
///
/// Each step moves to a uniformly chosen best neighbour. The search stops as
/// `Solved` when the cost reaches 0 and as `Peaked` when no neighbour
/// improves on the current board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct HillClimbing {
    neighborhood: Neighborhood,
    boundary: GoalBoundary,
    sideways_limit: usize,
    max_moves: Option<usize>,
    record_path: bool,
}

impl HillClimbing {
    /// Creates a strict steepest-ascent climber without a move cap.
    pub fn new() -> Self {
        Self {
            neighborhood: Neighborhood::default(),
            boundary: GoalBoundary::default(),
            sideways_limit: 0,
            max_moves: None,
            record_path: false,
        }
    }

    /// Selects the neighbourhood examined on every step.
    ///
    /// # Errors
    ///
    /// Returns an error if a sampled neighbourhood draws zero samples.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Result<Self> {
        if let Neighborhood::Sampled { samples: 0 } = neighborhood {
            return Err(QueensError::InvalidConfiguration(
                "Sampled neighbourhood must draw at least one neighbour".to_string(),
            ));
        }
        self.neighborhood = neighborhood;
        Ok(self)
    }

    /// Sets whether the improving bucket may contain goal boards.
    pub fn with_goal_boundary(mut self, boundary: GoalBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Allows up to `limit` consecutive equal-cost moves in steepest ascent.
    pub fn with_sideways_limit(mut self, limit: usize) -> Self {
        self.sideways_limit = limit;
        self
    }

    /// Fails with `NotConverged` instead of taking more than `max_moves` moves.
    pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Keeps every visited board in the result.
    pub fn with_path_recording(mut self, record_path: bool) -> Self {
        self.record_path = record_path;
        self
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Runs the climb from `initial`.
    pub fn climb(&self, initial: Board, rng: &mut RandomNumberGenerator) -> Result<RunResult> {
        let start = Instant::now();
        let mut current = State::new(initial);
        let mut path = self.record_path.then(|| vec![current.board().clone()]);
        let mut moves = 0;
        let mut examined = 0;
        let mut sideways = 0;

        debug!(size = current.board().size(), cost = current.cost(), "starting hill climb");

        let outcome = loop {
            if current.is_goal() {
                break Outcome::Solved;
            }

            let next = match self.neighborhood {
                Neighborhood::SteepestAscent => {
                    examined += neighborhood_size(current.board().size());
                    self.steepest_step(&current, &mut sideways, rng)
                }
                Neighborhood::ImprovingBucket => {
                    examined += neighborhood_size(current.board().size());
                    let bucket = better_moves(&current, self.boundary);
                    rng.choose(&bucket).map(|m| m.apply(&current))
                }
                Neighborhood::Sampled { samples } => {
                    examined += samples;
                    sampled_step(&current, samples, rng)
                }
            };

            let Some(next) = next else {
                break Outcome::Peaked;
            };

            if let Some(cap) = self.max_moves {
                if moves >= cap {
                    debug!(cap, cost = current.cost(), "hill climb hit its move cap");
                    return Err(QueensError::NotConverged { steps: cap });
                }
            }

            moves += 1;
            trace!(moves, cost = next.cost(), "hill climbing move");
            if let Some(path) = path.as_mut() {
                path.push(next.board().clone());
            }
            current = next;
        };

        debug!(?outcome, moves, examined, cost = current.cost(), "hill climb finished");

        Ok(
            RunResult::new(current, outcome, moves, Some(examined), start.elapsed())
                .with_path(path),
        )
    }

    fn steepest_step(
        &self,
        current: &State,
        sideways: &mut usize,
        rng: &mut RandomNumberGenerator,
    ) -> Option<State> {
        let mut best_cost = usize::MAX;
        let mut best: Vec<Move> = Vec::new();
        for candidate in successors(current) {
            if candidate.cost < best_cost {
                best_cost = candidate.cost;
                best.clear();
            }
            if candidate.cost == best_cost {
                best.push(candidate);
            }
        }

        if best_cost < current.cost() {
            *sideways = 0;
        } else if best_cost == current.cost() && *sideways < self.sideways_limit {
            *sideways += 1;
        } else {
            return None;
        }

        rng.choose(&best).map(|m| m.apply(current))
    }
}

fn sampled_step(current: &State, samples: usize, rng: &mut RandomNumberGenerator) -> Option<State> {
    let mut best: Option<State> = None;
    for _ in 0..samples {
        let neighbor = State::new(current.board().random_neighbor(rng));
        let bar = best.as_ref().map_or(current.cost(), State::cost);
        if neighbor.cost() < bar {
            best = Some(neighbor);
        }
    }
    best
}

impl Default for HillClimbing {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalSearch for HillClimbing {
    fn search(&self, initial: Board, rng: &mut RandomNumberGenerator) -> Result<RunResult> {
        self.climb(initial, rng)
    }
}
