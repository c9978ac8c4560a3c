//! # Local Search
//!
//! Local search walks from one board to a neighbouring board until no
//! neighbour is better. Restarting after a peak is left to the caller, which
//! simply runs another independent search from a fresh board.

use std::fmt::Debug;

use crate::board::Board;
use crate::error::Result;
use crate::outcome::RunResult;
use crate::rng::RandomNumberGenerator;

pub mod hill_climbing;

pub use hill_climbing::{HillClimbing, Neighborhood};

/// A trait for local search algorithms starting from a single board.
pub trait LocalSearch: Debug + Send + Sync {
    /// Searches from `initial` until the search solves the board or peaks.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::NotConverged` if a configured move cap is hit.
    fn search(&self, initial: Board, rng: &mut RandomNumberGenerator) -> Result<RunResult>;
}
