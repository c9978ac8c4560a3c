//! The value every solver run hands back to its caller.

use std::time::Duration;

use crate::board::Board;
use crate::state::State;

/// How a run terminated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The terminal board has no attacking pairs.
    Solved,
    /// Hill climbing reached a local optimum with cost above zero.
    Peaked,
}

/// Terminal state and bookkeeping of one solver run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    terminal: State,
    outcome: Outcome,
    steps: usize,
    search_cost: Option<usize>,
    elapsed: Duration,
    path: Option<Vec<Board>>,
}

impl RunResult {
    pub(crate) fn new(
        terminal: State,
        outcome: Outcome,
        steps: usize,
        search_cost: Option<usize>,
        elapsed: Duration,
    ) -> Self {
        Self {
            terminal,
            outcome,
            steps,
            search_cost,
            elapsed,
            path: None,
        }
    }

    pub(crate) fn with_path(mut self, path: Option<Vec<Board>>) -> Self {
        self.path = path;
        self
    }

    /// The state the search stopped in.
    pub fn terminal(&self) -> &State {
        &self.terminal
    }

    pub fn terminal_board(&self) -> &Board {
        self.terminal.board()
    }

    /// Attacking pairs left on the terminal board.
    pub fn cost(&self) -> usize {
        self.terminal.cost()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Moves taken (hill climbing) or generations bred (genetic).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Successors examined; `None` for the genetic solver.
    pub fn search_cost(&self) -> Option<usize> {
        self.search_cost
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Every board visited, starting with the initial one, when recorded.
    pub fn path(&self) -> Option<&[Board]> {
        self.path.as_deref()
    }
}
