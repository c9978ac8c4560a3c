//! # Successor Generation
//!
//! The neighbourhood of a board is every board obtained by moving exactly one
//! queen to another row of its column: `N * (N - 1)` candidates, enumerated
//! column by column and, inside a column, by ascending row.
//!
//! Candidates are produced lazily as [`Move`]s. Their costs come from a
//! [`ConflictTable`] built once per state (queens per row and per diagonal),
//! so each candidate costs O(1) to evaluate and a whole sweep is O(N²).
//! A board is only allocated for moves that are kept.
//!
//! ## Example
//!
//! ```rust
//! use queensearch::board::Board;
//! use queensearch::state::State;
//! use queensearch::successor::{better_successors, successors, GoalBoundary};
//!
//! let state = State::new(Board::new(vec![0, 0, 0, 0]).unwrap());
//! assert_eq!(successors(&state).count(), 12);
//!
//! let better = better_successors(&state, GoalBoundary::Inclusive);
//! assert!(better.iter().all(|s| s.cost() < state.cost()));
//! ```

use crate::board::Board;
use crate::state::{State, GOAL_COST};

/// Order of the states returned by [`all_successors`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessorOrder {
    /// Column-major, then row ascending.
    #[default]
    Enumeration,
    /// Ascending cost; equal costs keep enumeration order.
    AscendingCost,
}

/// Whether [`better_successors`] may return goal boards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalBoundary {
    /// Candidates of cost 0 are kept.
    #[default]
    Inclusive,
    /// Candidates of cost 0 are skipped; the bucket bottoms out at cost 1.
    Exclusive,
}

impl GoalBoundary {
    /// The lowest cost a kept successor may have.
    pub fn floor(self) -> usize {
        match self {
            GoalBoundary::Inclusive => GOAL_COST,
            GoalBoundary::Exclusive => GOAL_COST + 1,
        }
    }
}

/// Number of single-queen moves on a board of size `n`.
pub fn neighborhood_size(n: usize) -> usize {
    n * n.saturating_sub(1)
}

/// Queen counts per row and per diagonal of one board.
#[derive(Debug, Clone)]
pub struct ConflictTable {
    n: usize,
    rows: Vec<usize>,
    // Indexed by `row + n - 1 - column`.
    falling: Vec<usize>,
    // Indexed by `row + column`.
    rising: Vec<usize>,
}

impl ConflictTable {
    pub fn new(board: &Board) -> Self {
        let n = board.size();
        let mut table = Self {
            n,
            rows: vec![0; n],
            falling: vec![0; 2 * n - 1],
            rising: vec![0; 2 * n - 1],
        };

        for (column, &row) in board.rows().iter().enumerate() {
            table.rows[row] += 1;
            table.falling[row + n - 1 - column] += 1;
            table.rising[row + column] += 1;
        }

        table
    }

    /// Number of queens outside `column` that would attack a queen at
    /// `(column, row)`. `own_row` is the row the column's queen occupies now.
    ///
    /// A queen in another column can share at most one line with the square,
    /// so the three counts never overlap.
    pub fn conflicts(&self, column: usize, row: usize, own_row: usize) -> usize {
        let total = self.rows[row]
            + self.falling[row + self.n - 1 - column]
            + self.rising[row + column];
        if row == own_row {
            total - 3
        } else {
            total
        }
    }
}

/// A single-queen move and the exact cost of the board it leads to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub cost: usize,
}

impl Move {
    /// Builds the successor state of `parent` this move leads to.
    pub fn apply(&self, parent: &State) -> State {
        State::with_cost(parent.board().with_row(self.column, self.row), self.cost)
    }
}

/// Lazy iterator over every single-queen move of a state.
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    state: &'a State,
    table: ConflictTable,
    column: usize,
    row: usize,
    // Cost of the board with the current column's queen lifted off.
    lifted_cost: usize,
    remaining: usize,
}

impl<'a> Successors<'a> {
    fn new(state: &'a State) -> Self {
        let table = ConflictTable::new(state.board());
        let n = state.board().size();
        let mut successors = Self {
            state,
            table,
            column: 0,
            row: 0,
            lifted_cost: 0,
            remaining: neighborhood_size(n),
        };
        if n > 0 {
            successors.lifted_cost = successors.lift(0);
        }
        successors
    }

    fn lift(&self, column: usize) -> usize {
        let own_row = self.state.board().row(column);
        self.state.cost() - self.table.conflicts(column, own_row, own_row)
    }
}

impl Iterator for Successors<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let board = self.state.board();
        let n = board.size();

        while self.column < n {
            if self.row >= n {
                self.column += 1;
                self.row = 0;
                if self.column < n {
                    self.lifted_cost = self.lift(self.column);
                }
                continue;
            }

            let own_row = board.row(self.column);
            let row = self.row;
            self.row += 1;
            if row == own_row {
                continue;
            }

            self.remaining -= 1;
            return Some(Move {
                column: self.column,
                row,
                cost: self.lifted_cost + self.table.conflicts(self.column, row, own_row),
            });
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Successors<'_> {}

/// Lazily enumerates every single-queen move of `state`.
pub fn successors(state: &State) -> Successors<'_> {
    Successors::new(state)
}

/// Materialises every successor of `state`.
pub fn all_successors(state: &State, order: SuccessorOrder) -> Vec<State> {
    let mut moves: Vec<Move> = successors(state).collect();
    if order == SuccessorOrder::AscendingCost {
        // `sort_by_key` is stable, so ties keep enumeration order.
        moves.sort_by_key(|m| m.cost);
    }
    moves.iter().map(|m| m.apply(state)).collect()
}

/// Collects the successors that improve on `state` by at least one, keeping
/// only those that share the lowest cost seen.
///
/// The acceptance threshold starts at `max(state.cost() - 1, floor)` and drops
/// to every strictly lower cost found, discarding the bucket collected so
/// far. Candidates below the boundary's floor are skipped. Returns an empty
/// vector when `state` is a goal, already sits at the floor, or has no
/// improving move.
pub fn better_successors(state: &State, boundary: GoalBoundary) -> Vec<State> {
    better_moves(state, boundary)
        .iter()
        .map(|m| m.apply(state))
        .collect()
}

/// Same as [`better_successors`] without materialising boards.
pub fn better_moves(state: &State, boundary: GoalBoundary) -> Vec<Move> {
    let floor = boundary.floor();
    if state.is_goal() || state.cost() <= floor {
        return Vec::new();
    }

    let mut threshold = (state.cost() - 1).max(floor);
    let mut bucket = Vec::new();
    for candidate in successors(state) {
        if candidate.cost < floor || candidate.cost > threshold {
            continue;
        }
        if candidate.cost < threshold {
            threshold = candidate.cost;
            bucket.clear();
        }
        bucket.push(candidate);
    }

    bucket
}
