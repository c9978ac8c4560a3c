//! A `State` pairs a [`Board`] with its conflict cost so the cost is computed
//! once per board and never goes stale.

use crate::board::Board;

/// The cost of a solved board: no attacking pairs.
pub const GOAL_COST: usize = 0;

/// A board together with its number of attacking pairs.
///
/// Deserializing re-evaluates the board; a serialized `cost` is ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StateFields"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    cost: usize,
}

impl State {
    /// Evaluates `board` and wraps it with its cost.
    pub fn new(board: Board) -> Self {
        let cost = board.cost();
        Self { board, cost }
    }

    /// Wraps a board whose cost was derived exactly elsewhere.
    pub(crate) fn with_cost(board: Board, cost: usize) -> Self {
        debug_assert_eq!(cost, board.cost());
        Self { board, cost }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Whether no two queens attack each other.
    pub fn is_goal(&self) -> bool {
        self.cost == GOAL_COST
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StateFields {
    board: Board,
}

#[cfg(feature = "serde")]
impl From<StateFields> for State {
    fn from(fields: StateFields) -> Self {
        Self::new(fields.board)
    }
}

impl From<Board> for State {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
