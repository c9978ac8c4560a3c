//! # Board
//!
//! A `Board` places exactly one queen in every column: the value at index `c`
//! is the row of the queen standing in column `c`. Boards are immutable; every
//! move, crossover or mutation builds a new one.
//!
//! The cost of a board is the number of unordered queen pairs that attack each
//! other, either by sharing a row or by sitting on a common diagonal. A board
//! with cost 0 is a solution.
//!
//! ## Example
//!
//! ```rust
//! use queensearch::board::Board;
//!
//! let solved = Board::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(solved.cost(), 0);
//!
//! let stacked = Board::new(vec![0, 0, 0, 0]).unwrap();
//! assert_eq!(stacked.cost(), 6);
//! ```

use std::fmt;

use crate::error::{QueensError, Result};
use crate::rng::RandomNumberGenerator;

/// How random boards are generated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardGeneration {
    /// A shuffled permutation: every row holds exactly one queen, so only
    /// diagonal conflicts remain.
    #[default]
    Permutation,
    /// Every column draws its row independently; rows may repeat.
    Independent,
}

/// One queen per column, column → row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board from a column → row assignment.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidBoard` if `rows` is empty or any row is
    /// outside `[0, rows.len())`.
    pub fn new(rows: Vec<usize>) -> Result<Self> {
        if rows.is_empty() {
            return Err(QueensError::InvalidBoard(
                "Board must have at least one column".to_string(),
            ));
        }

        let n = rows.len();
        if let Some((column, row)) = rows.iter().enumerate().find(|(_, &row)| row >= n) {
            return Err(QueensError::InvalidBoard(format!(
                "Row {} in column {} is outside [0, {})",
                row, column, n
            )));
        }

        Ok(Self { rows })
    }

    /// Builds a board whose rows are already known to be valid.
    pub(crate) fn from_valid_rows(rows: Vec<usize>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|&row| row < rows.len()));
        Self { rows }
    }

    /// Generates a random board of size `n` with the given convention.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidBoard` if `n` is 0.
    pub fn random(
        n: usize,
        generation: BoardGeneration,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if n == 0 {
            return Err(QueensError::InvalidBoard(
                "Cannot generate a board with zero columns".to_string(),
            ));
        }

        let rows = match generation {
            BoardGeneration::Permutation => {
                let mut rows: Vec<usize> = (0..n).collect();
                rng.shuffle(&mut rows);
                rows
            }
            BoardGeneration::Independent => (0..n).map(|_| rng.index(n)).collect(),
        };

        Ok(Self::from_valid_rows(rows))
    }

    /// The number of columns (and rows).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The row of every column's queen.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// The row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Counts attacking pairs between `column` and the columns to its left.
    ///
    /// Summing this over every column counts each pair exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn column_cost(&self, column: usize) -> usize {
        let row = self.rows[column];
        self.rows[..column]
            .iter()
            .enumerate()
            .filter(|&(other, &other_row)| attacks(other, other_row, column, row))
            .count()
    }

    /// Counts the attacking queen pairs on the board.
    pub fn cost(&self) -> usize {
        (0..self.size()).map(|column| self.column_cost(column)).sum()
    }

    /// Returns a copy of the board with the queen of `column` moved to `row`.
    pub(crate) fn with_row(&self, column: usize, row: usize) -> Self {
        let mut rows = self.rows.clone();
        rows[column] = row;
        Self::from_valid_rows(rows)
    }

    /// Moves one random queen a single row up or down, wrapping at the edges.
    ///
    /// On a one-column board the result equals the input.
    pub fn random_neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
        let n = self.size();
        let column = rng.index(n);
        let current = self.rows[column];
        let row = if rng.coin() {
            (current + 1) % n
        } else {
            (current + n - 1) % n
        };
        self.with_row(column, row)
    }

    /// The largest cost a board of size `n` can have.
    pub fn max_cost(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

/// Whether queens at `(c1, r1)` and `(c2, r2)` in different columns attack.
pub(crate) fn attacks(c1: usize, r1: usize, c2: usize, r2: usize) -> bool {
    r1 == r2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

impl TryFrom<Vec<usize>> for Board {
    type Error = QueensError;

    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

/// Renders one text line per column, `Q` marking the queen's row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for (column, &row) in self.rows.iter().enumerate() {
            if column > 0 {
                writeln!(f)?;
            }
            for square in 0..n {
                let cell = if square == row { 'Q' } else { '.' };
                if square + 1 < n {
                    write!(f, "{} ", cell)?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let result = Board::new(Vec::new());
        assert!(matches!(result, Err(QueensError::InvalidBoard(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_row() {
        match Board::new(vec![0, 1, 4, 2]) {
            Err(QueensError::InvalidBoard(msg)) => assert!(msg.contains("column 2")),
            _ => panic!("Expected InvalidBoard error"),
        }
    }

    #[test]
    fn test_known_solutions_have_zero_cost() {
        let solutions = [
            vec![1, 3, 0, 2],
            vec![0, 2, 4, 1, 3],
            vec![0, 4, 7, 5, 2, 6, 1, 3],
        ];

        for rows in solutions {
            let board = Board::new(rows).unwrap();
            assert_eq!(board.cost(), 0, "{:?}", board);
        }
    }

    #[test]
    fn test_all_same_row_is_max_cost() {
        let board = Board::new(vec![0, 0, 0, 0]).unwrap();
        assert_eq!(board.cost(), 6);
        assert_eq!(board.cost(), Board::max_cost(4));
    }

    #[test]
    fn test_main_diagonal_is_max_cost() {
        let board = Board::new(vec![0, 1, 2, 3, 4]).unwrap();
        assert_eq!(board.cost(), Board::max_cost(5));
    }

    #[test]
    fn test_column_cost_only_looks_left() {
        let board = Board::new(vec![0, 0, 3, 3]).unwrap();
        assert_eq!(board.column_cost(0), 0);
        assert_eq!(board.column_cost(1), 1);
        // Shares a row with column 2 and a diagonal with column 0.
        assert_eq!(board.column_cost(3), 2);
    }

    #[test]
    fn test_cost_bounds_and_determinism() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        for n in 1..10 {
            for generation in [BoardGeneration::Permutation, BoardGeneration::Independent] {
                let board = Board::random(n, generation, &mut rng).unwrap();
                let cost = board.cost();
                assert!(cost <= Board::max_cost(n));
                assert_eq!(cost, board.cost());
            }
        }
    }

    #[test]
    fn test_cost_is_symmetric_under_reversal() {
        let board = Board::new(vec![2, 0, 3, 3, 1]).unwrap();
        let mut reversed = board.rows().to_vec();
        reversed.reverse();
        assert_eq!(board.cost(), Board::new(reversed).unwrap().cost());
    }

    #[test]
    fn test_permutation_uses_every_row() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let board = Board::random(12, BoardGeneration::Permutation, &mut rng).unwrap();
        let mut rows = board.rows().to_vec();
        rows.sort_unstable();
        assert_eq!(rows, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_rejects_zero_size() {
        let mut rng = RandomNumberGenerator::new();
        let result = Board::random(0, BoardGeneration::Independent, &mut rng);
        assert!(matches!(result, Err(QueensError::InvalidBoard(_))));
    }

    #[test]
    fn test_random_neighbor_moves_one_queen_one_row() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let board = Board::new(vec![0, 3, 1, 2]).unwrap();
        for _ in 0..20 {
            let neighbor = board.random_neighbor(&mut rng);
            let changed: Vec<usize> = (0..4)
                .filter(|&c| board.row(c) != neighbor.row(c))
                .collect();
            assert_eq!(changed.len(), 1);
            let c = changed[0];
            let distance = (board.row(c) + 4 - neighbor.row(c)) % 4;
            assert!(distance == 1 || distance == 3);
        }
    }

    #[test]
    fn test_display() {
        let board = Board::new(vec![1, 3, 0, 2]).unwrap();
        let expected = ". Q . .\n. . . Q\nQ . . .\n. . Q .";
        assert_eq!(board.to_string(), expected);
    }
}
