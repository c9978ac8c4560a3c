//! Single-point crossover and single-column mutation on boards.

use crate::board::Board;
use crate::error::{QueensError, Result};
use crate::rng::RandomNumberGenerator;

/// Splits both parents at column `split` and swaps their tails.
///
/// The first child takes columns `[0, split)` from `first` and `[split, N)`
/// from `second`; the second child is the mirror image.
///
/// # Errors
///
/// Returns `QueensError::InvalidBoard` if the parents differ in size or
/// `split` is greater than the board size.
///
/// # Examples
///
/// ```
/// use queensearch::board::Board;
/// use queensearch::breeding::crossover_at;
///
/// let a = Board::new(vec![0, 0, 0, 0]).unwrap();
/// let b = Board::new(vec![3, 3, 3, 3]).unwrap();
/// let (ab, ba) = crossover_at(&a, &b, 1).unwrap();
///
/// assert_eq!(ab.rows(), &[0, 3, 3, 3]);
/// assert_eq!(ba.rows(), &[3, 0, 0, 0]);
/// ```
pub fn crossover_at(first: &Board, second: &Board, split: usize) -> Result<(Board, Board)> {
    let n = first.size();
    if second.size() != n {
        return Err(QueensError::InvalidBoard(format!(
            "Cannot cross boards of size {} and {}",
            n,
            second.size()
        )));
    }
    if split > n {
        return Err(QueensError::InvalidBoard(format!(
            "Crossover column {} is outside a board of size {}",
            split, n
        )));
    }

    let (first_head, first_tail) = first.rows().split_at(split);
    let (second_head, second_tail) = second.rows().split_at(split);

    let child_a = [first_head, second_tail].concat();
    let child_b = [second_head, first_tail].concat();

    Ok((
        Board::from_valid_rows(child_a),
        Board::from_valid_rows(child_b),
    ))
}

/// Crosses two parents at a random column in `[1, N)`, so each child keeps
/// at least one column of each parent. One-column boards are split at 0.
pub fn crossover(
    first: &Board,
    second: &Board,
    rng: &mut RandomNumberGenerator,
) -> Result<(Board, Board)> {
    let n = first.size();
    let split = if n > 1 { rng.between(1, n) } else { 0 };
    crossover_at(first, second, split)
}

/// With probability `chance`, reassigns one random column to a random row.
///
/// The new row is drawn from all `N` rows, so a triggered mutation may leave
/// the board unchanged.
pub fn mutate(board: Board, chance: f64, rng: &mut RandomNumberGenerator) -> Board {
    if !rng.chance(chance) {
        return board;
    }
    let n = board.size();
    let column = rng.index(n);
    let row = rng.index(n);
    board.with_row(column, row)
}
