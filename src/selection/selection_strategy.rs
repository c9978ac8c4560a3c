use std::fmt::Debug;

use crate::error::Result;
use crate::state::State;

/// Trait for selection strategies of the genetic solver.
///
/// A selection strategy decides which individuals of a generation survive to
/// breed the next one. The returned individuals are ordered best first; the
/// breeding step treats the first one as the elite.
///
/// # Examples
///
/// ```
/// use queensearch::board::Board;
/// use queensearch::error::Result;
/// use queensearch::selection::{ElitistSelection, SelectionStrategy};
/// use queensearch::state::State;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         State::new(Board::new(vec![0, 0, 0, 0])?),
///         State::new(Board::new(vec![1, 3, 0, 2])?),
///     ];
///
///     let selected = ElitistSelection::new().select(&population)?;
///
///     assert_eq!(selected.len(), 2);
///     assert!(selected[0].is_goal());
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the survivors of `population`, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The population size breaks the strategy's pairing invariant
    fn select(&self, population: &[State]) -> Result<Vec<State>>;
}
