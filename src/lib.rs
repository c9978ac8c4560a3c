pub mod board;
pub mod breeding;
pub mod error;
pub mod evolution;
pub mod harness;
pub mod local_search;
pub mod outcome;
pub mod rng;
pub mod selection;
pub mod state;
pub mod successor;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGeneration};
pub use error::{OptionExt, QueensError, Result, ResultExt};
pub use harness::{run_batch, run_once, Algorithm, RunConfig};
pub use outcome::{Outcome, RunResult};
pub use state::{State, GOAL_COST};
