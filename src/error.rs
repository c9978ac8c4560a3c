//! # Error Types
//!
//! This module defines the error type shared by the board model, both solvers
//! and the run harness. Every error is reported to the immediate caller; nothing
//! is retried internally and a failed run never produces a partial result.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use queensearch::board::Board;
//! use queensearch::error::{QueensError, Result};
//!
//! fn parse(rows: Vec<usize>) -> Result<Board> {
//!     Board::new(rows)
//! }
//!
//! match parse(vec![0, 7]) {
//!     Err(QueensError::InvalidBoard(msg)) => println!("rejected: {}", msg),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to foreign errors:
//!
//! ```rust
//! use queensearch::error::{Result, ResultExt};
//!
//! fn parse_size(raw: &str) -> Result<usize> {
//!     raw.trim().parse::<usize>().context("Failed to parse board size")
//! }
//!
//! assert!(parse_size("eight").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use queensearch::error::{OptionExt, QueensError};
//!
//! fn fittest(costs: &[usize]) -> queensearch::error::Result<usize> {
//!     costs.iter().min().cloned().ok_or_else_queens(|| QueensError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum QueensError {
    /// A run configuration was rejected before any search started.
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    /// A board is empty, has a row outside `[0, N)`, or does not match the
    /// size of the board it is combined with.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Selection or breeding was asked to operate on an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A move or generation cap was reached before the search terminated.
    #[error("Search did not converge within {steps} steps")]
    NotConverged {
        /// The cap that was exceeded.
        steps: usize,
    },

    /// Error that occurs when writing results fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for N-Queens search operations.
pub type Result<T> = std::result::Result<T, QueensError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use queensearch::error::ResultExt;
/// use std::fs::File;
///
/// fn open_log(path: &str) -> queensearch::error::Result<()> {
///     File::open(path).context("Failed to open results log")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `QueensError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| QueensError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, QueensError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_queens<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> QueensError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_queens<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> QueensError,
    {
        self.ok_or_else(err_fn)
    }
}
