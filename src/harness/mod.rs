//! # Run Harness
//!
//! Drives many independent iterations of one solver and aggregates what they
//! report. Restarting after a local optimum is simply the next iteration.
//! Nothing here reads input or prints; the binary formats and persists.

pub mod config;
pub mod log;
pub mod runner;
pub mod summary;

pub use config::{Algorithm, RunConfig, RunConfigBuilder};
pub use log::{LogFormat, ResultsLog};
pub use runner::{run_batch, run_once, BatchReport, RunRecord};
pub use summary::Summary;
