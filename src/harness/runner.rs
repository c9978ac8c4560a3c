use std::ops::RangeInclusive;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use super::config::{Algorithm, RunConfig};
use super::summary::Summary;
use crate::{
    board::Board,
    error::{QueensError, Result},
    outcome::RunResult,
    rng::RandomNumberGenerator,
};

/// One finished iteration of a batch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// 1-based iteration number.
    pub run: usize,
    pub result: RunResult,
}

/// Every record of a batch, in run order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    records: Vec<RunRecord>,
    not_converged: Vec<usize>,
    iterations: usize,
}

impl BatchReport {
    /// Runs that terminated, solved or peaked.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Run numbers that hit the step cap and produced no result.
    pub fn not_converged(&self) -> &[usize] {
        &self.not_converged
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn summary(&self) -> Summary {
        Summary::new(&self.records, self.iterations, self.not_converged.len())
    }

    fn merge(mut self, other: BatchReport) -> Self {
        self.records.extend(other.records);
        self.not_converged.extend(other.not_converged);
        self.iterations += other.iterations;
        self
    }
}

/// Runs one iteration: draws the initial board(s) and hands them to the
/// configured solver.
///
/// # Errors
///
/// Returns `NotConverged` when the configured step cap is hit and propagates
/// configuration errors.
pub fn run_once(config: &RunConfig, rng: &mut RandomNumberGenerator) -> Result<RunResult> {
    match config.algorithm() {
        Algorithm::HillClimbing => {
            let board = Board::random(config.board_size(), config.board_generation(), rng)?;
            config.hill_climber()?.climb(board, rng)
        }
        Algorithm::Genetic => {
            config
                .launcher()?
                .evolve(&config.evolution_options()?, config.board_size(), rng)
        }
    }
}

/// Runs every iteration of `config`.
///
/// The batch draws from one master stream, seeded from `config.seed()` when
/// given. With more than one worker the iterations are split into contiguous
/// chunks; each chunk gets its own stream forked from the master and its own
/// report, and the reports are concatenated in run order afterwards.
///
/// Iterations that hit the step cap are listed in
/// [`BatchReport::not_converged`]; any other error aborts the batch.
pub fn run_batch(config: &RunConfig) -> Result<BatchReport> {
    config.validate()?;

    let span = info_span!(
        "batch",
        algorithm = ?config.algorithm(),
        size = config.board_size(),
        iterations = config.iterations()
    );
    let _enter = span.enter();

    let mut master = match config.seed() {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let workers = config.workers().min(config.iterations());
    if workers <= 1 {
        return run_chunk(config, 1..=config.iterations(), &mut master);
    }

    let chunks: Vec<(RangeInclusive<usize>, RandomNumberGenerator)> =
        partition(config.iterations(), workers)
            .into_iter()
            .map(|range| (range, master.fork()))
            .collect();

    debug!(workers, "running batch in parallel");

    let reports = chunks
        .into_par_iter()
        .map(|(range, mut rng)| run_chunk(config, range, &mut rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(reports
        .into_iter()
        .fold(BatchReport::default(), BatchReport::merge))
}

fn run_chunk(
    config: &RunConfig,
    runs: RangeInclusive<usize>,
    rng: &mut RandomNumberGenerator,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for run in runs {
        report.iterations += 1;
        match run_once(config, rng) {
            Ok(result) => {
                info!(
                    run,
                    cost = result.cost(),
                    steps = result.steps(),
                    outcome = ?result.outcome(),
                    "run finished"
                );
                report.records.push(RunRecord { run, result });
            }
            Err(QueensError::NotConverged { steps }) => {
                warn!(run, steps, "run did not converge");
                report.not_converged.push(run);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Splits runs `1..=iterations` into `workers` contiguous, near-equal chunks.
fn partition(iterations: usize, workers: usize) -> Vec<RangeInclusive<usize>> {
    let base = iterations / workers;
    let extra = iterations % workers;
    let mut next = 1;

    (0..workers)
        .map(|worker| {
            let len = base + usize::from(worker < extra);
            let range = next..=next + len - 1;
            next += len;
            range
        })
        .collect()
}
