use std::fmt;
use std::time::Duration;

use super::runner::RunRecord;

/// Solve-rate and step statistics of a batch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    iterations: usize,
    solved_runs: Vec<usize>,
    solved_steps: usize,
    unsolved: usize,
    unsolved_steps: usize,
    not_converged: usize,
    total_elapsed: Duration,
}

impl Summary {
    /// Aggregates `records` out of `iterations` attempted runs, of which
    /// `not_converged` produced no record.
    pub fn new(records: &[RunRecord], iterations: usize, not_converged: usize) -> Self {
        let mut summary = Self {
            iterations,
            solved_runs: Vec::new(),
            solved_steps: 0,
            unsolved: 0,
            unsolved_steps: 0,
            not_converged,
            total_elapsed: Duration::ZERO,
        };

        for record in records {
            let result = &record.result;
            if result.is_solved() {
                summary.solved_runs.push(record.run);
                summary.solved_steps += result.steps();
            } else {
                summary.unsolved += 1;
                summary.unsolved_steps += result.steps();
            }
            summary.total_elapsed += result.elapsed();
        }

        summary
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn solved(&self) -> usize {
        self.solved_runs.len()
    }

    /// 1-based numbers of the solved runs, ascending.
    pub fn solved_runs(&self) -> &[usize] {
        &self.solved_runs
    }

    /// Runs that terminated on a local optimum.
    pub fn unsolved(&self) -> usize {
        self.unsolved
    }

    pub fn not_converged(&self) -> usize {
        self.not_converged
    }

    /// Percentage of attempted runs that were solved.
    pub fn solve_rate(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.solved() as f64 / self.iterations as f64 * 100.0
    }

    /// Mean steps of the solved runs.
    pub fn mean_steps_solved(&self) -> Option<f64> {
        mean(self.solved_steps, self.solved())
    }

    /// Mean steps of the runs that peaked.
    pub fn mean_steps_unsolved(&self) -> Option<f64> {
        mean(self.unsolved_steps, self.unsolved)
    }

    /// Mean wall-clock time of the runs that produced a result.
    pub fn mean_elapsed(&self) -> Option<Duration> {
        let finished = self.solved() + self.unsolved;
        u32::try_from(finished)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| self.total_elapsed / n)
    }
}

fn mean(total: usize, count: usize) -> Option<f64> {
    (count > 0).then(|| total as f64 / count as f64)
}

fn or_dash(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.1}% of problems were solved.", self.solve_rate())?;
        writeln!(
            f,
            "Avg. number of steps needed per solution: {}",
            or_dash(self.mean_steps_solved())
        )?;
        writeln!(
            f,
            "Avg. number of steps needed per no solution: {}",
            or_dash(self.mean_steps_unsolved())
        )?;
        if self.not_converged > 0 {
            writeln!(f, "Runs stopped at the step cap: {}", self.not_converged)?;
        }
        if let Some(elapsed) = self.mean_elapsed() {
            writeln!(f, "Avg. run time: {:?}", elapsed)?;
        }
        write!(f, "Solution set (run #): {:?}", self.solved_runs)
    }
}
