//! # ResultsLog
//!
//! Appends one tab-separated record per run to any writer, after a header
//! line. Times are wall-clock nanoseconds. Runs without a search cost (the
//! genetic solver) write `-` in that column.
//!
//! ## Example
//!
//! ```rust
//! use queensearch::harness::{LogFormat, ResultsLog};
//!
//! let log = ResultsLog::new(Vec::new(), LogFormat::WithSearchCost).unwrap();
//! let text = String::from_utf8(log.into_inner()).unwrap();
//!
//! assert_eq!(text, "run\tattacking_queens\tmoves\tsearch_cost\ttime\n");
//! ```

use std::io::Write;

use super::runner::RunRecord;
use crate::error::Result;

/// Columns written by a [`ResultsLog`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `run  attacking_queens  moves  search_cost  time`
    #[default]
    WithSearchCost,
    /// `run  attacking_queens  moves  time`
    WithoutSearchCost,
}

/// Tab-separated per-run results log.
#[derive(Debug)]
pub struct ResultsLog<W: Write> {
    writer: W,
    format: LogFormat,
}

impl<W: Write> ResultsLog<W> {
    /// Wraps `writer` and writes the header line.
    pub fn new(mut writer: W, format: LogFormat) -> Result<Self> {
        match format {
            LogFormat::WithSearchCost => {
                writeln!(writer, "run\tattacking_queens\tmoves\tsearch_cost\ttime")?
            }
            LogFormat::WithoutSearchCost => {
                writeln!(writer, "run\tattacking_queens\tmoves\ttime")?
            }
        }
        writer.flush()?;
        Ok(Self { writer, format })
    }

    /// Writes and flushes one record.
    pub fn write_record(&mut self, record: &RunRecord) -> Result<()> {
        let result = &record.result;
        match self.format {
            LogFormat::WithSearchCost => {
                let search_cost = result
                    .search_cost()
                    .map_or_else(|| "-".to_string(), |cost| cost.to_string());
                writeln!(
                    self.writer,
                    "{}\t{}\t{}\t{}\t{}",
                    record.run,
                    result.cost(),
                    result.steps(),
                    search_cost,
                    result.elapsed_nanos()
                )?;
            }
            LogFormat::WithoutSearchCost => {
                writeln!(
                    self.writer,
                    "{}\t{}\t{}\t{}",
                    record.run,
                    result.cost(),
                    result.steps(),
                    result.elapsed_nanos()
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes every record in order.
    pub fn write_all(&mut self, records: &[RunRecord]) -> Result<()> {
        records
            .iter()
            .try_for_each(|record| self.write_record(record))
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::outcome::{Outcome, RunResult};
    use crate::state::State;
    use std::time::Duration;

    fn record(run: usize, search_cost: Option<usize>) -> RunRecord {
        let state = State::new(Board::new(vec![0, 0, 0, 0]).unwrap());
        RunRecord {
            run,
            result: RunResult::new(
                state,
                Outcome::Peaked,
                3,
                search_cost,
                Duration::from_nanos(1500),
            ),
        }
    }

    #[test]
    fn test_five_column_log() {
        let mut log = ResultsLog::new(Vec::new(), LogFormat::WithSearchCost).unwrap();
        log.write_all(&[record(1, Some(36)), record(2, None)]).unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "run\tattacking_queens\tmoves\tsearch_cost\ttime");
        assert_eq!(lines[1], "1\t6\t3\t36\t1500");
        assert_eq!(lines[2], "2\t6\t3\t-\t1500");
    }

    #[test]
    fn test_four_column_log() {
        let mut log = ResultsLog::new(Vec::new(), LogFormat::WithoutSearchCost).unwrap();
        log.write_record(&record(7, Some(12))).unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "run\tattacking_queens\tmoves\ttime\n7\t6\t3\t1500\n");
    }
}
