use std::fmt::Display;
use std::fmt::Formatter;

use super::DiskAlgorithm;
use super::SeekResult;

/// One completed disk scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub algorithm: DiskAlgorithm,
    pub seek_distance: usize,
    pub request_count: usize,
}

/// Summary collects the runs of a session so they can be compared side by side.
#[derive(Debug, Default, Clone)]
pub struct Summary {
    records: Vec<RunRecord>,
}

impl Summary {
    pub fn new() -> Self {
        Summary { records: vec![] }
    }

    pub fn record(&mut self, algorithm: DiskAlgorithm, result: &SeekResult, request_count: usize) {
        self.records.push(RunRecord {
            algorithm,
            seek_distance: result.total_seek,
            request_count,
        });
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The run with the smallest head movement, the earliest one wins a tie.
    pub fn best(&self) -> Option<&RunRecord> {
        self.records.iter().reduce(|best, r| if r.seek_distance < best.seek_distance { r } else { best })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No disk scheduling results to summarize.");
        }
        write!(f, "{:<10} | {:>13} | {:>13}", "Algorithm", "Seek Distance", "# of Requests")?;
        for r in &self.records {
            write!(
                f,
                "\n{:<10} | {:>13} | {:>13}",
                r.algorithm.to_string(),
                r.seek_distance,
                r.request_count
            )?;
        }
        Ok(())
    }
}
