use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::error::Result;
use crate::value_err;

mod clook;
mod cscan;
pub mod summary;

pub use clook::clook;
pub use cscan::cscan;

/// Addressable disk head position.
pub type Cylinder = usize;

/// The service order of a schedule, starting at the head, together with
/// the total head movement it takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekResult {
    pub order: Vec<Cylinder>,
    pub total_seek: usize,
}

impl SeekResult {
    /// Number of head movements, i.e. the number of playback steps.
    pub fn hops(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}

/// Head tracks the disk head while a schedule is built.
struct Head {
    current: Cylinder,
    result: SeekResult,
}

impl Head {
    fn new(start: Cylinder) -> Self {
        Head { current: start, result: SeekResult { order: vec![start], total_seek: 0 } }
    }

    /// Move the head to `to` and record it as the next stop.
    fn seek(&mut self, to: Cylinder) {
        self.result.total_seek += self.current.abs_diff(to);
        self.result.order.push(to);
        self.current = to;
    }

    /// Move the head to `to` without recording a stop.
    fn jump(&mut self, to: Cylinder) {
        self.result.total_seek += self.current.abs_diff(to);
        self.current = to;
    }

    /// Return the head to cylinder 0, the move costs the current position.
    fn wrap(&mut self) {
        self.result.total_seek += self.current;
        self.result.order.push(0);
        self.current = 0;
    }

    fn finish(self) -> SeekResult {
        self.result
    }
}

/// Sort the requests ascending and split them into the ones below the head
/// and the ones at or above it. Duplicates are kept.
fn partition(requests: &[Cylinder], head: Cylinder) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let mut left = requests.to_vec();
    left.sort_unstable();
    let at = left.partition_point(|&r| r < head);
    let right = left.split_off(at);
    (left, right)
}

/// Deserialized through [`FromStr`], so a config value takes the same
/// spellings as the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DiskAlgorithm {
    CScan,
    CLook,
}

impl DiskAlgorithm {
    pub const ALL: [DiskAlgorithm; 2] = [DiskAlgorithm::CScan, DiskAlgorithm::CLook];

    /// Run the algorithm, `disk_size` is only meaningful for C-SCAN.
    pub fn schedule(&self, requests: &[Cylinder], head: Cylinder, disk_size: usize) -> SeekResult {
        match self {
            DiskAlgorithm::CScan => cscan(requests, head, disk_size),
            DiskAlgorithm::CLook => clook(requests, head),
        }
    }
}

impl Display for DiskAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DiskAlgorithm::CScan => write!(f, "C-SCAN"),
            DiskAlgorithm::CLook => write!(f, "C-LOOK"),
        }
    }
}

impl FromStr for DiskAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C-SCAN" | "CSCAN" => Ok(DiskAlgorithm::CScan),
            "C-LOOK" | "CLOOK" => Ok(DiskAlgorithm::CLook),
            _ => Err(value_err!("Algorithm {} not implemented.", s)),
        }
    }
}

impl TryFrom<String> for DiskAlgorithm {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
