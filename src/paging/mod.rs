use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::error::Result;
use crate::value_err;

mod aging;
mod clock;
pub mod frames;
mod optimal;
pub mod summary;

pub use aging::compute_aging_history;
pub use clock::second_chance;
pub use optimal::optimal;

pub type PageId = usize;

/// Snapshot of the frames right after one reference was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStep {
    /// Page held by each slot, in slot order.
    pub frames: Vec<Option<PageId>>,
    /// The page that was referenced.
    pub page: PageId,
    pub fault: bool,
    /// Reference bit of each slot, only recorded by the clock policy.
    pub ref_bits: Option<Vec<bool>>,
    /// Aging register of every resident page, filled in by
    /// [`compute_aging_history`].
    pub registers: Option<BTreeMap<PageId, u8>>,
}

impl SimulationStep {
    fn new(frames: Vec<Option<PageId>>, page: PageId, fault: bool) -> Self {
        SimulationStep { frames, page, fault, ref_bits: None, registers: None }
    }

    fn with_ref_bits(mut self, ref_bits: Vec<bool>) -> Self {
        self.ref_bits = Some(ref_bits);
        self
    }

    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().flatten().copied()
    }

    pub fn resident_count(&self) -> usize {
        self.resident().count()
    }

    /// Aging register of `page` at this step, pages that are not resident
    /// read as 0.
    pub fn register(&self, page: PageId) -> u8 {
        self.registers.as_ref().and_then(|r| r.get(&page).copied()).unwrap_or(0)
    }
}

/// The ordered steps of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    steps: Vec<SimulationStep>,
    page_faults: usize,
    hits: usize,
}

impl StepTrace {
    fn new() -> Self {
        StepTrace { steps: vec![], page_faults: 0, hits: 0 }
    }

    fn push(&mut self, step: SimulationStep) {
        if step.fault {
            self.page_faults += 1;
        } else {
            self.hits += 1;
        }
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    pub fn page_faults(&self) -> usize {
        self.page_faults
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every page that was resident at some step, ascending.
    pub fn pages(&self) -> Vec<PageId> {
        let mut pages: Vec<_> = self.steps.iter().flat_map(|s| s.resident()).collect();
        pages.sort_unstable();
        pages.dedup();
        pages
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ReplacementPolicy {
    Optimal,
    SecondChance,
}

impl ReplacementPolicy {
    pub const ALL: [ReplacementPolicy; 2] = [ReplacementPolicy::Optimal, ReplacementPolicy::SecondChance];

    pub fn simulate(&self, references: &[PageId], frame_count: usize) -> StepTrace {
        match self {
            ReplacementPolicy::Optimal => optimal(references, frame_count),
            ReplacementPolicy::SecondChance => second_chance(references, frame_count),
        }
    }

    /// Whether the traces of this policy carry reference bits, and so can
    /// be fed to [`compute_aging_history`].
    pub fn has_ref_bits(&self) -> bool {
        matches!(self, ReplacementPolicy::SecondChance)
    }
}

impl Display for ReplacementPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplacementPolicy::Optimal => write!(f, "Optimal"),
            ReplacementPolicy::SecondChance => write!(f, "Second Chance"),
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match name.as_str() {
            "optimal" | "opt" => Ok(ReplacementPolicy::Optimal),
            "second chance" | "secondchance" | "clock" => Ok(ReplacementPolicy::SecondChance),
            _ => Err(value_err!("Policy {} not implemented.", s)),
        }
    }
}

impl TryFrom<String> for ReplacementPolicy {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
