use std::fmt::Display;
use std::fmt::Formatter;

use super::ReplacementPolicy;
use super::StepTrace;

/// One completed page replacement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub policy: ReplacementPolicy,
    pub page_faults: usize,
    pub hits: usize,
}

/// Summary collects the page replacement runs of a session.
#[derive(Debug, Default, Clone)]
pub struct Summary {
    records: Vec<RunRecord>,
}

impl Summary {
    pub fn new() -> Self {
        Summary { records: vec![] }
    }

    pub fn record(&mut self, policy: ReplacementPolicy, trace: &StepTrace) {
        self.records.push(RunRecord { policy, page_faults: trace.page_faults(), hits: trace.hits() });
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The run with the fewest page faults, the earliest one wins a tie.
    pub fn best(&self) -> Option<&RunRecord> {
        self.records.iter().reduce(|best, r| if r.page_faults < best.page_faults { r } else { best })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No simulation results to summarize.");
        }
        write!(f, "{:<13} | {:>11} | {:>6}", "Algorithm", "Page Faults", "Hits")?;
        for r in &self.records {
            write!(f, "\n{:<13} | {:>11} | {:>6}", r.policy.to_string(), r.page_faults, r.hits)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn test_summary() -> Result<()> {
        let references = [1, 2, 3, 2, 4, 1, 5, 2];
        let mut summary = Summary::new();
        assert!(summary.is_empty());
        assert_eq!(None, summary.best());
        assert_eq!("No simulation results to summarize.", summary.to_string());

        for policy in ReplacementPolicy::ALL {
            summary.record(policy, &policy.simulate(&references, 3));
        }

        let counts: Vec<_> = summary.records().iter().map(|r| (r.page_faults, r.hits)).collect();
        assert_eq!(vec![(5, 3), (7, 1)], counts);
        assert_eq!(Some(ReplacementPolicy::Optimal), summary.best().map(|r| r.policy));

        let lines: Vec<_> = summary.to_string().lines().map(String::from).collect();
        assert_eq!(3, lines.len());
        assert_eq!("Algorithm     | Page Faults |   Hits", lines[0]);
        assert_eq!("Optimal       |           5 |      3", lines[1]);
        assert_eq!("Second Chance |           7 |      1", lines[2]);
        Ok(())
    }

    #[test]
    fn test_best_keeps_earliest_on_tie() -> Result<()> {
        let references = [1, 2, 1, 2];
        let mut summary = Summary::new();
        summary.record(ReplacementPolicy::SecondChance, &ReplacementPolicy::SecondChance.simulate(&references, 2));
        summary.record(ReplacementPolicy::Optimal, &ReplacementPolicy::Optimal.simulate(&references, 2));
        assert_eq!(summary.records()[0].page_faults, summary.records()[1].page_faults);
        assert_eq!(Some(ReplacementPolicy::SecondChance), summary.best().map(|r| r.policy));
        Ok(())
    }
}
