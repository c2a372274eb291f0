use std::fmt::Display;
use std::fmt::Formatter;

use crate::disk::SeekResult;
use crate::paging::SimulationStep;
use crate::paging::StepTrace;

/// Join the displayed items with `sep`.
fn join<T: Display>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    items.into_iter().map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}

impl Display for SeekResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Request Order: {}", join(&self.order, " -> "))?;
        write!(f, "Total Seek Distance: {}", self.total_seek)
    }
}

impl Display for SimulationStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let frames = self.frames.iter().map(|s| match s {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        });
        write!(f, "page {}: [{}]", self.page, join(frames, ", "))?;
        if let Some(bits) = &self.ref_bits {
            write!(f, " R=[{}]", join(bits.iter().map(|&b| u8::from(b)), ", "))?;
        }
        write!(f, " {}", if self.fault { "fault" } else { "hit" })
    }
}

impl Display for StepTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps().iter().enumerate() {
            writeln!(f, "step {}: {}", i + 1, step)?;
        }
        write!(f, "page faults: {}, hits: {}", self.page_faults(), self.hits())
    }
}

/// Render the aging history of a trace: one row per page that was ever
/// resident, one 8-bit register per step. A page that is not resident at a
/// step shows `00000000`.
pub fn aging_table(trace: &StepTrace) -> String {
    let rows = trace.pages().into_iter().map(|page| {
        let cells = trace.steps().iter().map(|s| format!("{:08b}", s.register(page)));
        format!("page {}: {}", page, join(cells, " "))
    });
    join(rows, "\n")
}
