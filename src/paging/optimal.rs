use log::debug;

use super::frames::FrameSet;
use super::PageId;
use super::SimulationStep;
use super::StepTrace;

/// Optimal (Belady) replacement: on a fault with no free slot, evict the
/// resident page whose next use lies farthest in the future.
pub fn optimal(references: &[PageId], frame_count: usize) -> StepTrace {
    let mut frames = FrameSet::new(frame_count);
    let mut trace = StepTrace::new();

    for (i, &page) in references.iter().enumerate() {
        let fault = if frames.contains(page) {
            debug!("optimal: page {} hit", page);
            false
        } else {
            let slot = match frames.first_empty() {
                Some(slot) => slot,
                None => victim(&frames, &references[i + 1..]),
            };
            match frames.install(slot, page) {
                Some(evicted) => debug!("optimal: page {} replaces {} in slot {}", page, evicted, slot),
                None => debug!("optimal: page {} loaded into slot {}", page, slot),
            }
            true
        };
        trace.push(SimulationStep::new(frames.snapshot(), page, fault));
    }

    trace
}

/// Pick the slot to evict given the references still to come.
///
/// The first resident page that is never referenced again is chosen right
/// away. Otherwise the page whose next reference is farthest away is chosen,
/// and among equally far pages the one in the lowest slot.
fn victim(frames: &FrameSet, future: &[PageId]) -> usize {
    let mut victim = 0;
    let mut farthest = None;
    for (slot, page) in frames.resident() {
        match future.iter().position(|&p| p == page) {
            None => return slot,
            Some(next) => {
                if farthest.map_or(true, |f| next > f) {
                    farthest = Some(next);
                    victim = slot;
                }
            }
        }
    }
    victim
}
