use std::collections::BTreeMap;

use super::PageId;
use super::StepTrace;

/// Bit OR-ed into a register when the page's slot has its reference bit set.
const REFERENCED: u8 = 0x80;

/// Attach an 8-bit aging register to every resident page of every step of
/// a second-chance trace.
///
/// At each step a register is shifted right by one and the slot's reference
/// bit becomes its top bit. Registers only exist for pages resident at that
/// step, a page that leaves the frames loses its history and starts again
/// from 0 when it is loaded back.
///
/// Panics if the trace carries no reference bits.
pub fn compute_aging_history(mut trace: StepTrace) -> StepTrace {
    assert!(
        trace.steps.iter().all(|s| s.ref_bits.is_some()),
        "aging history requires reference bits on every step"
    );

    let mut previous: BTreeMap<PageId, u8> = BTreeMap::new();
    for step in trace.steps.iter_mut() {
        let ref_bits = step.ref_bits.as_deref().unwrap_or_default();
        let mut current = BTreeMap::new();
        for (slot, page) in step.frames.iter().enumerate() {
            let Some(page) = *page else {
                continue;
            };
            let prev = previous.get(&page).copied().unwrap_or(0);
            let bit = if ref_bits[slot] { REFERENCED } else { 0 };
            current.insert(page, (prev >> 1) | bit);
        }
        step.registers = Some(current.clone());
        previous = current;
    }

    trace
}
