use log::debug;

use super::frames::FrameSet;
use super::PageId;
use super::SimulationStep;
use super::StepTrace;

/// ClockHand is the rotating pointer of the clock, it always points at a
/// valid slot.
#[derive(Debug)]
struct ClockHand {
    position: usize,
    len: usize,
}

impl ClockHand {
    fn new(len: usize) -> Self {
        ClockHand { position: 0, len }
    }

    fn advance(&mut self) {
        self.position = (self.position + 1) % self.len;
    }
}

/// Clock holds the frames, their reference bits and the hand of one
/// second-chance run.
#[derive(Debug)]
struct Clock {
    frames: FrameSet,
    ref_bits: Vec<bool>,
    hand: ClockHand,
}

impl Clock {
    fn new(frame_count: usize) -> Self {
        let frames = FrameSet::new(frame_count);
        Clock { frames, ref_bits: vec![false; frame_count], hand: ClockHand::new(frame_count) }
    }

    /// Handle a reference to `page`. Return None on a hit, otherwise the
    /// number of slots inspected to find the victim.
    fn reference(&mut self, page: PageId) -> Option<usize> {
        if let Some(slot) = self.frames.position(page) {
            debug!("second-chance: page {} hit in slot {}, set R=1", page, slot);
            self.ref_bits[slot] = true;
            return None;
        }

        let (slot, inspections) = self.find_victim();
        match self.frames.install(slot, page) {
            Some(evicted) => debug!("second-chance: page {} replaces {} in slot {}", page, evicted, slot),
            None => debug!("second-chance: page {} loaded into slot {}", page, slot),
        }
        self.ref_bits[slot] = true;
        self.hand.advance();
        Some(inspections)
    }

    /// Sweep the hand until it rests on a slot whose reference bit is clear,
    /// clearing every set bit it passes. The hand is left on the victim.
    ///
    /// A full turn clears every bit, so the sweep ends within two turns.
    fn find_victim(&mut self) -> (usize, usize) {
        let mut inspections = 0;
        loop {
            let slot = self.hand.position;
            inspections += 1;
            if !self.ref_bits[slot] {
                debug_assert!(inspections <= 2 * self.hand.len);
                return (slot, inspections);
            }
            debug!("second-chance: give slot {} a second chance", slot);
            self.ref_bits[slot] = false;
            self.hand.advance();
        }
    }

    fn snapshot(&self, page: PageId, fault: bool) -> SimulationStep {
        SimulationStep::new(self.frames.snapshot(), page, fault).with_ref_bits(self.ref_bits.clone())
    }
}

/// Second-chance (clock) replacement. Each slot carries a reference bit
/// that is set on every access; the hand skips, and clears, slots whose bit
/// is set and evicts the first slot whose bit is clear.
pub fn second_chance(references: &[PageId], frame_count: usize) -> StepTrace {
    let mut clock = Clock::new(frame_count);
    let mut trace = StepTrace::new();

    for &page in references {
        let fault = clock.reference(page).is_some();
        trace.push(clock.snapshot(page, fault));
    }

    trace
}
