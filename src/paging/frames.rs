use super::PageId;

/// FrameSet is a fixed number of memory slots, each either empty or holding
/// one resident page. A page is resident in at most one slot.
#[derive(Debug, Clone)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "frame count should be larger than zero");
        FrameSet { slots: vec![None; capacity] }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The slot holding `page`, if it is resident.
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&s| s == Some(page))
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    /// The lowest-index empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn get(&self, slot: usize) -> Option<PageId> {
        self.slots[slot]
    }

    /// Place `page` into `slot`, returning the page it evicted, if any.
    pub fn install(&mut self, slot: usize, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "page {} is already resident", page);
        self.slots[slot].replace(page)
    }

    /// Resident pages with their slot index, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = (usize, PageId)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.map(|p| (i, p)))
    }

    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
