/// Playback walks forward and backward over an already computed trace,
/// e.g. the steps of a [`crate::paging::StepTrace`] or the service order of
/// a [`crate::disk::SeekResult`]. Moving around never recomputes anything,
/// the position is the only state.
#[derive(Debug, Clone)]
pub struct Playback<'a, T> {
    items: &'a [T],
    /// Number of items revealed so far.
    position: usize,
}

impl<'a, T> Playback<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Playback { items, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.items.len()
    }

    /// The most recently revealed item.
    pub fn current(&self) -> Option<&'a T> {
        self.position.checked_sub(1).map(|i| &self.items[i])
    }

    /// Items revealed so far, in order.
    pub fn visited(&self) -> &'a [T] {
        &self.items[..self.position]
    }

    /// Step back, hiding the most recently revealed item and returning it.
    pub fn previous(&mut self) -> Option<&'a T> {
        let item = self.current()?;
        self.position -= 1;
        Some(item)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a, T> Iterator for Playback<'a, T> {
    type Item = &'a T;

    /// Reveal the next item.
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}
