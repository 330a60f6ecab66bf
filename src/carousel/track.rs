use std::num::NonZeroUsize;

/// Index state of a carousel: a fixed number of slides, exactly one active.
///
/// A track cannot be empty, so `activate` never has to guard against a
/// zero-length modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    len: NonZeroUsize,
    active: usize,
}

impl Track {
    /// Returns `None` for zero slides. Callers treat that as "no carousel".
    pub fn new(len: usize) -> Option<Self> {
        let len = NonZeroUsize::new(len)?;
        Some(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn activate(&mut self, index: usize) {
        debug_assert!(index < self.len(), "slide {} out of {}", index, self.len());
        self.active = index;
    }

    pub fn advance(&mut self) {
        self.activate((self.active + 1) % self.len());
    }

    pub fn retreat(&mut self) {
        // usize arithmetic: add len before subtracting so the result stays non-negative
        self.activate((self.active + self.len() - 1) % self.len());
    }

    pub fn jump_to(&mut self, index: usize) {
        self.activate(index);
    }
}
