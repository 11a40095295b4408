/// A bidirectional position in a [`DoubleVector`](crate::DoubleVector).
///
/// A cursor is a plain index tagged with the buffer it was taken from. It
/// borrows nothing, so it can outlive reallocations; dereferencing it through
/// [`DoubleVector::get`](crate::DoubleVector::get) after the buffer changed
/// reports [`StaleCursor`](crate::DoubleVectorError::StaleCursor) instead of
/// reading freed storage.
///
/// Stepping before `begin()` wraps the position, which then dereferences as
/// out of range. Stepping forward again brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: usize,
    stamp: u64,
}

impl Cursor {
    pub(crate) fn new(pos: usize, stamp: u64) -> Self {
        Self { pos, stamp }
    }

    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Pre-increment.
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Pre-decrement.
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Post-increment: advances and returns the previous position.
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Post-decrement: steps back and returns the previous position.
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    /// Number of steps from `self` to `other`; negative when `other` is behind.
    pub fn distance_to(&self, other: &Cursor) -> isize {
        other.pos.wrapping_sub(self.pos) as isize
    }
}
