//! Cyclic cursors for carousels and galleries.

use serde::{Deserialize, Serialize};

/// Step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// Move `current` one step in `direction` around a ring of `len` slots.
///
/// Returns `None` for an empty ring. An out-of-range `current` is first
/// reduced modulo `len`, so the result is always in `0..len`.
pub fn advance(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    // current < len here, so neither branch can overflow
    Some(match direction {
        Direction::Forward if current + 1 == len => 0,
        Direction::Forward => current + 1,
        Direction::Backward if current == 0 => len - 1,
        Direction::Backward => current - 1,
    })
}

/// A cursor over a fixed, non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Cursor at 0, or `None` when there is nothing to cycle through.
    pub fn new(len: usize) -> Option<Self> {
        Self::at(0, len)
    }

    /// Cursor at `index` (wrapped into range), or `None` for an empty
    /// sequence.
    pub fn at(index: usize, len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            index: index % len,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a carousel is never built over an empty sequence.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn step(&mut self, direction: Direction) -> usize {
        // len > 0 by construction
        self.index = advance(self.index, self.len, direction).unwrap_or(0);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.step(Direction::Forward)
    }

    pub fn prev(&mut self) -> usize {
        self.step(Direction::Backward)
    }

    /// Jump to `index`, wrapping if it is past the end.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn two_image_gallery() {
        assert_eq!(advance(0, 2, Direction::Forward), Some(1));
        assert_eq!(advance(1, 2, Direction::Forward), Some(0));
        assert_eq!(advance(0, 2, Direction::Backward), Some(1));
    }

    #[test]
    fn single_slot_stays_put() {
        assert_eq!(advance(0, 1, Direction::Forward), Some(0));
        assert_eq!(advance(0, 1, Direction::Backward), Some(0));
    }

    #[test]
    fn empty_ring_is_guarded() {
        assert_eq!(advance(0, 0, Direction::Forward), None);
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn out_of_range_current_wraps() {
        assert_eq!(advance(7, 3, Direction::Forward), Some(2));
        assert_eq!(advance(3, 3, Direction::Backward), Some(2));
    }

    #[test]
    fn huge_ring_does_not_overflow() {
        let len = usize::MAX;
        assert_eq!(advance(len - 1, len, Direction::Forward), Some(0));
        assert_eq!(advance(len - 2, len, Direction::Forward), Some(len - 1));
        assert_eq!(advance(len - 1, len, Direction::Backward), Some(len - 2));
        assert_eq!(advance(0, len, Direction::Backward), Some(len - 1));
    }

    #[test]
    fn carousel_starts_where_placed() {
        let mut c = Carousel::at(4, 3).unwrap();
        assert_eq!(c.index(), 1);
        assert_eq!(c.next(), 2);
        assert!(Carousel::at(4, 0).is_none());
    }

    #[test]
    fn carousel_cycles() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.select(5), 2);
        c.reset();
        assert_eq!(c.index(), 0);
    }
}
