use std::fmt;

use glam::Mat4;

/// Pop was called on an empty [`MatrixStack`].
///
/// Always a push/pop imbalance in the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StackUnderflow;

impl fmt::Display for StackUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix stack underflow: pop without matching push")
    }
}

impl std::error::Error for StackUnderflow {}

/// LIFO of saved transforms.
///
/// Mirrors recursion during traversal: one `push` on descent, one `pop` on
/// return. Depth is bounded by the tree height only.
///
/// Push/pop counters are cumulative and survive [`clear`](Self::clear) so a
/// caller can compare them before and after a walk.
#[derive(Debug, Clone, Default)]
pub struct MatrixStack {
    items: Vec<Mat4>,
    pushes: u64,
    pops: u64,
}

impl MatrixStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack with room for `depth` entries.
    #[inline]
    pub fn with_capacity(depth: usize) -> Self {
        Self {
            items: Vec::with_capacity(depth),
            ..Self::default()
        }
    }

    #[inline]
    pub fn push(&mut self, m: Mat4) {
        self.items.push(m);
        self.pushes += 1;
    }

    /// Removes and returns the most recently pushed transform.
    ///
    /// # Panics
    /// Panics on underflow. Use [`try_pop`](Self::try_pop) to get the error instead.
    #[inline]
    pub fn pop(&mut self) -> Mat4 {
        match self.try_pop() {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    #[inline]
    pub fn try_pop(&mut self) -> Result<Mat4, StackUnderflow> {
        let m = self.items.pop().ok_or(StackUnderflow)?;
        self.pops += 1;
        Ok(m)
    }

    /// Returns the top without removing it.
    #[inline]
    pub fn top(&self) -> Option<&Mat4> {
        self.items.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total successful pushes since construction.
    #[inline]
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Total successful pops since construction.
    #[inline]
    pub fn pops(&self) -> u64 {
        self.pops
    }

    /// Drops all saved entries. Keeps capacity and counters.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{rotate_y, translate};

    #[test]
    fn pop_returns_in_lifo_order() {
        let a = translate(1.0, 0.0, 0.0);
        let b = rotate_y(30.0);

        let mut s = MatrixStack::new();
        s.push(a);
        s.push(b);

        assert_eq!(s.depth(), 2);
        assert_eq!(s.pop(), b);
        assert_eq!(s.pop(), a);
        assert!(s.is_empty());
    }

    #[test]
    fn push_stores_a_copy() {
        let mut current = translate(1.0, 2.0, 3.0);
        let saved = current;

        let mut s = MatrixStack::new();
        s.push(current);
        current *= rotate_y(90.0);

        assert_ne!(current, saved);
        assert_eq!(s.pop(), saved);
    }

    #[test]
    fn try_pop_on_empty_is_underflow() {
        let mut s = MatrixStack::new();
        assert_eq!(s.try_pop(), Err(StackUnderflow));
        assert_eq!(s.pops(), 0);
    }

    #[test]
    #[should_panic(expected = "matrix stack underflow")]
    fn pop_on_empty_panics() {
        MatrixStack::new().pop();
    }

    #[test]
    fn counters_track_balanced_use() {
        let mut s = MatrixStack::with_capacity(4);
        for _ in 0..3 {
            s.push(Mat4::IDENTITY);
        }
        for _ in 0..3 {
            s.pop();
        }
        assert_eq!(s.pushes(), 3);
        assert_eq!(s.pops(), 3);
        assert!(s.is_empty());
    }

    #[test]
    fn top_peeks_without_popping() {
        let mut s = MatrixStack::new();
        assert!(s.top().is_none());
        s.push(Mat4::IDENTITY);
        assert_eq!(s.top(), Some(&Mat4::IDENTITY));
        assert_eq!(s.depth(), 1);
    }

    #[test]
    fn clear_keeps_counters() {
        let mut s = MatrixStack::new();
        s.push(Mat4::IDENTITY);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.pushes(), 1);
        assert_eq!(s.pops(), 0);
    }

    #[test]
    fn underflow_display_mentions_cause() {
        assert!(StackUnderflow.to_string().contains("without matching push"));
    }
}
