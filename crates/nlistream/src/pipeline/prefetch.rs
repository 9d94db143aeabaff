//! # Prefetch Queue

use std::collections::VecDeque;

/// Bounded look-ahead over an iterator.
///
/// Each pull first tops the queue up to `depth` items, then yields the
/// oldest. Order is never changed; a depth of `0` behaves like `1`.
pub struct Prefetch<I: Iterator> {
    inner: I,
    queue: VecDeque<I::Item>,
    depth: usize,
    exhausted: bool,
}

impl<I: Iterator> Prefetch<I> {
    /// Wrap `inner`.
    pub fn new(
        inner: I,
        depth: usize,
    ) -> Self {
        let depth = depth.max(1);
        Self {
            inner,
            queue: VecDeque::with_capacity(depth),
            depth,
            exhausted: false,
        }
    }

    /// The number of buffered items.
    pub fn buffered(&self) -> usize {
        self.queue.len()
    }

    fn fill(&mut self) {
        while !self.exhausted && self.queue.len() < self.depth {
            match self.inner.next() {
                Some(item) => self.queue.push_back(item),
                None => self.exhausted = true,
            }
        }
    }
}

impl<I: Iterator> Iterator for Prefetch<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.fill();
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        for depth in [0, 1, 3, 100] {
            let out: Vec<u32> = Prefetch::new(0..10u32, depth).collect();
            assert_eq!(out, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_reads_ahead() {
        let mut prefetch = Prefetch::new(0..10u32, 3);
        assert_eq!(prefetch.buffered(), 0);
        assert_eq!(prefetch.next(), Some(0));
        assert_eq!(prefetch.buffered(), 2);

        let mut short = Prefetch::new(0..2u32, 5);
        assert_eq!(short.next(), Some(0));
        assert_eq!(short.buffered(), 1);
        assert_eq!(short.next(), Some(1));
        assert_eq!(short.next(), None);
        assert_eq!(short.next(), None);
    }
}
