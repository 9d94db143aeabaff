//! # Local Shuffle Window

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A bounded-window shuffle over an upstream iterator.
///
/// The window is filled to `capacity` items; each pull emits a uniformly
/// chosen window item and refills from upstream. Items never move more than
/// `capacity - 1` positions earlier than their upstream position.
///
/// A capacity of `0` or `1` passes items through in order.
///
/// Two windows with the same seed over the same upstream sequence emit
/// the same permutation.
pub struct ShuffleWindow<I: Iterator> {
    upstream: I,
    window: Vec<I::Item>,
    capacity: usize,
    rng: StdRng,
}

impl<I: Iterator> ShuffleWindow<I> {
    /// Wrap `upstream`.
    pub fn new(
        upstream: I,
        capacity: usize,
        seed: u64,
    ) -> Self {
        Self {
            upstream,
            window: Vec::with_capacity(capacity.min(1 << 16)),
            capacity,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The window capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<I: Iterator> Iterator for ShuffleWindow<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.capacity <= 1 {
            return self.upstream.next();
        }

        while self.window.len() < self.capacity {
            match self.upstream.next() {
                Some(item) => self.window.push(item),
                None => break,
            }
        }

        if self.window.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..self.window.len());
        Some(self.window.swap_remove(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.upstream.size_hint();
        let held = self.window.len();
        (lo.saturating_add(held), hi.and_then(|h| h.checked_add(held)))
    }
}
