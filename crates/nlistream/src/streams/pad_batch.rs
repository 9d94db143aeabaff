//! # Padded Batching
//!
//! Per-example field values are stacked into one batch array, zero-padded
//! on the right of every variable axis to the batch-local maximum.

use ndarray::{Array1, Array2, Array3, s};
use num_traits::Zero;

use crate::types::IndexType;

/// A per-example field value that can be stacked into a padded batch.
pub trait PadBatch: Sized {
    /// The batch array type.
    type Batch;

    /// Stack `items` into one batch; the first axis indexes the items.
    fn pad_batch(items: Vec<Self>) -> Self::Batch;
}

impl PadBatch for IndexType {
    type Batch = Array1<IndexType>;

    fn pad_batch(items: Vec<Self>) -> Self::Batch {
        Array1::from(items)
    }
}

impl<E: Clone + Zero> PadBatch for Vec<E> {
    type Batch = Array2<E>;

    fn pad_batch(items: Vec<Self>) -> Self::Batch {
        let width = items.iter().map(Vec::len).max().unwrap_or(0);
        let mut batch = Array2::zeros((items.len(), width));
        for (mut row, item) in batch.rows_mut().into_iter().zip(items) {
            for (slot, value) in row.iter_mut().zip(item) {
                *slot = value;
            }
        }
        batch
    }
}

impl<E: Clone + Zero> PadBatch for Array2<E> {
    type Batch = Array3<E>;

    fn pad_batch(items: Vec<Self>) -> Self::Batch {
        let rows = items.iter().map(Array2::nrows).max().unwrap_or(0);
        let cols = items.iter().map(Array2::ncols).max().unwrap_or(0);
        let mut batch = Array3::zeros((items.len(), rows, cols));
        for (idx, item) in items.iter().enumerate() {
            let (r, c) = item.dim();
            batch.slice_mut(s![idx, ..r, ..c]).assign(item);
        }
        batch
    }
}
