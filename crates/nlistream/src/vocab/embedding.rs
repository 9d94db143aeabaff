//! # Random Embeddings

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::types::FeatureType;

/// Generate a `(size, dim)` standard-normal embedding matrix.
///
/// Rows listed in `keep_zeros` are forced to zero;
/// out-of-range rows are ignored.
///
/// ## Arguments
/// * `size` - the vocabulary size.
/// * `dim` - the embedding dimension.
/// * `keep_zeros` - rows to zero.
/// * `rng` - the random source.
pub fn random_embedding<R: Rng + ?Sized>(
    size: usize,
    dim: usize,
    keep_zeros: &[usize],
    rng: &mut R,
) -> Array2<FeatureType> {
    let mut emb = Array2::from_shape_simple_fn((size, dim), || rng.sample(StandardNormal));
    for &row in keep_zeros {
        if row < size {
            emb.row_mut(row).fill(0.0);
        }
    }
    emb
}
