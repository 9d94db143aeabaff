//! # NLI Batches

use ndarray::{Array1, Array2, Array3, Axis};

use crate::types::{FeatureType, IndexType};

/// The 13-field tuple form of an [`NliBatch`], in field order.
pub type NliBatchTuple = (
    Array2<IndexType>,
    Array2<IndexType>,
    Array1<IndexType>,
    Array2<FeatureType>,
    Array2<FeatureType>,
    Array2<FeatureType>,
    Array2<FeatureType>,
    Array2<FeatureType>,
    Array2<FeatureType>,
    Array3<IndexType>,
    Array3<IndexType>,
    Array2<IndexType>,
    Array2<IndexType>,
);

/// One batch of every field.
///
/// Every array's first axis is the batch axis; the second is the sequence
/// axis, except for [`NliBatch::label`]. Padding is `0` throughout.
#[derive(Debug, Clone, PartialEq)]
pub struct NliBatch {
    /// Premise word ids, `(B, Lp)`.
    pub premise: Array2<IndexType>,

    /// Hypothesis word ids, `(B, Lh)`.
    pub hypothesis: Array2<IndexType>,

    /// Gold label class ids, `(B,)`.
    pub label: Array1<IndexType>,

    /// Premise antonym indicators, `(B, Lp)`.
    pub antonym1: Array2<FeatureType>,

    /// Hypothesis antonym indicators, `(B, Lh)`.
    pub antonym2: Array2<FeatureType>,

    /// Premise exact-match indicators, `(B, Lp)`.
    pub exact1to2: Array2<FeatureType>,

    /// Hypothesis exact-match indicators, `(B, Lh)`.
    pub exact2to1: Array2<FeatureType>,

    /// Premise synonym indicators, `(B, Lp)`.
    pub synonym1: Array2<FeatureType>,

    /// Hypothesis synonym indicators, `(B, Lh)`.
    pub synonym2: Array2<FeatureType>,

    /// Premise char ids, `(B, Lp, char_pad)`.
    pub premise_chars: Array3<IndexType>,

    /// Hypothesis char ids, `(B, Lh, char_pad)`.
    pub hypothesis_chars: Array3<IndexType>,

    /// Premise POS ids, `(B, Lp)`.
    pub premise_pos: Array2<IndexType>,

    /// Hypothesis POS ids, `(B, Lh)`.
    pub hypothesis_pos: Array2<IndexType>,
}

impl NliBatch {
    /// The number of examples.
    pub fn len(&self) -> usize {
        self.label.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }

    /// The premise sequence length.
    pub fn premise_len(&self) -> usize {
        self.premise.ncols()
    }

    /// The hypothesis sequence length.
    pub fn hypothesis_len(&self) -> usize {
        self.hypothesis.ncols()
    }

    /// `1.0` for every non-padding premise word, else `0.0`.
    pub fn premise_mask(&self) -> Array2<FeatureType> {
        token_mask(&self.premise)
    }

    /// `1.0` for every non-padding hypothesis word, else `0.0`.
    pub fn hypothesis_mask(&self) -> Array2<FeatureType> {
        token_mask(&self.hypothesis)
    }

    /// The number of non-padding premise words of each example.
    pub fn premise_lengths(&self) -> Array1<usize> {
        token_lengths(&self.premise)
    }

    /// The number of non-padding hypothesis words of each example.
    pub fn hypothesis_lengths(&self) -> Array1<usize> {
        token_lengths(&self.hypothesis)
    }

    /// Convert into the 13-field tuple form.
    pub fn into_tuple(self) -> NliBatchTuple {
        (
            self.premise,
            self.hypothesis,
            self.label,
            self.antonym1,
            self.antonym2,
            self.exact1to2,
            self.exact2to1,
            self.synonym1,
            self.synonym2,
            self.premise_chars,
            self.hypothesis_chars,
            self.premise_pos,
            self.hypothesis_pos,
        )
    }
}

fn token_mask(ids: &Array2<IndexType>) -> Array2<FeatureType> {
    ids.mapv(|id| if id != 0 { 1.0 } else { 0.0 })
}

fn token_lengths(ids: &Array2<IndexType>) -> Array1<usize> {
    ids.map_axis(Axis(1), |row| row.iter().filter(|&&id| id != 0).count())
}
