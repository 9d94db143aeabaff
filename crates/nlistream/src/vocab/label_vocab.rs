//! # Label Vocabulary

use crate::{
    errors::{NSResult, NliStreamError},
    types::{IndexType, NSHashMap},
};

/// The index of unlabeled examples.
pub const UNLABELED_INDEX: IndexType = -1;

/// The default gold-label classes.
pub const DEFAULT_LABELS: [(&str, IndexType); 5] = [
    ("neutral", 0),
    ("entailment", 1),
    ("contradiction", 2),
    ("hidden", 3),
    ("-", UNLABELED_INDEX),
];

/// Closed gold-label to class index mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVocab {
    index: NSHashMap<String, IndexType>,
}

impl Default for LabelVocab {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LABELS)
    }
}

impl LabelVocab {
    /// Build from `(label, index)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, IndexType)>,
        S: AsRef<str>,
    {
        Self {
            index: pairs
                .into_iter()
                .map(|(label, idx)| (label.as_ref().to_string(), idx))
                .collect(),
        }
    }

    /// The number of labels, the unlabeled sentinel included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up a gold label.
    ///
    /// ## Returns
    /// The class index, or [`NliStreamError::UnknownLabel`].
    pub fn label_index(
        &self,
        label: &str,
    ) -> NSResult<IndexType> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| NliStreamError::UnknownLabel(label.to_string()))
    }
}
