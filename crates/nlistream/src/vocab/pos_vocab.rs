//! # Part-of-Speech Vocabulary

use crate::{
    types::{IndexType, NSHashMap},
    vocab::word_vocab::{PAD_TOKEN, UNK_INDEX, UNK_TOKEN},
};

/// The closed Penn-Treebank tag set, in index order.
pub const POS_TAGS: [&str; 48] = [
    PAD_TOKEN, UNK_TOKEN, "WP$", "RBS", "SYM", "WRB", "IN", "VB", "POS", "TO", ":", "-RRB-", "$",
    "MD", "JJ", "#", "CD", "``", "JJR", "NNP", "''", "LS", "VBP", "VBD", "FW", "RBR", "JJS", "DT",
    "VBG", "RP", "NNS", "RB", "PDT", "PRP$", ".", "XX", "NNPS", "UH", "EX", "NN", "WDT", "VBN",
    "VBZ", "CC", ",", "-LRB-", "PRP", "WP",
];

/// POS tag to index mapping over [`POS_TAGS`].
#[derive(Debug, Clone, PartialEq)]
pub struct PosVocab {
    index: NSHashMap<&'static str, IndexType>,
}

impl Default for PosVocab {
    fn default() -> Self {
        Self {
            index: POS_TAGS
                .iter()
                .enumerate()
                .map(|(i, &tag)| (tag, i as IndexType))
                .collect(),
        }
    }
}

impl PosVocab {
    /// The number of tags, reserved entries included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up a tag; unknown tags resolve to [`UNK_INDEX`].
    pub fn pos_index(
        &self,
        tag: &str,
    ) -> IndexType {
        self.index.get(tag).copied().unwrap_or(UNK_INDEX)
    }

    /// Index a tag sequence.
    pub fn encode<S: AsRef<str>>(
        &self,
        tags: &[S],
    ) -> Vec<IndexType> {
        tags.iter().map(|t| self.pos_index(t.as_ref())).collect()
    }
}
