//! # Word Vocabulary

use crate::types::{IndexType, NSHashMap, hash_map_new};

/// The reserved padding token.
pub const PAD_TOKEN: &str = "<PAD>";

/// The reserved unknown-word token.
pub const UNK_TOKEN: &str = "<UNK>";

/// The index of [`PAD_TOKEN`]; also the pad value of every index stream.
pub const PAD_INDEX: IndexType = 0;

/// The index of [`UNK_TOKEN`].
pub const UNK_INDEX: IndexType = 1;

/// The number of reserved entries at the head of a [`WordVocab`].
pub const RESERVED_SIZE: usize = 2;

/// Word to index mapping.
///
/// Indices are dense in `[0, len)`; `0` and `1` are reserved for
/// [`PAD_TOKEN`] and [`UNK_TOKEN`], and further words are assigned
/// in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab {
    index: NSHashMap<String, IndexType>,
}

impl Default for WordVocab {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordVocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Self::new();
        for word in iter {
            vocab.push_word(word.as_ref());
        }
        vocab
    }
}

impl WordVocab {
    /// Create a vocabulary holding only the reserved entries.
    pub fn new() -> Self {
        let mut index = hash_map_new();
        index.insert(PAD_TOKEN.to_string(), PAD_INDEX);
        index.insert(UNK_TOKEN.to_string(), UNK_INDEX);
        Self { index }
    }

    /// The number of entries, reserved entries included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false; the reserved entries are always present.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Append a word at the next free index.
    ///
    /// ## Returns
    /// The assigned index; or `None` if the word was already present,
    /// in which case the vocabulary is unchanged.
    pub fn push_word(
        &mut self,
        word: &str,
    ) -> Option<IndexType> {
        if self.index.contains_key(word) {
            return None;
        }
        let idx = self.index.len() as IndexType;
        self.index.insert(word.to_string(), idx);
        Some(idx)
    }

    /// Is the word present?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.index.contains_key(word)
    }

    /// Look up a word; unknown words resolve to [`UNK_INDEX`].
    pub fn word_index(
        &self,
        word: &str,
    ) -> IndexType {
        self.index.get(word).copied().unwrap_or(UNK_INDEX)
    }

    /// Index a token sequence.
    pub fn encode<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<IndexType> {
        tokens.iter().map(|t| self.word_index(t.as_ref())).collect()
    }
}
