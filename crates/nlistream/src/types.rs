//! # Common Types

/// The integer type of every index stream (word, char, POS, label).
pub type IndexType = i64;

/// The element type of lexical-overlap feature streams and embeddings.
pub type FeatureType = f32;

/// One side of a sentence pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SentenceSide {
    /// `sentence1`.
    Premise,

    /// `sentence2`.
    Hypothesis,
}

impl SentenceSide {
    /// The other side of the pair.
    pub fn other(self) -> Self {
        match self {
            Self::Premise => Self::Hypothesis,
            Self::Hypothesis => Self::Premise,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type NSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> NSHashMap<K, V> {
            NSHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type NSHashSet<V> = ahash::AHashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type NSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> NSHashMap<K, V> {
            NSHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type NSHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_aliases() {
        let mut map: NSHashMap<&str, IndexType> = hash_map_new();
        map.insert("a", 2);
        assert_eq!(map.get("a"), Some(&2));

        let set: NSHashSet<char> = "abca".chars().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_sentence_side() {
        assert_eq!(SentenceSide::Premise.other(), SentenceSide::Hypothesis);
        assert_eq!(SentenceSide::Hypothesis.to_string(), "hypothesis");
    }
}
