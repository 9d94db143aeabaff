//! # Index Tables

use ndarray::Array2;
use rand::Rng;

use crate::{
    errors::{NSResult, NliStreamError},
    types::FeatureType,
    vocab::{
        CharVocab,
        EmbeddingVocab,
        LabelVocab,
        PosVocab,
        WordVocab,
        char_vocab::NULL_CHAR_INDEX,
        random_embedding,
        word_vocab::PAD_INDEX,
    },
};

/// The immutable bundle of every vocabulary and embedding matrix.
///
/// Built once at startup, then shared (by `Arc`) with every source pipeline.
#[derive(Debug, Clone)]
pub struct IndexTables {
    word_vocab: WordVocab,
    word_embedding: Array2<FeatureType>,

    char_vocab: CharVocab,
    char_embedding: Array2<FeatureType>,
    char_pad: usize,

    pos_vocab: PosVocab,
    pos_embedding: Array2<FeatureType>,

    label_vocab: LabelVocab,
}

impl IndexTables {
    /// Assemble the tables.
    ///
    /// The char embedding is `(char_vocab.len(), char_emb_dim)`, and the POS
    /// embedding is `(N, N)` over the POS tag set; both are random with
    /// their padding row zeroed.
    ///
    /// ## Arguments
    /// * `words` - the pretrained word vocabulary and embedding.
    /// * `char_vocab` - the character vocabulary.
    /// * `char_emb_dim` - the char embedding dimension.
    /// * `char_pad` - the fixed per-token character width.
    /// * `rng` - the random source for the generated embeddings.
    pub fn build<R: Rng + ?Sized>(
        words: EmbeddingVocab,
        char_vocab: CharVocab,
        char_emb_dim: usize,
        char_pad: usize,
        rng: &mut R,
    ) -> NSResult<Self> {
        if char_pad == 0 {
            return Err(NliStreamError::InvalidConfig(
                "char pad width must be > 0".to_string(),
            ));
        }

        let char_embedding = random_embedding(
            char_vocab.len(),
            char_emb_dim,
            &[NULL_CHAR_INDEX as usize],
            rng,
        );

        let pos_vocab = PosVocab::default();
        let pos_embedding = random_embedding(
            pos_vocab.len(),
            pos_vocab.len(),
            &[PAD_INDEX as usize],
            rng,
        );

        Ok(Self {
            word_vocab: words.vocab,
            word_embedding: words.embedding,
            char_vocab,
            char_embedding,
            char_pad,
            pos_vocab,
            pos_embedding,
            label_vocab: LabelVocab::default(),
        })
    }

    /// The word vocabulary.
    pub fn word_vocab(&self) -> &WordVocab {
        &self.word_vocab
    }

    /// The pretrained word embedding, row-aligned with [`Self::word_vocab`].
    pub fn word_embedding(&self) -> &Array2<FeatureType> {
        &self.word_embedding
    }

    /// The character vocabulary.
    pub fn char_vocab(&self) -> &CharVocab {
        &self.char_vocab
    }

    /// The random char embedding.
    pub fn char_embedding(&self) -> &Array2<FeatureType> {
        &self.char_embedding
    }

    /// The fixed per-token character width.
    pub fn char_pad(&self) -> usize {
        self.char_pad
    }

    /// The POS vocabulary.
    pub fn pos_vocab(&self) -> &PosVocab {
        &self.pos_vocab
    }

    /// The random POS embedding.
    pub fn pos_embedding(&self) -> &Array2<FeatureType> {
        &self.pos_embedding
    }

    /// The label vocabulary.
    pub fn label_vocab(&self) -> &LabelVocab {
        &self.label_vocab
    }
}
