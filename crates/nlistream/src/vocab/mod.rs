//! # Vocabulary & Feature Indexers
//!
//! This module provides the index tables every field stream encodes through.
//!
//! ## Word Vocabulary
//!
//! [`WordVocab`] is loaded from a pretrained embedding resource by
//! [`io::load_embedding_vocab_path`], which also yields the row-aligned
//! embedding matrix ([`EmbeddingVocab`]).
//!
//! ## Closed Vocabularies
//! * [`CharVocab`] - printable or corpus-scanned characters.
//! * [`PosVocab`] - the Penn-Treebank POS tag set.
//! * [`LabelVocab`] - gold-label classes.
//!
//! [`IndexTables`] bundles all of them, plus the generated
//! [`random_embedding`] matrices, into one immutable value.
pub mod char_vocab;
pub mod embedding;
pub mod index_tables;
pub mod io;
pub mod label_vocab;
pub mod pos_vocab;
pub mod word_vocab;

#[doc(inline)]
pub use char_vocab::{CharVocab, CharVocabPolicy};
#[doc(inline)]
pub use embedding::random_embedding;
#[doc(inline)]
pub use index_tables::IndexTables;
#[doc(inline)]
pub use io::{EmbeddingVocab, load_embedding_vocab_path, read_embedding_vocab};
#[doc(inline)]
pub use label_vocab::LabelVocab;
#[doc(inline)]
pub use pos_vocab::PosVocab;
#[doc(inline)]
pub use word_vocab::WordVocab;
