//! # Shared Lexical Feature Store
//!
//! Precomputed per-token lexical-overlap annotations, keyed by pair id.
//!
//! Feature files are line-delimited:
//! ```terminaloutput
//! {PAIR ID} {JSON OBJECT}
//! ```
//! where the JSON object carries one numeric array per
//! [`LexicalKind`] and [`SentenceSide`]; see [`LexicalFeatures`].
//!
//! [`SentenceSide`]: crate::types::SentenceSide
pub mod lexical_features;
pub mod lexical_store;

#[doc(inline)]
pub use lexical_features::{LexicalFeatures, LexicalKind};
#[doc(inline)]
pub use lexical_store::LexicalFeatureStore;
