//! # Record Field Extractor
//!
//! Decomposes one corpus JSON line into typed, tokenized fields.
//!
//! * [`tokenize`] flattens a bracketed binary parse into tokens.
//! * [`parse_pos`] pulls the POS tag of every leaf out of a full parse.
//! * [`NliRecord`] is the typed JSON line; [`NliRecord::extract`]
//!   yields the tokenized [`ExtractedRecord`].
pub mod nli_record;
pub mod tokenize;

#[doc(inline)]
pub use nli_record::{ExtractedRecord, NliRecord};
#[doc(inline)]
pub use tokenize::{parse_pos, tokenize};
