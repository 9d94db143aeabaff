//! # `nlistream` Aligned NLI Feature Pipeline
//!
//! Turns a natural-language-inference corpus (premise/hypothesis pairs with
//! gold labels, as line-delimited JSON) into an endless, locally shuffled
//! stream of padded batches of 13 aligned feature fields.
//!
//! See:
//! * [`vocab`] for the word, char, POS and label indexers, and embedding loading.
//! * [`lexical`] for the precomputed lexical-overlap feature store.
//! * [`records`] for corpus record decomposition.
//! * [`streams`] for per-field batch streams.
//! * [`alignment`] for joining, aligning and cropping field streams.
//! * [`pipeline`] for the multi-source switchable iterator.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``gzip``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::NSHash{*}`` type alias machinery.
//!
//! #### feature: ``gzip``
//!
//! Reads ``.gz`` compressed embedding resources through ``flate2``.
//!
//! ## Batch Layout
//!
//! Every [`NliBatch`] carries, in order:
//!
//! | field              | shape                  |
//! |--------------------|------------------------|
//! | `premise`          | `(B, Lp)`              |
//! | `hypothesis`       | `(B, Lh)`              |
//! | `label`            | `(B,)`                 |
//! | `antonym1/2`       | `(B, Lp)` / `(B, Lh)`  |
//! | `exact1to2/2to1`   | `(B, Lp)` / `(B, Lh)`  |
//! | `synonym1/2`       | `(B, Lp)` / `(B, Lh)`  |
//! | `*_chars`          | `(B, L, char_pad)`     |
//! | `*_pos`            | `(B, Lp)` / `(B, Lh)`  |
//!
//! After alignment, each premise field and its hypothesis companion share
//! one sequence length.
//!
//! ## Building a Pipeline
//!
//! ```rust,ignore
//! use nlistream::{DataSource, NliPipelineOptions};
//!
//! let mut data = NliPipelineOptions::new("glove.840B.300d.txt.gz", "data/multinli_0.9")
//!     .with_batch_size(70)
//!     .with_max_len(Some(48))
//!     .init()?;
//!
//! data.train()?;
//! while let Some(batch) = data.next_batch()? {
//!     let mask = batch.premise_mask();
//!     // ...
//! }
//!
//! data.dev_matched()?;
//! let dev_batches = data.batches_per_epoch(DataSource::DevMatched);
//! ```
#![warn(missing_docs, unused)]

pub mod alignment;
pub mod batch;
pub mod errors;
pub mod lexical;
pub mod pipeline;
pub mod records;
pub mod streams;
pub mod types;
pub mod vocab;

#[cfg(test)]
pub(crate) mod test_fixtures;

#[doc(inline)]
pub use alignment::PadSide;
#[doc(inline)]
pub use batch::{NliBatch, NliBatchTuple};
#[doc(inline)]
pub use errors::{NSResult, NliStreamError};
#[doc(inline)]
pub use pipeline::{DataSource, NliData, NliPipelineOptions};
#[doc(inline)]
pub use vocab::CharVocabPolicy;
