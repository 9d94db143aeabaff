//! # Field Streams
//!
//! Every output field of a batch is produced by its own stream:
//!
//! ```text
//! CorpusSource -> ExampleStream (epochs) -> ShuffleWindow -> FieldStream (transform, pad)
//! ```
//!
//! A [`FieldStreamBuilder`] fixes the source, the pass count, the batch size
//! and the shuffle seed; every stream it builds walks the same examples in
//! the same order. Each [`FieldBatch`] carries the ordinals of its examples,
//! so downstream consumers can check that parallel streams stayed in step.
//!
//! The per-field extractors live in [`field_transforms`].
pub mod corpus_source;
pub mod example_stream;
pub mod field_stream;
pub mod field_transforms;
pub mod pad_batch;
pub mod shuffle_window;

#[doc(inline)]
pub use corpus_source::{CorpusLines, CorpusSource};
#[doc(inline)]
pub use example_stream::{Example, ExampleStream};
#[doc(inline)]
pub use field_stream::{BoxedFieldStream, FieldBatch, FieldStream, FieldStreamBuilder};
#[doc(inline)]
pub use pad_batch::PadBatch;
#[doc(inline)]
pub use shuffle_window::ShuffleWindow;
