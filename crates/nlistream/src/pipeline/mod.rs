//! # Multi-Source Pipeline
//!
//! Three independently built source pipelines (train, dev-matched,
//! dev-mismatched) share one set of [`IndexTables`] and one
//! [`LexicalFeatureStore`]; a [`SwitchableIterator`] yields batches from
//! whichever source was most recently activated.
//!
//! Each activation rebuilds the source's stream from its
//! [`SourcePipeline`] recipe, behind a small [`Prefetch`] queue.
//!
//! [`NliPipelineOptions::init`] loads everything and returns an [`NliData`].
//!
//! [`IndexTables`]: crate::vocab::IndexTables
//! [`LexicalFeatureStore`]: crate::lexical::LexicalFeatureStore
pub mod data_source;
pub mod nli_data;
pub mod options;
pub mod prefetch;
pub mod source_pipeline;
pub mod switchable;

#[doc(inline)]
pub use data_source::DataSource;
#[doc(inline)]
pub use nli_data::NliData;
#[doc(inline)]
pub use options::NliPipelineOptions;
#[doc(inline)]
pub use prefetch::Prefetch;
#[doc(inline)]
pub use source_pipeline::{SourcePipeline, SourceStream};
#[doc(inline)]
pub use switchable::SwitchableIterator;
