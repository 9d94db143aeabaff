//! # Source Pipelines

use std::sync::Arc;

use crate::{
    alignment::{AlignedStream, AlignmentEngine, JointStream},
    errors::{NSResult, NliStreamError},
    lexical::LexicalFeatureStore,
    pipeline::{DataSource, Prefetch},
    streams::{CorpusSource, FieldStreamBuilder},
    vocab::IndexTables,
};

/// The batch stream of one activation of a [`SourcePipeline`].
pub type SourceStream = Prefetch<AlignedStream>;

/// The immutable recipe for one source's batch stream.
///
/// Every [`SourcePipeline::open`] builds a fresh stream from the first epoch.
#[derive(Debug, Clone)]
pub struct SourcePipeline {
    source: DataSource,
    corpus: CorpusSource,
    tables: Arc<IndexTables>,
    store: Arc<LexicalFeatureStore>,
    engine: AlignmentEngine,

    batch_size: usize,
    epochs: usize,
    shuffle_capacity: usize,
    prefetch_depth: usize,
    seed: Option<u64>,
}

impl SourcePipeline {
    /// Create a recipe: batches of 1, one epoch, no shuffling,
    /// prefetch depth 1, and a fresh seed per activation.
    pub fn new(
        source: DataSource,
        corpus: CorpusSource,
        tables: Arc<IndexTables>,
        store: Arc<LexicalFeatureStore>,
        engine: AlignmentEngine,
    ) -> Self {
        Self {
            source,
            corpus,
            tables,
            store,
            engine,
            batch_size: 1,
            epochs: 1,
            shuffle_capacity: 0,
            prefetch_depth: 1,
            seed: None,
        }
    }

    /// Set the batch size; must be > 0.
    pub fn with_batch_size(
        mut self,
        batch_size: usize,
    ) -> NSResult<Self> {
        if batch_size == 0 {
            return Err(NliStreamError::InvalidConfig(
                "batch size must be > 0".to_string(),
            ));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Set the number of passes over the corpus.
    pub fn with_epochs(
        mut self,
        epochs: usize,
    ) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the shuffle window capacity; `0` or `1` disables shuffling.
    pub fn with_shuffle_capacity(
        mut self,
        shuffle_capacity: usize,
    ) -> Self {
        self.shuffle_capacity = shuffle_capacity;
        self
    }

    /// Set the prefetch depth.
    pub fn with_prefetch_depth(
        mut self,
        prefetch_depth: usize,
    ) -> Self {
        self.prefetch_depth = prefetch_depth;
        self
    }

    /// Fix the shuffle seed of every activation.
    ///
    /// With `None`, each activation draws a new seed.
    pub fn with_seed(
        mut self,
        seed: Option<u64>,
    ) -> Self {
        self.seed = seed;
        self
    }

    /// The source.
    pub fn source(&self) -> DataSource {
        self.source
    }

    /// The corpus.
    pub fn corpus(&self) -> &CorpusSource {
        &self.corpus
    }

    /// The batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The number of passes.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// The fixed seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Build a fresh stream.
    ///
    /// ## Arguments
    /// * `seed` - the shuffle seed shared by all field streams of this activation.
    pub fn open(
        &self,
        seed: u64,
    ) -> NSResult<SourceStream> {
        let builder = FieldStreamBuilder::new(
            self.corpus.clone(),
            self.epochs,
            self.batch_size,
            self.shuffle_capacity,
            seed,
        )?;
        let joint = JointStream::open(&builder, &self.tables, &self.store);
        Ok(Prefetch::new(
            AlignedStream::new(joint, self.engine),
            self.prefetch_depth,
        ))
    }
}
