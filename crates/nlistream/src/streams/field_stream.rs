//! # Field Streams

use std::marker::PhantomData;

use crate::{
    errors::{NSResult, NliStreamError},
    streams::{CorpusSource, Example, ExampleStream, PadBatch, ShuffleWindow},
};

/// One padded batch of one field, with the ordinals of its examples.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBatch<B> {
    /// The [`Example::ordinal`] of each row, in row order.
    pub ordinals: Vec<usize>,

    /// The padded batch.
    pub values: B,
}

/// Batches of one field, extracted from a stream of examples.
///
/// `transform` maps one raw corpus line to the field's per-example value;
/// [`PadBatch`] stacks `batch_size` values at a time. The final batch may be
/// short. The first error ends the stream.
pub struct FieldStream<I, F, T> {
    examples: I,
    transform: F,
    batch_size: usize,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<I, F, T> FieldStream<I, F, T>
where
    I: Iterator<Item = NSResult<Example>>,
    F: FnMut(&str) -> NSResult<T>,
    T: PadBatch,
{
    /// Create a field stream.
    pub fn new(
        examples: I,
        transform: F,
        batch_size: usize,
    ) -> Self {
        Self {
            examples,
            transform,
            batch_size: batch_size.max(1),
            done: false,
            _marker: PhantomData,
        }
    }

    fn next_batch(&mut self) -> NSResult<Option<FieldBatch<T::Batch>>> {
        let mut ordinals = Vec::with_capacity(self.batch_size);
        let mut items = Vec::with_capacity(self.batch_size);
        while items.len() < self.batch_size {
            let Some(example) = self.examples.next() else {
                break;
            };
            let example = example?;
            items.push((self.transform)(example.line.as_ref())?);
            ordinals.push(example.ordinal);
        }

        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(FieldBatch {
            ordinals,
            values: T::pad_batch(items),
        }))
    }
}

impl<I, F, T> Iterator for FieldStream<I, F, T>
where
    I: Iterator<Item = NSResult<Example>>,
    F: FnMut(&str) -> NSResult<T>,
    T: PadBatch,
{
    type Item = NSResult<FieldBatch<T::Batch>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_batch();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result.transpose()
    }
}

/// A type-erased field stream.
pub type BoxedFieldStream<B> = Box<dyn Iterator<Item = NSResult<FieldBatch<B>>> + Send>;

/// Builds the field streams of one source.
///
/// Every stream built by one builder walks the same examples in the same
/// order: the same source, pass count, shuffle window and seed.
#[derive(Debug, Clone)]
pub struct FieldStreamBuilder {
    source: CorpusSource,
    epochs: usize,
    batch_size: usize,
    shuffle_capacity: usize,
    seed: u64,
}

impl FieldStreamBuilder {
    /// Create a builder.
    ///
    /// ## Arguments
    /// * `source` - the corpus.
    /// * `epochs` - the number of passes over the corpus.
    /// * `batch_size` - the number of examples per batch; must be > 0.
    /// * `shuffle_capacity` - the shuffle window; `0` or `1` disables shuffling.
    /// * `seed` - the shuffle seed shared by every built stream.
    pub fn new(
        source: CorpusSource,
        epochs: usize,
        batch_size: usize,
        shuffle_capacity: usize,
        seed: u64,
    ) -> NSResult<Self> {
        if batch_size == 0 {
            return Err(NliStreamError::InvalidConfig(
                "batch size must be > 0".to_string(),
            ));
        }
        Ok(Self {
            source,
            epochs,
            batch_size,
            shuffle_capacity,
            seed,
        })
    }

    /// The corpus.
    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// The batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The shared shuffle seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The examples every built stream walks.
    pub fn examples(&self) -> ShuffleWindow<ExampleStream> {
        ShuffleWindow::new(
            ExampleStream::new(self.source.clone(), self.epochs),
            self.shuffle_capacity,
            self.seed,
        )
    }

    /// Build one field stream.
    pub fn build<F, T>(
        &self,
        transform: F,
    ) -> BoxedFieldStream<T::Batch>
    where
        F: FnMut(&str) -> NSResult<T> + Send + 'static,
        T: PadBatch + 'static,
    {
        Box::new(FieldStream::new(
            self.examples(),
            transform,
            self.batch_size,
        ))
    }
}
