//! # NLI Data

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    alignment::AlignmentEngine,
    batch::NliBatch,
    errors::NSResult,
    lexical::LexicalFeatureStore,
    pipeline::{DataSource, NliPipelineOptions, SourcePipeline, SwitchableIterator},
    streams::CorpusSource,
    vocab::{CharVocab, CharVocabPolicy, IndexTables, load_embedding_vocab_path},
};

/// The assembled pipeline: index tables, feature store, and one
/// switchable batch iterator over the three sources.
///
/// ## Example
/// ```rust,no_run
/// use nlistream::{DataSource, NliPipelineOptions};
///
/// let mut data = NliPipelineOptions::new("glove.840B.300d.txt.gz", "data/multinli_0.9")
///     .with_batch_size(32)
///     .init()
///     .expect("failed to build pipeline");
///
/// data.train().unwrap();
/// while let Some(batch) = data.next_batch().unwrap() {
///     let (premise, hypothesis, label, ..) = batch.into_tuple();
///     # let _ = (premise, hypothesis, label);
/// }
/// println!("{} dev examples", data.example_count(DataSource::DevMatched));
/// ```
pub struct NliData {
    options: NliPipelineOptions,
    tables: Arc<IndexTables>,
    store: Arc<LexicalFeatureStore>,
    example_counts: [usize; 3],
    iterator: SwitchableIterator,
}

impl NliData {
    /// Load every resource named by `options` and assemble the pipeline.
    ///
    /// Any configuration, I/O or parse error aborts construction.
    pub fn from_options(options: NliPipelineOptions) -> NSResult<Self> {
        options.validate()?;

        let store = Arc::new(LexicalFeatureStore::load_paths(options.feature_paths())?);

        let words = load_embedding_vocab_path(&options.embedding_path, options.embedding_size)?;

        let char_vocab = match options.char_policy {
            CharVocabPolicy::Printable => CharVocab::printable(),
            CharVocabPolicy::CorpusScan => {
                CharVocab::scan_corpus_path(options.corpus_path(DataSource::Train))?
            }
        };

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let tables = Arc::new(IndexTables::build(
            words,
            char_vocab,
            options.char_emb_dim,
            options.char_pad,
            &mut rng,
        )?);

        let corpora = DataSource::ALL.map(|source| CorpusSource::File(options.corpus_path(source)));
        Self::from_parts(options, tables, store, corpora)
    }

    /// Assemble the pipeline over already-built tables and corpora.
    ///
    /// Every corpus line is parsed once up front; a malformed record
    /// aborts construction.
    ///
    /// ## Arguments
    /// * `options` - batching, shuffling, alignment and seed settings.
    /// * `corpora` - one corpus per [`DataSource`], in [`DataSource::ALL`] order.
    pub fn from_parts(
        options: NliPipelineOptions,
        tables: Arc<IndexTables>,
        store: Arc<LexicalFeatureStore>,
        corpora: [CorpusSource; 3],
    ) -> NSResult<Self> {
        options.validate()?;

        let mut example_counts = [0; 3];
        for (source, corpus) in DataSource::ALL.into_iter().zip(&corpora) {
            let count = corpus.validate_records()?;
            log::info!("{source}: {count} examples from {}", corpus.describe());
            example_counts[source.index()] = count;
        }

        let engine = AlignmentEngine::new(options.pad_side, options.max_len, tables.char_pad())?;
        let build = |source: DataSource, corpus: CorpusSource| -> NSResult<SourcePipeline> {
            Ok(
                SourcePipeline::new(source, corpus, tables.clone(), store.clone(), engine)
                    .with_batch_size(options.batch_size)?
                    .with_epochs(options.epochs(source))
                    .with_shuffle_capacity(options.shuffle_buffer_size)
                    .with_prefetch_depth(options.prefetch_buffer_size),
            )
        };
        let [train, dev_matched, dev_mismatched] = corpora;
        let pipelines = [
            build(DataSource::Train, train)?,
            build(DataSource::DevMatched, dev_matched)?,
            build(DataSource::DevMismatched, dev_mismatched)?,
        ];
        let iterator = SwitchableIterator::new(pipelines, options.seed)?;

        Ok(Self {
            options,
            tables,
            store,
            example_counts,
            iterator,
        })
    }

    /// The options this pipeline was built from.
    pub fn options(&self) -> &NliPipelineOptions {
        &self.options
    }

    /// The shared index tables.
    pub fn tables(&self) -> &Arc<IndexTables> {
        &self.tables
    }

    /// The shared lexical feature store.
    pub fn feature_store(&self) -> &Arc<LexicalFeatureStore> {
        &self.store
    }

    /// The number of examples in one pass over a source.
    pub fn example_count(
        &self,
        source: DataSource,
    ) -> usize {
        self.example_counts[source.index()]
    }

    /// The number of batches in one pass over a source.
    pub fn batches_per_epoch(
        &self,
        source: DataSource,
    ) -> usize {
        self.example_count(source).div_ceil(self.options.batch_size)
    }

    /// The switchable iterator.
    pub fn iterator_mut(&mut self) -> &mut SwitchableIterator {
        &mut self.iterator
    }

    /// The active source, if any.
    pub fn active_source(&self) -> Option<DataSource> {
        self.iterator.active_source()
    }

    /// Start (or restart) a source; see [`SwitchableIterator::activate`].
    pub fn activate(
        &mut self,
        source: DataSource,
    ) -> NSResult<()> {
        self.iterator.activate(source)
    }

    /// Start (or restart) the training source.
    pub fn train(&mut self) -> NSResult<()> {
        self.activate(DataSource::Train)
    }

    /// Start (or restart) the matched development source.
    pub fn dev_matched(&mut self) -> NSResult<()> {
        self.activate(DataSource::DevMatched)
    }

    /// Start (or restart) the mismatched development source.
    pub fn dev_mismatched(&mut self) -> NSResult<()> {
        self.activate(DataSource::DevMismatched)
    }

    /// Pull the next batch; see [`SwitchableIterator::next_batch`].
    pub fn next_batch(&mut self) -> NSResult<Option<NliBatch>> {
        self.iterator.next_batch()
    }
}

impl Iterator for NliData {
    type Item = NSResult<NliBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::NliStreamError, test_fixtures};

    fn data(options: NliPipelineOptions) -> NSResult<NliData> {
        NliData::from_parts(
            options,
            test_fixtures::tables(),
            test_fixtures::store(),
            [
                test_fixtures::corpus(),
                CorpusSource::from_lines(test_fixtures::lines().into_iter().take(3)),
                CorpusSource::from_lines(test_fixtures::lines().into_iter().skip(3)),
            ],
        )
    }

    fn options() -> NliPipelineOptions {
        NliPipelineOptions::default()
            .with_batch_size(2)
            .with_epochs(2, 1)
            .with_seed(Some(4))
    }

    #[test]
    fn test_counts_and_sources() {
        let mut data = data(options()).unwrap();
        assert_eq!(data.example_count(DataSource::Train), 4);
        assert_eq!(data.example_count(DataSource::DevMatched), 3);
        assert_eq!(data.example_count(DataSource::DevMismatched), 1);
        assert_eq!(data.batches_per_epoch(DataSource::DevMatched), 2);
        assert_eq!(data.options().batch_size, 2);
        assert_eq!(data.tables().char_pad(), test_fixtures::CHAR_PAD);
        assert_eq!(data.feature_store().len(), 4);

        assert!(matches!(
            data.next_batch(),
            Err(NliStreamError::NoActiveSource)
        ));

        data.train().unwrap();
        assert_eq!(data.active_source(), Some(DataSource::Train));
        assert_eq!(data.by_ref().count(), 4);

        data.dev_matched().unwrap();
        let sizes: Vec<usize> = data.by_ref().map(|b| b.unwrap().len()).collect();
        assert_eq!(sizes, vec![2, 1]);

        data.dev_mismatched().unwrap();
        let only = data.next_batch().unwrap().unwrap();
        assert_eq!(only.label.to_vec(), vec![0]);
        assert!(data.next_batch().unwrap().is_none());
    }

    #[test]
    fn test_crop_through_pipeline() {
        let max_len = test_fixtures::CHAR_PAD;
        let mut data = data(
            options()
                .with_char_pad(test_fixtures::CHAR_PAD)
                .with_max_len(Some(max_len))
                .with_shuffle_buffer_size(0),
        )
        .unwrap();
        data.train().unwrap();
        let mut cropped = false;
        for batch in data.iterator_mut() {
            let batch = batch.unwrap();
            assert!(batch.premise_len() <= max_len);
            assert_eq!(batch.premise_len(), batch.hypothesis_len());
            assert_eq!(batch.premise_chars.shape()[1], batch.premise_len());
            cropped |= batch.premise_len() == max_len;
        }
        assert!(cropped);
    }

    #[test]
    fn test_invalid_options() {
        assert!(matches!(
            data(options().with_batch_size(0)),
            Err(NliStreamError::InvalidConfig(_))
        ));
        assert!(matches!(
            data(options().with_max_len(Some(0))),
            Err(NliStreamError::InvalidConfig(_))
        ));
        // The tables' char width, not the option default, bounds the crop.
        assert!(matches!(
            data(options().with_char_pad(1).with_max_len(Some(2))),
            Err(NliStreamError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_corpus_aborts() {
        let result = NliData::from_parts(
            options(),
            test_fixtures::tables(),
            test_fixtures::store(),
            [
                test_fixtures::corpus(),
                CorpusSource::from_lines([r#"{"pairID": "x"}"#]),
                test_fixtures::corpus(),
            ],
        );
        assert!(matches!(result, Err(NliStreamError::Json(_))));
    }
}
