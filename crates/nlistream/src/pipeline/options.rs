//! # Pipeline Options

use std::path::{Path, PathBuf};

use crate::{
    alignment::{PadSide, field_layout::check_crop_len},
    errors::{NSResult, NliStreamError},
    pipeline::{DataSource, NliData},
    vocab::{CharVocabPolicy, char_vocab::DEFAULT_CHAR_PAD, word_vocab::RESERVED_SIZE},
};

/// The default training corpus file name.
pub const DEFAULT_TRAIN_FILE: &str = "multinli_0.9_train.jsonl";

/// The default matched development corpus file name.
pub const DEFAULT_DEV_MATCHED_FILE: &str = "multinli_0.9_dev_matched_clean.jsonl";

/// The default mismatched development corpus file name.
pub const DEFAULT_DEV_MISMATCHED_FILE: &str = "multinli_0.9_dev_mismatched_clean.jsonl";

/// The default shared lexical-feature file names.
pub const DEFAULT_FEATURE_FILES: [&str; 3] = [
    "shared_train.json",
    "shared_dev_matched.json",
    "shared_dev_mismatched.json",
];

/// Options for building an [`NliData`].
///
/// Relative corpus and feature file names resolve against
/// [`corpus_dir`](Self::corpus_dir); absolute ones are used as is.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NliPipelineOptions {
    /// The pretrained embedding resource; `.gz` is decompressed.
    pub embedding_path: PathBuf,

    /// The directory holding the corpus and feature files.
    pub corpus_dir: PathBuf,

    /// Examples per batch.
    pub batch_size: usize,

    /// Passes over the training corpus.
    pub train_epochs: usize,

    /// Passes over each development corpus.
    pub dev_epochs: usize,

    /// The local shuffle window; `0` or `1` disables shuffling.
    pub shuffle_buffer_size: usize,

    /// Batches computed ahead of the consumer.
    pub prefetch_buffer_size: usize,

    /// Optional cap on the word vocabulary size, reserved entries included.
    pub embedding_size: Option<usize>,

    /// The fixed per-token character width.
    pub char_pad: usize,

    /// The char embedding dimension.
    pub char_emb_dim: usize,

    /// Optional crop length of every sequence field; at least `char_pad`.
    pub max_len: Option<usize>,

    /// Where the character set comes from.
    pub char_policy: CharVocabPolicy,

    /// Where companion alignment pads.
    pub pad_side: PadSide,

    /// Overrides [`DEFAULT_TRAIN_FILE`].
    pub train_file: Option<String>,

    /// The matched development corpus file.
    pub dev_matched_file: String,

    /// The mismatched development corpus file.
    pub dev_mismatched_file: String,

    /// The shared lexical-feature files, loaded in order.
    pub feature_files: Vec<String>,

    /// Fixes every shuffle and generated embedding; `None` is nondeterministic.
    pub seed: Option<u64>,
}

impl Default for NliPipelineOptions {
    fn default() -> Self {
        Self {
            embedding_path: PathBuf::new(),
            corpus_dir: PathBuf::from("."),
            batch_size: 5,
            train_epochs: 10,
            dev_epochs: 1,
            shuffle_buffer_size: 10,
            prefetch_buffer_size: 1,
            embedding_size: None,
            char_pad: DEFAULT_CHAR_PAD,
            char_emb_dim: 100,
            max_len: None,
            char_policy: CharVocabPolicy::default(),
            pad_side: PadSide::default(),
            train_file: None,
            dev_matched_file: DEFAULT_DEV_MATCHED_FILE.to_string(),
            dev_mismatched_file: DEFAULT_DEV_MISMATCHED_FILE.to_string(),
            feature_files: DEFAULT_FEATURE_FILES.map(str::to_string).to_vec(),
            seed: None,
        }
    }
}

impl NliPipelineOptions {
    /// Default options over the given embedding file and corpus directory.
    pub fn new<E: AsRef<Path>, C: AsRef<Path>>(
        embedding_path: E,
        corpus_dir: C,
    ) -> Self {
        Self {
            embedding_path: embedding_path.as_ref().to_path_buf(),
            corpus_dir: corpus_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Read options from a JSON file; missing keys take their defaults.
    pub fn from_json_path(path: impl AsRef<Path>) -> NSResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the batch size.
    pub fn with_batch_size(
        mut self,
        batch_size: usize,
    ) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the training and development epoch counts.
    pub fn with_epochs(
        mut self,
        train_epochs: usize,
        dev_epochs: usize,
    ) -> Self {
        self.train_epochs = train_epochs;
        self.dev_epochs = dev_epochs;
        self
    }

    /// Set the shuffle window.
    pub fn with_shuffle_buffer_size(
        mut self,
        shuffle_buffer_size: usize,
    ) -> Self {
        self.shuffle_buffer_size = shuffle_buffer_size;
        self
    }

    /// Set the prefetch depth.
    pub fn with_prefetch_buffer_size(
        mut self,
        prefetch_buffer_size: usize,
    ) -> Self {
        self.prefetch_buffer_size = prefetch_buffer_size;
        self
    }

    /// Set the vocabulary size cap.
    pub fn with_embedding_size(
        mut self,
        embedding_size: Option<usize>,
    ) -> Self {
        self.embedding_size = embedding_size;
        self
    }

    /// Set the char pad width.
    pub fn with_char_pad(
        mut self,
        char_pad: usize,
    ) -> Self {
        self.char_pad = char_pad;
        self
    }

    /// Set the char embedding dimension.
    pub fn with_char_emb_dim(
        mut self,
        char_emb_dim: usize,
    ) -> Self {
        self.char_emb_dim = char_emb_dim;
        self
    }

    /// Set the crop length.
    pub fn with_max_len(
        mut self,
        max_len: Option<usize>,
    ) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the char vocabulary policy.
    pub fn with_char_policy(
        mut self,
        char_policy: CharVocabPolicy,
    ) -> Self {
        self.char_policy = char_policy;
        self
    }

    /// Set the alignment pad side.
    pub fn with_pad_side(
        mut self,
        pad_side: PadSide,
    ) -> Self {
        self.pad_side = pad_side;
        self
    }

    /// Override the training corpus file name.
    pub fn with_train_file(
        mut self,
        train_file: Option<String>,
    ) -> Self {
        self.train_file = train_file;
        self
    }

    /// Set the shared lexical-feature files.
    pub fn with_feature_files<I, S>(
        mut self,
        feature_files: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_files = feature_files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the seed.
    pub fn with_seed(
        mut self,
        seed: Option<u64>,
    ) -> Self {
        self.seed = seed;
        self
    }

    /// Check the options without touching the filesystem.
    pub fn validate(&self) -> NSResult<()> {
        let invalid = |msg: String| Err(NliStreamError::InvalidConfig(msg));
        if self.batch_size == 0 {
            return invalid("batch_size must be > 0".to_string());
        }
        if self.char_pad == 0 {
            return invalid("char_pad must be > 0".to_string());
        }
        if let Some(max_len) = self.max_len {
            check_crop_len(max_len, self.char_pad)?;
        }
        if let Some(size) = self.embedding_size.filter(|&size| size < RESERVED_SIZE) {
            return invalid(format!(
                "embedding_size ({size}) must be >= {RESERVED_SIZE}"
            ));
        }
        Ok(())
    }

    fn resolve(
        &self,
        name: &str,
    ) -> PathBuf {
        self.corpus_dir.join(name)
    }

    /// The corpus path of one source.
    pub fn corpus_path(
        &self,
        source: DataSource,
    ) -> PathBuf {
        match source {
            DataSource::Train => {
                self.resolve(self.train_file.as_deref().unwrap_or(DEFAULT_TRAIN_FILE))
            }
            DataSource::DevMatched => self.resolve(&self.dev_matched_file),
            DataSource::DevMismatched => self.resolve(&self.dev_mismatched_file),
        }
    }

    /// The epoch count of one source.
    pub fn epochs(
        &self,
        source: DataSource,
    ) -> usize {
        match source {
            DataSource::Train => self.train_epochs,
            _ => self.dev_epochs,
        }
    }

    /// The shared lexical-feature file paths.
    pub fn feature_paths(&self) -> Vec<PathBuf> {
        self.feature_files.iter().map(|f| self.resolve(f)).collect()
    }

    /// Build the pipeline; see [`NliData::from_options`].
    pub fn init(self) -> NSResult<NliData> {
        NliData::from_options(self)
    }
}
