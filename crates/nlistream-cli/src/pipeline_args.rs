use nlistream::{CharVocabPolicy, DataSource, NliPipelineOptions, PadSide};

/// Pipeline construction arg group.
///
/// Flags override values read from `--options`.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// JSON options file; missing keys take their defaults.
    #[arg(long, default_value = None)]
    options: Option<String>,

    /// Pretrained embedding file (`.gz` is decompressed).
    #[arg(long, default_value = None)]
    embeddings: Option<String>,

    /// Directory holding the corpus and shared feature files.
    #[arg(long, default_value = None)]
    corpus_dir: Option<String>,

    /// Examples per batch.
    #[arg(long, default_value = None)]
    batch_size: Option<usize>,

    /// Passes over the training corpus.
    #[arg(long, default_value = None)]
    train_epochs: Option<usize>,

    /// Local shuffle window.
    #[arg(long, default_value = None)]
    shuffle: Option<usize>,

    /// Word vocabulary cap, reserved entries included.
    #[arg(long, default_value = None)]
    embedding_size: Option<usize>,

    /// Crop every sequence field to this length; at least the char pad.
    #[arg(long, default_value = None)]
    max_len: Option<usize>,

    /// Character set source.
    #[arg(long, default_value = None)]
    char_policy: Option<CharVocabPolicy>,

    /// Companion alignment pad side.
    #[arg(long, default_value = None)]
    pad_side: Option<PadSide>,

    /// Shuffle and embedding seed.
    #[arg(long, default_value = None)]
    seed: Option<u64>,
}

impl PipelineArgs {
    /// Resolve the pipeline options.
    pub fn options(&self) -> Result<NliPipelineOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.options {
            Some(path) => NliPipelineOptions::from_json_path(path)?,
            None => NliPipelineOptions::default(),
        };

        if let Some(path) = &self.embeddings {
            options.embedding_path = path.into();
        }
        if let Some(dir) = &self.corpus_dir {
            options.corpus_dir = dir.into();
        }
        if let Some(batch_size) = self.batch_size {
            options = options.with_batch_size(batch_size);
        }
        if let Some(train_epochs) = self.train_epochs {
            let dev_epochs = options.dev_epochs;
            options = options.with_epochs(train_epochs, dev_epochs);
        }
        if let Some(shuffle) = self.shuffle {
            options = options.with_shuffle_buffer_size(shuffle);
        }
        if self.embedding_size.is_some() {
            options = options.with_embedding_size(self.embedding_size);
        }
        if self.max_len.is_some() {
            options = options.with_max_len(self.max_len);
        }
        if let Some(policy) = self.char_policy {
            options = options.with_char_policy(policy);
        }
        if let Some(side) = self.pad_side {
            options = options.with_pad_side(side);
        }
        if self.seed.is_some() {
            options = options.with_seed(self.seed);
        }

        if options.embedding_path.as_os_str().is_empty() {
            return Err("no embedding file; pass --embeddings or set embedding_path".into());
        }
        options.validate()?;
        Ok(options)
    }
}

/// Source selection arg group.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// The source to read: train, dev-matched or dev-mismatched.
    #[arg(long, default_value = "train")]
    pub source: DataSource,
}
