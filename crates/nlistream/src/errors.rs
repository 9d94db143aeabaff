//! # Error Types

/// Errors from nlistream operations.
#[derive(Debug, thiserror::Error)]
pub enum NliStreamError {
    /// An embedding resource line could not be parsed.
    #[error("malformed embedding line {line}: {reason}")]
    MalformedEmbedding {
        /// The 1-based line number in the resource.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A shared lexical-feature line could not be parsed.
    #[error("malformed feature line {line}: {reason}")]
    MalformedFeatureLine {
        /// The 1-based line number in the feature file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A pair identifier has no entry in the lexical feature store.
    #[error("no lexical features for pair id {pair_id:?}")]
    MissingPairId {
        /// The pair identifier that was looked up.
        pair_id: String,
    },

    /// A lexical feature sequence does not line up with its sentence tokens.
    #[error(
        "lexical feature {feature} for pair id {pair_id:?} has length {found}, \
         but the sentence has {expected} tokens"
    )]
    LexicalLengthMismatch {
        /// The pair identifier of the example.
        pair_id: String,
        /// The name of the feature sequence.
        feature: &'static str,
        /// The sentence token count.
        expected: usize,
        /// The feature sequence length.
        found: usize,
    },

    /// A gold label outside the label vocabulary.
    #[error("unknown label {0:?}")]
    UnknownLabel(String),

    /// A field rank the cropping engine cannot handle.
    #[error("cropping rank {rank} not supported for field {field}")]
    UnsupportedRank {
        /// The field name.
        field: &'static str,
        /// The offending rank.
        rank: usize,
    },

    /// Invalid pipeline configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parallel field streams fell out of lock-step.
    #[error("field stream {field} misaligned: {reason}")]
    StreamMisaligned {
        /// The field whose stream diverged.
        field: &'static str,
        /// How it diverged.
        reason: String,
    },

    /// A batch was requested before any source was activated.
    #[error("no active data source")]
    NoActiveSource,

    /// JSON decoding error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for nlistream operations.
pub type NSResult<T> = core::result::Result<T, NliStreamError>;
