//! # Data Sources

/// The three corpora of an NLI dataset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DataSource {
    /// The training corpus.
    Train,

    /// The in-genre development corpus.
    DevMatched,

    /// The cross-genre development corpus.
    DevMismatched,
}

impl DataSource {
    /// Every source, in a fixed order.
    pub const ALL: [DataSource; 3] = [Self::Train, Self::DevMatched, Self::DevMismatched];

    /// The position of this source in [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Train => 0,
            Self::DevMatched => 1,
            Self::DevMismatched => 2,
        }
    }

    /// Is this the training corpus?
    pub fn is_train(self) -> bool {
        self == Self::Train
    }
}
