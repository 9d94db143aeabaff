//! # Character Vocabulary

use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ndarray::{Array1, Array2};

use crate::{
    errors::NSResult,
    types::{IndexType, NSHashMap, hash_map_new},
};

/// The reserved null character; pads every char row.
pub const NULL_CHAR: char = '\0';

/// The index of [`NULL_CHAR`].
pub const NULL_CHAR_INDEX: IndexType = 0;

/// The default fixed per-token character width.
pub const DEFAULT_CHAR_PAD: usize = 16;

/// Every printable ASCII character; digits, letters, punctuation, whitespace.
pub const PRINTABLE_CHARS: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// Where the character set of a [`CharVocab`] comes from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CharVocabPolicy {
    /// Every printable ASCII character; see [`PRINTABLE_CHARS`].
    Printable,

    /// Every character appearing in the training corpus' two sentence fields.
    #[default]
    CorpusScan,
}

/// Character to index mapping, with [`NULL_CHAR`] at [`NULL_CHAR_INDEX`].
///
/// Characters outside the vocabulary resolve to [`NULL_CHAR_INDEX`].
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab {
    index: NSHashMap<char, IndexType>,
}

impl Default for CharVocab {
    fn default() -> Self {
        Self::printable()
    }
}

#[derive(serde::Deserialize)]
struct RawSentences {
    sentence1: String,
    sentence2: String,
}

impl CharVocab {
    /// Build from an ordered character sequence.
    ///
    /// Indices are assigned from `1` in first-seen order;
    /// duplicates and [`NULL_CHAR`] are skipped.
    pub fn from_ordered_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut index = hash_map_new();
        index.insert(NULL_CHAR, NULL_CHAR_INDEX);
        for c in chars {
            let next = index.len() as IndexType;
            index.entry(c).or_insert(next);
        }
        Self { index }
    }

    /// The vocabulary over [`PRINTABLE_CHARS`].
    pub fn printable() -> Self {
        Self::from_ordered_chars(PRINTABLE_CHARS.chars())
    }

    /// Collect every character of the `sentence1` / `sentence2` fields
    /// of a line-delimited JSON corpus.
    ///
    /// Characters are indexed in sorted order, so the result does not
    /// depend on corpus line order.
    pub fn scan_corpus<R: BufRead>(reader: R) -> NSResult<Self> {
        let mut chars = BTreeSet::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let raw: RawSentences = serde_json::from_str(&line)?;
            chars.extend(raw.sentence1.chars());
            chars.extend(raw.sentence2.chars());
        }
        Ok(Self::from_ordered_chars(chars))
    }

    /// See [`Self::scan_corpus`].
    pub fn scan_corpus_path(path: impl AsRef<Path>) -> NSResult<Self> {
        let path = path.as_ref();
        log::info!("counting chars in {}", path.display());
        let vocab = Self::scan_corpus(BufReader::new(File::open(path)?))?;
        log::info!("found {} distinct chars", vocab.len() - 1);
        Ok(vocab)
    }

    /// The number of entries, [`NULL_CHAR`] included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false; [`NULL_CHAR`] is always present.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up one character.
    pub fn char_id(
        &self,
        c: char,
    ) -> IndexType {
        self.index.get(&c).copied().unwrap_or(NULL_CHAR_INDEX)
    }

    /// The characters in index order, [`NULL_CHAR`] first.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<(IndexType, char)> =
            self.index.iter().map(|(&c, &idx)| (idx, c)).collect();
        chars.sort_unstable();
        chars.into_iter().map(|(_, c)| c).collect()
    }

    /// Index a token's characters into a row of exactly `char_pad` entries.
    ///
    /// Longer tokens are truncated; shorter tokens are padded
    /// with [`NULL_CHAR_INDEX`].
    pub fn char_index(
        &self,
        token: &str,
        char_pad: usize,
    ) -> Vec<IndexType> {
        let mut row: Vec<IndexType> = token
            .chars()
            .take(char_pad)
            .map(|c| self.char_id(c))
            .collect();
        row.resize(char_pad, NULL_CHAR_INDEX);
        row
    }

    /// Index a token sequence into a `(tokens, char_pad)` matrix.
    ///
    /// Row `i` is [`Self::char_index`] of `tokens[i]`.
    pub fn encode<S: AsRef<str>>(
        &self,
        tokens: &[S],
        char_pad: usize,
    ) -> Array2<IndexType> {
        let mut chars = Array2::from_elem((tokens.len(), char_pad), NULL_CHAR_INDEX);
        for (mut row, token) in chars.rows_mut().into_iter().zip(tokens) {
            row.assign(&Array1::from(self.char_index(token.as_ref(), char_pad)));
        }
        chars
    }
}
