//! # Lexical Feature Entries

use crate::{
    errors::{NSResult, NliStreamError},
    types::{FeatureType, SentenceSide},
};

/// The kind of lexical-overlap signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LexicalKind {
    /// The token has an antonym in the other sentence.
    Antonym,

    /// The token appears verbatim in the other sentence.
    ExactMatch,

    /// The token has a synonym in the other sentence.
    Synonym,
}

/// The lexical-overlap annotations of one sentence pair.
///
/// Every premise sequence has one entry per premise token,
/// and every hypothesis sequence one entry per hypothesis token.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct LexicalFeatures {
    /// Premise tokens with an antonym in the hypothesis.
    #[serde(rename = "sentence1_token_antonym_with_s2")]
    pub antonym1: Vec<FeatureType>,

    /// Hypothesis tokens with an antonym in the premise.
    #[serde(rename = "sentence2_token_antonym_with_s1")]
    pub antonym2: Vec<FeatureType>,

    /// Premise tokens appearing in the hypothesis.
    #[serde(rename = "sentence1_token_exact_match_with_s2")]
    pub exact1to2: Vec<FeatureType>,

    /// Hypothesis tokens appearing in the premise.
    #[serde(rename = "sentence2_token_exact_match_with_s1")]
    pub exact2to1: Vec<FeatureType>,

    /// Premise tokens with a synonym in the hypothesis.
    #[serde(rename = "sentence1_token_synonym_with_s2")]
    pub synonym1: Vec<FeatureType>,

    /// Hypothesis tokens with a synonym in the premise.
    #[serde(rename = "sentence2_token_synonym_with_s1")]
    pub synonym2: Vec<FeatureType>,
}

impl LexicalFeatures {
    /// The serialized key of a feature sequence.
    pub fn feature_name(
        kind: LexicalKind,
        side: SentenceSide,
    ) -> &'static str {
        use LexicalKind::*;
        use SentenceSide::*;
        match (kind, side) {
            (Antonym, Premise) => "sentence1_token_antonym_with_s2",
            (Antonym, Hypothesis) => "sentence2_token_antonym_with_s1",
            (ExactMatch, Premise) => "sentence1_token_exact_match_with_s2",
            (ExactMatch, Hypothesis) => "sentence2_token_exact_match_with_s1",
            (Synonym, Premise) => "sentence1_token_synonym_with_s2",
            (Synonym, Hypothesis) => "sentence2_token_synonym_with_s1",
        }
    }

    /// Select one feature sequence.
    pub fn feature(
        &self,
        kind: LexicalKind,
        side: SentenceSide,
    ) -> &[FeatureType] {
        use LexicalKind::*;
        use SentenceSide::*;
        match (kind, side) {
            (Antonym, Premise) => &self.antonym1,
            (Antonym, Hypothesis) => &self.antonym2,
            (ExactMatch, Premise) => &self.exact1to2,
            (ExactMatch, Hypothesis) => &self.exact2to1,
            (Synonym, Premise) => &self.synonym1,
            (Synonym, Hypothesis) => &self.synonym2,
        }
    }

    /// Select one feature sequence, checking it against the sentence's token count.
    ///
    /// ## Returns
    /// The sequence, or [`NliStreamError::LexicalLengthMismatch`].
    pub fn checked_feature(
        &self,
        kind: LexicalKind,
        side: SentenceSide,
        pair_id: &str,
        token_count: usize,
    ) -> NSResult<&[FeatureType]> {
        let values = self.feature(kind, side);
        if values.len() != token_count {
            return Err(NliStreamError::LexicalLengthMismatch {
                pair_id: pair_id.to_string(),
                feature: Self::feature_name(kind, side),
                expected: token_count,
                found: values.len(),
            });
        }
        Ok(values)
    }
}
