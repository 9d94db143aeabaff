//! # NLI Corpus Records

use std::borrow::Cow;

use crate::{
    errors::NSResult,
    records::{parse_pos, tokenize},
    types::SentenceSide,
};

/// One line of an NLI corpus.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NliRecord {
    /// The premise, as a bracketed binary parse.
    pub sentence1_binary_parse: String,

    /// The hypothesis, as a bracketed binary parse.
    pub sentence2_binary_parse: String,

    /// The premise, as a full constituency parse.
    pub sentence1_parse: String,

    /// The hypothesis, as a full constituency parse.
    pub sentence2_parse: String,

    /// The gold label.
    pub gold_label: String,

    /// The pair id; joins the record to its lexical features.
    #[serde(rename = "pairID")]
    pub pair_id: String,

    /// The raw premise text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence1: Option<String>,

    /// The raw hypothesis text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence2: Option<String>,
}

/// The tokenized fields of an [`NliRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    /// Premise tokens.
    pub premise_tokens: Vec<String>,

    /// Hypothesis tokens.
    pub hypothesis_tokens: Vec<String>,

    /// Premise POS tags.
    pub premise_pos: Vec<String>,

    /// Hypothesis POS tags.
    pub hypothesis_pos: Vec<String>,

    /// The gold label.
    pub gold_label: String,

    /// The pair id.
    pub pair_id: String,
}

impl NliRecord {
    /// Parse one corpus line.
    ///
    /// A missing required field is an error.
    pub fn from_json_line(line: &str) -> NSResult<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// The binary parse of one side.
    pub fn binary_parse(
        &self,
        side: SentenceSide,
    ) -> &str {
        match side {
            SentenceSide::Premise => &self.sentence1_binary_parse,
            SentenceSide::Hypothesis => &self.sentence2_binary_parse,
        }
    }

    /// The full parse of one side.
    pub fn full_parse(
        &self,
        side: SentenceSide,
    ) -> &str {
        match side {
            SentenceSide::Premise => &self.sentence1_parse,
            SentenceSide::Hypothesis => &self.sentence2_parse,
        }
    }

    /// The tokens of one side; see [`tokenize`].
    pub fn tokens(
        &self,
        side: SentenceSide,
    ) -> Vec<Cow<'_, str>> {
        tokenize(self.binary_parse(side))
    }

    /// The POS tags of one side; see [`parse_pos`].
    pub fn pos_tags(
        &self,
        side: SentenceSide,
    ) -> Vec<&str> {
        parse_pos(self.full_parse(side))
    }

    /// Tokenize every field.
    pub fn extract(&self) -> ExtractedRecord {
        fn owned<S: Into<String>>(v: Vec<S>) -> Vec<String> {
            v.into_iter().map(Into::into).collect()
        }

        ExtractedRecord {
            premise_tokens: owned(self.tokens(SentenceSide::Premise)),
            hypothesis_tokens: owned(self.tokens(SentenceSide::Hypothesis)),
            premise_pos: owned(self.pos_tags(SentenceSide::Premise)),
            hypothesis_pos: owned(self.pos_tags(SentenceSide::Hypothesis)),
            gold_label: self.gold_label.clone(),
            pair_id: self.pair_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NliStreamError;

    const LINE: &str = r#"{"annotator_labels": ["neutral"], "genre": "fiction", "gold_label": "neutral", "pairID": "31193n", "promptID": "31193", "sentence1": "The cat sat.", "sentence1_binary_parse": "( ( The cat ) ( sat . ) )", "sentence1_parse": "(ROOT (S (NP (DT The) (NN cat)) (VP (VBD sat)) (. .)))", "sentence2": "A dog", "sentence2_binary_parse": "( A dog )", "sentence2_parse": "(ROOT (NP (DT A) (NN dog)))"}"#;

    #[test]
    fn test_from_json_line() {
        let record = NliRecord::from_json_line(LINE).unwrap();
        assert_eq!(record.pair_id, "31193n");
        assert_eq!(record.gold_label, "neutral");
        assert_eq!(record.sentence1.as_deref(), Some("The cat sat."));
        assert_eq!(record.binary_parse(SentenceSide::Hypothesis), "( A dog )");
    }

    #[test]
    fn test_extract() {
        let extracted = NliRecord::from_json_line(LINE).unwrap().extract();
        assert_eq!(
            extracted,
            ExtractedRecord {
                premise_tokens: vec!["The".into(), "cat".into(), "sat".into(), ".".into()],
                hypothesis_tokens: vec!["A".into(), "dog".into()],
                premise_pos: vec!["DT".into(), "NN".into(), "VBD".into(), ".".into()],
                hypothesis_pos: vec!["DT".into(), "NN".into()],
                gold_label: "neutral".into(),
                pair_id: "31193n".into(),
            }
        );
    }

    #[test]
    fn test_extract_is_pure() {
        let a = NliRecord::from_json_line(LINE).unwrap().extract();
        let b = NliRecord::from_json_line(LINE).unwrap().extract();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_field() {
        let line = r#"{"sentence1_binary_parse": "( a )", "gold_label": "neutral"}"#;
        assert!(matches!(
            NliRecord::from_json_line(line),
            Err(NliStreamError::Json(_))
        ));
    }
}
