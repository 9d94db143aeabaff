//! # Field Transforms
//!
//! Per-line extractors, one per output field. Each parses the raw corpus
//! line independently, so every field stream stays self-contained.

use std::sync::Arc;

use ndarray::Array2;

use crate::{
    errors::NSResult,
    lexical::{LexicalFeatureStore, LexicalKind},
    records::NliRecord,
    types::{FeatureType, IndexType, SentenceSide},
    vocab::IndexTables,
};

/// Word ids of one side's tokens.
pub fn word_ids(
    tables: Arc<IndexTables>,
    side: SentenceSide,
) -> impl Fn(&str) -> NSResult<Vec<IndexType>> + Send + Sync + 'static {
    move |line: &str| {
        let record = NliRecord::from_json_line(line)?;
        Ok(tables.word_vocab().encode(&record.tokens(side)))
    }
}

/// The gold label's class index.
pub fn label_id(
    tables: Arc<IndexTables>,
) -> impl Fn(&str) -> NSResult<IndexType> + Send + Sync + 'static {
    move |line: &str| {
        let record = NliRecord::from_json_line(line)?;
        tables.label_vocab().label_index(&record.gold_label)
    }
}

/// One lexical feature sequence of one side.
///
/// The sequence must have one entry per token of that side.
pub fn lexical_feature(
    store: Arc<LexicalFeatureStore>,
    kind: LexicalKind,
    side: SentenceSide,
) -> impl Fn(&str) -> NSResult<Vec<FeatureType>> + Send + Sync + 'static {
    move |line: &str| {
        let record = NliRecord::from_json_line(line)?;
        let token_count = record.tokens(side).len();
        let values = store.lookup(&record.pair_id)?.checked_feature(
            kind,
            side,
            &record.pair_id,
            token_count,
        )?;
        Ok(values.to_vec())
    }
}

/// The `(tokens, char_pad)` char id matrix of one side.
pub fn char_ids(
    tables: Arc<IndexTables>,
    side: SentenceSide,
) -> impl Fn(&str) -> NSResult<Array2<IndexType>> + Send + Sync + 'static {
    move |line: &str| {
        let record = NliRecord::from_json_line(line)?;
        Ok(tables
            .char_vocab()
            .encode(&record.tokens(side), tables.char_pad()))
    }
}

/// POS tag ids of one side.
pub fn pos_ids(
    tables: Arc<IndexTables>,
    side: SentenceSide,
) -> impl Fn(&str) -> NSResult<Vec<IndexType>> + Send + Sync + 'static {
    move |line: &str| {
        let record = NliRecord::from_json_line(line)?;
        Ok(tables.pos_vocab().encode(&record.pos_tags(side)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        errors::NliStreamError,
        lexical::LexicalFeatures,
        vocab::{CharVocab, read_embedding_vocab, word_vocab::UNK_INDEX},
    };

    const LINE: &str = r#"{"gold_label": "entailment", "pairID": "9e", "sentence1_binary_parse": "( the ( cat sat ) )", "sentence2_binary_parse": "( a cat )", "sentence1_parse": "(ROOT (S (NP (DT the) (NN cat)) (VP (VBD sat))))", "sentence2_parse": "(ROOT (NP (DT a) (NN cat)))"}"#;

    fn tables() -> Arc<IndexTables> {
        let words = read_embedding_vocab(Cursor::new("the 1 0\ncat 0 1\n"), None).unwrap();
        Arc::new(
            IndexTables::build(
                words,
                CharVocab::from_ordered_chars("acts".chars()),
                4,
                3,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap(),
        )
    }

    fn store(hypothesis_antonyms: Vec<FeatureType>) -> Arc<LexicalFeatureStore> {
        let mut store = LexicalFeatureStore::new();
        store.insert(
            "9e",
            LexicalFeatures {
                antonym1: vec![0.0, 0.0, 1.0],
                antonym2: hypothesis_antonyms,
                exact1to2: vec![0.0, 1.0, 0.0],
                exact2to1: vec![0.0, 1.0],
                synonym1: vec![0.0; 3],
                synonym2: vec![0.0; 2],
            },
        );
        Arc::new(store)
    }

    #[test]
    fn test_word_and_label_ids() {
        let tables = tables();
        assert_eq!(
            word_ids(tables.clone(), SentenceSide::Premise)(LINE).unwrap(),
            vec![2, 3, UNK_INDEX]
        );
        assert_eq!(
            word_ids(tables.clone(), SentenceSide::Hypothesis)(LINE).unwrap(),
            vec![UNK_INDEX, 3]
        );
        assert_eq!(label_id(tables)(LINE).unwrap(), 1);
    }

    #[test]
    fn test_unknown_label() {
        let line = LINE.replace("entailment", "maybe");
        assert!(matches!(
            label_id(tables())(&line),
            Err(NliStreamError::UnknownLabel(label)) if label == "maybe"
        ));
    }

    #[test]
    fn test_char_and_pos_ids() {
        let tables = tables();
        let chars = char_ids(tables.clone(), SentenceSide::Hypothesis)(LINE).unwrap();
        // a=1 c=2 t=3 s=4
        assert_eq!(chars, ndarray::array![[1, 0, 0], [2, 1, 3]]);

        let pos = pos_ids(tables, SentenceSide::Premise)(LINE).unwrap();
        assert_eq!(pos, vec![27, 39, 23]);
    }

    #[test]
    fn test_lexical_features() {
        let store = store(vec![1.0, 0.0]);
        assert_eq!(
            lexical_feature(store.clone(), LexicalKind::ExactMatch, SentenceSide::Premise)(LINE)
                .unwrap(),
            vec![0.0, 1.0, 0.0]
        );
        assert_eq!(
            lexical_feature(store, LexicalKind::Antonym, SentenceSide::Hypothesis)(LINE).unwrap(),
            vec![1.0, 0.0]
        );
    }

    #[test]
    fn test_lexical_length_mismatch() {
        let store = store(vec![1.0, 0.0, 0.0]);
        assert!(matches!(
            lexical_feature(store, LexicalKind::Antonym, SentenceSide::Hypothesis)(LINE),
            Err(NliStreamError::LexicalLengthMismatch {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_pair_id() {
        let line = LINE.replace("9e", "10n");
        assert!(matches!(
            lexical_feature(store(vec![0.0, 0.0]), LexicalKind::Synonym, SentenceSide::Premise)(
                &line
            ),
            Err(NliStreamError::MissingPairId { .. })
        ));
    }
}
