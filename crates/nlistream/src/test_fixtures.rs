//! Small in-memory corpus, tables and feature store for unit tests.

use std::{io::Cursor, sync::Arc};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    lexical::{LexicalFeatureStore, LexicalFeatures},
    streams::CorpusSource,
    types::{FeatureType, IndexType},
    vocab::{CharVocab, IndexTables, read_embedding_vocab},
};

pub(crate) const CHAR_PAD: usize = 5;

/// `(gold_label, pair_id, premise, hypothesis)`; each sentence starts
/// with its label's marker word.
pub(crate) const EXAMPLES: [(&str, &str, &str, &str); 4] = [
    ("neutral", "0n", "maybe cat sat", "maybe dog"),
    ("entailment", "1e", "yes dog ran", "yes the dog ran"),
    ("contradiction", "2c", "no cat", "no cat sat on mat"),
    ("neutral", "3n", "maybe a long long long sentence", "maybe"),
];

/// Word ids: maybe=2 yes=3 no=4 cat=5 dog=6 sat=7 ran=8.
pub(crate) const EMBEDDINGS: &str = "\
maybe 0.1 0.2
yes 0.3 0.4
no 0.5 0.6
cat 0.7 0.8
dog 0.9 1.0
sat 1.1 1.2
ran 1.3 1.4
";

pub(crate) const UH_INDEX: IndexType = 37;
pub(crate) const NN_INDEX: IndexType = 39;

fn full_parse(sentence: &str) -> String {
    let leaves: Vec<String> = sentence
        .split(' ')
        .enumerate()
        .map(|(i, w)| match i {
            0 => format!("(UH {w})"),
            _ => format!("(NN {w})"),
        })
        .collect();
    format!("(ROOT (S {}))", leaves.join(" "))
}

pub(crate) fn line(
    label: &str,
    pair_id: &str,
    premise: &str,
    hypothesis: &str,
) -> String {
    serde_json::json!({
        "gold_label": label,
        "pairID": pair_id,
        "sentence1": premise,
        "sentence2": hypothesis,
        "sentence1_binary_parse": format!("( {premise} )"),
        "sentence2_binary_parse": format!("( {hypothesis} )"),
        "sentence1_parse": full_parse(premise),
        "sentence2_parse": full_parse(hypothesis),
    })
    .to_string()
}

pub(crate) fn lines() -> Vec<String> {
    EXAMPLES
        .iter()
        .map(|&(label, pair_id, p, h)| line(label, pair_id, p, h))
        .collect()
}

pub(crate) fn corpus() -> CorpusSource {
    CorpusSource::from_lines(lines())
}

pub(crate) fn tables() -> Arc<IndexTables> {
    let words = read_embedding_vocab(Cursor::new(EMBEDDINGS), None).unwrap();
    Arc::new(
        IndexTables::build(
            words,
            CharVocab::printable(),
            4,
            CHAR_PAD,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap(),
    )
}

/// Exact-match marks the first token; everything else is zero.
pub(crate) fn features(
    premise_len: usize,
    hypothesis_len: usize,
) -> LexicalFeatures {
    let first = |n: usize| -> Vec<FeatureType> {
        (0..n).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect()
    };
    LexicalFeatures {
        antonym1: vec![0.0; premise_len],
        antonym2: vec![0.0; hypothesis_len],
        exact1to2: first(premise_len),
        exact2to1: first(hypothesis_len),
        synonym1: vec![0.0; premise_len],
        synonym2: vec![0.0; hypothesis_len],
    }
}

pub(crate) fn store() -> Arc<LexicalFeatureStore> {
    let mut store = LexicalFeatureStore::new();
    for (_, pair_id, p, h) in EXAMPLES {
        store.insert(
            pair_id,
            features(p.split(' ').count(), h.split(' ').count()),
        );
    }
    Arc::new(store)
}

/// The word id of the marker word leading every sentence with this label.
pub(crate) fn label_word_id(label: IndexType) -> IndexType {
    match label {
        0 => 2,
        1 => 3,
        2 => 4,
        _ => panic!("no marker word for label {label}"),
    }
}
