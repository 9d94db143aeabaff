//! # Pretrained Embedding IO

use std::{io::BufRead, path::Path};

use ndarray::Array2;

use crate::{
    errors::{NSResult, NliStreamError},
    types::FeatureType,
    vocab::{
        WordVocab,
        io::open_text_resource,
        word_vocab::RESERVED_SIZE,
    },
};

/// A [`WordVocab`] and its row-aligned embedding matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVocab {
    /// The word vocabulary.
    pub vocab: WordVocab,

    /// The `(vocab.len(), dim)` embedding matrix; rows 0 and 1 are zero.
    pub embedding: Array2<FeatureType>,
}

impl EmbeddingVocab {
    /// The embedding dimension.
    pub fn dim(&self) -> usize {
        self.embedding.ncols()
    }
}

/// Load an [`EmbeddingVocab`] from a pretrained embedding file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN} {F1} {F2} ... {FD}
/// ```
///
/// Paths ending in `.gz` are read through a gzip decoder.
///
/// # Arguments
/// * `path` - the path to the embedding file.
/// * `max_size` - optional cap on the total vocabulary size, reserved entries included.
pub fn load_embedding_vocab_path(
    path: impl AsRef<Path>,
    max_size: Option<usize>,
) -> NSResult<EmbeddingVocab> {
    let path = path.as_ref();
    log::info!("loading embeddings from {}", path.display());

    let loaded = read_embedding_vocab(open_text_resource(path)?, max_size)?;

    log::info!(
        "loaded {} words with {}-dim embeddings",
        loaded.vocab.len(),
        loaded.dim()
    );
    Ok(loaded)
}

/// Read an [`EmbeddingVocab`] from a pretrained embedding line reader.
///
/// Words are indexed in resource order from `2`; the first line fixes the
/// embedding arity, and any line that deviates from it is a
/// [`NliStreamError::MalformedEmbedding`]. Repeated words keep their first row.
///
/// # Arguments
/// * `reader` - the line reader.
/// * `max_size` - optional cap on the total vocabulary size, reserved entries included.
pub fn read_embedding_vocab<R: BufRead>(
    reader: R,
    max_size: Option<usize>,
) -> NSResult<EmbeddingVocab> {
    let limit = match max_size {
        Some(size) if size < RESERVED_SIZE => {
            return Err(NliStreamError::InvalidConfig(format!(
                "embedding size cap ({size}) must be >= {RESERVED_SIZE}"
            )));
        }
        Some(size) => size - RESERVED_SIZE,
        None => usize::MAX,
    };

    let mut vocab = WordVocab::new();
    let mut dim: Option<usize> = None;
    let mut rows: Vec<FeatureType> = Vec::new();
    let mut loaded = 0;

    for (idx, line) in reader.lines().enumerate() {
        if loaded >= limit {
            break;
        }
        let line = line?;
        let lineno = idx + 1;

        let malformed = |reason: String| NliStreamError::MalformedEmbedding {
            line: lineno,
            reason,
        };

        let (word, values) = line
            .split_once(' ')
            .ok_or_else(|| malformed("expected a token followed by floats".to_string()))?;

        let values = values
            .split_whitespace()
            .map(|v| v.parse::<FeatureType>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| malformed(e.to_string()))?;

        let width = *dim.get_or_insert(values.len());
        if values.is_empty() || values.len() != width {
            return Err(malformed(format!(
                "expected {width} values, found {}",
                values.len()
            )));
        }

        if vocab.push_word(word).is_none() {
            log::warn!("line {lineno}: duplicate embedding word {word:?}; keeping the first");
            continue;
        }
        rows.extend(values);
        loaded += 1;
    }

    let dim = dim.unwrap_or(0);
    let mut flat = vec![0.0; RESERVED_SIZE * dim];
    flat.extend(rows);

    let embedding = Array2::from_shape_vec((vocab.len(), dim), flat)
        .map_err(|e| NliStreamError::InvalidConfig(e.to_string()))?;

    Ok(EmbeddingVocab { vocab, embedding })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::vocab::word_vocab::{PAD_INDEX, UNK_INDEX};

    const GLOVE: &str = "the 0.1 0.2 0.3\ncat -1 0 1.5\ndog 2 2 2\n";

    #[test]
    fn test_read_embedding_vocab() {
        let loaded = read_embedding_vocab(Cursor::new(GLOVE), None).unwrap();

        assert_eq!(loaded.vocab.len(), 5);
        assert_eq!(loaded.dim(), 3);
        assert_eq!(loaded.embedding.shape(), &[5, 3]);

        assert_eq!(loaded.vocab.word_index("<PAD>"), PAD_INDEX);
        assert_eq!(loaded.vocab.word_index("the"), 2);
        assert_eq!(loaded.vocab.word_index("dog"), 4);
        assert_eq!(loaded.vocab.word_index("bird"), UNK_INDEX);

        assert!(loaded.embedding.row(0).iter().all(|&v| v == 0.0));
        assert!(loaded.embedding.row(1).iter().all(|&v| v == 0.0));
        assert_eq!(loaded.embedding.row(3).to_vec(), vec![-1.0, 0.0, 1.5]);
    }

    #[test]
    fn test_read_embedding_vocab_capped() {
        let loaded = read_embedding_vocab(Cursor::new(GLOVE), Some(4)).unwrap();
        assert_eq!(loaded.vocab.len(), 4);
        assert_eq!(loaded.embedding.nrows(), 4);
        assert_eq!(loaded.vocab.word_index("dog"), UNK_INDEX);

        let loaded = read_embedding_vocab(Cursor::new(GLOVE), Some(2)).unwrap();
        assert_eq!(loaded.vocab.len(), 2);

        assert!(read_embedding_vocab(Cursor::new(GLOVE), Some(1)).is_err());
    }

    #[test]
    fn test_duplicate_words_keep_first() {
        let glove = "a 1 1\nb 2 2\na 3 3\nc 4 4\n";
        let loaded = read_embedding_vocab(Cursor::new(glove), None).unwrap();
        assert_eq!(loaded.vocab.len(), 5);
        assert_eq!(loaded.embedding.nrows(), 5);
        assert_eq!(loaded.embedding.row(2).to_vec(), vec![1.0, 1.0]);
        assert_eq!(loaded.embedding.row(4).to_vec(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_malformed_lines() {
        for bad in [
            "the 0.1 0.2\ncat 0.1\n",
            "the 0.1 zebra\n",
            "lonely\n",
            "empty \n",
        ] {
            match read_embedding_vocab(Cursor::new(bad), None) {
                Err(NliStreamError::MalformedEmbedding { .. }) => {}
                other => panic!("expected MalformedEmbedding for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_load_embedding_vocab_path() {
        tempdir::TempDir::new("embedding_test")
            .and_then(|dir| {
                let path = dir.path().join("glove.txt");
                std::fs::write(&path, GLOVE)?;

                let loaded = load_embedding_vocab_path(&path, None).expect("failed to load");
                assert_eq!(loaded.vocab.len(), 5);
                Ok(())
            })
            .unwrap();
    }
}
