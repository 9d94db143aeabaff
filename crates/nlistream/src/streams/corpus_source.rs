//! # Corpus Sources

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{errors::NSResult, records::NliRecord};

/// A re-openable source of corpus lines.
///
/// Every [`CorpusSource::open`] restarts from the first line;
/// blank lines are never yielded.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusSource {
    /// A line-delimited JSON file.
    File(PathBuf),

    /// Lines held in memory.
    Memory(Arc<[String]>),
}

impl From<PathBuf> for CorpusSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for CorpusSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<Vec<String>> for CorpusSource {
    fn from(lines: Vec<String>) -> Self {
        Self::Memory(lines.into())
    }
}

impl CorpusSource {
    /// Build an in-memory source.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Memory(lines.into_iter().map(Into::into).collect())
    }

    /// Start a pass over the source.
    pub fn open(&self) -> NSResult<CorpusLines> {
        let inner = match self {
            Self::File(path) => LinesInner::File(BufReader::new(File::open(path)?).lines()),
            Self::Memory(lines) => LinesInner::Memory {
                lines: lines.clone(),
                pos: 0,
            },
        };
        Ok(CorpusLines { inner })
    }

    /// Count the non-blank lines of one pass.
    pub fn count_examples(&self) -> NSResult<usize> {
        let mut count = 0;
        for line in self.open()? {
            line?;
            count += 1;
        }
        Ok(count)
    }

    /// Parse every line of one pass as an [`NliRecord`].
    ///
    /// ## Returns
    /// The number of records; or the first read or parse error.
    pub fn validate_records(&self) -> NSResult<usize> {
        let mut count = 0;
        for line in self.open()? {
            NliRecord::from_json_line(&line?)?;
            count += 1;
        }
        Ok(count)
    }

    /// A short description, for logging.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Memory(lines) => format!("<memory: {} lines>", lines.len()),
        }
    }
}

enum LinesInner {
    File(Lines<BufReader<File>>),
    Memory { lines: Arc<[String]>, pos: usize },
}

/// One pass over a [`CorpusSource`].
pub struct CorpusLines {
    inner: LinesInner,
}

impl Iterator for CorpusLines {
    type Item = NSResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match &mut self.inner {
                LinesInner::File(lines) => match lines.next()? {
                    Ok(line) => line,
                    Err(e) => return Some(Err(e.into())),
                },
                LinesInner::Memory { lines, pos } => {
                    let line = lines.get(*pos)?.clone();
                    *pos += 1;
                    line
                }
            };
            if !line.trim().is_empty() {
                return Some(Ok(line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_skips_blank_lines() {
        let source = CorpusSource::from_lines(["a", "", "  ", "b"]);
        let lines: Vec<String> = source.open().unwrap().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["a", "b"]);
        assert_eq!(source.count_examples().unwrap(), 2);

        // Re-opening restarts.
        assert_eq!(source.open().unwrap().count(), 2);
    }

    #[test]
    fn test_file_source() {
        tempdir::TempDir::new("corpus_test")
            .and_then(|dir| {
                let path = dir.path().join("corpus.jsonl");
                std::fs::write(&path, "x\n\ny\nz\n")?;

                let source = CorpusSource::from(path.as_path());
                assert_eq!(source.count_examples().unwrap(), 3);
                assert!(source.describe().ends_with("corpus.jsonl"));

                let missing = CorpusSource::from(dir.path().join("missing.jsonl"));
                assert!(missing.open().is_err());
                assert!(missing.count_examples().is_err());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_validate_records() {
        let good = r#"{"sentence1_binary_parse": "( a )", "sentence2_binary_parse": "( b )", "sentence1_parse": "(ROOT (DT a))", "sentence2_parse": "(ROOT (DT b))", "gold_label": "neutral", "pairID": "1n"}"#;
        assert_eq!(
            CorpusSource::from_lines([good, good]).validate_records().unwrap(),
            2
        );
        assert!(
            CorpusSource::from_lines([good, r#"{"pairID": "2n"}"#])
                .validate_records()
                .is_err()
        );
    }
}
