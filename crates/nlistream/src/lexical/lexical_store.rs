//! # Lexical Feature Store

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{NSResult, NliStreamError},
    lexical::LexicalFeatures,
    types::{NSHashMap, hash_map_new},
};

/// Pair id to [`LexicalFeatures`] map.
///
/// Lookups are hash lookups; a missing pair id is an error, never a default.
#[derive(Debug, Clone, Default)]
pub struct LexicalFeatureStore {
    entries: NSHashMap<String, LexicalFeatures>,
}

impl LexicalFeatureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: hash_map_new(),
        }
    }

    /// Load every feature file, in order, into one store.
    ///
    /// Later files override earlier entries with the same pair id.
    pub fn load_paths<I, P>(paths: I) -> NSResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut store = Self::new();
        for path in paths {
            let path = path.as_ref();
            log::info!("loading shared features from {}", path.display());
            let count = store.read_into(BufReader::new(File::open(path)?))?;
            log::debug!("{count} entries from {}", path.display());
        }
        log::info!("shared feature store holds {} pairs", store.len());
        Ok(store)
    }

    /// Read a feature file line reader into the store.
    ///
    /// Lines are:
    /// ```terminaloutput
    /// {PAIR ID} {JSON OBJECT}
    /// ```
    ///
    /// ## Returns
    /// The number of entries read.
    pub fn read_into<R: BufRead>(
        &mut self,
        reader: R,
    ) -> NSResult<usize> {
        let mut count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |reason: String| NliStreamError::MalformedFeatureLine {
                line: idx + 1,
                reason,
            };

            let (pair_id, json) = line
                .split_once(' ')
                .ok_or_else(|| malformed("expected a pair id followed by JSON".to_string()))?;
            let features: LexicalFeatures =
                serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;

            self.insert(pair_id, features);
            count += 1;
        }
        Ok(count)
    }

    /// Insert (or replace) one entry.
    pub fn insert(
        &mut self,
        pair_id: impl Into<String>,
        features: LexicalFeatures,
    ) {
        self.entries.insert(pair_id.into(), features);
    }

    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a pair's features.
    ///
    /// ## Returns
    /// The entry, or [`NliStreamError::MissingPairId`].
    pub fn lookup(
        &self,
        pair_id: &str,
    ) -> NSResult<&LexicalFeatures> {
        self.entries
            .get(pair_id)
            .ok_or_else(|| NliStreamError::MissingPairId {
                pair_id: pair_id.to_string(),
            })
    }
}
