//! # Example Stream

use std::sync::Arc;

use crate::{
    errors::NSResult,
    streams::{CorpusLines, CorpusSource},
};

/// One corpus line, tagged with its position in the repeated stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// The 0-based position across every pass.
    pub ordinal: usize,

    /// The raw line.
    pub line: Arc<str>,
}

/// The lines of a [`CorpusSource`], repeated for a fixed number of passes.
///
/// The first error ends the stream.
pub struct ExampleStream {
    source: CorpusSource,
    epochs: usize,
    epoch: usize,
    lines: Option<CorpusLines>,
    next_ordinal: usize,
    failed: bool,
}

impl ExampleStream {
    /// Create a stream over `epochs` passes of `source`.
    ///
    /// The source is not opened until the first pull.
    pub fn new(
        source: CorpusSource,
        epochs: usize,
    ) -> Self {
        Self {
            source,
            epochs,
            epoch: 0,
            lines: None,
            next_ordinal: 0,
            failed: false,
        }
    }
}

impl Iterator for ExampleStream {
    type Item = NSResult<Example>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if self.lines.is_none() {
                if self.epoch >= self.epochs {
                    return None;
                }
                self.epoch += 1;
                match self.source.open() {
                    Ok(lines) => self.lines = Some(lines),
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                }
            }

            let lines = self.lines.as_mut()?;
            match lines.next() {
                Some(Ok(line)) => {
                    let ordinal = self.next_ordinal;
                    self.next_ordinal += 1;
                    return Some(Ok(Example {
                        ordinal,
                        line: line.into(),
                    }));
                }
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e));
                }
                None => {
                    self.lines = None;
                    if self.next_ordinal == 0 {
                        // An empty source stays empty on every pass.
                        self.epoch = self.epochs;
                    }
                }
            }
        }
    }
}
