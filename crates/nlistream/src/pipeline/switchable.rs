//! # Switchable Iterator

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    batch::NliBatch,
    errors::{NSResult, NliStreamError},
    pipeline::{DataSource, SourcePipeline, SourceStream},
};

struct ActiveStream {
    source: DataSource,
    stream: SourceStream,
    batches: usize,
}

/// One batch stream at a time, over three source recipes.
///
/// [`SwitchableIterator::activate`] (re-)builds a source's stream from its
/// [`SourcePipeline`], dropping the previously active stream. Pulls yield
/// `Some(Ok(batch))`, `Some(Err(e))` on a fatal condition, and `None` once
/// the active source is exhausted.
pub struct SwitchableIterator {
    pipelines: [SourcePipeline; 3],
    active: Option<ActiveStream>,
    seeds: StdRng,
}

impl SwitchableIterator {
    /// Create an iterator with no active source.
    ///
    /// ## Arguments
    /// * `pipelines` - one recipe per [`DataSource`], in [`DataSource::ALL`] order.
    /// * `seed` - seeds the per-activation seeds of pipelines without a fixed
    ///   one; `None` draws from the OS.
    pub fn new(
        pipelines: [SourcePipeline; 3],
        seed: Option<u64>,
    ) -> NSResult<Self> {
        for (pipeline, expected) in pipelines.iter().zip(DataSource::ALL) {
            if pipeline.source() != expected {
                return Err(NliStreamError::InvalidConfig(format!(
                    "pipeline for {} given in the {expected} slot",
                    pipeline.source()
                )));
            }
        }

        let seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            pipelines,
            active: None,
            seeds,
        })
    }

    /// The recipe of one source.
    pub fn pipeline(
        &self,
        source: DataSource,
    ) -> &SourcePipeline {
        &self.pipelines[source.index()]
    }

    /// The active source, if any.
    pub fn active_source(&self) -> Option<DataSource> {
        self.active.as_ref().map(|a| a.source)
    }

    /// The number of batches pulled since the last activation.
    pub fn batches_pulled(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.batches)
    }

    /// Start (or restart) `source` from its first epoch.
    pub fn activate(
        &mut self,
        source: DataSource,
    ) -> NSResult<()> {
        if let Some(previous) = self.active.take() {
            log::debug!(
                "dropping {} stream after {} batches",
                previous.source,
                previous.batches
            );
        }

        let pipeline = &self.pipelines[source.index()];
        let seed = match pipeline.seed() {
            Some(seed) => seed,
            None => self.seeds.random(),
        };
        log::debug!("activating {source} (shuffle seed {seed})");

        self.active = Some(ActiveStream {
            source,
            stream: pipeline.open(seed)?,
            batches: 0,
        });
        Ok(())
    }

    /// Pull the next batch of the active source.
    ///
    /// ## Returns
    /// * `Ok(Some(batch))` - the next batch.
    /// * `Ok(None)` - the active source is exhausted.
    /// * `Err(NliStreamError::NoActiveSource)` - nothing was activated.
    /// * `Err(e)` - a fatal error while building the batch.
    pub fn next_batch(&mut self) -> NSResult<Option<NliBatch>> {
        let active = self.active.as_mut().ok_or(NliStreamError::NoActiveSource)?;
        match active.stream.next() {
            Some(batch) => {
                let batch = batch?;
                active.batches += 1;
                Ok(Some(batch))
            }
            None => {
                log::debug!(
                    "{} exhausted after {} batches",
                    active.source,
                    active.batches
                );
                Ok(None)
            }
        }
    }
}

impl Iterator for SwitchableIterator {
    type Item = NSResult<NliBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}
