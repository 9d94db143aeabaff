use std::time::Instant;

use nlistream::{NliBatch, NliData};

use crate::{
    logging::LogArgs,
    pipeline_args::{PipelineArgs, SourceArgs},
};

/// Args for the scan command.
#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pipeline: PipelineArgs,

    #[command(flatten)]
    source: SourceArgs,

    /// Stop after this many batches.
    #[arg(long, default_value = None)]
    limit: Option<usize>,

    /// Log the shape of every batch.
    #[arg(long)]
    shapes: bool,
}

impl ScanArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut data: NliData = self.pipeline.options()?.init()?;
        let source = self.source.source;
        log::info!(
            "{source}: {} examples, {} batches per epoch",
            data.example_count(source),
            data.batches_per_epoch(source)
        );

        let start = Instant::now();
        data.activate(source)?;

        let mut batches = 0;
        let mut examples = 0;
        let mut max_len = (0, 0);
        while let Some(batch) = data.next_batch()? {
            if self.shapes {
                log_shapes(batches, &batch);
            }
            batches += 1;
            examples += batch.len();
            max_len.0 = max_len.0.max(batch.premise_len());
            max_len.1 = max_len.1.max(batch.hypothesis_len());

            if self.limit.is_some_and(|limit| batches >= limit) {
                break;
            }
        }

        let elapsed = start.elapsed();
        log::info!(
            "{batches} batches, {examples} examples in {:.2}s",
            elapsed.as_secs_f64()
        );
        log::info!("longest premise {}, longest hypothesis {}", max_len.0, max_len.1);
        println!("{batches}\t{examples}");

        Ok(())
    }
}

fn log_shapes(
    idx: usize,
    batch: &NliBatch,
) {
    log::info!(
        "batch {idx}: premise {:?} hypothesis {:?} chars {:?}/{:?} labels {}",
        batch.premise.shape(),
        batch.hypothesis.shape(),
        batch.premise_chars.shape(),
        batch.hypothesis_chars.shape(),
        batch.label
    );
}
