use nlistream::vocab::CharVocab;

use crate::logging::LogArgs;

/// Args for the chars command.
#[derive(clap::Args, Debug)]
pub struct CharsArgs {
    /// Line-delimited JSON corpus to scan.
    corpus: String,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl CharsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let vocab = CharVocab::scan_corpus_path(&self.corpus)?;
        for (idx, c) in vocab.chars().into_iter().enumerate().skip(1) {
            println!("{idx}\t{c:?}");
        }

        Ok(())
    }
}
