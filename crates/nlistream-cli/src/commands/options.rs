use crate::{logging::LogArgs, pipeline_args::PipelineArgs};

/// Args for the options command.
#[derive(clap::Args, Debug)]
pub struct OptionsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pipeline: PipelineArgs,
}

impl OptionsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.pipeline.options()?;
        println!("{}", serde_json::to_string_pretty(&options)?);

        Ok(())
    }
}
