use crate::commands::{chars::CharsArgs, options::OptionsArgs, scan::ScanArgs};

pub mod chars;
pub mod options;
pub mod scan;

/// Subcommands for nlistream-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Stream a source and report batch shapes.
    Scan(ScanArgs),

    /// Print the character vocabulary of a corpus.
    Chars(CharsArgs),

    /// Print the resolved pipeline options as JSON.
    Options(OptionsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Scan(cmd) => cmd.run(),
            Commands::Chars(cmd) => cmd.run(),
            Commands::Options(cmd) => cmd.run(),
        }
    }
}
