mod convert;
mod input;
mod summary;

pub use convert::*;
pub use input::*;
pub use summary::*;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a performance log into a HAR document
    Convert {
        /// Performance log file (JSON array or one record per line); stdin if omitted or "-"
        input: Option<PathBuf>,

        /// Write the HAR here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one line per captured request
    Summary {
        /// Performance log file; stdin if omitted or "-"
        input: Option<PathBuf>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Convert {
            input,
            output,
            compact,
            config,
        } => convert(input.as_deref(), output.as_deref(), compact, config.as_deref()),
        Command::Summary { input, config } => summary(input.as_deref(), config.as_deref()),
    }
}
