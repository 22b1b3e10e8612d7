use chromehar_core::cli;
use chromehar_core::logging::{self, LogFormat};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "chromehar",
    version,
    about = "chromehar: Chrome performance log to HAR converter"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.log_format.unwrap_or_else(logging::default_log_format));

    if let Err(e) = cli::run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("chromehar error: {e:#}");
        std::process::exit(1);
    }
}
