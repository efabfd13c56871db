//! `topopts` — topology manager policy option validation CLI

use clap::Parser;

use topopts::cli::args::Cli;
use topopts::cli::commands;
use topopts::error::ExitCode;
use topopts::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
