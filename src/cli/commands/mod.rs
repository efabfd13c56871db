//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod options;
pub mod validate;

use crate::cli::args::{Cli, Commands, OptionsSubcommand};
use crate::error::TopoptsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), TopoptsError> {
    match cli.command {
        Commands::Validate(args) => validate::run(&args),
        Commands::Options(cmd) => match cmd.subcommand {
            OptionsSubcommand::List(args) => options::list(&args),
            OptionsSubcommand::Show(args) => options::show(&args),
        },
    }
}
