//! CLI argument definitions.
//!
//! All Clap derive structs for `topopts` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Validate topology manager policy options against node configuration.
#[derive(Parser, Debug)]
#[command(name = "topopts", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate node configuration files.
    Validate(ValidateArgs),

    /// Inspect the registered policy options.
    Options(OptionsCommand),
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Node configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat beta-level policy options as enabled regardless of the file's
    /// feature gates.
    #[arg(long, env = "TOPOPTS_ENABLE_BETA_OPTIONS")]
    pub enable_beta_options: bool,

    /// Treat alpha-level policy options as enabled regardless of the file's
    /// feature gates.
    #[arg(long, env = "TOPOPTS_ENABLE_ALPHA_OPTIONS")]
    pub enable_alpha_options: bool,
}

// ============================================================================
// Options Command
// ============================================================================

/// Option inspection commands.
#[derive(Args, Debug)]
pub struct OptionsCommand {
    /// Options subcommand.
    #[command(subcommand)]
    pub subcommand: OptionsSubcommand,
}

/// Options subcommands.
#[derive(Subcommand, Debug)]
pub enum OptionsSubcommand {
    /// List registered policy options and their maturity tiers.
    List(OptionsListArgs),

    /// Show details for a single policy option.
    Show(OptionsShowArgs),
}

/// Arguments for `options list`.
#[derive(Args, Debug)]
pub struct OptionsListArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `options show`.
#[derive(Args, Debug)]
pub struct OptionsShowArgs {
    /// Option name to show.
    pub name: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["topopts", "validate"]);
        assert!(result.is_err(), "expected error for missing files");
    }

    #[test]
    fn test_validate_with_gates() {
        let cli = Cli::try_parse_from([
            "topopts",
            "validate",
            "node.yaml",
            "--enable-beta-options",
        ])
        .unwrap();

        let Commands::Validate(args) = cli.command else {
            panic!("expected ValidateArgs");
        };
        assert!(args.enable_beta_options);
        assert!(!args.enable_alpha_options);
        assert_eq!(args.files, vec![PathBuf::from("node.yaml")]);
    }

    #[test]
    fn test_validate_multiple_files() {
        let cli = Cli::try_parse_from(["topopts", "validate", "a.yaml", "b.yaml"]).unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("expected ValidateArgs");
        };
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn test_options_list_formats_parse() {
        for format in ["human", "json"] {
            let cli = Cli::try_parse_from(["topopts", "options", "list", "--format", format]);
            assert!(cli.is_ok(), "failed to parse format={format}");
        }
    }

    #[test]
    fn test_options_show_takes_name() {
        let cli =
            Cli::try_parse_from(["topopts", "options", "show", "allowed-numa-nodes"]).unwrap();
        let Commands::Options(cmd) = cli.command else {
            panic!("expected OptionsCommand");
        };
        let OptionsSubcommand::Show(args) = cmd.subcommand else {
            panic!("expected OptionsShowArgs");
        };
        assert_eq!(args.name, "allowed-numa-nodes");
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["topopts", "-vvv", "options", "list"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["topopts", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }
}
