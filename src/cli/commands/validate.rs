//! `validate` command handler.
//!
//! Loads each node configuration file, merges its declared feature gates
//! with the CLI gate overrides, runs the policy-option parser, and reports
//! per file. Any failing file makes the whole invocation fail with a
//! validation-failure count, matching fail-fast semantics per file while
//! still reporting every file.

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config;
use crate::error::{ConfigError, TopoptsError};
use crate::features::{Gate, GateSet};
use crate::options::{OptionsParser, PolicyOptions};
use crate::registry::OptionRegistry;

/// Validate node configuration files.
///
/// # Errors
///
/// `ConfigError::ValidationFailed` if any file is rejected; JSON
/// serialization errors when `--format json` output fails.
pub fn run(args: &ValidateArgs) -> Result<(), TopoptsError> {
    let registry = OptionRegistry::with_defaults();
    let parser = OptionsParser::new(&registry);

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let outcome = config::load_file(file).map_err(TopoptsError::from).and_then(
            |node_config| {
                let gates = merge_gates(node_config.gates, args);
                tracing::info!(file = %file.display(), ?gates, "validating policy options");
                parser
                    .parse(&node_config.policy_options, &gates)
                    .map_err(TopoptsError::from)
            },
        );
        reports.push((file, outcome));
    }

    let failures = reports.iter().filter(|(_, r)| r.is_err()).count();

    match args.format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Human => print_human(&reports),
    }

    if failures > 0 {
        return Err(ConfigError::ValidationFailed { count: failures }.into());
    }
    Ok(())
}

fn merge_gates(mut gates: GateSet, args: &ValidateArgs) -> GateSet {
    if args.enable_beta_options {
        gates = gates.with(Gate::BetaPolicyOptions);
    }
    if args.enable_alpha_options {
        gates = gates.with(Gate::AlphaPolicyOptions);
    }
    gates
}

type Report<'a> = (&'a std::path::PathBuf, Result<PolicyOptions, TopoptsError>);

fn print_human(reports: &[Report<'_>]) {
    for (file, outcome) in reports {
        match outcome {
            Ok(opts) => {
                println!(
                    "ok: {}: prefer_closest_numa={} max_allowable_numa_nodes={} allowed_numa_nodes={:?}",
                    file.display(),
                    opts.prefer_closest_numa,
                    opts.max_allowable_numa_nodes,
                    opts.allowed_numa_nodes,
                );
            }
            Err(err) => {
                println!("error: {}: {err}", file.display());
            }
        }
    }
}

fn print_json(reports: &[Report<'_>]) -> Result<(), TopoptsError> {
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .map(|(file, outcome)| match outcome {
            Ok(opts) => serde_json::json!({
                "file": file.display().to_string(),
                "ok": true,
                "options": opts,
            }),
            Err(err) => serde_json::json!({
                "file": file.display().to_string(),
                "ok": false,
                "error": err.to_string(),
            }),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
