//! Options command handlers.
//!
//! Implements `options list` and `options show`.

use std::fmt::Write as _;

use crate::cli::args::{OptionsListArgs, OptionsShowArgs, OutputFormat};
use crate::error::TopoptsError;
use crate::registry::OptionRegistry;

/// List registered policy options and their maturity tiers.
///
/// # Errors
///
/// Returns a JSON serialization error if `--format json` output fails.
pub fn list(args: &OptionsListArgs) -> Result<(), TopoptsError> {
    let registry = OptionRegistry::with_defaults();

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = registry
                .iter()
                .map(|(name, tier)| {
                    serde_json::json!({
                        "name": name,
                        "tier": tier,
                        "required_gate": tier.required_gate().map(|gate| gate.name()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            println!("Registered policy options\n");
            for (name, tier) in registry.iter() {
                let gate = tier
                    .required_gate()
                    .map_or_else(String::new, |gate| format!("  (requires {gate})"));
                println!("  {name:<28}{tier}{gate}");
            }
            println!("\nShow one option: topopts options show <name>");
        }
    }

    Ok(())
}

/// Show details for a single policy option.
///
/// # Errors
///
/// Returns a usage error if the option name is not registered.
pub fn show(args: &OptionsShowArgs) -> Result<(), TopoptsError> {
    let registry = OptionRegistry::with_defaults();

    let Some(tier) = registry.tier_of(&args.name) else {
        let mut message = format!("Unknown policy option '{}'", args.name);

        if let Some(suggestion) = registry.suggest(&args.name) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nRegistered options:");
        for (name, tier) in registry.iter() {
            let _ = write!(message, "\n  {name:<28}{tier}");
        }

        return Err(TopoptsError::Usage(message));
    };

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "name": args.name,
                    "tier": tier,
                    "required_gate": tier.required_gate().map(|gate| gate.name()),
                }))?
            );
        }
        OutputFormat::Human => {
            println!("name:  {}", args.name);
            println!("tier:  {tier}");
            match tier.required_gate() {
                Some(gate) => println!("gate:  {gate}"),
                None => println!("gate:  none (always available)"),
            }
        }
    }

    Ok(())
}
