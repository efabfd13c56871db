//! Policy option parsing and validation.
//!
//! Turns the raw `name → value` string mapping from the node config into a
//! typed, immutable [`PolicyOptions`] record, or fails with the first
//! violation encountered. Authorization (registration + maturity gate) runs
//! before any value parser; a failed parse has no observable effect beyond
//! the returned error.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::PolicyOptionError;
use crate::features::GateOracle;
use crate::registry::{OptionRegistry, Tier};

// ============================================================================
// Option Names
// ============================================================================

/// Option name: prefer the NUMA nodes closest to the requesting workload.
pub const PREFER_CLOSEST_NUMA_NODES: &str = "prefer-closest-numa-nodes";

/// Option name: ceiling on the number of NUMA nodes considered for alignment.
pub const MAX_ALLOWABLE_NUMA_NODES: &str = "max-allowable-numa-nodes";

/// Option name: explicit allow-list of NUMA node IDs.
pub const ALLOWED_NUMA_NODES: &str = "allowed-numa-nodes";

/// Default NUMA node ceiling applied when `max-allowable-numa-nodes` is not
/// set. Matches the platform constant used by the alignment logic.
pub const DEFAULT_MAX_ALLOWABLE_NUMA_NODES: i64 = 8;

// ============================================================================
// PolicyOptions
// ============================================================================

/// Validated topology manager policy options.
///
/// Immutable after construction; the resource-assignment logic reads it as
/// an opaque configuration value. Fields for options absent from the raw
/// mapping hold their documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyOptions {
    /// Prefer the closest NUMA nodes when aligning resources.
    pub prefer_closest_numa: bool,

    /// Ceiling on NUMA nodes considered for alignment. Not range-checked
    /// here; downstream consumers apply their own ceiling validation.
    pub max_allowable_numa_nodes: i64,

    /// Allow-list of NUMA node IDs, in input order. Empty means no
    /// restriction. Consumers treat it as a set; uniqueness is validated.
    pub allowed_numa_nodes: Vec<usize>,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            prefer_closest_numa: false,
            max_allowable_numa_nodes: DEFAULT_MAX_ALLOWABLE_NUMA_NODES,
            allowed_numa_nodes: Vec::new(),
        }
    }
}

// ============================================================================
// Known-Option Dispatch
// ============================================================================

/// The closed set of options with dedicated value parsers.
///
/// Each variant carries its wire name, default tier, and validator. Options
/// registered dynamically (beta/alpha extension names) have no variant here
/// and take the verbatim-acceptance path in [`OptionsParser::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KnownOption {
    PreferClosestNumaNodes,
    MaxAllowableNumaNodes,
    AllowedNumaNodes,
}

impl KnownOption {
    /// All known options, used to seed [`OptionRegistry::with_defaults`].
    pub(crate) const ALL: [Self; 3] = [
        Self::PreferClosestNumaNodes,
        Self::MaxAllowableNumaNodes,
        Self::AllowedNumaNodes,
    ];

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::PreferClosestNumaNodes => PREFER_CLOSEST_NUMA_NODES,
            Self::MaxAllowableNumaNodes => MAX_ALLOWABLE_NUMA_NODES,
            Self::AllowedNumaNodes => ALLOWED_NUMA_NODES,
        }
    }

    /// Default maturity tier. The registry is the runtime authority; this
    /// only seeds the default registrations.
    pub(crate) const fn tier(self) -> Tier {
        match self {
            Self::PreferClosestNumaNodes | Self::AllowedNumaNodes => Tier::Stable,
            Self::MaxAllowableNumaNodes => Tier::Beta,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.name() == name)
    }

    /// Parses `value` and stores the result in `opts`.
    fn apply(self, value: &str, opts: &mut PolicyOptions) -> Result<(), PolicyOptionError> {
        match self {
            Self::PreferClosestNumaNodes => {
                opts.prefer_closest_numa =
                    parse_bool_value(value).ok_or_else(|| PolicyOptionError::InvalidBoolean {
                        option: self.name().to_string(),
                        value: value.to_string(),
                    })?;
            }
            Self::MaxAllowableNumaNodes => {
                opts.max_allowable_numa_nodes =
                    value
                        .parse::<i64>()
                        .map_err(|_| PolicyOptionError::InvalidInteger {
                            option: self.name().to_string(),
                            value: value.to_string(),
                        })?;
            }
            Self::AllowedNumaNodes => {
                opts.allowed_numa_nodes = parse_allowed_numa_nodes(self.name(), value)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Parser
// ============================================================================

/// The sole public entry point for turning raw options into
/// [`PolicyOptions`].
///
/// The registry is injected at construction; the gate oracle is supplied per
/// parse call.
#[derive(Debug, Clone, Copy)]
pub struct OptionsParser<'a> {
    registry: &'a OptionRegistry,
}

impl<'a> OptionsParser<'a> {
    /// Creates a parser backed by `registry`.
    #[must_use]
    pub const fn new(registry: &'a OptionRegistry) -> Self {
        Self { registry }
    }

    /// Parses and validates `raw`, strictly fail-fast.
    ///
    /// An empty mapping short-circuits to the default [`PolicyOptions`]
    /// without consulting the gate oracle. Otherwise every key is first
    /// authorized against the registry and gates, then dispatched to its
    /// value parser. Keys that are registered and available but have no
    /// dedicated parser are accepted verbatim with no structural validation
    /// and populate no field; this is the extension point for
    /// forward-compatible beta/alpha option names.
    ///
    /// # Errors
    ///
    /// The first [`PolicyOptionError`] encountered; no partial result is
    /// returned.
    pub fn parse(
        &self,
        raw: &BTreeMap<String, String>,
        gates: &dyn GateOracle,
    ) -> Result<PolicyOptions, PolicyOptionError> {
        let mut opts = PolicyOptions::default();
        if raw.is_empty() {
            return Ok(opts);
        }

        for (name, value) in raw {
            self.registry.check_available(name, gates)?;

            match KnownOption::from_name(name) {
                Some(option) => option.apply(value, &mut opts)?,
                None => {
                    tracing::debug!(
                        option = %name,
                        "accepted policy option without structural validation"
                    );
                }
            }
        }

        Ok(opts)
    }
}

// ============================================================================
// Value Parsing
// ============================================================================

/// Parses the canonical textual boolean forms: `1`, `t`, `T`, `true`,
/// `TRUE`, `True` and their false counterparts. Anything else is `None`.
fn parse_bool_value(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a comma-separated NUMA node allow-list.
///
/// Input order is preserved. Checks run in this order: empty value overall
/// (after trimming), then per token: base-10 parse, non-negativity,
/// uniqueness. Tokens themselves are not trimmed; `"0, 1"` is rejected.
///
/// # Errors
///
/// `EmptyValue`, `InvalidNumaNodeId`, `NegativeNumaNodeId`, or
/// `DuplicateNumaNodeId`, each naming `option` and the offending token/ID.
pub fn parse_allowed_numa_nodes(
    option: &str,
    value: &str,
) -> Result<Vec<usize>, PolicyOptionError> {
    if value.trim().is_empty() {
        return Err(PolicyOptionError::EmptyValue {
            option: option.to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut nodes = Vec::new();
    for token in value.split(',') {
        let id = token
            .parse::<i64>()
            .map_err(|_| PolicyOptionError::InvalidNumaNodeId {
                option: option.to_string(),
                token: token.to_string(),
            })?;
        if id < 0 {
            return Err(PolicyOptionError::NegativeNumaNodeId {
                option: option.to_string(),
                id,
            });
        }
        let id = usize::try_from(id).map_err(|_| PolicyOptionError::InvalidNumaNodeId {
            option: option.to_string(),
            token: token.to_string(),
        })?;
        if !seen.insert(id) {
            return Err(PolicyOptionError::DuplicateNumaNodeId {
                option: option.to_string(),
                id,
            });
        }
        nodes.push(id);
    }

    Ok(nodes)
}
