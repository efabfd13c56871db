//! Option registry: which policy options exist, and at what maturity.
//!
//! The registry is an explicit value owned by the caller and injected into
//! the parser, not a process-global. It is populated with the built-in
//! options by [`OptionRegistry::with_defaults`] and may be extended at
//! runtime through [`OptionRegistry::register`] (plugin-style extension and
//! test injection). Names are never removed.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::PolicyOptionError;
use crate::features::{Gate, GateOracle};
use crate::options::KnownOption;

// ============================================================================
// Tiers
// ============================================================================

/// Stability classification of a policy option.
///
/// The tier decides which maturity gate, if any, must be enabled before the
/// option is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Always available.
    Stable,
    /// Available while [`Gate::BetaPolicyOptions`] is enabled.
    Beta,
    /// Available while [`Gate::AlphaPolicyOptions`] is enabled.
    Alpha,
}

impl Tier {
    /// Returns the gate that must be enabled for options at this tier, or
    /// `None` for stable options.
    #[must_use]
    pub const fn required_gate(self) -> Option<Gate> {
        match self {
            Self::Stable => None,
            Self::Beta => Some(Gate::BetaPolicyOptions),
            Self::Alpha => Some(Gate::AlphaPolicyOptions),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => f.write_str("stable"),
            Self::Beta => f.write_str("beta"),
            Self::Alpha => f.write_str("alpha"),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Catalog of recognized option names and their maturity tiers.
///
/// A name appears in at most one tier at a time: the backing map is keyed by
/// name, so re-registering a name moves it rather than duplicating it.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    tiers: BTreeMap<String, Tier>,
}

impl OptionRegistry {
    /// Creates an empty registry with no recognized options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiers: BTreeMap::new(),
        }
    }

    /// Creates a registry pre-populated with the built-in options.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for option in KnownOption::ALL {
            registry.register(option.name(), option.tier());
        }
        registry
    }

    /// Registers `name` at `tier`.
    ///
    /// Idempotent; registering an existing name overwrites its tier (last
    /// write wins).
    pub fn register(&mut self, name: impl Into<String>, tier: Tier) {
        self.tiers.insert(name.into(), tier);
    }

    /// Returns the tier `name` is registered at, if any.
    #[must_use]
    pub fn tier_of(&self, name: &str) -> Option<Tier> {
        self.tiers.get(name).copied()
    }

    /// Returns `true` if `name` is registered and its maturity gate (if any)
    /// is currently enabled.
    #[must_use]
    pub fn is_available(&self, name: &str, gates: &dyn GateOracle) -> bool {
        self.check_available(name, gates).is_ok()
    }

    /// Checks availability of `name`, producing the descriptive rejection
    /// used by the parser.
    ///
    /// # Errors
    ///
    /// `UnknownOption` if `name` is not registered at any tier;
    /// `BetaGateDisabled` / `AlphaGateDisabled` if the tier's gate is off.
    pub fn check_available(
        &self,
        name: &str,
        gates: &dyn GateOracle,
    ) -> Result<(), PolicyOptionError> {
        let Some(tier) = self.tier_of(name) else {
            return Err(PolicyOptionError::UnknownOption {
                option: name.to_string(),
            });
        };

        match tier.required_gate() {
            None => Ok(()),
            Some(gate) if gates.is_enabled(gate) => Ok(()),
            Some(Gate::BetaPolicyOptions) => Err(PolicyOptionError::BetaGateDisabled {
                option: name.to_string(),
            }),
            Some(Gate::AlphaPolicyOptions) => Err(PolicyOptionError::AlphaGateDisabled {
                option: name.to_string(),
            }),
        }
    }

    /// Iterates over registered `(name, tier)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Tier)> {
        self.tiers.iter().map(|(name, tier)| (name.as_str(), *tier))
    }

    /// Suggests the closest registered name for an unrecognized one, if a
    /// plausibly similar name exists.
    #[must_use]
    pub fn suggest(&self, name: &str) -> Option<&str> {
        self.tiers
            .keys()
            .map(|candidate| (candidate, strsim::jaro_winkler(name, candidate)))
            .filter(|&(_, score)| score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.as_str())
    }
}
