//! Maturity gates for policy options.
//!
//! Beta- and alpha-tier options are honored only while the corresponding
//! gate is enabled. The gate state itself lives outside this crate; callers
//! supply it per parse call through the [`GateOracle`] trait, so tests and
//! alternate hosts can provide deterministic gate states without touching
//! any global.

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Gates
// ============================================================================

/// The maturity gates consulted during option authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Gates every beta-tier policy option.
    BetaPolicyOptions,
    /// Gates every alpha-tier policy option.
    AlphaPolicyOptions,
}

impl Gate {
    /// All gates, in display order.
    pub const ALL: [Self; 2] = [Self::BetaPolicyOptions, Self::AlphaPolicyOptions];

    /// Returns the stable kebab-case name used in node-config
    /// `feature_gates` blocks.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BetaPolicyOptions => "beta-policy-options",
            Self::AlphaPolicyOptions => "alpha-policy-options",
        }
    }

    /// Looks up a gate by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gate| gate.name() == name)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Oracle
// ============================================================================

/// Read-only answer to "is this maturity gate currently enabled?".
///
/// The parser queries the oracle once per option at authorization time; it
/// never caches gate state across calls.
pub trait GateOracle {
    /// Returns `true` if `gate` is currently enabled.
    fn is_enabled(&self, gate: Gate) -> bool;
}

impl<T: GateOracle + ?Sized> GateOracle for &T {
    fn is_enabled(&self, gate: Gate) -> bool {
        (**self).is_enabled(gate)
    }
}

/// Plain in-memory gate state.
///
/// The zero value (`GateSet::default()` / [`GateSet::none`]) has every gate
/// disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateSet {
    /// Whether beta-tier policy options are enabled.
    pub beta_policy_options: bool,
    /// Whether alpha-tier policy options are enabled.
    pub alpha_policy_options: bool,
}

impl GateSet {
    /// All gates disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            beta_policy_options: false,
            alpha_policy_options: false,
        }
    }

    /// All gates enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            beta_policy_options: true,
            alpha_policy_options: true,
        }
    }

    /// Returns a copy with `gate` enabled.
    #[must_use]
    pub const fn with(mut self, gate: Gate) -> Self {
        match gate {
            Gate::BetaPolicyOptions => self.beta_policy_options = true,
            Gate::AlphaPolicyOptions => self.alpha_policy_options = true,
        }
        self
    }

    /// Builds a gate set from a node-config `feature_gates` block.
    ///
    /// Unrecognized gate names are logged at warn level and ignored; the
    /// node config carries gates for many subsystems beyond this one.
    #[must_use]
    pub fn from_map(gates: &BTreeMap<String, bool>) -> Self {
        let mut set = Self::none();
        for (name, &enabled) in gates {
            match Gate::from_name(name) {
                Some(Gate::BetaPolicyOptions) => set.beta_policy_options = enabled,
                Some(Gate::AlphaPolicyOptions) => set.alpha_policy_options = enabled,
                None => {
                    tracing::warn!(gate = %name, "ignoring unrecognized feature gate");
                }
            }
        }
        set
    }
}

impl GateOracle for GateSet {
    fn is_enabled(&self, gate: Gate) -> bool {
        match gate {
            Gate::BetaPolicyOptions => self.beta_policy_options,
            Gate::AlphaPolicyOptions => self.alpha_policy_options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_name_round_trip() {
        for gate in Gate::ALL {
            assert_eq!(Gate::from_name(gate.name()), Some(gate));
        }
        assert_eq!(Gate::from_name("no-such-gate"), None);
    }

    #[test]
    fn test_default_gate_set_disables_everything() {
        let set = GateSet::default();
        for gate in Gate::ALL {
            assert!(!set.is_enabled(gate));
        }
    }

    #[test]
    fn test_with_enables_single_gate() {
        let set = GateSet::none().with(Gate::BetaPolicyOptions);
        assert!(set.is_enabled(Gate::BetaPolicyOptions));
        assert!(!set.is_enabled(Gate::AlphaPolicyOptions));
    }

    #[test]
    fn test_from_map_reads_known_gates() {
        let mut map = BTreeMap::new();
        map.insert("beta-policy-options".to_string(), true);
        map.insert("alpha-policy-options".to_string(), false);
        let set = GateSet::from_map(&map);
        assert!(set.beta_policy_options);
        assert!(!set.alpha_policy_options);
    }

    #[test]
    fn test_from_map_ignores_unknown_gates() {
        let mut map = BTreeMap::new();
        map.insert("some-other-subsystem-gate".to_string(), true);
        assert_eq!(GateSet::from_map(&map), GateSet::none());
    }
}
