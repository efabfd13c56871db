//! `topopts` — topology manager policy option parsing and validation.
//!
//! This crate turns the open-ended `name → value` policy-option mapping from
//! a node-agent configuration into a validated, strongly-typed
//! [`options::PolicyOptions`] record that NUMA-aware resource-assignment
//! logic consumes. Options are authorized against an
//! [`registry::OptionRegistry`] of maturity tiers (stable / beta / alpha)
//! and a caller-supplied [`features::GateOracle`] before their values are
//! parsed.
//!
//! ```
//! use std::collections::BTreeMap;
//! use topopts::features::GateSet;
//! use topopts::options::OptionsParser;
//! use topopts::registry::OptionRegistry;
//!
//! let registry = OptionRegistry::with_defaults();
//! let mut raw = BTreeMap::new();
//! raw.insert("allowed-numa-nodes".to_string(), "0,1".to_string());
//!
//! let opts = OptionsParser::new(&registry)
//!     .parse(&raw, &GateSet::none())
//!     .unwrap();
//! assert_eq!(opts.allowed_numa_nodes, vec![0, 1]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod observability;
pub mod options;
pub mod registry;
