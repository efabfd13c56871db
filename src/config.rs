//! Node-config loading.
//!
//! Reads the fragment of the node-agent configuration file this crate cares
//! about: the `policy_options` block (the raw `name → value` mapping handed
//! to the parser) and the `feature_gates` block (the gate state for this
//! node). All other sections of the node config belong to other subsystems
//! and are ignored.
//!
//! ```yaml
//! policy_options:
//!   allowed-numa-nodes: "0,1"
//!   max-allowable-numa-nodes: 8
//! feature_gates:
//!   beta-policy-options: true
//! ```
//!
//! Option values may be YAML string, integer, or boolean scalars; they are
//! coerced to strings before validation since the option parser is defined
//! over textual values.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::ConfigError;
use crate::features::GateSet;

/// The policy-options slice of a node configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// Raw policy options, keyed by option name.
    pub policy_options: BTreeMap<String, String>,

    /// Gate state declared by the file.
    pub gates: GateSet,
}

#[derive(Debug, Deserialize)]
struct RawNodeConfig {
    #[serde(default)]
    policy_options: BTreeMap<String, Value>,

    #[serde(default)]
    feature_gates: BTreeMap<String, bool>,
}

/// Loads a node configuration file from disk.
///
/// # Errors
///
/// `ConfigError::Read` if the file cannot be read, plus the error conditions
/// of [`parse_str`].
pub fn load_file(path: &Path) -> Result<NodeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(path, &content)
}

/// Parses node-config YAML. `path` is used only for error reporting.
///
/// # Errors
///
/// `ConfigError::Parse` on malformed YAML, `ConfigError::NonScalarValue` if
/// a policy-option value is a sequence or mapping.
pub fn parse_str(path: &Path, content: &str) -> Result<NodeConfig, ConfigError> {
    let raw: RawNodeConfig =
        serde_yaml::from_str(content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let mut policy_options = BTreeMap::new();
    for (name, value) in raw.policy_options {
        let value = scalar_to_string(&name, &value)?;
        policy_options.insert(name, value);
    }

    Ok(NodeConfig {
        policy_options,
        gates: GateSet::from_map(&raw.feature_gates),
    })
}

fn scalar_to_string(option: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(ConfigError::NonScalarValue {
                option: option.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<NodeConfig, ConfigError> {
        parse_str(Path::new("node.yaml"), content)
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
policy_options:
  allowed-numa-nodes: "0,1"
  prefer-closest-numa-nodes: true
  max-allowable-numa-nodes: 8
feature_gates:
  beta-policy-options: true
"#,
        )
        .unwrap();

        assert_eq!(config.policy_options["allowed-numa-nodes"], "0,1");
        assert_eq!(config.policy_options["prefer-closest-numa-nodes"], "true");
        assert_eq!(config.policy_options["max-allowable-numa-nodes"], "8");
        assert!(config.gates.beta_policy_options);
        assert!(!config.gates.alpha_policy_options);
    }

    #[test]
    fn test_missing_blocks_default_empty() {
        let config = parse("{}").unwrap();
        assert!(config.policy_options.is_empty());
        assert_eq!(config.gates, GateSet::none());
    }

    #[test]
    fn test_unrelated_sections_ignored() {
        let config = parse(
            r#"
cpu_manager_policy: static
eviction_hard:
  memory.available: "100Mi"
policy_options:
  allowed-numa-nodes: "0"
"#,
        )
        .unwrap();
        assert_eq!(config.policy_options.len(), 1);
    }

    #[test]
    fn test_non_scalar_value_rejected() {
        let err = parse(
            r"
policy_options:
  allowed-numa-nodes: [0, 1]
",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NonScalarValue { ref option } if option == "allowed-numa-nodes"));
    }

    #[test]
    fn test_malformed_yaml_reports_path() {
        let err = parse("policy_options: [unclosed").unwrap_err();
        assert!(err.to_string().contains("node.yaml"), "{err}");
    }
}
