//! Error types for `topopts`
//!
//! Policy-option validation errors, node-config loading errors, and the
//! top-level aggregate used by the CLI for exit-code mapping.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `topopts` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, rejected policy option)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown option name)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `topopts` operations.
///
/// Aggregates the domain-specific errors and provides a unified exit-code
/// mapping for the CLI.
#[derive(Debug, Error)]
pub enum TopoptsError {
    /// A policy option was rejected by the parser.
    #[error(transparent)]
    PolicyOption(#[from] PolicyOptionError),

    /// Node-config loading or validation error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid CLI usage with a pre-rendered message.
    #[error("{0}")]
    Usage(String),
}

impl TopoptsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::PolicyOption(_) | Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Policy Option Errors
// ============================================================================

/// Rejection reasons for topology manager policy options.
///
/// Every variant is terminal for the parse call that produced it: the caller
/// receives no partial `PolicyOptions`, and the registry is left untouched.
/// Messages name the offending option and, for gated options, the maturity
/// level that would need to be enabled.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyOptionError {
    /// The option name is not registered at any maturity tier.
    #[error("unknown topology manager policy option {option:?}")]
    UnknownOption {
        /// The unrecognized option name.
        option: String,
    },

    /// The option is beta-tier and the beta gate is disabled.
    #[error("topology manager policy beta-level options not enabled, but option {option:?} requires it")]
    BetaGateDisabled {
        /// The rejected option name.
        option: String,
    },

    /// The option is alpha-tier and the alpha gate is disabled.
    #[error("topology manager policy alpha-level options not enabled, but option {option:?} requires it")]
    AlphaGateDisabled {
        /// The rejected option name.
        option: String,
    },

    /// The value does not parse as a boolean.
    #[error("bad value for option {option:?}: {value:?} is not a valid boolean")]
    InvalidBoolean {
        /// The option name.
        option: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The value does not parse as a base-10 integer.
    #[error("unable to convert policy option to integer: option {option:?} has value {value:?}")]
    InvalidInteger {
        /// The option name.
        option: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The value is empty (or whitespace only).
    #[error("empty value for option {option:?}")]
    EmptyValue {
        /// The option name.
        option: String,
    },

    /// A token in the allow-list does not parse as a NUMA node ID.
    #[error("invalid NUMA node ID {token:?} in option {option:?}")]
    InvalidNumaNodeId {
        /// The option name.
        option: String,
        /// The offending token.
        token: String,
    },

    /// A NUMA node ID in the allow-list is negative.
    #[error("NUMA node ID must be non-negative, got {id} in option {option:?}")]
    NegativeNumaNodeId {
        /// The option name.
        option: String,
        /// The offending ID.
        id: i64,
    },

    /// A NUMA node ID appears more than once in the allow-list.
    #[error("duplicate NUMA node ID {id} in option {option:?}")]
    DuplicateNumaNodeId {
        /// The option name.
        option: String,
        /// The repeated ID.
        id: usize,
    },
}

impl PolicyOptionError {
    /// Returns `true` for the availability failures (unknown name or
    /// disabled maturity gate), as opposed to value-validation failures.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption { .. }
                | Self::BetaGateDisabled { .. }
                | Self::AlphaGateDisabled { .. }
        )
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Node-config file loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("unable to read {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// YAML parsing failed.
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,
        /// Error message from the parser.
        message: String,
    },

    /// A policy-option value is not a YAML scalar.
    #[error("value for policy option {option:?} must be a string, integer, or boolean scalar")]
    NonScalarValue {
        /// The option name.
        option: String,
    },

    /// One or more configuration files failed validation.
    #[error("{count} file(s) failed validation")]
    ValidationFailed {
        /// Number of files that failed validation.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_gate_message_names_option_and_level() {
        let err = PolicyOptionError::BetaGateDisabled {
            option: "max-allowable-numa-nodes".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("beta-level options not enabled"), "{msg}");
        assert!(msg.contains("\"max-allowable-numa-nodes\""), "{msg}");
    }

    #[test]
    fn test_alpha_gate_message_names_level() {
        let err = PolicyOptionError::AlphaGateDisabled {
            option: "fancy-alpha-option".to_string(),
        };
        assert!(err.to_string().contains("alpha-level options not enabled"));
    }

    #[test]
    fn test_invalid_numa_node_id_names_token() {
        let err = PolicyOptionError::InvalidNumaNodeId {
            option: "allowed-numa-nodes".to_string(),
            token: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid NUMA node ID"), "{msg}");
        assert!(msg.contains("\"abc\""), "{msg}");
    }

    #[test]
    fn test_is_unavailable_partition() {
        let unavailable = PolicyOptionError::UnknownOption {
            option: "x".to_string(),
        };
        let invalid = PolicyOptionError::EmptyValue {
            option: "x".to_string(),
        };
        assert!(unavailable.is_unavailable());
        assert!(!invalid.is_unavailable());
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(TopoptsError, i32)> = vec![
            (
                PolicyOptionError::EmptyValue {
                    option: "x".to_string(),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                ConfigError::ValidationFailed { count: 2 }.into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
            (
                TopoptsError::Usage("bad".to_string()),
                ExitCode::USAGE_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "wrong exit code for {err}");
        }
    }
}
