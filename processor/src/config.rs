//! Processor configuration with TOML file support.

use serde::{Deserialize, Serialize};

use crate::ProcessorError;

/// Configuration for a transaction processor process.
///
/// Can be loaded from a TOML file via [`ProcessorConfig::from_toml_file`];
/// command-line flags override file values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Family to serve. Usually given on the command line instead.
    #[serde(default)]
    pub family: Option<String>,

    /// Validator endpoint, e.g. `tcp://localhost:4004`. Usually given on the
    /// command line instead.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ProcessorConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ProcessorError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ProcessorError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ProcessorError> {
        toml::from_str(s).map_err(|e| ProcessorError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ProcessorError> {
        toml::to_string_pretty(self).map_err(|e| ProcessorError::Config(e.to_string()))
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            family: None,
            endpoint: None,
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ProcessorConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = ProcessorConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ProcessorConfig::from_toml_str("").expect("empty toml should use defaults");
        assert!(config.endpoint.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "human");
        assert!(config.family.is_none());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            family = "provinceDPT"
            endpoint = "tcp://validator:4004"
        "#;
        let config = ProcessorConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.family.as_deref(), Some("provinceDPT"));
        assert_eq!(config.endpoint.as_deref(), Some("tcp://validator:4004"));
        assert_eq!(config.log_format, "human"); // default
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        let config = ProcessorConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ProcessorConfig::from_toml_file("/nonexistent/tally.toml");
        assert!(matches!(result, Err(ProcessorError::Config(_))));
    }

    #[test]
    fn malformed_toml_returns_config_error() {
        let result = ProcessorConfig::from_toml_str("endpoint = ");
        assert!(matches!(result, Err(ProcessorError::Config(_))));
    }
}
