//! Configuration types for the person validation service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so an empty file yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::validation::RecordConstraints;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Returns the `host:port` address to bind to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The constraint set for each record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Constraints for `POST /api/employee`.
    #[serde(default = "RecordConstraints::employee")]
    pub employee: RecordConstraints,
    /// Constraints for `POST /api/staff`.
    #[serde(default = "RecordConstraints::staff")]
    pub staff: RecordConstraints,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            employee: RecordConstraints::employee(),
            staff: RecordConstraints::staff(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Validation rules per record type.
    #[serde(default)]
    pub rules: RulesConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServiceConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_server_section() {
        let config: ServiceConfig = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.rules, RulesConfig::default());
    }

    #[test]
    fn test_staff_rules_override() {
        let yaml = r#"
rules:
  staff:
    salary:
      min: 35.5
      max: 300
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.rules.staff.salary.min, Decimal::new(355, 1));
        assert_eq!(config.rules.staff.salary.max, Decimal::from(300));
        assert_eq!(config.rules.employee, RecordConstraints::employee());
    }
}
