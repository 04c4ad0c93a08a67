//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::RecordKind;
use crate::validation::RecordConstraints;

use super::types::{ServerConfig, ServiceConfig};

/// The configuration file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Loads and provides access to the service configuration.
///
/// # File Structure
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// rules:
///   employee: { name, max_age, phone, salary }
///   staff:    { name, max_age, phone, salary }
/// ```
///
/// # Example
///
/// ```no_run
/// use person_validation::config::ConfigLoader;
/// use person_validation::models::RecordKind;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// let staff = loader.constraints(RecordKind::Staff);
/// println!("Staff salary range: {}..={}", staff.salary.min, staff.salary.max);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the file is not valid YAML for the schema
    /// - `InvalidConfig` if a constraint set is inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        info!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Loads configuration from `path`, falling back to the defaults when
    /// the file does not exist. Parse and consistency errors still fail.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses configuration from YAML text. `source` names the origin of
    /// the text in error messages.
    pub fn from_yaml(content: &str, source: &str) -> ServiceResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| ServiceError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after checking it.
    pub fn from_config(config: ServiceConfig) -> ServiceResult<Self> {
        for (kind, constraints) in [
            (RecordKind::Employee, &config.rules.employee),
            (RecordKind::Staff, &config.rules.staff),
        ] {
            constraints
                .check()
                .map_err(|message| ServiceError::InvalidConfig {
                    message: format!("{}: {}", kind, message),
                })?;
        }

        Ok(Self { config })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the constraint set for a record type.
    pub fn constraints(&self, kind: RecordKind) -> &RecordConstraints {
        match kind {
            RecordKind::Employee => &self.config.rules.employee,
            RecordKind::Staff => &self.config.rules.staff,
        }
    }
}
