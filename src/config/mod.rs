//! Configuration loading and management for the person validation service.
//!
//! This module loads the service configuration from a YAML file: the HTTP
//! bind address and the constraint set for each record type.
//!
//! # Example
//!
//! ```no_run
//! use person_validation::config::ConfigLoader;
//! use person_validation::models::RecordKind;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", config.server().address());
//! println!("Employee rules: {:?}", config.constraints(RecordKind::Employee));
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{RulesConfig, ServerConfig, ServiceConfig};
