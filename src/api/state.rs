//! Application state for the person validation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the clock used to date the
/// age-based rules. Both are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// The source of today's date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state reading dates from the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_with_clock_uses_given_clock() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let state = AppState::with_clock(ConfigLoader::default(), FixedClock(date));
        assert_eq!(state.clock().today(), date);
    }
}
