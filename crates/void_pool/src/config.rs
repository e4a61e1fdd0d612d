//! Pool configuration
//!
//! Pools can be configured in code or from TOML:
//!
//! ```toml
//! capacity = 64
//! auto_reuse = true
//! attempt_headroom = 200  # extra failed factory calls tolerated
//! seed = 1234             # optional, fixes the factory pick order
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, Result};

/// Default number of failed factory calls tolerated beyond `capacity`
pub const DEFAULT_ATTEMPT_HEADROOM: usize = 200;

/// Construction-time settings for a [`ResourcePool`](crate::ResourcePool)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Target number of objects (a soft target)
    pub capacity: usize,
    /// Recycle the oldest active object when the free set is empty
    pub auto_reuse: bool,
    /// Failed factory calls tolerated on top of `capacity`
    pub attempt_headroom: usize,
    /// Seed for factory selection; entropy when absent
    pub seed: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            auto_reuse: false,
            attempt_headroom: DEFAULT_ATTEMPT_HEADROOM,
            seed: None,
        }
    }
}

impl PoolConfig {
    /// Config with the given capacity and defaults elsewhere
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn with_auto_reuse(mut self, auto_reuse: bool) -> Self {
        self.auto_reuse = auto_reuse;
        self
    }

    pub fn with_attempt_headroom(mut self, headroom: usize) -> Self {
        self.attempt_headroom = headroom;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Failed factory calls allowed before provisioning gives up
    ///
    /// Successful calls are not counted here. They are bounded separately
    /// by `capacity`, so provisioning makes at most
    /// `(capacity - discovered) + attempt_budget()` factory calls.
    pub fn attempt_budget(&self) -> usize {
        self.capacity.saturating_add(self.attempt_headroom)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PoolError::Config(e.to_string()))
    }

    /// Load a config from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded pool config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PoolConfig::default();
        assert_eq!(config.capacity, 0);
        assert!(!config.auto_reuse);
        assert_eq!(config.attempt_headroom, 200);
        assert_eq!(config.seed, None);
        assert_eq!(PoolConfig::new(10).attempt_budget(), 210);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = PoolConfig::from_toml_str("capacity = 32\nauto_reuse = true\n").unwrap();
        assert_eq!(config, PoolConfig::new(32).with_auto_reuse(true));
    }

    #[test]
    fn test_from_toml_full() {
        let text = r#"
            capacity = 8
            auto_reuse = false
            attempt_headroom = 5
            seed = 99
        "#;
        let config = PoolConfig::from_toml_str(text).unwrap();
        assert_eq!(config.attempt_budget(), 13);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_invalid_toml() {
        let err = PoolConfig::from_toml_str("capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, PoolError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PoolConfig::load_from_file("/nonexistent/void_pool.toml").unwrap_err();
        assert!(matches!(err, PoolError::Io(_)));
    }
}
