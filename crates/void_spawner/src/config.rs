//! Spawner configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment overrides: `SPAWNER_CAPACITY`, `SPAWNER_AUTO_REUSE`,
//!    `SPAWNER_FRAMES`
//! 2. Config file named by `SPAWNER_CONFIG`
//! 3. `spawner.toml` in the working directory
//! 4. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! frames = 600
//! spawn_per_frame = 3
//! lifetime = [20, 90]
//!
//! [pool]
//! capacity = 64
//! auto_reuse = true
//! seed = 42
//!
//! [[kinds]]
//! name = "bolt"
//! weight = 8
//!
//! [[kinds]]
//! name = "plasma"
//! weight = 2
//! misfire_rate = 0.25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use void_pool::PoolConfig;

/// Failure to load a spawner config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A projectile prefab and how often the pool should build it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindConfig {
    pub name: String,
    pub weight: u32,
    /// Chance that building one fails
    #[serde(default)]
    pub misfire_rate: f64,
}

/// Complete spawner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Frames to simulate
    pub frames: u32,
    /// Projectiles requested each frame
    pub spawn_per_frame: usize,
    /// Projectile lifetime range in frames (inclusive)
    pub lifetime: (u32, u32),
    /// Print statistics every N frames
    pub report_interval: u32,
    pub pool: PoolConfig,
    pub kinds: Vec<KindConfig>,
    #[serde(skip)]
    pub config_path: Option<String>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            spawn_per_frame: 2,
            lifetime: (30, 120),
            report_interval: 60,
            pool: PoolConfig::new(48).with_auto_reuse(true),
            kinds: vec![
                KindConfig {
                    name: "bolt".to_string(),
                    weight: 9,
                    misfire_rate: 0.0,
                },
                KindConfig {
                    name: "plasma".to_string(),
                    weight: 1,
                    misfire_rate: 0.1,
                },
            ],
            config_path: None,
        }
    }
}

impl SpawnerConfig {
    /// Load configuration from all sources
    pub fn load() -> Self {
        let mut config = Self::default();

        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var("SPAWNER_CONFIG") {
            candidates.push(path);
        }
        candidates.push("spawner.toml".to_string());

        for path in candidates {
            match Self::load_from_file(&path) {
                Ok(loaded) => {
                    config = loaded;
                    config.config_path = Some(path.clone());
                    log::info!("Loaded spawner config from {}", path);
                    break;
                }
                Err(e) if Path::new(&path).exists() => {
                    log::warn!("Ignoring spawner config {}: {}", path, e);
                }
                Err(_) => {}
            }
        }

        config.apply_env_overrides();
        config
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(capacity) = env_parse::<usize>("SPAWNER_CAPACITY") {
            self.pool.capacity = capacity;
        }
        if let Some(auto_reuse) = env_parse::<bool>("SPAWNER_AUTO_REUSE") {
            self.pool.auto_reuse = auto_reuse;
        }
        if let Some(frames) = env_parse::<u32>("SPAWNER_FRAMES") {
            self.frames = frames;
        }
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        log::info!("Spawner configuration:");
        log::info!("  Source: {}", self.config_path.as_deref().unwrap_or("defaults"));
        log::info!("  Frames: {} ({} spawns/frame)", self.frames, self.spawn_per_frame);
        log::info!(
            "  Pool: capacity {}, auto-reuse {}",
            self.pool.capacity,
            self.pool.auto_reuse
        );
        for kind in &self.kinds {
            log::info!(
                "  Kind '{}': weight {}, misfire {:.0}%",
                kind.name,
                kind.weight,
                kind.misfire_rate * 100.0
            );
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring {}={}: not a valid value", name, value);
            None
        }
    }
}
