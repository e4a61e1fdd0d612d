//! Fluent construction of resource pools

use crate::config::PoolConfig;
use crate::error::Result;
use crate::item::{Factory, Poolable, Scope, WeightedFactory};
use crate::pool::ResourcePool;

/// Builder for [`ResourcePool`]
///
/// ```
/// use void_pool::prelude::*;
///
/// struct Shard;
///
/// impl Poolable for Shard {
///     fn init(&mut self) {}
///     fn deactivate(&mut self) {}
/// }
///
/// let pool: ResourcePool<Shard> = ResourcePool::builder()
///     .capacity(16)
///     .auto_reuse(true)
///     .seed(7)
///     .factory(3, || Some(Shard))
///     .build()
///     .unwrap();
/// assert_eq!(pool.len(), 16);
/// ```
pub struct PoolBuilder<T> {
    config: PoolConfig,
    discovered: Vec<T>,
    factories: Vec<WeightedFactory<T>>,
}

impl<T: Poolable> PoolBuilder<T> {
    pub fn new() -> Self {
        Self {
            config: PoolConfig::default(),
            discovered: Vec::new(),
            factories: Vec::new(),
        }
    }

    /// Replace the whole config
    pub fn config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Adopt the objects a scope already holds
    pub fn scope(mut self, mut scope: impl Scope<T>) -> Self {
        self.discovered.extend(scope.discover());
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn auto_reuse(mut self, auto_reuse: bool) -> Self {
        self.config.auto_reuse = auto_reuse;
        self
    }

    pub fn attempt_headroom(mut self, headroom: usize) -> Self {
        self.config.attempt_headroom = headroom;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Add a factory with the given selection weight
    pub fn factory(mut self, weight: u32, factory: impl Factory<T> + 'static) -> Self {
        self.factories.push(WeightedFactory::new(weight, factory));
        self
    }

    pub fn build(self) -> Result<ResourcePool<T>> {
        ResourcePool::new(self.discovered, self.config, self.factories)
    }
}

impl<T: Poolable> Default for PoolBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
