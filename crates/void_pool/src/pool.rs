//! Resource pool - free/active partition with weighted provisioning

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use void_shuffle::{ShuffleBag, ShuffleError};

use crate::builder::PoolBuilder;
use crate::config::PoolConfig;
use crate::error::{PoolError, Result};
use crate::item::{Factory, Poolable, Scope, WeightedFactory};
use crate::key::{next_pool_tag, ItemKey};

/// Pool of reusable objects
///
/// Every object the pool adopts lives in exactly one of two sets:
/// - free: available, handed out from the front, returned to the back
/// - active: checked out, in acquisition order
///
/// Objects are created only during construction. Afterwards the total
/// never changes; objects only move between the two sets.
pub struct ResourcePool<T> {
    /// Unique tag stamped into every key this pool mints
    tag: u32,
    /// Owned objects, indexed by `ItemKey::index`
    items: Vec<T>,
    free: VecDeque<ItemKey<T>>,
    active: Vec<ItemKey<T>>,
    auto_reuse: bool,
    capacity: usize,
    discovered: usize,
    failed_attempts: usize,
    recycled: u64,
}

/// Pool statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolStats {
    /// Requested target size
    pub capacity: usize,
    /// Objects owned by the pool (free + active)
    pub provisioned: usize,
    /// Objects adopted from the scope
    pub discovered: usize,
    pub free: usize,
    pub active: usize,
    /// Factory calls that produced nothing
    pub failed_attempts: usize,
    /// Forced recycles performed by auto-reuse
    pub recycled: u64,
}

impl<T: Poolable> ResourcePool<T> {
    /// Build a pool from a scope, a config and weighted factories
    ///
    /// Factory picks are seeded from `config.seed` when present.
    pub fn new<S: Scope<T>>(
        scope: S,
        config: PoolConfig,
        factories: Vec<WeightedFactory<T>>,
    ) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(scope, config, factories, rng)
    }

    /// Build a pool drawing factory picks from the given random source
    pub fn with_rng<S: Scope<T>, R: Rng>(
        mut scope: S,
        config: PoolConfig,
        mut factories: Vec<WeightedFactory<T>>,
        rng: R,
    ) -> Result<Self> {
        if factories.iter().any(|f| f.weight() == 0) {
            return Err(ShuffleError::ZeroWeight.into());
        }

        let mut pool = Self {
            tag: next_pool_tag(),
            items: Vec::new(),
            free: VecDeque::new(),
            active: Vec::new(),
            auto_reuse: config.auto_reuse,
            capacity: config.capacity,
            discovered: 0,
            failed_attempts: 0,
            recycled: 0,
        };

        for item in scope.discover() {
            pool.adopt(item);
        }
        pool.discovered = pool.items.len();

        if pool.items.len() < pool.capacity && !factories.is_empty() {
            pool.provision(&mut factories, config.attempt_budget(), rng)?;
        }

        if pool.items.len() < pool.capacity {
            log::warn!(
                "Pool under-provisioned: {} of {} objects ({} failed factory calls)",
                pool.items.len(),
                pool.capacity,
                pool.failed_attempts
            );
        } else {
            log::info!(
                "Pool provisioned with {} objects ({} discovered)",
                pool.items.len(),
                pool.discovered
            );
        }

        Ok(pool)
    }

    /// Build a pool with a single factory and no auto-reuse
    pub fn with_factory<S: Scope<T>>(
        scope: S,
        capacity: usize,
        factory: impl Factory<T> + 'static,
    ) -> Result<Self> {
        Self::new(
            scope,
            PoolConfig::new(capacity),
            vec![WeightedFactory::single(factory)],
        )
    }

    /// Start a fluent builder
    pub fn builder() -> PoolBuilder<T> {
        PoolBuilder::new()
    }

    fn provision<R: Rng>(
        &mut self,
        factories: &mut [WeightedFactory<T>],
        budget: usize,
        rng: R,
    ) -> Result<()> {
        let mut bag = ShuffleBag::with_rng(rng);
        for (index, factory) in factories.iter().enumerate() {
            bag.add(index, factory.weight())?;
        }

        let mut attempts = budget;
        while self.items.len() < self.capacity && attempts > 0 {
            let pick = bag.next()?;
            match factories[pick].create() {
                Some(item) => self.adopt(item),
                None => {
                    attempts -= 1;
                    self.failed_attempts += 1;
                }
            }
        }

        Ok(())
    }

    fn adopt(&mut self, mut item: T) {
        let Some(index) = slot_index(self.items.len()) else {
            log::warn!("Pool key space exhausted, dropping object");
            return;
        };

        item.init();
        self.items.push(item);
        self.free.push_back(ItemKey::new(index, self.tag));
    }

    /// Check out a free object
    ///
    /// With auto-reuse enabled and nothing free, the object that has been
    /// active the longest is released and handed out again. Otherwise an
    /// empty free set yields `None`.
    pub fn acquire(&mut self) -> Option<ItemKey<T>> {
        if let Some(key) = self.take_free() {
            return Some(key);
        }

        if !self.auto_reuse || self.active.is_empty() {
            return None;
        }

        let oldest = self.detach(0);
        self.recycled += 1;
        log::debug!("Pool exhausted, recycling oldest active object {:?}", oldest);
        self.take_free()
    }

    /// Check out up to `count` objects
    pub fn acquire_many(&mut self, count: usize) -> Vec<ItemKey<T>> {
        (0..count).filter_map(|_| self.acquire()).collect()
    }

    fn take_free(&mut self) -> Option<ItemKey<T>> {
        let key = self.free.pop_front()?;
        self.active.push(key);
        Some(key)
    }

    /// Return an active object to the free set
    ///
    /// Keys that are not currently active (already released, or minted by
    /// another pool) are ignored. Returns whether anything moved.
    pub fn release(&mut self, key: ItemKey<T>) -> bool {
        if key.pool_tag() != self.tag {
            return false;
        }

        match self.active.iter().position(|k| *k == key) {
            Some(index) => {
                self.detach(index);
                true
            }
            None => false,
        }
    }

    /// Return the object at `index` in the active set
    pub fn release_at(&mut self, index: usize) -> Result<ItemKey<T>> {
        if index >= self.active.len() {
            return Err(PoolError::IndexOutOfRange {
                index,
                len: self.active.len(),
            });
        }

        Ok(self.detach(index))
    }

    /// Return every active object whose return flag is raised
    ///
    /// Walks newest to oldest so removals never shift unvisited entries.
    pub fn sweep_returned(&mut self) -> usize {
        let mut released = 0;
        for index in (0..self.active.len()).rev() {
            let key = self.active[index];
            if self.items[key.index() as usize].wants_return() {
                self.detach(index);
                released += 1;
            }
        }

        if released > 0 {
            log::debug!("Sweep returned {} objects to the pool", released);
        }
        released
    }

    /// Return every active object, newest first
    pub fn release_all(&mut self) -> usize {
        let count = self.active.len();
        for index in (0..count).rev() {
            self.detach(index);
        }
        count
    }

    /// Move `active[index]` to the back of the free set
    fn detach(&mut self, index: usize) -> ItemKey<T> {
        let key = self.active.remove(index);
        self.items[key.index() as usize].deactivate();
        self.free.push_back(key);
        key
    }
}

impl<T> ResourcePool<T> {
    /// Active keys in acquisition order
    pub fn active(&self) -> &[ItemKey<T>] {
        &self.active
    }

    /// Active objects in acquisition order
    pub fn active_items(&self) -> impl Iterator<Item = (ItemKey<T>, &T)> + '_ {
        self.active
            .iter()
            .map(move |key| (*key, &self.items[key.index() as usize]))
    }

    /// Free keys in hand-out order
    pub fn free(&self) -> impl Iterator<Item = ItemKey<T>> + '_ {
        self.free.iter().copied()
    }

    /// Check whether a key is currently checked out
    pub fn is_active(&self, key: ItemKey<T>) -> bool {
        self.active.contains(&key)
    }

    pub fn get(&self, key: ItemKey<T>) -> Option<&T> {
        if key.pool_tag() != self.tag {
            return None;
        }
        self.items.get(key.index() as usize)
    }

    pub fn get_mut(&mut self, key: ItemKey<T>) -> Option<&mut T> {
        if key.pool_tag() != self.tag {
            return None;
        }
        self.items.get_mut(key.index() as usize)
    }

    /// Total objects owned (free + active)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Requested target size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn auto_reuse(&self) -> bool {
        self.auto_reuse
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Get statistics
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity,
            provisioned: self.items.len(),
            discovered: self.discovered,
            free: self.free.len(),
            active: self.active.len(),
            failed_attempts: self.failed_attempts,
            recycled: self.recycled,
        }
    }
}

/// Slot index for the object stored at `len`, if it fits in a key
fn slot_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|index| *index != u32::MAX)
}

impl<T> std::fmt::Debug for ResourcePool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePool")
            .field("tag", &self.tag)
            .field("free", &self.free.len())
            .field("active", &self.active.len())
            .field("auto_reuse", &self.auto_reuse)
            .field("capacity", &self.capacity)
            .finish()
    }
}
