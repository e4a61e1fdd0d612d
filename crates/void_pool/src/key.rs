//! Keys for pooled objects

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_POOL_TAG: AtomicU32 = AtomicU32::new(1);

/// Allocate a tag unique to one pool instance
pub(crate) fn next_pool_tag() -> u32 {
    NEXT_POOL_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Handle to an object owned by a [`ResourcePool`](crate::ResourcePool)
///
/// Holding a key does not own the object. The pool that minted the key
/// decides when the object moves between its free and active sets; keys
/// from a different pool are ignored.
pub struct ItemKey<T> {
    index: u32,
    pool: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ItemKey<T> {
    #[inline]
    pub(crate) const fn new(index: u32, pool: u32) -> Self {
        Self {
            index,
            pool,
            _marker: PhantomData,
        }
    }

    /// Slot index inside the owning pool
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Tag of the pool that minted this key
    #[inline]
    pub const fn pool_tag(&self) -> u32 {
        self.pool
    }
}

impl<T> Clone for ItemKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ItemKey<T> {}

impl<T> PartialEq for ItemKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.pool == other.pool
    }
}

impl<T> Eq for ItemKey<T> {}

impl<T> Hash for ItemKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.pool.hash(state);
    }
}

impl<T> fmt::Debug for ItemKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKey({}@{})", self.index, self.pool)
    }
}
