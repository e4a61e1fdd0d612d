//! # void_pool - Reusable Object Pools
//!
//! Pools of expensive-to-create objects (projectiles, particles, UI rows)
//! that are built once and then handed out and taken back for the rest of
//! the scene's life:
//! - Provisioning: adopt objects already present in a [`Scope`], then top
//!   up to the target capacity from weighted [`Factory`] picks
//! - Acquire/release: every object is either free or active, never both
//! - Auto-reuse: optionally recycle the oldest active object when the free
//!   set runs dry
//! - Sweeping: take back every active object that raised its return flag
//!
//! Pools are single-threaded. Wrap one in a mutex if it must be shared.

pub mod builder;
pub mod config;
pub mod error;
pub mod item;
pub mod key;
pub mod pool;

pub use builder::PoolBuilder;
pub use config::PoolConfig;
pub use error::{PoolError, Result};
pub use item::{EmptyScope, Factory, Poolable, Scope, WeightedFactory};
pub use key::ItemKey;
pub use pool::{PoolStats, ResourcePool};

pub use void_shuffle::ShuffleError;

pub mod prelude {
    pub use crate::builder::PoolBuilder;
    pub use crate::config::PoolConfig;
    pub use crate::error::{PoolError, Result};
    pub use crate::item::{EmptyScope, Factory, Poolable, Scope, WeightedFactory};
    pub use crate::key::ItemKey;
    pub use crate::pool::{PoolStats, ResourcePool};
}
