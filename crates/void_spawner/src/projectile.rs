//! Simulated projectiles and their prefab factories

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use void_pool::{Poolable, WeightedFactory};

use crate::config::KindConfig;

/// A pooled projectile
#[derive(Debug)]
pub struct Projectile {
    pub kind: Arc<str>,
    /// Frames left before the projectile is spent
    pub ttl: u32,
    /// Times this projectile has been fired
    pub launches: u32,
}

impl Projectile {
    pub fn new(kind: Arc<str>) -> Self {
        Self {
            kind,
            ttl: 0,
            launches: 0,
        }
    }

    /// Fire the projectile for `ttl` frames
    pub fn launch(&mut self, ttl: u32) {
        self.ttl = ttl;
        self.launches += 1;
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
    }
}

impl Poolable for Projectile {
    fn init(&mut self) {
        self.ttl = 0;
        self.launches = 0;
        log::trace!("Projectile '{}' loaded into pool", self.kind);
    }

    fn deactivate(&mut self) {
        self.ttl = 0;
    }

    fn wants_return(&self) -> bool {
        self.launches > 0 && self.ttl == 0
    }
}

/// Build a weighted factory for one projectile kind
///
/// Each build fails with probability `misfire_rate`.
pub fn prefab(kind: &KindConfig, seed: u64) -> WeightedFactory<Projectile> {
    let name: Arc<str> = Arc::from(kind.name.as_str());
    let misfire_rate = if kind.misfire_rate.is_finite() {
        kind.misfire_rate.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut rng = StdRng::seed_from_u64(seed);

    WeightedFactory::new(kind.weight, move || {
        if rng.gen_bool(misfire_rate) {
            log::trace!("Prefab '{}' misfired", name);
            None
        } else {
            Some(Projectile::new(Arc::clone(&name)))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_pool::{EmptyScope, PoolConfig, ResourcePool};

    fn kind(name: &str, weight: u32, misfire_rate: f64) -> KindConfig {
        KindConfig {
            name: name.to_string(),
            weight,
            misfire_rate,
        }
    }

    #[test]
    fn test_spent_projectile_wants_return() {
        let mut p = Projectile::new(Arc::from("bolt"));
        assert!(!p.wants_return());

        p.launch(2);
        p.tick();
        assert!(!p.wants_return());
        p.tick();
        assert!(p.wants_return());

        p.deactivate();
        p.launch(1);
        assert!(!p.wants_return());
    }

    #[test]
    fn test_prefabs_provision_pool() {
        let factories = vec![prefab(&kind("bolt", 3, 0.0), 1), prefab(&kind("plasma", 1, 0.0), 2)];
        let pool = ResourcePool::new(EmptyScope, PoolConfig::new(20).with_seed(5), factories).unwrap();

        assert_eq!(pool.len(), 20);
        assert!(pool.free().all(|k| {
            let p = pool.get(k).unwrap();
            p.launches == 0 && !p.wants_return()
        }));
    }

    #[test]
    fn test_always_misfiring_prefab() {
        let factories = vec![prefab(&kind("dud", 1, 1.0), 1)];
        let pool = ResourcePool::new(EmptyScope, PoolConfig::new(5), factories).unwrap();

        assert!(pool.is_empty());
        assert_eq!(pool.stats().failed_attempts, 205);
    }
}
