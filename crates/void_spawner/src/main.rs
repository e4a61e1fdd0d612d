//! Void Spawner
//!
//! Headless driver for `void_pool`. Builds a projectile pool from the
//! configured prefabs, then fires, ages and sweeps projectiles for a fixed
//! number of frames, logging pool statistics along the way.
//!
//! Run with: cargo run -p void_spawner
//!       or: RUST_LOG=debug cargo run --bin spawner

mod config;
mod projectile;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use void_pool::{EmptyScope, PoolStats, ResourcePool};

use crate::config::SpawnerConfig;
use crate::projectile::{prefab, Projectile};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = SpawnerConfig::load();
    config.print_summary();

    match run(&config) {
        Ok(summary) => log::info!(
            "Done: {} launches across {} projectiles, {} recycled early, {} spawns starved",
            summary.launches,
            summary.stats.provisioned,
            summary.stats.recycled,
            summary.starved
        ),
        Err(e) => {
            log::error!("Spawner failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Copy)]
struct RunSummary {
    stats: PoolStats,
    launches: u32,
    starved: usize,
}

fn run(config: &SpawnerConfig) -> void_pool::Result<RunSummary> {
    let base_seed = config.pool.seed.unwrap_or_else(rand::random);
    let factories = config
        .kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| prefab(kind, base_seed.wrapping_add(i as u64 + 1)))
        .collect();

    let mut pool: ResourcePool<Projectile> =
        ResourcePool::new(EmptyScope, config.pool.clone(), factories)?;
    let mut rng = StdRng::seed_from_u64(base_seed);
    let (min_ttl, max_ttl) = config.lifetime;
    let mut starved = 0usize;

    for frame in 1..=config.frames {
        let keys = pool.acquire_many(config.spawn_per_frame);
        starved += config.spawn_per_frame - keys.len();
        for key in keys {
            if let Some(projectile) = pool.get_mut(key) {
                projectile.launch(rng.gen_range(min_ttl..=max_ttl.max(min_ttl)));
            }
        }

        for key in pool.active().to_vec() {
            if let Some(projectile) = pool.get_mut(key) {
                projectile.tick();
            }
        }
        pool.sweep_returned();

        if config.report_interval > 0 && frame % config.report_interval == 0 {
            report(frame, &pool.stats(), starved);
        }
    }

    pool.release_all();
    let stats = pool.stats();
    report(config.frames, &stats, starved);

    let launches: u32 = pool.free().filter_map(|k| pool.get(k)).map(|p| p.launches).sum();

    Ok(RunSummary {
        stats,
        launches,
        starved,
    })
}

fn report(frame: u32, stats: &PoolStats, starved: usize) {
    log::info!(
        "frame {:>5}: {} active / {} free of {} (recycled {}, starved {})",
        frame,
        stats.active,
        stats.free,
        stats.provisioned,
        stats.recycled,
        starved
    );
}
