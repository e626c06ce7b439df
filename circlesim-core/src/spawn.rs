//! Random initial placement of bodies.

use crate::config::SimConfig;
use crate::engine::{Body, World};
use crate::error::ConfigError;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// RNG for a scenario; a fixed seed gives the same world on every platform
pub fn scenario_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw one body: radius first, then a position that keeps the whole circle
/// inside the world, then velocity and color.
pub fn random_body<R: Rng>(config: &SimConfig, rng: &mut R) -> Option<Body> {
    let (r_min, r_max) = config.bodies.radius;
    let (s_min, s_max) = config.bodies.speed;
    let (c_min, c_max) = config.bodies.color;
    let width = config.world.width;
    let height = config.world.height;

    let radius = rng.gen_range(r_min..=r_max);
    let pos = Vec2::new(
        rng.gen_range(radius..=width - radius),
        rng.gen_range(radius..=height - radius),
    );
    let vel = Vec2::new(rng.gen_range(s_min..=s_max), rng.gen_range(s_min..=s_max));
    let color = [
        rng.gen_range(c_min..=c_max),
        rng.gen_range(c_min..=c_max),
        rng.gen_range(c_min..=c_max),
    ];

    Body::new(radius, pos, vel, color)
}

/// Build the initial world described by `config`
pub fn spawn_world<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<World, ConfigError> {
    config.validate()?;

    let bodies: Vec<Body> = (0..config.bodies.count)
        .filter_map(|_| random_body(config, rng))
        .collect();

    debug!(
        count = bodies.len(),
        width = config.world.width,
        height = config.world.height,
        "spawned bodies"
    );

    Ok(World::with_bodies(
        config.world.width,
        config.world.height,
        bodies,
    ))
}
