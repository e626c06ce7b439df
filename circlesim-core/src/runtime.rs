use crate::collision::resolve_indices;
use crate::config::SimConfig;
use crate::engine::World;
use crate::error::ConfigError;
use crate::integrator;
use crate::quadtree::{QuadTree, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
use crate::region::Region;
use crate::spawn::{scenario_rng, spawn_world};
use glam::Vec2;
use tracing::{debug, trace, warn};

/// Per-body data handed to a renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
}

/// Counters gathered while stepping one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub bodies: usize,
    /// Candidates returned by the index, excluding each body itself
    pub candidates: usize,
    /// Pairs that were overlapping and got resolved
    pub resolutions: usize,
    /// Bodies the index refused (only possible with malformed positions)
    pub rejected: usize,
    pub tree_nodes: usize,
    pub tree_depth: usize,
}

/// Simulation context owning the body store and the spatial index
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub tree: QuadTree,
    /// Sort collision candidates by slot index before resolving
    pub deterministic_order: bool,
    pub frame: u64,
    pub elapsed: f32,
    candidates: Vec<usize>,
}

impl SimulationContext {
    pub fn new(world: World, capacity: usize, max_depth: usize) -> Self {
        let tree = QuadTree::new(world.bounds(), capacity, max_depth);
        Self {
            world,
            tree,
            deterministic_order: false,
            frame: 0,
            elapsed: 0.0,
            candidates: Vec::new(),
        }
    }

    /// Context with the default index parameters
    pub fn from_world(world: World) -> Self {
        Self::new(world, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH)
    }
}

/// Build a simulation context from a configuration, spawning its bodies
pub fn build_simulation_context(config: &SimConfig) -> Result<SimulationContext, ConfigError> {
    let mut rng = scenario_rng(config.seed);
    let world = spawn_world(config, &mut rng)?;

    let mut ctx = SimulationContext::new(world, config.index.capacity, config.index.max_depth);
    ctx.deterministic_order = config.deterministic_order;

    debug!(
        bodies = ctx.world.bodies.len(),
        capacity = config.index.capacity,
        max_depth = config.index.max_depth,
        seed = ?config.seed,
        "built simulation context"
    );
    Ok(ctx)
}

/// Clear the index and insert every body at its current position
pub fn rebuild_index(ctx: &mut SimulationContext) -> usize {
    ctx.tree.clear();
    let mut rejected = 0;
    for (i, body) in ctx.world.bodies.iter().enumerate() {
        if !ctx.tree.insert(i, body.pos) {
            rejected += 1;
        }
    }
    if rejected > 0 {
        warn!(rejected, frame = ctx.frame, "bodies outside the world were left out of the index");
    }
    rejected
}

/// Query each body's neighborhood and resolve every overlapping candidate
pub fn resolve_collisions(ctx: &mut SimulationContext, stats: &mut FrameStats) {
    let SimulationContext {
        world,
        tree,
        candidates,
        deterministic_order,
        ..
    } = ctx;

    for i in 0..world.bodies.len() {
        let body = &world.bodies[i];
        let range = Region::around(body.pos, body.radius() * 2.0);

        candidates.clear();
        if *deterministic_order {
            tree.query_sorted(&range, &world.bodies, candidates);
        } else {
            tree.query(&range, &world.bodies, candidates);
        }

        for &j in candidates.iter() {
            if j == i {
                continue;
            }
            stats.candidates += 1;
            if resolve_indices(&mut world.bodies, i, j) {
                stats.resolutions += 1;
            }
        }
    }
}

/// Advance the simulation by one frame of `dt` seconds
pub fn step_simulation(ctx: &mut SimulationContext, dt: f32) -> FrameStats {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!(dt, frame = ctx.frame, "ignoring invalid time step");
        0.0
    };

    let mut stats = FrameStats {
        bodies: ctx.world.bodies.len(),
        ..FrameStats::default()
    };

    stats.rejected = rebuild_index(ctx);
    stats.tree_nodes = ctx.tree.node_count();
    stats.tree_depth = ctx.tree.depth();

    resolve_collisions(ctx, &mut stats);

    let bounds = ctx.world.bounds();
    integrator::step(&mut ctx.world.bodies, &bounds, dt);

    ctx.frame += 1;
    ctx.elapsed += dt;

    trace!(
        frame = ctx.frame,
        candidates = stats.candidates,
        resolutions = stats.resolutions,
        nodes = stats.tree_nodes,
        depth = stats.tree_depth,
        "stepped frame"
    );
    stats
}

/// Run `frames` fixed steps and return the stats of the last one
pub fn run_frames(ctx: &mut SimulationContext, frames: u64, dt: f32) -> FrameStats {
    let mut last = FrameStats::default();
    for _ in 0..frames {
        last = step_simulation(ctx, dt);
    }
    last
}

/// Render data for every body, in slot order
pub fn body_states(ctx: &SimulationContext) -> impl Iterator<Item = BodyState> + '_ {
    ctx.world.bodies.iter().map(|b| BodyState {
        pos: b.pos,
        radius: b.radius(),
        color: b.color(),
    })
}

/// Regions of the index as of the last rebuild, for debug overlays
pub fn tree_regions(ctx: &SimulationContext) -> impl Iterator<Item = Region> + '_ {
    ctx.tree.regions()
}
