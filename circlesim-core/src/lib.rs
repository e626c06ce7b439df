pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod quadtree;
pub mod region;
pub mod runtime;
pub mod spawn;

pub use collision::resolve_pair;
pub use config::{load_config, parse_config, BodiesConfig, IndexConfig, SimConfig, WorldConfig};
pub use engine::{Body, World};
pub use error::{ConfigError, LoadError};
pub use quadtree::{Located, QuadTree};
pub use region::{Quadrant, Region};
pub use runtime::{
    body_states, build_simulation_context, rebuild_index, run_frames, step_simulation,
    tree_regions, BodyState, FrameStats, SimulationContext,
};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
