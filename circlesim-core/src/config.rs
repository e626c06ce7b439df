//! Scenario configuration loaded from YAML.
//!
//! Every section is optional; missing values fall back to the defaults of the
//! classic demo (4000 bodies bouncing around a 1280 x 720 window).
//!
//! ```yaml
//! world:
//!   width: 1280.0
//!   height: 720.0
//! bodies:
//!   count: 4000
//!   radius: [1.0, 5.0]       # min, max
//!   speed: [-100.0, 100.0]   # per velocity component
//!   color: [0.2, 1.0]        # per color channel
//! index:
//!   capacity: 15             # entries per quadtree node before it splits
//!   max_depth: 10            # nodes this deep never split
//! seed: 42                   # omit for a random seed
//! deterministic_order: false # sort collision candidates by slot index
//! ```

use crate::error::{ConfigError, LoadError};
use crate::quadtree::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Ranges the spawner draws initial body state from
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BodiesConfig {
    pub count: usize,
    pub radius: (f32, f32),
    pub speed: (f32, f32),
    pub color: (f32, f32),
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            radius: (1.0, 5.0),
            speed: (-100.0, 100.0),
            color: (0.2, 1.0),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub capacity: usize,
    pub max_depth: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Top-level scenario configuration
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub bodies: BodiesConfig,
    pub index: IndexConfig,
    pub seed: Option<u64>,
    pub deterministic_order: bool,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let WorldConfig { width, height } = self.world;
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(ConfigError::WorldSize { width, height });
        }

        if self.index.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.index.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }

        let (min, max) = self.bodies.radius;
        if !(min > 0.0 && max.is_finite() && min <= max) {
            return Err(ConfigError::RadiusRange { min, max });
        }
        if 2.0 * max > width.min(height) {
            return Err(ConfigError::RadiusTooLarge {
                radius: max,
                width,
                height,
            });
        }

        let (min, max) = self.bodies.speed;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ConfigError::SpeedRange { min, max });
        }

        let (min, max) = self.bodies.color;
        if !(min >= 0.0 && max <= 1.0 && min <= max) {
            return Err(ConfigError::ColorRange { min, max });
        }

        Ok(())
    }
}

/// Parse and validate a scenario from YAML source
pub fn parse_config(source: &str) -> Result<SimConfig, LoadError> {
    let config: SimConfig = serde_yaml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a scenario file
pub fn load_config(path: &Path) -> Result<SimConfig, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&source)?;
    debug!(path = %path.display(), bodies = config.bodies.count, "loaded scenario");
    Ok(config)
}
