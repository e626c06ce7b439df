//! Error types for loading and validating scenarios
//!
//! The physics step itself never fails; these cover the configuration
//! surface that builds a simulation.

use std::path::PathBuf;
use thiserror::Error;

/// A scenario that parsed but describes an impossible simulation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world size must be positive and finite, got {width} x {height}")]
    WorldSize { width: f32, height: f32 },

    #[error("index capacity must be at least 1")]
    ZeroCapacity,

    #[error("index max_depth must be at least 1")]
    ZeroMaxDepth,

    #[error("radius range [{min}, {max}] must be positive, finite and ordered")]
    RadiusRange { min: f32, max: f32 },

    #[error("bodies of radius {radius} do not fit in a {width} x {height} world")]
    RadiusTooLarge { radius: f32, width: f32, height: f32 },

    #[error("speed range [{min}, {max}] must be finite and ordered")]
    SpeedRange { min: f32, max: f32 },

    #[error("color range [{min}, {max}] must lie in [0, 1] and be ordered")]
    ColorRange { min: f32, max: f32 },
}

/// Failure to obtain a valid configuration from a file or string
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    Invalid(#[from] ConfigError),
}
