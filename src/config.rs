//! Engine settings.
//!
//! Every field has a default, so a TOML file only needs to list what it
//! changes:
//!
//! ```toml
//! [camera]
//! rotation_sensitivity = 0.2
//!
//! [lighting]
//! max_point_lights = 32
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("Invalid engine configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read engine configuration {}", path.display()))?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("Cannot serialize engine configuration")
    }
}

/// Free-look camera tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance travelled per unit of input direction.
    pub translation_sensitivity: f32,
    /// Degrees of yaw/pitch per unit of pointer movement.
    pub rotation_sensitivity: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            translation_sensitivity: 0.05,
            rotation_sensitivity: 0.1,
            pitch_limit: 80.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Length of the point light uniform arrays declared by the shaders.
    pub max_point_lights: usize,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            max_point_lights: 16,
        }
    }
}
