use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TELEPORT_DISTANCE: f32 = 5.0;
pub const DEFAULT_BODY_TELEPORT_DISTANCE: f32 = 0.5;
pub const DEFAULT_BODY_STILL_SPEED: f32 = 0.5;

/// Distance thresholds used by the skip heuristics, in world units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpolationConfig {
    /// First-person camera jump between two ticks treated as a respawn
    pub teleport_distance: f32,
    /// Camera movement that counts as "moved" when checking the body speed
    pub body_teleport_distance: f32,
    /// Body speed at or below which the body is considered stationary
    pub body_still_speed: f32,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            teleport_distance: DEFAULT_TELEPORT_DISTANCE,
            body_teleport_distance: DEFAULT_BODY_TELEPORT_DISTANCE,
            body_still_speed: DEFAULT_BODY_STILL_SPEED,
        }
    }
}

impl InterpolationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid interpolation config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to load config: {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("teleport_distance", self.teleport_distance),
            ("body_teleport_distance", self.body_teleport_distance),
            ("body_still_speed", self.body_still_speed),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{} must be a positive finite number, got {}",
                name,
                value
            );
        }
        Ok(())
    }

    pub fn teleport_distance_sq(&self) -> f32 {
        self.teleport_distance * self.teleport_distance
    }

    pub fn body_teleport_distance_sq(&self) -> f32 {
        self.body_teleport_distance * self.body_teleport_distance
    }

    pub fn body_still_speed_sq(&self) -> f32 {
        self.body_still_speed * self.body_still_speed
    }
}
