//! Scene configuration loaded from JSON.
//!
//! Every field is optional; missing values fall back to [`crate::constants`].
//! Vectors are written as three-element arrays.
//!
//! ```json
//! { "eye_height": 1.7, "obstacles": [{ "centre": [0, 1, -3], "half_extents": [1, 1, 1] }] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::Obstacles;
use crate::constants::{
    EYE_HEIGHT, GRAVITY, JUMP_SPEED, MOUSE_SENSITIVITY, MOVE_SPEED, NPC_HALF_EXTENTS,
    NPC_POSITION, PLAYER_RADIUS, SPAWN_POSITION, SPAWN_YAW_DEG, SPRINT_MULTIPLIER, TALK_DISTANCE,
};
use crate::geometry::Aabb;
use crate::interaction::{Dialogue, Npc, DEFAULT_DIALOGUE};
use crate::motion::MotionParams;

/// Failure to load or validate a [`SceneConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The text was not valid JSON for a scene config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

/// A static obstacle written as centre plus half extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxConfig {
    /// Box centre.
    pub centre: [f32; 3],
    /// Half extents along X, Y and Z.
    pub half_extents: [f32; 3],
}

impl BoxConfig {
    /// The box as an [`Aabb`].
    #[must_use]
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_centre_half_extents(
            Vec3::from_array(self.centre),
            Vec3::from_array(self.half_extents),
        )
    }
}

/// Tunable values for a scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Camera spawn eye position.
    pub spawn_position: [f32; 3],
    /// Camera spawn yaw in degrees.
    pub spawn_yaw_deg: f32,
    /// Eye height above the ground plane.
    pub eye_height: f32,
    /// Airborne vertical acceleration.
    pub gravity: f32,
    /// Launch speed of a jump.
    pub jump_speed: f32,
    /// Walking speed.
    pub move_speed: f32,
    /// Sprint speed multiplier.
    pub sprint_multiplier: f32,
    /// Mouse look degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Player clearance radius.
    pub player_radius: f32,
    /// Maximum look-at distance for starting a conversation.
    pub talk_distance: f32,
    /// NPC box centre.
    pub npc_position: [f32; 3],
    /// NPC box half extents.
    pub npc_half_extents: [f32; 3],
    /// Lines the NPC speaks, in order.
    pub dialogue: Vec<String>,
    /// Extra static obstacles besides the NPC.
    pub obstacles: Vec<BoxConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn_position: SPAWN_POSITION,
            spawn_yaw_deg: SPAWN_YAW_DEG,
            eye_height: EYE_HEIGHT,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            move_speed: MOVE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            player_radius: PLAYER_RADIUS,
            talk_distance: TALK_DISTANCE,
            npc_position: NPC_POSITION,
            npc_half_extents: NPC_HALF_EXTENTS,
            dialogue: DEFAULT_DIALOGUE.iter().map(|l| (*l).to_owned()).collect(),
            obstacles: Vec::new(),
        }
    }
}

fn require(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

impl SceneConfig {
    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading scene config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks every value is finite and in range.
    ///
    /// # Errors
    /// Returns the first [`ConfigError::Invalid`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            self.spawn_yaw_deg,
            self.eye_height,
            self.gravity,
            self.jump_speed,
            self.move_speed,
            self.sprint_multiplier,
            self.mouse_sensitivity,
            self.player_radius,
            self.talk_distance,
        ];
        let vectors = [self.spawn_position, self.npc_position, self.npc_half_extents];
        require(
            scalars.iter().chain(vectors.iter().flatten()).all(|v| v.is_finite()),
            "config",
            "values must be finite",
        )?;
        require(self.eye_height > 0.0, "eye_height", "must be positive")?;
        require(self.gravity < 0.0, "gravity", "must pull downward (negative)")?;
        require(self.jump_speed >= 0.0, "jump_speed", "must not be negative")?;
        require(self.move_speed >= 0.0, "move_speed", "must not be negative")?;
        require(
            self.sprint_multiplier >= 1.0,
            "sprint_multiplier",
            "must be at least 1",
        )?;
        require(self.player_radius >= 0.0, "player_radius", "must not be negative")?;
        require(self.talk_distance > 0.0, "talk_distance", "must be positive")?;
        require(
            self.npc_half_extents.iter().all(|h| *h > 0.0),
            "npc_half_extents",
            "must be positive on every axis",
        )?;
        require(
            self.obstacles
                .iter()
                .flat_map(|b| b.centre.iter().chain(b.half_extents.iter()))
                .all(|v| v.is_finite()),
            "obstacles",
            "values must be finite",
        )?;
        require(!self.dialogue.is_empty(), "dialogue", "must contain at least one line")
    }

    /// Motion tuning derived from this config.
    #[must_use]
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            eye_height: self.eye_height,
            gravity: self.gravity,
            jump_speed: self.jump_speed,
            move_speed: self.move_speed,
            sprint_multiplier: self.sprint_multiplier,
            radius: self.player_radius,
        }
    }

    /// The NPC described by this config.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the dialogue is empty.
    pub fn npc(&self) -> Result<Npc, ConfigError> {
        let dialogue = Dialogue::new(self.dialogue.clone()).map_err(|_| ConfigError::Invalid {
            field: "dialogue",
            reason: "must contain at least one line",
        })?;
        Ok(Npc {
            position: Vec3::from_array(self.npc_position),
            half_extents: Vec3::from_array(self.npc_half_extents),
            dialogue,
        })
    }

    /// Obstacle registry: the NPC's box followed by any extra boxes.
    #[must_use]
    pub fn obstacles(&self, npc: &Npc) -> Obstacles {
        std::iter::once(npc.bounds())
            .chain(self.obstacles.iter().map(BoxConfig::to_aabb))
            .collect()
    }
}
