#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Exit Strategy first-person core.
//!
//! Walking and jumping with box collision, a look-at ray for the NPC, and a
//! dialogue state machine. No part of it depends on a window or renderer:
//! the host feeds an [`InputSnapshot`] to [`Scene::tick`] each frame and
//! draws the returned [`FrameOutput`].
pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod logging;
pub mod motion;
pub mod numeric;
pub mod scene;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use autopilot::Autopilot;
pub use camera::{Camera, MouseLook};
pub use collision::{resolve_xz, Obstacles};
pub use config::{ConfigError, SceneConfig};
pub use geometry::{ray_entry, Aabb};
pub use hud::HudFrame;
pub use input::{InputSnapshot, InputSource, Key, KeyEdges};
pub use interaction::{Dialogue, InteractionState, Npc};
pub use logging::init as init_logging;
pub use motion::{MotionIntent, MotionParams, MotionState};
pub use scene::{FrameOutput, Scene};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use exit_strategy::prelude::*;
    //! let mut scene = Scene::default();
    //! let out = scene.tick(&InputSnapshot::holding(&[Key::Forward]), 1.0 / 60.0);
    //! assert!(out.hud.prompt.is_none());
    //! ```

    pub use crate::geometry::Aabb;
    pub use crate::input::{InputSnapshot, Key};
    pub use crate::interaction::InteractionState;
    pub use crate::scene::{FrameOutput, Scene};
    pub use glam::Vec3;
}
