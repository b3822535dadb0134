//! Tuning constants for the first-person scene.
//!
//! Distances are metres, angles are degrees unless the name says otherwise
//! and times are seconds. [`crate::config::SceneConfig`] uses these as its
//! defaults.

/// Height of the camera above the soles of the player's feet.
pub const EYE_HEIGHT: f32 = 1.8;
/// Constant vertical acceleration applied while airborne.
pub const GRAVITY: f32 = -18.0;
/// Vertical speed given to the player on the jump frame.
pub const JUMP_SPEED: f32 = 6.5;
/// Walking speed before the sprint multiplier.
pub const MOVE_SPEED: f32 = 4.0;
/// Multiplier applied to [`MOVE_SPEED`] while sprint is held.
pub const SPRINT_MULTIPLIER: f32 = 1.8;
/// Degrees of yaw or pitch per pixel of cursor travel.
pub const MOUSE_SENSITIVITY: f32 = 0.12;
/// Pitch is clamped to `±PITCH_LIMIT_DEG` so the view never flips.
pub const PITCH_LIMIT_DEG: f32 = 89.0;
/// Vertical field of view.
pub const FOV_DEG: f32 = 60.0;
/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane distance.
pub const FAR_PLANE: f32 = 200.0;
/// Horizontal clearance kept between the player and any obstacle.
pub const PLAYER_RADIUS: f32 = 0.4;
/// The look ray must hit the NPC closer than this to offer a conversation.
pub const TALK_DISTANCE: f32 = 3.0;

/// Camera spawn point (eye position).
pub const SPAWN_POSITION: [f32; 3] = [0.0, EYE_HEIGHT, 5.0];
/// Camera spawn yaw; -90 looks down the negative Z axis.
pub const SPAWN_YAW_DEG: f32 = -90.0;

/// Centre of the NPC's bounding box.
pub const NPC_POSITION: [f32; 3] = [3.0, 1.0, -6.0];
/// Half extents of the NPC's bounding box.
pub const NPC_HALF_EXTENTS: [f32; 3] = [0.7, 1.2, 0.7];

/// Frames are averaged over this window before the FPS figure updates.
pub const FPS_SAMPLE_WINDOW: f32 = 0.5;
