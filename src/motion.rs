//! Walking, jumping and landing for the first-person body.
//!
//! [`step`] is a pure function of the previous [`MotionState`], this frame's
//! [`MotionIntent`], the camera yaw, `dt` and the obstacle list. The body is
//! either grounded (eye at [`MotionParams::eye_height`], no vertical speed)
//! or airborne (integrating gravity).

use glam::Vec3;
use log::debug;

use crate::collision::resolve_xz;
use crate::constants::{EYE_HEIGHT, GRAVITY, JUMP_SPEED, MOVE_SPEED, PLAYER_RADIUS, SPRINT_MULTIPLIER};
use crate::geometry::Aabb;
use crate::input::{InputSource, Key, KeyPresses};
use crate::vector_math::{normalize_or_zero, planar_basis};

/// Tuning for [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Eye height above the ground plane while standing.
    pub eye_height: f32,
    /// Vertical acceleration while airborne (negative is down).
    pub gravity: f32,
    /// Vertical speed set on the jump frame.
    pub jump_speed: f32,
    /// Walking speed.
    pub move_speed: f32,
    /// Speed multiplier while sprinting.
    pub sprint_multiplier: f32,
    /// Horizontal clearance kept from obstacles.
    pub radius: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            eye_height: EYE_HEIGHT,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            move_speed: MOVE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            radius: PLAYER_RADIUS,
        }
    }
}

/// Per-frame state carried between calls to [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// Eye position.
    pub position: Vec3,
    /// Vertical speed; zero whenever grounded.
    pub vertical_velocity: f32,
    /// True when the feet rest on the ground plane.
    pub grounded: bool,
}

impl MotionState {
    /// A body standing at `position`, with its eye height taken from `position.y`.
    #[must_use]
    pub const fn standing(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Height of the feet above the ground plane.
    #[must_use]
    pub fn feet_height(&self, params: &MotionParams) -> f32 {
        self.position.y - params.eye_height
    }
}

/// Movement requested for one frame.
///
/// Directions are held states; `jump` is an edge and should be true only on
/// the frame the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag mirrors an independent input axis."
)]
pub struct MotionIntent {
    /// Walk along the camera forward vector.
    pub forward: bool,
    /// Walk against the camera forward vector.
    pub back: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Apply the sprint multiplier.
    pub sprint: bool,
    /// Jump edge for this frame.
    pub jump: bool,
}

impl MotionIntent {
    /// Builds an intent from held keys and this frame's presses.
    #[must_use]
    pub fn from_input(held: &impl InputSource, presses: &KeyPresses) -> Self {
        Self {
            forward: held.is_down(Key::Forward),
            back: held.is_down(Key::Back),
            left: held.is_down(Key::Left),
            right: held.is_down(Key::Right),
            sprint: held.is_down(Key::Sprint),
            jump: presses.contains(Key::Jump),
        }
    }

    /// Unit horizontal direction for the held axes; zero when they cancel.
    #[must_use]
    pub fn direction(&self, yaw_deg: f32) -> Vec3 {
        let (forward, right) = planar_basis(yaw_deg);
        let mut wish = Vec3::ZERO;
        if self.forward {
            wish += forward;
        }
        if self.back {
            wish -= forward;
        }
        if self.left {
            wish -= right;
        }
        if self.right {
            wish += right;
        }
        normalize_or_zero(wish)
    }
}

/// Advances the body by one frame.
///
/// Horizontal velocity is the intent direction times the (sprint-scaled)
/// speed. A jump edge while grounded launches at `jump_speed`; gravity is
/// integrated on every later airborne frame. When the feet reach the ground
/// plane the body snaps to eye height with zero vertical speed. The
/// horizontal result is then corrected with [`resolve_xz`].
///
/// # Examples
/// ```
/// use exit_strategy::motion::{step, MotionIntent, MotionParams, MotionState};
/// use glam::Vec3;
/// let params = MotionParams::default();
/// let start = MotionState::standing(Vec3::new(0.0, params.eye_height, 0.0));
/// let jump = MotionIntent { jump: true, ..MotionIntent::default() };
/// let next = step(start, jump, -90.0, 0.016, &params, &[]);
/// assert!(!next.grounded);
/// assert_eq!(next.vertical_velocity, params.jump_speed);
/// ```
#[must_use]
pub fn step(
    state: MotionState,
    intent: MotionIntent,
    yaw_deg: f32,
    dt: f32,
    params: &MotionParams,
    obstacles: &[Aabb],
) -> MotionState {
    let speed = if intent.sprint {
        params.move_speed * params.sprint_multiplier
    } else {
        params.move_speed
    };
    let mut proposed = state.position + intent.direction(yaw_deg) * speed * dt;

    let mut vertical_velocity = state.vertical_velocity;
    if state.grounded && intent.jump {
        vertical_velocity = params.jump_speed;
        debug!("jump launched at {:?}", state.position);
    } else {
        vertical_velocity += params.gravity * dt;
    }
    proposed.y += vertical_velocity * dt;

    let grounded = proposed.y - params.eye_height <= 0.0;
    if grounded {
        if !state.grounded {
            debug!("landed at {proposed:?}");
        }
        proposed.y = params.eye_height;
        vertical_velocity = 0.0;
    }

    MotionState {
        position: resolve_xz(state.position, proposed, obstacles, params.radius),
        vertical_velocity,
        grounded,
    }
}
