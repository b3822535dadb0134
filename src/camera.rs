//! First-person camera state and mouse look.

use glam::{Mat4, Vec2, Vec3};
use log::trace;

use crate::constants::{FAR_PLANE, FOV_DEG, MOUSE_SENSITIVITY, NEAR_PLANE, PITCH_LIMIT_DEG};
use crate::vector_math::{look_direction, planar_basis};

/// Aspect ratio used when the framebuffer has no height (e.g. minimised).
pub const FALLBACK_ASPECT: f32 = 16.0 / 9.0;

/// Eye position and orientation of the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading in degrees; -90 looks down -Z.
    pub yaw_deg: f32,
    /// Elevation in degrees, kept within the pitch limit.
    pub pitch_deg: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl Camera {
    /// Creates a level camera at `position` facing `yaw_deg`.
    #[must_use]
    pub fn new(position: Vec3, yaw_deg: f32) -> Self {
        Self {
            position,
            yaw_deg,
            pitch_deg: 0.0,
            fov_deg: FOV_DEG,
        }
    }

    /// Unit vector the camera is looking along.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        look_direction(self.yaw_deg, self.pitch_deg)
    }

    /// Horizontal forward and right vectors used for walking.
    #[must_use]
    pub fn planar_basis(&self) -> (Vec3, Vec3) {
        planar_basis(self.yaw_deg)
    }

    /// Right-handed view matrix looking along [`Self::look_direction`].
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.look_direction(),
            Vec3::Y,
        )
    }

    /// OpenGL-style perspective projection for the given aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Adds yaw and pitch deltas, clamping pitch to the limit.
    pub fn rotate(&mut self, yaw_delta_deg: f32, pitch_delta_deg: f32) {
        self.yaw_deg += yaw_delta_deg;
        self.pitch_deg = (self.pitch_deg + pitch_delta_deg).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }
}

/// Aspect ratio for a framebuffer, falling back when the height is zero.
///
/// # Examples
/// ```
/// use exit_strategy::camera::{aspect_ratio, FALLBACK_ASPECT};
/// assert!((aspect_ratio(1280, 720) - 16.0 / 9.0).abs() < 1e-6);
/// assert_eq!(aspect_ratio(1280, 0), FALLBACK_ASPECT);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "Framebuffer dimensions are far below f32's exact integer range."
)]
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        return FALLBACK_ASPECT;
    }
    width as f32 / height as f32
}

/// Turns absolute cursor positions into camera rotation.
///
/// The first sample after a reset only records the cursor so a jump in
/// position (window focus, recapture) does not spin the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseLook {
    last: Option<Vec2>,
    sensitivity: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new(MOUSE_SENSITIVITY)
    }
}

impl MouseLook {
    /// Creates a mouse look with `sensitivity` degrees per pixel.
    #[must_use]
    pub const fn new(sensitivity: f32) -> Self {
        Self {
            last: None,
            sensitivity,
        }
    }

    /// Forgets the last cursor position so the next sample is ignored.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Feeds a cursor sample, rotating `camera` when a previous sample exists.
    ///
    /// Screen Y grows downward, so moving the cursor up raises the pitch.
    pub fn apply(&mut self, camera: &mut Camera, cursor: Vec2) {
        if let Some(last) = self.last {
            let offset = cursor - last;
            camera.rotate(offset.x * self.sensitivity, -offset.y * self.sensitivity);
            trace!(
                "mouse look yaw={} pitch={}",
                camera.yaw_deg,
                camera.pitch_deg
            );
        }
        self.last = Some(cursor);
    }
}
