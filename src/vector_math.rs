//! Basic vector math helper functions.
//! Direction vectors from yaw/pitch angles and safe normalisation.
use glam::Vec3;

/// Returns the unit look vector for a yaw and pitch given in degrees.
///
/// Yaw is measured in the X/Z plane from +X toward +Z; pitch raises the
/// vector toward +Y.
///
/// # Examples
/// ```
/// use exit_strategy::vector_math::look_direction;
/// let d = look_direction(-90.0, 0.0);
/// assert!(d.x.abs() < 1e-6);
/// assert!((d.z + 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn look_direction(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    normalize_or_zero(Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    ))
}

/// Returns the horizontal forward and right vectors for a yaw in degrees.
///
/// Pitch plays no part so walking never leaves the ground plane. Right is
/// `forward × up`.
#[must_use]
pub fn planar_basis(yaw_deg: f32) -> (Vec3, Vec3) {
    let yaw = yaw_deg.to_radians();
    let forward = normalize_or_zero(Vec3::new(yaw.cos(), 0.0, yaw.sin()));
    let right = normalize_or_zero(forward.cross(Vec3::Y));
    (forward, right)
}

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite and zero-length input yields [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use exit_strategy::vector_math::normalize_or_zero;
/// use glam::Vec3;
/// let n = normalize_or_zero(Vec3::new(3.0, 0.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-6);
/// assert!((n.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(normalize_or_zero(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn normalize_or_zero(vector: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return Vec3::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec3::ZERO)
}
