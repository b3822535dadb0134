//! Horizontal collision against static boxes.
//!
//! Movement is clamped one axis at a time: X first using the proposed Z,
//! then Z using the already-clamped X. This is not a swept test. A body
//! that cuts across an inflated corner can end up resting on the corner
//! edge rather than sliding round it, and overlapping obstacles are not
//! solved together. The vertical axis is never touched.

use glam::Vec3;
use log::trace;

use crate::geometry::Aabb;

/// Read-only set of static obstacles consulted during movement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obstacles {
    boxes: Vec<Aabb>,
}

impl Obstacles {
    /// Creates a registry holding `boxes`.
    #[must_use]
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    /// The registered boxes in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Number of registered boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Reports whether `point` sits strictly inside any inflated footprint.
    #[must_use]
    pub fn blocks(&self, point: Vec3, radius: f32) -> bool {
        self.boxes
            .iter()
            .any(|b| b.inflated_xz(radius).contains_xz_strict(point))
    }
}

impl FromIterator<Aabb> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Corrects `proposed` so a body of `radius` cannot cross into any box.
///
/// For each axis the coordinate is clamped to the inflated face only when
/// the body was outside that face at `previous`, is moving toward it and the
/// proposed coordinate crosses it, and the other axis lies strictly within
/// the inflated range. The returned Y always equals `proposed.y`.
///
/// # Examples
/// ```
/// use exit_strategy::collision::resolve_xz;
/// use exit_strategy::geometry::Aabb;
/// use glam::Vec3;
/// let wall = Aabb::new(Vec3::new(1.0, 0.0, -1.0), Vec3::new(2.0, 2.0, 1.0));
/// let out = resolve_xz(Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0), &[wall], 0.25);
/// assert_eq!(out, Vec3::new(0.75, 0.0, 0.0));
/// ```
#[must_use]
pub fn resolve_xz(previous: Vec3, proposed: Vec3, obstacles: &[Aabb], radius: f32) -> Vec3 {
    let mut resolved = proposed;

    let dx = proposed.x - previous.x;
    for footprint in obstacles.iter().map(|b| b.inflated_xz(radius)) {
        if resolved.z > footprint.min.z && resolved.z < footprint.max.z {
            if let Some(x) = clamp_axis(previous.x, resolved.x, dx, footprint.min.x, footprint.max.x) {
                trace!("x clamped from {} to {x}", resolved.x);
                resolved.x = x;
            }
        }
    }

    let dz = proposed.z - previous.z;
    for footprint in obstacles.iter().map(|b| b.inflated_xz(radius)) {
        if resolved.x > footprint.min.x && resolved.x < footprint.max.x {
            if let Some(z) = clamp_axis(previous.z, resolved.z, dz, footprint.min.z, footprint.max.z) {
                trace!("z clamped from {} to {z}", resolved.z);
                resolved.z = z;
            }
        }
    }

    resolved
}

/// Clamp for a single axis; `None` when the move does not cross a face.
fn clamp_axis(previous: f32, current: f32, delta: f32, min: f32, max: f32) -> Option<f32> {
    if delta > 0.0 && previous <= min && current > min {
        return Some(min);
    }
    if delta < 0.0 && previous >= max && current < max {
        return Some(max);
    }
    None
}
