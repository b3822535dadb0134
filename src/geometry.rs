//! Axis-aligned boxes and the ray test used for look-at queries.
//!
//! The ray test is the classic slab method. Division by a zero direction
//! component is left to IEEE-754: it yields `±inf`, and the min/max
//! reductions below still order those correctly.

use glam::Vec3;

/// A static box with edges parallel to the world axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinate on every axis.
    pub min: Vec3,
    /// Corner with the largest coordinate on every axis.
    pub max: Vec3,
}

impl Aabb {
    /// Builds a box from two corners.
    ///
    /// The corners are sorted per axis, so argument order does not matter.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Builds a box centred on `centre` reaching `half_extents` along each axis.
    ///
    /// # Examples
    /// ```
    /// use exit_strategy::geometry::Aabb;
    /// use glam::Vec3;
    /// let b = Aabb::from_centre_half_extents(Vec3::new(3.0, 1.0, -6.0), Vec3::splat(0.5));
    /// assert_eq!(b.min, Vec3::new(2.5, 0.5, -6.5));
    /// assert_eq!(b.max, Vec3::new(3.5, 1.5, -5.5));
    /// ```
    #[must_use]
    pub fn from_centre_half_extents(centre: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: centre - half,
            max: centre + half,
        }
    }

    /// Centre point of the box.
    #[must_use]
    pub fn centre(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the box grown by `radius` on the X and Z axes only.
    ///
    /// This is the footprint a body of that radius may not enter.
    #[must_use]
    pub fn inflated_xz(&self, radius: f32) -> Self {
        let grow = Vec3::new(radius, 0.0, radius);
        Self {
            min: self.min - grow,
            max: self.max + grow,
        }
    }

    /// Whether `point` lies strictly inside the box's X/Z footprint.
    #[must_use]
    pub fn contains_xz_strict(&self, point: Vec3) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.z > self.min.z && point.z < self.max.z
    }

    /// Entry distance of the ray `origin + t * direction` into this box.
    ///
    /// See [`ray_entry`].
    #[must_use]
    pub fn ray_entry(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        ray_entry(origin, direction, self)
    }
}

/// Intersects a ray with a box using the slab method.
///
/// Returns the near slab distance when the ray meets the box in front of the
/// origin, and `None` when it misses or the box lies wholly behind the
/// origin. When the origin is inside the box the near distance is negative;
/// callers that want a strictly forward hit compare against zero.
///
/// `direction` should be normalised so the result is a distance. A
/// zero-length direction is not meaningful.
///
/// # Examples
/// ```
/// use exit_strategy::geometry::{ray_entry, Aabb};
/// use glam::Vec3;
/// let b = Aabb::new(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));
/// let t = ray_entry(Vec3::ZERO, Vec3::NEG_Z, &b).unwrap();
/// assert!((t - 4.0).abs() < 1e-6);
/// assert!(ray_entry(Vec3::ZERO, Vec3::Z, &b).is_none());
/// ```
#[must_use]
pub fn ray_entry(origin: Vec3, direction: Vec3, aabb: &Aabb) -> Option<f32> {
    let t1 = (aabb.min - origin) / direction;
    let t2 = (aabb.max - origin) / direction;

    let near = t1.min(t2).max_element();
    let far = t1.max(t2).min_element();

    if far < 0.0 || near > far {
        return None;
    }
    Some(near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn unit_box_at(z: f32) -> Aabb {
        Aabb::from_centre_half_extents(Vec3::new(0.0, 0.0, z), Vec3::splat(1.0))
    }

    #[rstest]
    #[case::straight_ahead(Vec3::ZERO, Vec3::NEG_Z, 4.0)]
    #[case::from_behind(Vec3::new(0.0, 0.0, -10.0), Vec3::Z, 4.0)]
    fn hits_report_entry_distance(#[case] origin: Vec3, #[case] dir: Vec3, #[case] expected: f32) {
        let t = ray_entry(origin, dir, &unit_box_at(-5.0)).expect("ray should hit");
        assert_relative_eq!(t, expected, epsilon = 1e-5);
    }

    #[rstest]
    #[case::pointing_away(Vec3::ZERO, Vec3::Z)]
    #[case::parallel_outside(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z)]
    #[case::passes_above(Vec3::new(0.0, 2.5, 0.0), Vec3::NEG_Z)]
    fn misses_return_none(#[case] origin: Vec3, #[case] dir: Vec3) {
        assert!(ray_entry(origin, dir, &unit_box_at(-5.0)).is_none());
    }

    #[test]
    fn diagonal_ray_hits_corner_region() {
        let dir = Vec3::new(1.0, 0.0, -1.0).normalize();
        let b = Aabb::new(Vec3::new(2.0, -1.0, -4.0), Vec3::new(4.0, 1.0, -2.0));
        let t = b.ray_entry(Vec3::ZERO, dir).expect("diagonal should hit");
        assert_relative_eq!(t, 2.0 * std::f32::consts::SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn origin_inside_box_yields_negative_entry() {
        let b = unit_box_at(0.0);
        let t = b.ray_entry(Vec3::ZERO, Vec3::X).expect("inside counts as hit");
        assert!(t < 0.0);
    }

    #[test]
    fn zero_direction_components_are_handled_by_infinities() {
        // Only the Z component is non-zero; X and Y divisions produce ±inf.
        let b = unit_box_at(-5.0);
        let t = b.ray_entry(Vec3::new(0.5, -0.5, 0.0), Vec3::NEG_Z);
        assert!(t.is_some_and(|t| (t - 4.0).abs() < 1e-5));
    }

    #[test]
    fn new_sorts_corners() {
        let b = Aabb::new(Vec3::new(1.0, -1.0, 3.0), Vec3::new(-1.0, 1.0, 2.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 2.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(b.centre(), Vec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn inflation_leaves_height_untouched() {
        let b = unit_box_at(0.0).inflated_xz(0.5);
        assert_eq!(b.min, Vec3::new(-1.5, -1.0, -1.5));
        assert_eq!(b.max, Vec3::new(1.5, 1.0, 1.5));
        assert!(b.contains_xz_strict(Vec3::new(1.4, 50.0, 0.0)));
        assert!(!b.contains_xz_strict(Vec3::new(1.5, 0.0, 0.0)));
    }
}
