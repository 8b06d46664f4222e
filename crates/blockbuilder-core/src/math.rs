//! World-space geometry helpers.

use glam::Vec3;

/// Axis-Aligned Bounding Box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    #[inline]
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from its minimum corner and size
    #[inline]
    #[must_use]
    pub fn from_origin_size(origin: Vec3, size: Vec3) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Get the size of the AABB
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_and_size() {
        let aabb = Aabb::from_origin_size(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(2.0));
        assert_eq!(aabb, Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 4.0, 5.0)));
        assert_eq!(aabb.size(), Vec3::splat(2.0));
    }
}
