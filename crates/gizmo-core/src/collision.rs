//! Ray casting primitives for gizmo hit testing
//!
//! Colliders are exposed through the [`Collider`] trait so callers can query
//! a hit or a center without knowing the concrete shape.

use crate::math::Vec3;

/// Ray for raycasting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized by `new`, may be any length when built by hand)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. A zero or non-finite direction is stored as zero
    /// and never hits anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

/// Shape a ray can be tested against.
pub trait Collider {
    /// Distance along the ray to the first hit, or `None` on a miss.
    fn intersect_ray(&self, ray: &Ray) -> Option<f32>;

    /// Center of the shape in the collider's space.
    fn center(&self) -> Vec3;

    fn intersects(&self, ray: &Ray) -> bool {
        self.intersect_ray(ray).is_some()
    }
}

/// Bounding sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Collider for Sphere {
    /// A ray starting inside the sphere hits at distance 0. Distances are in
    /// units of `ray.direction`, so a non-unit direction still hits correctly.
    fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let a = ray.direction.length_squared();
        if !(a.is_finite() && a > 0.0) {
            return None;
        }

        let m = ray.origin - self.center;
        let b = m.dot(ray.direction);
        let c = m.length_squared() - self.radius * self.radius;

        // Origin outside and pointing away
        if c > 0.0 && b > 0.0 {
            return None;
        }

        let discr = b * b - a * c;
        if discr.is_nan() || discr < 0.0 {
            return None;
        }

        Some(((-b - discr.sqrt()) / a).max(0.0))
    }

    fn center(&self) -> Vec3 {
        self.center
    }
}

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl AABB {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The `[-1, 1]` cube on every axis
    pub fn unit() -> Self {
        Self::new(Vec3::NEG_ONE, Vec3::ONE)
    }
}
