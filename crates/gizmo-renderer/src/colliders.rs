//! Per-axis hit regions for the gizmo handles

use gizmo_core::{Collider, Ray, Sphere};

use crate::gizmo::GizmoAxis;

/// Distance of each collider from the gizmo origin, in gizmo units
pub const COLLIDER_OFFSET: f32 = 0.9;
/// Collider radius, in gizmo units
pub const COLLIDER_RADIUS: f32 = 0.05;

/// One sphere per axis, stored in X, Y, Z order
#[derive(Debug, Clone, PartialEq)]
pub struct AxisColliders {
    spheres: [Sphere; 3],
}

impl AxisColliders {
    pub fn generate(scale: f32) -> Self {
        let spheres = GizmoAxis::ALL.map(|axis| {
            Sphere::new(axis.unit() * (COLLIDER_OFFSET * scale), COLLIDER_RADIUS * scale)
        });

        let colliders = Self { spheres };
        for (axis, collider) in colliders.iter() {
            log::debug!("{axis:?} collider center: {}", collider.center());
        }
        colliders
    }

    pub fn get(&self, axis: GizmoAxis) -> &Sphere {
        &self.spheres[axis.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GizmoAxis, &Sphere)> {
        GizmoAxis::ALL.into_iter().zip(self.spheres.iter())
    }

    /// First axis, in X, Y, Z order, whose collider the ray touches.
    /// Overlapping colliders are not resolved by distance.
    pub fn hit_axis(&self, ray: &Ray) -> Option<GizmoAxis> {
        self.iter()
            .find(|(_, collider)| collider.intersects(ray))
            .map(|(axis, _)| axis)
    }
}
