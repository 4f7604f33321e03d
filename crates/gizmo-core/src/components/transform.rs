use crate::math::{Mat4, Quat, Vec3};

/// Anything with a location the gizmo can push around.
pub trait Locatable {
    fn location(&self) -> Vec3;
    fn translate(&mut self, delta: Vec3);
}

/// 3D Transform of a scene object
/// Represents position, rotation and scale in 3D space
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Create an identity transform (no translation, rotation, or scale)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Convert to a 4x4 transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Locatable for Transform {
    fn location(&self) -> Vec3 {
        self.position
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

impl Locatable for Vec3 {
    fn location(&self) -> Vec3 {
        *self
    }

    fn translate(&mut self, delta: Vec3) {
        *self += delta;
    }
}
