pub mod vertex;
pub mod mesh;
pub mod handles;
pub mod renderable;
pub mod colliders;
pub mod gizmo;
pub mod pipeline;
pub mod shaders;

pub use vertex::GizmoVertex;
pub use mesh::MeshBuilder;
pub use renderable::{BufferUsage, GpuBackend, Material, Renderable};
pub use colliders::AxisColliders;
pub use gizmo::{Gizmo, GizmoAxis, GizmoMode, Interaction};
pub use pipeline::{GizmoPipeline, GizmoUniform};

// Re-export glam types for consistent version usage
pub use glam;
pub use gizmo_core::{GizmoConfig, GizmoError, Locatable, Ray, Transform};

#[cfg(test)]
pub(crate) mod test_support;
