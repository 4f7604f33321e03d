//! WGSL shaders

/// Vertex-colored gizmo shader
pub const GIZMO_SHADER: &str = include_str!("gizmo.wgsl");
