//! GPU-side gizmo meshes
//!
//! The gizmo never talks to wgpu directly when uploading geometry; it goes
//! through [`GpuBackend`] so the same assembly code runs against a real
//! device or a recording backend in tests.

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use gizmo_core::{GizmoError, AABB};
use wgpu::util::DeviceExt;

use crate::mesh::MeshBuilder;

/// What an uploaded buffer will be bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    Vertex,
    Index,
}

/// Buffer allocation and upload
pub trait GpuBackend {
    type Buffer;
    /// Handle to whatever the renderer binds to draw a gizmo mesh
    type Shader: Clone;

    /// Allocate a buffer and fill it with `contents` (static usage).
    fn upload_buffer(&self, label: &str, contents: &[u8], usage: BufferUsage) -> Self::Buffer;
}

impl GpuBackend for wgpu::Device {
    type Buffer = wgpu::Buffer;
    type Shader = Arc<wgpu::RenderPipeline>;

    fn upload_buffer(&self, label: &str, contents: &[u8], usage: BufferUsage) -> wgpu::Buffer {
        let usage = match usage {
            BufferUsage::Vertex => wgpu::BufferUsages::VERTEX,
            BufferUsage::Index => wgpu::BufferUsages::INDEX,
        };
        self.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        })
    }
}

/// マテリアル（シェーダーは構築後に設定）
#[derive(Debug, Clone)]
pub struct Material<S> {
    pub shader: Option<S>,
}

impl<S> Default for Material<S> {
    fn default() -> Self {
        Self { shader: None }
    }
}

/// アップロード済みメッシュと描画状態
pub struct Renderable<B: GpuBackend> {
    pub label: String,
    pub vertex_buffer: B::Buffer,
    pub index_buffer: B::Buffer,
    pub vertex_count: u32,
    pub index_count: u32,
    pub face_count: u32,
    /// 常に単位立方体（実際のジオメトリ範囲ではない）
    pub bounds: AABB,
    pub material: Material<B::Shader>,
    /// 描画時の一様スケール
    pub scale: Vec3,
}

impl<B: GpuBackend> Renderable<B> {
    /// Upload `mesh` as one interleaved vertex buffer and one `u32` index buffer.
    pub fn assemble(backend: &B, label: &str, mesh: &MeshBuilder) -> Result<Self, GizmoError> {
        if mesh.vertices().is_empty() {
            return Err(GizmoError::EmptyGeometry {
                label: label.to_string(),
            });
        }

        let vertex_buffer = backend.upload_buffer(
            &format!("{label} Vertex Buffer"),
            bytemuck::cast_slice(mesh.vertices()),
            BufferUsage::Vertex,
        );
        let index_buffer = backend.upload_buffer(
            &format!("{label} Index Buffer"),
            bytemuck::cast_slice(mesh.indices()),
            BufferUsage::Index,
        );

        log::debug!(
            "assembled {label}: {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );

        Ok(Self {
            label: label.to_string(),
            vertex_buffer,
            index_buffer,
            vertex_count: mesh.vertex_count() as u32,
            index_count: mesh.index_count() as u32,
            face_count: mesh.face_count(),
            bounds: AABB::unit(),
            material: Material::default(),
            scale: Vec3::ONE,
        })
    }

    pub fn set_shader(&mut self, shader: B::Shader) {
        self.material.shader = Some(shader);
    }

    /// `position`に現在のスケールで配置するモデル行列
    pub fn model_matrix(&self, position: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::IDENTITY, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmo::GizmoMode;
    use crate::test_support::RecordingBackend;

    #[test]
    fn test_assemble_uploads_two_buffers() {
        let backend = RecordingBackend::default();
        let mesh = MeshBuilder::for_mode(GizmoMode::Translate, 0.5);
        let renderable = Renderable::assemble(&backend, "Translate Gizmo", &mesh).unwrap();

        let uploads = backend.uploads();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].usage, BufferUsage::Vertex);
        assert_eq!(uploads[0].bytes.len(), 87 * 28);
        assert_eq!(uploads[1].usage, BufferUsage::Index);
        assert_eq!(uploads[1].bytes.len(), 162 * 4);

        assert_eq!(renderable.vertex_buffer, 0);
        assert_eq!(renderable.index_buffer, 1);
        assert_eq!(renderable.face_count, 54);
        assert_eq!(renderable.index_count, 162);
    }

    #[test]
    fn test_vertex_upload_is_interleaved() {
        let backend = RecordingBackend::default();
        let mesh = MeshBuilder::for_mode(GizmoMode::Scale, 0.5);
        Renderable::assemble(&backend, "Scale Gizmo", &mesh).unwrap();

        let uploads = backend.uploads();
        let floats: Vec<f32> = uploads[0]
            .bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        let first = mesh.vertices()[0];
        assert_eq!(&floats[..3], &first.position);
        assert_eq!(&floats[3..7], &first.color);
    }

    #[test]
    fn test_static_bounds_and_empty_material() {
        let backend = RecordingBackend::default();
        let mesh = MeshBuilder::for_mode(GizmoMode::Rotate, 0.5);
        let mut renderable = Renderable::assemble(&backend, "Rotate Gizmo", &mesh).unwrap();

        assert_eq!(renderable.bounds, AABB::new(Vec3::NEG_ONE, Vec3::ONE));
        assert!(renderable.material.shader.is_none());

        renderable.set_shader("vertex-color");
        assert_eq!(renderable.material.shader, Some("vertex-color"));
    }

    #[test]
    fn test_empty_geometry_is_rejected() {
        let backend = RecordingBackend::default();
        let result = Renderable::assemble(&backend, "Empty", &MeshBuilder::new());

        assert!(matches!(result, Err(GizmoError::EmptyGeometry { .. })));
        assert!(backend.uploads().is_empty());
    }

    #[test]
    fn test_model_matrix_uses_scale() {
        let backend = RecordingBackend::default();
        let mesh = MeshBuilder::for_mode(GizmoMode::Translate, 0.5);
        let mut renderable = Renderable::assemble(&backend, "Translate Gizmo", &mesh).unwrap();
        renderable.scale = Vec3::splat(2.0);

        let m = renderable.model_matrix(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m.transform_point3(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
    }
}
