//! Gizmoメッシュ生成
//!
//! [`MeshBuilder`]は頂点と三角形インデックスを蓄積する。各`add_*`呼び出しは
//! その時点の頂点数だけインデックスをオフセットするので、複数のプリミティブを
//! 1つのバッファに連結できる。

use glam::Vec3;

use crate::gizmo::GizmoMode;
use crate::vertex::{rgba, GizmoVertex, BLUE, GREEN, RED};

/// Long-axis extent of the triad arms
const ARM_MIN: f32 = 0.1;
const ARM_MAX: f32 = 0.8;
/// Half thickness of the triad arms
const ARM_HALF: f32 = 0.01;

/// Long-axis extent of the scale handle boxes
const SQUARE_MIN: f32 = 0.85;
const SQUARE_MAX: f32 = 0.95;
const SQUARE_HALF: f32 = 0.05;

/// Two triangles per quad, counter-clockwise seen from outside
const QUAD_TRIANGLES: [[u32; 3]; 2] = [[0, 1, 2], [2, 3, 0]];

/// Box corners, indexed like this:
///
/// ```text
///      6--------5
///     /|       /|        +Y
///    1--------0 |        |__ +X
///    | 7------|-4       /
///    |/       |/       +Z
///    2--------3
/// ```
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // front
    [5, 0, 3, 4], // right
    [5, 6, 1, 0], // top
    [1, 6, 7, 2], // left
    [3, 2, 7, 4], // bottom
    [6, 5, 4, 7], // back
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuilder {
    vertices: Vec<GizmoVertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// ツール1つ分のメッシュ（共通の軸 + ツール固有のハンドル）を生成
    pub fn for_mode(mode: GizmoMode, alpha: f32) -> Self {
        let mut builder = Self::new();
        builder.add_axis_triad(alpha);
        match mode {
            GizmoMode::Translate => builder.add_tetrahedrons(alpha),
            GizmoMode::Scale => builder.add_squares(alpha),
            GizmoMode::Rotate => builder.add_toruses(alpha),
        }
        builder
    }

    pub fn vertices(&self) -> &[GizmoVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Offset the next appended primitive's indices start from
    pub fn index_offset(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn face_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// 単色プリミティブを追加。`triangles`は`positions`のローカルインデックス
    pub fn append(&mut self, positions: &[[f32; 3]], color: [f32; 4], triangles: &[[u32; 3]]) {
        let base = self.index_offset();
        debug_assert!(
            triangles.iter().flatten().all(|&i| (i as usize) < positions.len()),
            "triangle index out of range"
        );

        self.vertices
            .extend(positions.iter().map(|&p| GizmoVertex::new(p, color)));
        self.indices
            .extend(triangles.iter().flatten().map(|&i| base + i));
    }

    /// 軸平行ボックスを追加（面ごとに4頂点、頂点は共有しない）
    pub fn add_box(&mut self, min: Vec3, max: Vec3, color: [f32; 4]) {
        let corners = [
            [max.x, max.y, max.z],
            [min.x, max.y, max.z],
            [min.x, min.y, max.z],
            [max.x, min.y, max.z],
            [max.x, min.y, min.z],
            [max.x, max.y, min.z],
            [min.x, max.y, min.z],
            [min.x, min.y, min.z],
        ];

        for face in BOX_FACES {
            let quad = face.map(|c| corners[c]);
            self.append(&quad, color, &QUAD_TRIANGLES);
        }
    }

    /// +X（赤）、+Y（緑）、+Z（青）の軸を追加
    pub fn add_axis_triad(&mut self, alpha: f32) {
        self.add_axis_boxes(ARM_MIN, ARM_MAX, ARM_HALF, alpha);
    }

    /// スケールハンドル（各軸の先端に小さなボックス）を追加
    pub fn add_squares(&mut self, alpha: f32) {
        self.add_axis_boxes(SQUARE_MIN, SQUARE_MAX, SQUARE_HALF, alpha);
    }

    fn add_axis_boxes(&mut self, start: f32, end: f32, half: f32, alpha: f32) {
        for (axis, rgb) in [(0, RED), (1, GREEN), (2, BLUE)] {
            let mut min = Vec3::splat(-half);
            let mut max = Vec3::splat(half);
            min[axis] = start;
            max[axis] = end;
            self.add_box(min, max, rgba(rgb, alpha));
        }
    }
}
