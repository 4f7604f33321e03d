//! Hand-authored handle tips: translate arrowheads and rotate rings.

use crate::mesh::MeshBuilder;
use crate::vertex::{rgba, BLUE, GREEN, RED};

/// Square-based arrowheads: four base corners at 0.85 around the axis, tip at 0.95.
const ARROW_X: [[f32; 3]; 5] = [
    [0.85, 0.035355, -0.035355],
    [0.95, 0.0, 0.0],
    [0.85, -0.035355, -0.035355],
    [0.85, -0.035355, 0.035355],
    [0.85, 0.035355, 0.035355],
];

const ARROW_Z: [[f32; 3]; 5] = [
    [-0.035355, -0.035355, 0.85],
    [0.0, 0.0, 0.95],
    [0.035355, -0.035355, 0.85],
    [0.035355, 0.035355, 0.85],
    [-0.035355, 0.035355, 0.85],
];

const ARROW_Y: [[f32; 3]; 5] = [
    [-0.035355, 0.85, -0.035355],
    [0.0, 0.95, 0.0],
    [0.035355, 0.85, -0.035355],
    [0.035355, 0.85, 0.035355],
    [-0.035355, 0.85, 0.035355],
];

/// Fan of four sides around the tip (vertex 1), then the base as two triangles.
const ARROW_TRIANGLES: [[u32; 3]; 6] = [
    [0, 1, 2],
    [2, 1, 3],
    [3, 1, 4],
    [4, 1, 0],
    [2, 4, 0],
    [2, 3, 4],
];

// Each ring is seven cross sections of a triangular tube, three vertices per section.
const RING_X: [[f32; 3]; 21] = [
    [0.9000, 0.0000, -0.0625],
    [0.9188, 0.0000, -0.0437],
    [0.8812, 0.0000, -0.0437],
    [0.9000, 0.0312, -0.0541],
    [0.9188, 0.0219, -0.0379],
    [0.8812, 0.0219, -0.0379],
    [0.9000, 0.0541, -0.0312],
    [0.9188, 0.0379, -0.0219],
    [0.8812, 0.0379, -0.0219],
    [0.9000, 0.0625, 0.0000],
    [0.9188, 0.0437, 0.0000],
    [0.8812, 0.0437, 0.0000],
    [0.9000, 0.0541, 0.0312],
    [0.9188, 0.0379, 0.0219],
    [0.8812, 0.0379, 0.0219],
    [0.9000, 0.0312, 0.0541],
    [0.9188, 0.0219, 0.0379],
    [0.8812, 0.0219, 0.0379],
    [0.9000, 0.0000, 0.0625],
    [0.9188, 0.0000, 0.0437],
    [0.8812, 0.0000, 0.0437],
];

const RING_Z: [[f32; 3]; 21] = [
    [-0.0625, 0.0000, 0.9000],
    [-0.0437, 0.0000, 0.9188],
    [-0.0437, 0.0000, 0.8812],
    [-0.0541, 0.0312, 0.9000],
    [-0.0379, 0.0219, 0.9188],
    [-0.0379, 0.0219, 0.8812],
    [-0.0312, 0.0541, 0.9000],
    [-0.0219, 0.0379, 0.9188],
    [-0.0219, 0.0379, 0.8812],
    [0.0000, 0.0625, 0.9000],
    [0.0000, 0.0437, 0.9188],
    [0.0000, 0.0437, 0.8812],
    [0.0312, 0.0541, 0.9000],
    [0.0219, 0.0379, 0.9188],
    [0.0219, 0.0379, 0.8812],
    [0.0541, 0.0312, 0.9000],
    [0.0379, 0.0219, 0.9188],
    [0.0379, 0.0219, 0.8812],
    [0.0625, 0.0000, 0.9000],
    [0.0437, 0.0000, 0.9188],
    [0.0437, 0.0000, 0.8812],
];

const RING_Y: [[f32; 3]; 21] = [
    [0.0000, 0.9000, 0.0625],
    [0.0000, 0.9188, 0.0437],
    [0.0000, 0.8812, 0.0437],
    [0.0312, 0.9000, 0.0541],
    [0.0219, 0.9188, 0.0379],
    [0.0219, 0.8812, 0.0379],
    [0.0541, 0.9000, 0.0312],
    [0.0379, 0.9188, 0.0219],
    [0.0379, 0.8812, 0.0219],
    [0.0625, 0.9000, 0.0000],
    [0.0437, 0.9188, 0.0000],
    [0.0437, 0.8812, 0.0000],
    [0.0541, 0.9000, -0.0312],
    [0.0379, 0.9188, -0.0219],
    [0.0379, 0.8812, -0.0219],
    [0.0312, 0.9000, -0.0541],
    [0.0219, 0.9188, -0.0379],
    [0.0219, 0.8812, -0.0379],
    [0.0000, 0.9000, -0.0625],
    [0.0000, 0.9188, -0.0437],
    [0.0000, 0.8812, -0.0437],
];

const RING_X_TRIANGLES: [[u32; 3]; 38] = [
    [3, 1, 0], [4, 2, 1], [2, 3, 0], [3, 7, 4], [7, 5, 4], [5, 6, 3],
    [9, 7, 6], [10, 8, 7], [11, 6, 8], [9, 13, 10], [13, 11, 10], [11, 12, 9],
    [12, 16, 13], [16, 14, 13], [17, 12, 14], [18, 16, 15], [19, 17, 16], [20, 15, 17],
    [1, 2, 0], [20, 19, 18], [3, 4, 1], [4, 5, 2], [2, 5, 3], [3, 6, 7],
    [7, 8, 5], [5, 8, 6], [9, 10, 7], [10, 11, 8], [11, 9, 6], [9, 12, 13],
    [13, 14, 11], [11, 14, 12], [12, 15, 16], [16, 17, 14], [17, 15, 12], [18, 19, 16],
    [19, 20, 17], [20, 18, 15],
];

const RING_Z_TRIANGLES: [[u32; 3]; 38] = [
    [0, 4, 1], [4, 2, 1], [5, 0, 2], [6, 4, 3], [7, 5, 4], [8, 3, 5],
    [9, 7, 6], [10, 8, 7], [11, 6, 8], [12, 10, 9], [13, 11, 10], [14, 9, 11],
    [15, 13, 12], [16, 14, 13], [14, 15, 12], [15, 19, 16], [19, 17, 16], [20, 15, 17],
    [1, 2, 0], [20, 19, 18], [0, 3, 4], [4, 5, 2], [5, 3, 0], [6, 7, 4],
    [7, 8, 5], [8, 6, 3], [9, 10, 7], [10, 11, 8], [11, 9, 6], [12, 13, 10],
    [13, 14, 11], [14, 12, 9], [15, 16, 13], [16, 17, 14], [14, 17, 15], [15, 18, 19],
    [19, 20, 17], [20, 18, 15],
];

const RING_Y_TRIANGLES: [[u32; 3]; 38] = [
    [0, 4, 1], [4, 2, 1], [2, 3, 0], [6, 4, 3], [7, 5, 4], [8, 3, 5],
    [9, 7, 6], [10, 8, 7], [11, 6, 8], [9, 13, 10], [13, 11, 10], [11, 12, 9],
    [15, 13, 12], [16, 14, 13], [14, 15, 12], [18, 16, 15], [19, 17, 16], [20, 15, 17],
    [1, 2, 0], [20, 19, 18], [0, 3, 4], [4, 5, 2], [2, 5, 3], [6, 7, 4],
    [7, 8, 5], [8, 6, 3], [9, 10, 7], [10, 11, 8], [11, 9, 6], [9, 12, 13],
    [13, 14, 11], [11, 14, 12], [15, 16, 13], [16, 17, 14], [14, 17, 15], [18, 19, 16],
    [19, 20, 17], [20, 18, 15],
];
impl MeshBuilder {
    /// Translate handles, appended X, Z, Y.
    pub fn add_tetrahedrons(&mut self, alpha: f32) {
        self.append(&ARROW_X, rgba(RED, alpha), &ARROW_TRIANGLES);
        self.append(&ARROW_Z, rgba(BLUE, alpha), &ARROW_TRIANGLES);
        self.append(&ARROW_Y, rgba(GREEN, alpha), &ARROW_TRIANGLES);
    }

    /// Rotate handles, appended X, Z, Y.
    pub fn add_toruses(&mut self, alpha: f32) {
        self.append(&RING_X, rgba(RED, alpha), &RING_X_TRIANGLES);
        self.append(&RING_Z, rgba(BLUE, alpha), &RING_Z_TRIANGLES);
        self.append(&RING_Y, rgba(GREEN, alpha), &RING_Y_TRIANGLES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedrons() {
        let mut builder = MeshBuilder::new();
        builder.add_tetrahedrons(1.0);

        assert_eq!(builder.vertex_count(), 15);
        assert_eq!(builder.face_count(), 18);
        // second arrowhead starts at vertex 5
        assert_eq!(&builder.indices()[18..21], &[5, 6, 7]);
    }

    #[test]
    fn test_arrow_tips_sit_on_their_axis() {
        for (arrow, axis) in [(ARROW_X, 0), (ARROW_Y, 1), (ARROW_Z, 2)] {
            let tip = arrow[1];
            assert_eq!(tip[axis], 0.95);
            assert!(arrow.iter().all(|p| p[axis] >= 0.85));
        }
    }

    #[test]
    fn test_toruses() {
        let mut builder = MeshBuilder::new();
        builder.add_toruses(1.0);

        assert_eq!(builder.vertex_count(), 63);
        assert_eq!(builder.face_count(), 114);

        // each ring only references its own 21 vertices
        for (ring, tris) in builder.indices().chunks(38 * 3).enumerate() {
            let range = (ring as u32 * 21)..(ring as u32 * 21 + 21);
            assert!(tris.iter().all(|i| range.contains(i)));
        }
    }

    #[test]
    fn test_ring_colors() {
        let mut builder = MeshBuilder::new();
        builder.add_toruses(0.5);
        let v = builder.vertices();

        assert_eq!(v[0].color, rgba(RED, 0.5));
        assert_eq!(v[21].color, rgba(BLUE, 0.5));
        assert_eq!(v[42].color, rgba(GREEN, 0.5));
    }

    #[test]
    fn test_rings_centered_on_axis_end() {
        for (ring, axis) in [(RING_X, 0), (RING_Y, 1), (RING_Z, 2)] {
            let sum: f32 = ring.iter().map(|p| p[axis]).sum();
            assert!((sum / 21.0 - 0.9).abs() < 1e-3);
        }
    }
}
