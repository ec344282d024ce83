//! Colored vertex meshes for the two scene entities

use crate::foundation::math::Vec3;

/// Vertex with position and RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    /// Position in the mesh's local space
    pub position: Vec3,
    /// Linear RGBA color
    pub color: [f32; 4],
}

impl ColoredVertex {
    /// Create a vertex
    pub const fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// How a vertex list is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Consecutive vertex pairs form line segments
    Lines,
    /// Every vertex is drawn as a point
    Points,
}

/// A vertex list plus its primitive type
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertices in draw order
    pub vertices: Vec<ColoredVertex>,
    /// Primitive assembly
    pub primitive: Primitive,
}

/// Box wireframe color; renders blue with the red channel gated off
pub const BOX_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// Point color; renders green with the red channel gated off
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

impl Mesh {
    /// Wireframe cube spanning -1.0 to 1.0 on each axis as 12 line segments
    pub fn box_wireframe() -> Self {
        const CORNERS: [[f32; 3]; 8] = [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
        ];
        // bottom ring, vertical walls, top ring
        const EDGES: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (0, 4), (1, 5), (2, 6), (3, 7),
            (4, 5), (5, 6), (6, 7), (7, 4),
        ];

        let vertices = EDGES
            .iter()
            .flat_map(|&(a, b)| [CORNERS[a], CORNERS[b]])
            .map(|[x, y, z]| ColoredVertex::new(Vec3::new(x, y, z), BOX_COLOR))
            .collect();

        Self {
            vertices,
            primitive: Primitive::Lines,
        }
    }

    /// Single vertex at the origin
    pub fn point() -> Self {
        Self {
            vertices: vec![ColoredVertex::new(Vec3::zeros(), POINT_COLOR)],
            primitive: Primitive::Points,
        }
    }

    /// Vertex positions in draw order
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|v| v.position).collect()
    }
}
