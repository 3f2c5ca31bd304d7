//! Mesh assembly from a rectangle set
//!
//! Every rectangle contributes its four corners and two triangles. Corners
//! are shared across rectangles through a grid-vertex index, so each distinct
//! grid point appears once in the output vertex buffer.

use alphamesh_core::{ContourMesh, GridVertex, Rect, Uv, Vector3f};
use std::collections::HashMap;

/// Local corner slots of the two triangles emitted per rectangle.
///
/// Slots follow [`Rect::corners`]: (min,min), (max,min), (min,max), (max,max).
pub const QUAD_TRIANGLES: [[usize; 3]; 2] = [[0, 3, 1], [0, 2, 3]];

/// Normal shared by every emitted face
pub fn face_direction() -> Vector3f {
    Vector3f::z()
}

/// Builds contour meshes for an image of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct MeshAssembler {
    width: u32,
    height: u32,
}

impl MeshAssembler {
    /// Create an assembler for an image of `width x height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Uniform scale applied to grid coordinates, `1 / max(width, height)`
    pub fn position_scale(&self) -> f32 {
        1.0 / self.width.max(self.height).max(1) as f32
    }

    /// Texture coordinate of a grid vertex, clamped to the unit square
    pub fn uv(&self, vertex: GridVertex) -> Uv {
        let u = vertex.x as f32 / self.width.max(1) as f32;
        let v = vertex.y as f32 / self.height.max(1) as f32;
        [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)]
    }

    /// Assemble `rects`, in order, into a mesh with bounds and `+Z` vertex normals
    pub fn assemble(&self, rects: &[Rect]) -> ContourMesh {
        let scale = self.position_scale();
        let mut slots: HashMap<GridVertex, usize> = HashMap::with_capacity(rects.len() * 4);
        let mut vertices = Vec::with_capacity(rects.len() * 4);
        let mut uvs = Vec::with_capacity(rects.len() * 4);
        let mut faces = Vec::with_capacity(rects.len() * 2);

        for rect in rects {
            let local = rect.corners().map(|corner| {
                *slots.entry(corner).or_insert_with(|| {
                    vertices.push(corner.to_point(scale));
                    uvs.push(self.uv(corner));
                    vertices.len() - 1
                })
            });

            for [a, b, c] in QUAD_TRIANGLES {
                faces.push([local[a], local[b], local[c]]);
            }
        }

        let mut mesh = ContourMesh::from_buffers(vertices, uvs, faces);
        mesh.set_normals(vec![face_direction(); mesh.vertex_count()]);
        mesh
    }
}

/// Assemble `rects` for an image of `width x height` pixels
pub fn assemble_mesh(rects: &[Rect], width: u32, height: u32) -> ContourMesh {
    MeshAssembler::new(width, height).assemble(rects)
}
