//! Mesh data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3f,
    pub max: Point3f,
}

impl BoundingBox {
    /// A zero-sized box at the origin, used for empty meshes
    pub fn empty() -> Self {
        Self {
            min: Point3f::origin(),
            max: Point3f::origin(),
        }
    }

    /// Compute the bounds of a set of points
    pub fn from_points(points: &[Point3f]) -> Self {
        let Some(first) = points.first() else {
            return Self::empty();
        };

        let mut min = *first;
        let mut max = *first;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Self { min, max }
    }

    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    pub fn center(&self) -> Point3f {
        nalgebra::center(&self.min, &self.max)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

/// A planar triangle mesh approximating the opaque silhouette of an image.
///
/// `vertices` and `uvs` are parallel arrays. Front faces wind clockwise when
/// viewed from `+Z`, so every triangle produced by the contour pipeline faces
/// `+Z`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourMesh {
    pub vertices: Vec<Point3f>,
    pub uvs: Vec<Uv>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    pub bounds: BoundingBox,
}

impl ContourMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            faces: Vec::new(),
            normals: None,
            bounds: BoundingBox::empty(),
        }
    }

    /// Create a mesh from vertex, UV and face buffers.
    ///
    /// Bounds are computed; normals are left unset.
    pub fn from_buffers(vertices: Vec<Point3f>, uvs: Vec<Uv>, faces: Vec<[usize; 3]>) -> Self {
        let bounds = BoundingBox::from_points(&vertices);
        Self {
            vertices,
            uvs,
            faces,
            normals: None,
            bounds,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Flattened triangle index list, three entries per face
    pub fn indices(&self) -> Vec<u32> {
        self.faces
            .iter()
            .flat_map(|face| face.iter().map(|&i| i as u32))
            .collect()
    }

    /// Unit normal of a face under clockwise front-face winding.
    ///
    /// Degenerate faces yield `None`.
    pub fn face_normal(&self, face: usize) -> Option<Vector3f> {
        let [a, b, c] = *self.faces.get(face)?;
        let v0 = self.vertices[a];
        let v1 = self.vertices[b];
        let v2 = self.vertices[c];

        (v2 - v0).cross(&(v1 - v0)).try_normalize(f32::EPSILON)
    }

    /// Calculate face normals
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        (0..self.faces.len())
            .map(|i| self.face_normal(i).unwrap_or_else(Vector3f::zeros))
            .collect()
    }

    /// Recompute the bounding box from the current vertices
    pub fn recalculate_bounds(&mut self) {
        self.bounds = BoundingBox::from_points(&self.vertices);
    }

    /// Recompute per-vertex normals by averaging the normals of adjacent faces
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];
        for (face, normal) in self.faces.iter().zip(self.calculate_face_normals()) {
            for &vi in face {
                normals[vi] += normal;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(f32::EPSILON).unwrap_or_else(Vector3f::zeros);
        }
        self.normals = Some(normals);
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.faces.clear();
        self.normals = None;
        self.bounds = BoundingBox::empty();
    }
}

impl Default for ContourMesh {
    fn default() -> Self {
        Self::new()
    }
}
