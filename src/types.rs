//! Public data types for 3D convex hull computation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D point/vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Add another vertex
    pub fn add(&self, other: &Vertex) -> Vertex {
        Vertex {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Subtract another vertex
    pub fn sub(&self, other: &Vertex) -> Vertex {
        Vertex {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Scale by a scalar
    pub fn scale(&self, s: f64) -> Vertex {
        Vertex {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Dot product with another vertex
    pub fn dot(&self, other: &Vertex) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vertex
    pub fn cross(&self, other: &Vertex) -> Vertex {
        Vertex {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Compute the magnitude/length
    pub fn magnitude(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length, or `None` for a (near-)zero vector
    pub fn try_normalize(&self) -> Option<Vertex> {
        let mag = self.magnitude();
        if mag > 1e-12 {
            Some(self.scale(1.0 / mag))
        } else {
            None
        }
    }

    /// Distance to another vertex
    pub fn distance(&self, other: &Vertex) -> f64 {
        self.sub(other).magnitude()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// A face of the convex hull: a triangle defined by 3 indices into the
/// input point array, wound so its normal points away from the hull interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    /// Create a new face from three vertex indices
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Get vertex indices as an array
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Check if this face references a vertex index
    pub fn contains(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Compute the outward unit normal of this face
    pub fn normal(&self, vertices: &[Vertex]) -> Vertex {
        let e1 = vertices[self.b].sub(&vertices[self.a]);
        let e2 = vertices[self.c].sub(&vertices[self.a]);
        e1.cross(&e2)
            .try_normalize()
            .unwrap_or(Vertex::new(0.0, 0.0, 0.0))
    }

    /// Compute the centroid of this face
    pub fn centroid(&self, vertices: &[Vertex]) -> Vertex {
        vertices[self.a]
            .add(&vertices[self.b])
            .add(&vertices[self.c])
            .scale(1.0 / 3.0)
    }
}

/// The result of a convex hull computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvexHull3D {
    /// Original input points
    vertices: Vec<Vertex>,
    /// Triangles of the hull boundary, referencing the input points
    faces: Vec<Face>,
}

impl ConvexHull3D {
    pub(crate) fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Build the convex hull of a set of points.
    ///
    /// Fails with [`crate::HullError::InsufficientPoints`] for fewer than 4
    /// points and with [`crate::HullError::DegenerateSeed`] when the points
    /// are coincident, collinear, or coplanar.
    pub fn build(points: &[Vertex]) -> crate::Result<Self> {
        crate::quickhull::build_hull(points)
    }

    /// Get the input points
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the hull faces
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get the number of hull faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of input points
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Flatten the face indices into a `3 * num_faces` array
    pub fn flat_indices(&self) -> Vec<i32> {
        let mut flat = Vec::with_capacity(3 * self.faces.len());
        for face in &self.faces {
            flat.push(face.a as i32);
            flat.push(face.b as i32);
            flat.push(face.c as i32);
        }
        flat
    }

    /// Compute the volume enclosed by the hull
    pub fn volume(&self) -> f64 {
        let mut volume = 0.0;

        for face in &self.faces {
            let v0 = &self.vertices[face.a];
            let v1 = &self.vertices[face.b];
            let v2 = &self.vertices[face.c];

            // Signed volume of the tetrahedron spanned by the origin and the face
            volume += v0.dot(&v1.cross(v2)) / 6.0;
        }

        volume.abs()
    }

    /// Compute the surface area of the hull
    pub fn surface_area(&self) -> f64 {
        let mut area = 0.0;

        for face in &self.faces {
            let e1 = self.vertices[face.b].sub(&self.vertices[face.a]);
            let e2 = self.vertices[face.c].sub(&self.vertices[face.a]);
            area += e1.cross(&e2).magnitude() / 2.0;
        }

        area
    }
}
