//! 3D convex hull construction.
//!
//! This library computes the convex hull of a finite set of points in 3D
//! space, returning a closed triangulated boundary mesh. The construction is
//! incremental: a seed tetrahedron is grown by repeatedly absorbing the
//! farthest remaining exterior point, replacing the faces visible from that
//! point with a cap of new faces over the horizon edges.
//!
//! Besides the Rust API, the crate exports a C-compatible entry point (see
//! [`ffi`]) that marshals a flat coordinate array in and a flat
//! triangle-index array out.
//!
//! # Example
//! ```
//! use hull3d::{ConvexHull3D, Vertex};
//!
//! let points = vec![
//!     Vertex::new(0.0, 0.0, 0.0),
//!     Vertex::new(1.0, 0.0, 0.0),
//!     Vertex::new(0.0, 1.0, 0.0),
//!     Vertex::new(0.0, 0.0, 1.0),
//! ];
//!
//! let hull = ConvexHull3D::build(&points).unwrap();
//! assert_eq!(hull.num_faces(), 4);
//! ```

mod geometry;
mod mesh;
mod quickhull;
mod simplex;
mod types;

pub mod export;
pub mod ffi;

// Shared test-shape generators, also used by the integration tests.
pub mod testdata;

pub use types::{ConvexHull3D, Face, Vertex};

use std::fmt;

/// The kind of seed degeneracy that prevented hull construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// All input points coincide.
    Coincident,
    /// All input points lie on a single line.
    Collinear,
    /// All input points lie on a single plane.
    Coplanar,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::Coincident => write!(f, "coincident"),
            Degeneracy::Collinear => write!(f, "collinear"),
            Degeneracy::Coplanar => write!(f, "coplanar"),
        }
    }
}

/// Error type for convex hull construction.
///
/// Input errors (`InsufficientPoints`, `DegenerateSeed`) are reported before
/// any hull state is built; `InternalTopology` signals a defect in the mesh
/// bookkeeping itself and never indicates malformed input.
#[derive(Debug, thiserror::Error)]
pub enum HullError {
    #[error("not enough points to form a hull (minimum 4 required)")]
    InsufficientPoints,

    #[error("degenerate seed geometry: input points are {0}")]
    DegenerateSeed(Degeneracy),

    #[error("internal topology error: {0}")]
    InternalTopology(String),
}

pub type Result<T> = std::result::Result<T, HullError>;

/// Plane distance tolerance.
///
/// A point within this distance of a face plane counts as lying on the hull
/// surface: it is never selected as a farthest point and never triggers face
/// removal.
pub const PLANE_DIST_TOL: f64 = 1e-10;
