//! Geometric utility functions

use crate::types::Vertex;

/// Compute the volume of the tetrahedron spanned by 4 points
pub(crate) fn tetrahedron_volume(p0: &Vertex, p1: &Vertex, p2: &Vertex, p3: &Vertex) -> f64 {
    let v1 = p1.sub(p0);
    let v2 = p2.sub(p0);
    let v3 = p3.sub(p0);

    v1.dot(&v2.cross(&v3)).abs() / 6.0
}

/// Check if 4 points span no volume within the given tolerance
pub(crate) fn are_coplanar(
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
    p3: &Vertex,
    epsilon: f64,
) -> bool {
    tetrahedron_volume(p0, p1, p2, p3) < epsilon
}

/// Find the indices of the extreme points along each axis.
///
/// Returns `[min_x, max_x, min_y, max_y, min_z, max_z]`; ties keep the first
/// point found.
pub(crate) fn find_extreme_points(points: &[Vertex]) -> [usize; 6] {
    let mut extremes = [0usize; 6];

    for (i, p) in points.iter().enumerate() {
        if p.x < points[extremes[0]].x {
            extremes[0] = i;
        }
        if p.x > points[extremes[1]].x {
            extremes[1] = i;
        }
        if p.y < points[extremes[2]].y {
            extremes[2] = i;
        }
        if p.y > points[extremes[3]].y {
            extremes[3] = i;
        }
        if p.z < points[extremes[4]].z {
            extremes[4] = i;
        }
        if p.z > points[extremes[5]].z {
            extremes[5] = i;
        }
    }

    extremes
}
