//! Initial simplex construction.
//!
//! Bootstraps the hull with a non-degenerate seed tetrahedron: two
//! well-separated axis-extreme points, the point farthest from their line,
//! and the point farthest from the resulting plane. The centroid of the four
//! becomes the interior reference point every face is oriented against.

use std::collections::BTreeSet;

use crate::geometry::{are_coplanar, find_extreme_points};
use crate::mesh::HullMesh;
use crate::types::Vertex;
use crate::{Degeneracy, HullError, PLANE_DIST_TOL, Result};

/// Pick the four seed vertices.
///
/// With exactly 4 input points they are used directly, after checking they
/// span an actual tetrahedron. Otherwise the selection works outward from
/// the axis extremes, failing with the matching [`Degeneracy`] at each
/// stage that finds no positive maximum.
fn choose_simplex(points: &[Vertex]) -> Result<[usize; 4]> {
    if points.len() < 4 {
        return Err(HullError::InsufficientPoints);
    }

    if points.len() == 4 {
        if are_coplanar(&points[0], &points[1], &points[2], &points[3], PLANE_DIST_TOL) {
            return Err(HullError::DegenerateSeed(Degeneracy::Coplanar));
        }
        return Ok([0, 1, 2, 3]);
    }

    let extremes = find_extreme_points(points);

    // Farthest pair among the axis extremes becomes the base segment.
    let mut best = [0usize; 4];
    let mut max_d = f64::NEG_INFINITY;
    for i in 0..6 {
        for j in (i + 1)..6 {
            let d = points[extremes[i]].sub(&points[extremes[j]]).length_squared();
            if d > max_d {
                best[0] = extremes[i];
                best[1] = extremes[j];
                max_d = d;
            }
        }
    }
    if max_d <= PLANE_DIST_TOL {
        return Err(HullError::DegenerateSeed(Degeneracy::Coincident));
    }

    // Farthest point from the base line.
    let reference = points[best[0]];
    let line_dir = points[best[1]]
        .sub(&reference)
        .try_normalize()
        .ok_or(HullError::DegenerateSeed(Degeneracy::Coincident))?;

    let mut max_d = f64::NEG_INFINITY;
    for (pi, p) in points.iter().enumerate() {
        let to_point = p.sub(&reference);
        let rejection = to_point.sub(&line_dir.scale(line_dir.dot(&to_point)));
        let d = rejection.length_squared();
        if d > max_d {
            best[2] = pi;
            max_d = d;
        }
    }
    if max_d <= PLANE_DIST_TOL {
        return Err(HullError::DegenerateSeed(Degeneracy::Collinear));
    }

    // Farthest point from the base plane, on either side.
    let plane_normal = points[best[1]]
        .sub(&reference)
        .cross(&points[best[2]].sub(&reference))
        .try_normalize()
        .ok_or(HullError::DegenerateSeed(Degeneracy::Collinear))?;

    let mut max_d = f64::NEG_INFINITY;
    for (pi, p) in points.iter().enumerate() {
        let d = plane_normal.dot(&p.sub(&reference)).abs();
        if d > max_d {
            best[3] = pi;
            max_d = d;
        }
    }
    if max_d <= PLANE_DIST_TOL {
        return Err(HullError::DegenerateSeed(Degeneracy::Coplanar));
    }

    Ok(best)
}

/// Build the seed tetrahedron mesh and the initial exterior-point set.
///
/// The exterior set keeps only the points that are strictly outside at
/// least one seed face; simplex vertices and already-enclosed points are
/// pruned up front.
pub(crate) fn build_seed(points: &[Vertex]) -> Result<(HullMesh<'_>, BTreeSet<usize>)> {
    let simplex = choose_simplex(points)?;

    let centroid = points[simplex[0]]
        .add(&points[simplex[1]])
        .add(&points[simplex[2]])
        .add(&points[simplex[3]])
        .scale(0.25);

    let mut mesh = HullMesh::new(points, centroid);
    let seed_faces = [
        mesh.add_face(simplex[0], simplex[1], simplex[2])?,
        mesh.add_face(simplex[0], simplex[2], simplex[3])?,
        mesh.add_face(simplex[1], simplex[2], simplex[3])?,
        mesh.add_face(simplex[0], simplex[1], simplex[3])?,
    ];

    let mut exterior = BTreeSet::new();
    'points: for (pi, p) in points.iter().enumerate() {
        for face in &seed_faces {
            if face.contains_vertex(pi) {
                continue 'points;
            }
            if mesh.visible(face, p) {
                exterior.insert(pi);
                continue 'points;
            }
        }
    }

    log::debug!(
        "seed simplex {:?} chosen, {} of {} points remain exterior",
        simplex,
        exterior.len(),
        points.len()
    );

    Ok((mesh, exterior))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    #[test]
    fn test_four_coplanar_points_fail() {
        let points = vec![
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(0.0, 1.0, 0.0),
            Vertex::new(1.0, 1.0, 0.0),
        ];
        let err = build_seed(&points).unwrap_err();
        assert!(matches!(
            err,
            HullError::DegenerateSeed(Degeneracy::Coplanar)
        ));
    }

    #[test]
    fn test_coincident_points_fail() {
        let points = vec![Vertex::new(2.0, -1.0, 3.0); 6];
        let err = build_seed(&points).unwrap_err();
        assert!(matches!(
            err,
            HullError::DegenerateSeed(Degeneracy::Coincident)
        ));
    }

    #[test]
    fn test_collinear_points_fail() {
        let points: Vec<Vertex> = (0..8)
            .map(|i| Vertex::new(i as f64, 2.0 * i as f64, -i as f64))
            .collect();
        let err = build_seed(&points).unwrap_err();
        assert!(matches!(
            err,
            HullError::DegenerateSeed(Degeneracy::Collinear)
        ));
    }

    #[test]
    fn test_many_coplanar_points_fail() {
        let points: Vec<Vertex> = (0..5)
            .flat_map(|i| (0..5).map(move |j| Vertex::new(i as f64, j as f64, 0.0)))
            .collect();
        let err = build_seed(&points).unwrap_err();
        assert!(matches!(
            err,
            HullError::DegenerateSeed(Degeneracy::Coplanar)
        ));
    }

    #[test]
    fn test_cube_seed() {
        let points = testdata::cube_vertices(2.0);
        let (mesh, exterior) = build_seed(&points).unwrap();

        assert_eq!(mesh.num_faces(), 4);
        // The four remaining cube corners are all strictly outside the seed.
        assert_eq!(exterior.len(), 4);
    }
}
