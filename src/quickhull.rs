//! Incremental hull expansion.
//!
//! The driver loop keeps a worklist of faces that may still have exterior
//! points. For each such face it finds the farthest exterior point, pops the
//! connected region of faces visible from that point (collecting the horizon
//! edges around the hole), caps the hole with new faces through the point,
//! and re-classifies the exterior points the removed region was responsible
//! for. The loop ends when no face has an exterior point beyond tolerance.
//!
//! Two invariants hold after every expansion step: the mesh is a closed,
//! outward-oriented manifold triangulation, and every index still in the
//! exterior set lies strictly outside the current boundary.

use std::collections::{BTreeSet, VecDeque};

use rayon::prelude::*;

use crate::mesh::{Edge, HullFace, HullMesh};
use crate::simplex;
use crate::types::{ConvexHull3D, Vertex};
use crate::{HullError, PLANE_DIST_TOL, Result};

/// Below this many exterior candidates the sequential scan wins.
const PARALLEL_THRESHOLD: usize = 256;

pub(crate) fn build_hull(points: &[Vertex]) -> Result<ConvexHull3D> {
    let (mesh, exterior) = expand_hull(points)?;

    log::debug!(
        "hull complete: {} faces, {} exterior points unresolved",
        mesh.num_faces(),
        exterior.len()
    );

    Ok(ConvexHull3D::new(points.to_vec(), mesh.to_triangles()))
}

/// Run the expansion loop to completion, returning the finished mesh and
/// the exterior set at termination (at most points within tolerance of
/// the final boundary remain in it).
fn expand_hull(points: &[Vertex]) -> Result<(HullMesh<'_>, BTreeSet<usize>)> {
    if points.len() < 4 {
        return Err(HullError::InsufficientPoints);
    }

    let (mut mesh, mut exterior) = simplex::build_seed(points)?;

    let mut pending: VecDeque<_> = mesh.face_ids().into();
    let mut region = VecDeque::new();
    let mut popped: Vec<HullFace> = Vec::new();
    let mut horizon: Vec<Edge> = Vec::new();
    let mut cap: Vec<HullFace> = Vec::new();

    while let Some(fid) = pending.pop_front() {
        // The face may have been removed by an earlier expansion, or may
        // have nothing beyond its plane anymore; either way it is final.
        let Some(face) = mesh.face(fid).copied() else {
            continue;
        };
        let Some(far_idx) = farthest_point(&mesh, &face, &exterior) else {
            continue;
        };
        let far = points[far_idx];

        // Pop the connected region visible from the far point. An edge whose
        // neighbor is not visible is a horizon edge; an edge with no
        // surviving neighbor is interior to the region and already handled
        // from its other side.
        region.clear();
        region.push_back(fid);
        popped.clear();
        horizon.clear();
        while let Some(rid) = region.pop_front() {
            let Some((removed, edge_neighbors)) = mesh.pop_face(rid) else {
                continue;
            };
            popped.push(removed);

            for (edge, neighbor) in edge_neighbors {
                match neighbor {
                    Some(n) if mesh.visible(&n, &far) => region.push_back(n.id),
                    Some(_) => horizon.push(edge),
                    None => {}
                }
            }
        }

        log::trace!(
            "expansion at point {far_idx}: {} faces popped, horizon of {} edges",
            popped.len(),
            horizon.len()
        );

        // Cap the hole: one new face per horizon edge, re-oriented outward
        // against the interior reference point by the mesh itself.
        cap.clear();
        for edge in &horizon {
            let new_face = mesh.add_face(far_idx, edge.p, edge.q)?;
            pending.push_back(new_face.id);
            cap.push(new_face);
        }

        update_exterior(&mesh, &mut exterior, &cap, &popped);
    }

    Ok((mesh, exterior))
}

/// The exterior point with the greatest positive signed distance to the
/// face's plane, excluding the face's own vertices. Ties keep the smallest
/// index; the parallel reduction applies the same rule so both paths agree.
fn farthest_point(mesh: &HullMesh<'_>, face: &HullFace, exterior: &BTreeSet<usize>) -> Option<usize> {
    let points = mesh.points();

    if exterior.len() >= PARALLEL_THRESHOLD {
        return exterior
            .par_iter()
            .filter(|&&pi| !face.contains_vertex(pi))
            .map(|&pi| (mesh.plane_distance(face, &points[pi]), pi))
            .filter(|&(d, _)| d > PLANE_DIST_TOL)
            .reduce_with(|a, b| {
                if a.0 > b.0 || (a.0 == b.0 && a.1 < b.1) {
                    a
                } else {
                    b
                }
            })
            .map(|(_, pi)| pi);
    }

    let mut best = None;
    let mut max_d = PLANE_DIST_TOL;
    for &pi in exterior {
        if face.contains_vertex(pi) {
            continue;
        }
        let d = mesh.plane_distance(face, &points[pi]);
        if d > max_d {
            max_d = d;
            best = Some(pi);
        }
    }
    best
}

/// Re-classify the exterior set after an expansion step.
///
/// Points that became vertices of the removed region are done. Points the
/// removed region could see are re-tested against the cap faces only: still
/// visible means still exterior, otherwise the point is now enclosed.
/// Points the region could not see keep their previous classification.
fn update_exterior(
    mesh: &HullMesh<'_>,
    exterior: &mut BTreeSet<usize>,
    cap: &[HullFace],
    popped: &[HullFace],
) {
    let points = mesh.points();
    let mut remove = Vec::new();
    let mut recheck = Vec::new();

    'points: for &pi in exterior.iter() {
        let p = &points[pi];
        for face in popped {
            if face.contains_vertex(pi) {
                remove.push(pi);
                continue 'points;
            }
            if mesh.visible(face, p) {
                recheck.push(pi);
                continue 'points;
            }
        }
    }

    for pi in recheck {
        if !cap.iter().any(|face| mesh.visible(face, &points[pi])) {
            remove.push(pi);
        }
    }

    for pi in remove {
        exterior.remove(&pi);
    }
}
