//! Mesh topology store for the hull under construction.
//!
//! Faces are kept in a map keyed by a monotonically increasing identifier
//! that is never reused after deletion, so a stale id can never alias a
//! newer face. A second map records, per undirected edge, the (at most two)
//! faces bordering it; a closed hull mesh violating that bound is an
//! internal defect, not an input problem.

use std::collections::HashMap;

use crate::types::{Face, Vertex};
use crate::{HullError, PLANE_DIST_TOL, Result};

/// Identifier of a face in the hull mesh. Allocated from a counter that
/// only moves forward; deleted ids stay dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct FaceId(u64);

/// An oriented hull triangle with its cached outward unit normal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HullFace {
    pub id: FaceId,
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub normal: Vertex,
}

impl HullFace {
    /// Reverse the winding and the normal
    fn flip(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
        self.normal = self.normal.scale(-1.0);
    }

    /// The three undirected edges of this face
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Check whether `vi` is one of this face's vertices
    pub fn contains_vertex(&self, vi: usize) -> bool {
        vi == self.a || vi == self.b || vi == self.c
    }
}

/// An undirected edge between two point indices, stored normalized so it
/// hashes the same regardless of direction. Used only as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Edge {
    pub p: usize,
    pub q: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self { p: u, q: v }
        } else {
            Self { p: v, q: u }
        }
    }
}

/// The faces currently bordering an edge: at most two on a valid mesh.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeFaces([Option<FaceId>; 2]);

impl EdgeFaces {
    /// Record a bordering face; `false` when both slots are taken.
    fn add(&mut self, id: FaceId) -> bool {
        for slot in &mut self.0 {
            if slot.is_none() {
                *slot = Some(id);
                return true;
            }
        }
        false
    }

    /// Drop a bordering face; `false` when the entry did not reference it.
    fn remove(&mut self, id: FaceId) -> bool {
        for slot in &mut self.0 {
            if *slot == Some(id) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// The remaining bordering face, if any
    fn other(&self) -> Option<FaceId> {
        self.0.iter().flatten().next().copied()
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// The mutable hull state: face map, edge adjacency, and the interior
/// reference point every face is oriented against.
#[derive(Debug)]
pub(crate) struct HullMesh<'a> {
    points: &'a [Vertex],
    center: Vertex,
    faces: HashMap<FaceId, HullFace>,
    edge_faces: HashMap<Edge, EdgeFaces>,
    next_id: u64,
}

impl<'a> HullMesh<'a> {
    /// Create an empty mesh over `points`, oriented against `center`
    /// (the centroid of the seed simplex, interior to the hull).
    pub fn new(points: &'a [Vertex], center: Vertex) -> Self {
        Self {
            points,
            center,
            faces: HashMap::new(),
            edge_faces: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn points(&self) -> &'a [Vertex] {
        self.points
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, id: FaceId) -> Option<&HullFace> {
        self.faces.get(&id)
    }

    /// Ids of all current faces in ascending order
    pub fn face_ids(&self) -> Vec<FaceId> {
        let mut ids: Vec<FaceId> = self.faces.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The faces currently bordering `edge`, if the edge is known.
    ///
    /// Outside of tests the only consumer of this lookup is [`Self::pop_face`],
    /// which needs it combined with removal; hence the test gate.
    #[cfg(test)]
    pub fn edge_faces(&self, edge: Edge) -> Option<[Option<FaceId>; 2]> {
        self.edge_faces.get(&edge).map(|ef| ef.0)
    }

    /// Signed distance of `p` to the plane of `face`; positive is outside.
    pub fn plane_distance(&self, face: &HullFace, p: &Vertex) -> f64 {
        p.sub(&self.points[face.a]).dot(&face.normal)
    }

    /// Whether `face` is visible from `p`, i.e. `p` lies strictly beyond
    /// its plane.
    pub fn visible(&self, face: &HullFace, p: &Vertex) -> bool {
        self.plane_distance(face, p) > PLANE_DIST_TOL
    }

    /// Insert a new face over the given vertices, oriented outward.
    ///
    /// The normal is computed from the two edge vectors at `a`; if the
    /// interior reference point ends up on the outward side, the face is
    /// flipped before insertion. Registering a third face on any edge is a
    /// fatal internal error.
    pub fn add_face(&mut self, a: usize, b: usize, c: usize) -> Result<HullFace> {
        let normal = self.points[b]
            .sub(&self.points[a])
            .cross(&self.points[c].sub(&self.points[a]))
            .try_normalize()
            .ok_or_else(|| {
                HullError::InternalTopology(format!(
                    "face ({a}, {b}, {c}) has no well-defined normal"
                ))
            })?;

        let id = FaceId(self.next_id);
        self.next_id += 1;

        let mut face = HullFace { id, a, b, c, normal };
        if self.visible(&face, &self.center) {
            face.flip();
        }

        for edge in face.edges() {
            if !self.edge_faces.entry(edge).or_default().add(id) {
                log::error!(
                    "edge ({}, {}) already borders two faces while inserting face {:?}",
                    edge.p,
                    edge.q,
                    id
                );
                return Err(HullError::InternalTopology(format!(
                    "edge ({}, {}) already borders two faces",
                    edge.p, edge.q
                )));
            }
        }

        self.faces.insert(id, face);
        Ok(face)
    }

    /// Remove a face by id, unlinking it from the edge adjacency.
    ///
    /// Returns the removed face and, per edge, the edge itself and the face
    /// still bordering it from the other side (absent when the neighbor was
    /// already removed). Returns `None` when the id no longer names a face.
    pub fn pop_face(&mut self, id: FaceId) -> Option<(HullFace, [(Edge, Option<HullFace>); 3])> {
        let face = self.faces.remove(&id)?;

        let edges = face.edges();
        let mut neighbors = [(edges[0], None), (edges[1], None), (edges[2], None)];

        for (i, edge) in edges.into_iter().enumerate() {
            let mut neighbor_id = None;
            let mut entry_empty = false;
            if let Some(entry) = self.edge_faces.get_mut(&edge) {
                if entry.remove(id) {
                    neighbor_id = entry.other();
                    entry_empty = entry.is_empty();
                }
            }
            if entry_empty {
                self.edge_faces.remove(&edge);
            }
            neighbors[i].1 = neighbor_id.and_then(|nid| self.faces.get(&nid).copied());
        }

        Some((face, neighbors))
    }

    /// Snapshot the current faces as output triangles, in ascending id
    /// order so repeated runs produce identical output.
    pub fn to_triangles(&self) -> Vec<Face> {
        self.face_ids()
            .into_iter()
            .filter_map(|id| self.faces.get(&id))
            .map(|f| Face::new(f.a, f.b, f.c))
            .collect()
    }
}
