//! Export functions for convex hulls

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::types::ConvexHull3D;

/// Export a convex hull to Wavefront OBJ format.
///
/// Writes vertices (`v`), per-face normals (`vn`), and faces (`f`) with
/// OBJ's 1-based indexing.
pub fn export_obj<P: AsRef<Path>>(hull: &ConvexHull3D, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "# Convex Hull OBJ Export")?;
    writeln!(file, "# Vertices: {}", hull.num_vertices())?;
    writeln!(file, "# Faces: {}", hull.num_faces())?;
    writeln!(file)?;

    for vertex in hull.vertices() {
        writeln!(file, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
    }

    writeln!(file)?;

    for face in hull.faces() {
        let normal = face.normal(hull.vertices());
        writeln!(file, "vn {} {} {}", normal.x, normal.y, normal.z)?;
    }

    writeln!(file)?;

    for (i, face) in hull.faces().iter().enumerate() {
        writeln!(
            file,
            "f {}//{} {}//{} {}//{}",
            face.a + 1,
            i + 1,
            face.b + 1,
            i + 1,
            face.c + 1,
            i + 1
        )?;
    }

    Ok(())
}
