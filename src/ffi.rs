//! C-compatible boundary.
//!
//! The entry point takes a flat `3 * n_pts` coordinate array and hands back
//! a flat `3 * n_faces` triangle-index array. The index buffer is allocated
//! on this side of the boundary; after a successful call the caller owns it
//! and must release it through [`hull3d_free_faces`] — no other deallocation
//! path is valid, and nothing is reclaimed automatically.

use std::ptr;
use std::slice;

use crate::types::Vertex;
use crate::{ConvexHull3D, HullError};

/// Construction succeeded.
pub const HULL3D_OK: i32 = 0;
/// A required pointer argument was null.
pub const HULL3D_NULL_ARGUMENT: i32 = -1;
/// Fewer than 4 input points.
pub const HULL3D_INSUFFICIENT_POINTS: i32 = -2;
/// Input points are coincident, collinear, or coplanar.
pub const HULL3D_DEGENERATE_SEED: i32 = -3;
/// The mesh bookkeeping detected an internal inconsistency.
pub const HULL3D_INTERNAL_TOPOLOGY: i32 = -4;

/// Compute the convex hull of `n_pts` points given as `3 * n_pts` interleaved
/// `x, y, z` coordinates.
///
/// On success writes a newly allocated `3 * n_faces` vertex-index buffer to
/// `*out_faces`, its face count to `*out_n_faces`, and returns [`HULL3D_OK`].
/// On failure both outputs are zeroed and a negative status is returned.
///
/// # Safety
///
/// `coords` must point to `3 * n_pts` readable `f64` values, and `out_faces`
/// and `out_n_faces` must be valid for writes. The buffer written to
/// `*out_faces` is owned by the caller afterwards and must be released with
/// [`hull3d_free_faces`], passing back the face count unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hull3d_build(
    coords: *const f64,
    n_pts: usize,
    out_faces: *mut *mut i32,
    out_n_faces: *mut usize,
) -> i32 {
    if coords.is_null() || out_faces.is_null() || out_n_faces.is_null() {
        return HULL3D_NULL_ARGUMENT;
    }

    unsafe {
        *out_faces = ptr::null_mut();
        *out_n_faces = 0;
    }

    let coords = unsafe { slice::from_raw_parts(coords, 3 * n_pts) };
    let points: Vec<Vertex> = coords
        .chunks_exact(3)
        .map(|c| Vertex::new(c[0], c[1], c[2]))
        .collect();

    match ConvexHull3D::build(&points) {
        Ok(hull) => {
            let indices = hull.flat_indices().into_boxed_slice();
            unsafe {
                *out_n_faces = hull.num_faces();
                *out_faces = Box::into_raw(indices) as *mut i32;
            }
            HULL3D_OK
        }
        Err(HullError::InsufficientPoints) => HULL3D_INSUFFICIENT_POINTS,
        Err(HullError::DegenerateSeed(_)) => HULL3D_DEGENERATE_SEED,
        Err(HullError::InternalTopology(_)) => HULL3D_INTERNAL_TOPOLOGY,
    }
}

/// Release a face-index buffer produced by [`hull3d_build`].
///
/// # Safety
///
/// `faces` must be a pointer previously written by a successful
/// [`hull3d_build`] call and `n_faces` the face count reported alongside it;
/// the pair must not be freed twice. A null `faces` is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hull3d_free_faces(faces: *mut i32, n_faces: usize) {
    if faces.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
            faces,
            3 * n_faces,
        )));
    }
}
