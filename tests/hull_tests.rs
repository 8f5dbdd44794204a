//! Integration tests for convex hull construction
//!
//! These exercise the hull's structural guarantees (closed manifold
//! topology, containment of the input, deterministic measures) plus the
//! documented failure modes and the C boundary.

use std::collections::{HashMap, HashSet};

use hull3d::{ConvexHull3D, Degeneracy, HullError, Vertex, export, testdata};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert the hull is a closed manifold triangulation: every edge borders
/// exactly two faces and Euler's formula V - E + F = 2 holds over the
/// vertices the faces actually reference.
fn assert_closed_manifold(hull: &ConvexHull3D) {
    let mut edge_uses: HashMap<(usize, usize), usize> = HashMap::new();
    let mut used_vertices: HashSet<usize> = HashSet::new();

    for face in hull.faces() {
        let [a, b, c] = face.indices();
        for &(u, v) in &[(a, b), (b, c), (c, a)] {
            let key = (u.min(v), u.max(v));
            *edge_uses.entry(key).or_insert(0) += 1;
        }
        used_vertices.extend([a, b, c]);
    }

    for (edge, count) in &edge_uses {
        assert_eq!(
            *count, 2,
            "edge {edge:?} borders {count} faces instead of 2"
        );
    }

    let v = used_vertices.len() as i64;
    let e = edge_uses.len() as i64;
    let f = hull.num_faces() as i64;
    assert_eq!(v - e + f, 2, "Euler characteristic violated: V={v} E={e} F={f}");
}

/// Assert no input point lies strictly outside any hull face plane.
fn assert_contains_all_points(hull: &ConvexHull3D, slack: f64) {
    for face in hull.faces() {
        let normal = face.normal(hull.vertices());
        let base = hull.vertices()[face.a];
        for (pi, p) in hull.vertices().iter().enumerate() {
            let dist = p.sub(&base).dot(&normal);
            assert!(
                dist <= slack,
                "point {pi} is {dist} outside face ({}, {}, {})",
                face.a,
                face.b,
                face.c
            );
        }
    }
}

fn assert_faces_reference_valid_indices(hull: &ConvexHull3D) {
    let n = hull.num_vertices();
    for face in hull.faces() {
        let [a, b, c] = face.indices();
        assert!(a < n && b < n && c < n, "face index out of range");
        assert!(a != b && b != c && a != c, "face with repeated vertex");
    }
}

#[test]
fn test_cube_is_triangulated_into_twelve_faces() {
    init_logging();
    let points = testdata::cube_vertices(2.0);
    let hull = ConvexHull3D::build(&points).unwrap();

    assert_eq!(hull.num_faces(), 12);
    assert_closed_manifold(&hull);
    assert_contains_all_points(&hull, 1e-8);
    assert_faces_reference_valid_indices(&hull);

    // All 8 corners are hull vertices.
    let used: HashSet<usize> = hull.faces().iter().flat_map(|f| f.indices()).collect();
    assert_eq!(used.len(), 8);

    assert!((hull.volume() - 8.0).abs() < 1e-9);
    assert!((hull.surface_area() - 24.0).abs() < 1e-9);
}

#[test]
fn test_octahedron_and_icosahedron() {
    init_logging();
    let hull = ConvexHull3D::build(&testdata::octahedron_vertices()).unwrap();
    assert_eq!(hull.num_faces(), 8);
    assert_closed_manifold(&hull);

    let hull = ConvexHull3D::build(&testdata::icosahedron_vertices()).unwrap();
    assert_eq!(hull.num_faces(), 20);
    assert_closed_manifold(&hull);
    assert_contains_all_points(&hull, 1e-8);
}

#[test]
fn test_sphere_hull_properties() {
    init_logging();
    let points = testdata::fibonacci_sphere_points(500, 1.0);
    let hull = ConvexHull3D::build(&points).unwrap();

    assert_closed_manifold(&hull);
    assert_contains_all_points(&hull, 1e-8);
    assert_faces_reference_valid_indices(&hull);

    // The hull of 500 well-separated sphere points keeps them all.
    let used: HashSet<usize> = hull.faces().iter().flat_map(|f| f.indices()).collect();
    assert_eq!(used.len(), 500);
}

#[test]
fn test_random_sphere_hull_is_closed() {
    init_logging();
    let points = testdata::random_sphere_points(936, 1.0);
    let hull = ConvexHull3D::build(&points).unwrap();

    assert_closed_manifold(&hull);
    assert_contains_all_points(&hull, 1e-8);
}

#[test]
fn test_interior_points_never_appear_in_output() {
    init_logging();
    let points = testdata::cube_with_interior_points(2.0, 200);
    let hull = ConvexHull3D::build(&points).unwrap();

    assert_closed_manifold(&hull);
    assert_contains_all_points(&hull, 1e-8);
}

#[test]
fn test_tetrahedron_with_centroid_point() {
    init_logging();
    let mut points = testdata::tetrahedron_vertices();
    let centroid = points[0]
        .add(&points[1])
        .add(&points[2])
        .add(&points[3])
        .scale(0.25);
    points.push(centroid);

    let hull = ConvexHull3D::build(&points).unwrap();
    assert_eq!(hull.num_faces(), 4);
    assert!(
        hull.faces().iter().all(|f| !f.contains(4)),
        "centroid point leaked into the hull"
    );
}

#[test]
fn test_repeated_runs_agree() {
    init_logging();
    let points = testdata::fibonacci_sphere_points(300, 1.5);

    let first = ConvexHull3D::build(&points).unwrap();
    let second = ConvexHull3D::build(&points).unwrap();

    assert!((first.volume() - second.volume()).abs() < 1e-12);
    assert!((first.surface_area() - second.surface_area()).abs() < 1e-12);
    assert_eq!(first.num_faces(), second.num_faces());
}

#[test]
fn test_coplanar_input_fails() {
    init_logging();
    let points = vec![
        Vertex::new(0.0, 0.0, 0.0),
        Vertex::new(1.0, 0.0, 0.0),
        Vertex::new(0.0, 1.0, 0.0),
        Vertex::new(1.0, 1.0, 0.0),
    ];
    let err = ConvexHull3D::build(&points).unwrap_err();
    assert!(matches!(
        err,
        HullError::DegenerateSeed(Degeneracy::Coplanar)
    ));
}

#[test]
fn test_insufficient_points_fail() {
    init_logging();
    let points = vec![
        Vertex::new(0.0, 0.0, 0.0),
        Vertex::new(1.0, 0.0, 0.0),
        Vertex::new(0.0, 1.0, 0.0),
    ];
    let err = ConvexHull3D::build(&points).unwrap_err();
    assert!(matches!(err, HullError::InsufficientPoints));
}

#[test]
fn test_obj_export() {
    init_logging();
    let hull = ConvexHull3D::build(&testdata::cube_vertices(2.0)).unwrap();

    let path = std::env::temp_dir().join("hull3d_cube_export_test.obj");
    export::export_obj(&hull, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(contents.lines().filter(|l| l.starts_with("f ")).count(), 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_ffi_round_trip() {
    init_logging();
    let points = testdata::fibonacci_sphere_points(64, 1.0);
    let coords: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();

    let mut faces: *mut i32 = std::ptr::null_mut();
    let mut n_faces: usize = 0;
    let status = unsafe {
        hull3d::ffi::hull3d_build(coords.as_ptr(), points.len(), &mut faces, &mut n_faces)
    };

    assert_eq!(status, hull3d::ffi::HULL3D_OK);
    assert!(n_faces >= 4);

    let indices = unsafe { std::slice::from_raw_parts(faces, 3 * n_faces) };
    assert!(indices.iter().all(|&i| (i as usize) < points.len()));

    unsafe { hull3d::ffi::hull3d_free_faces(faces, n_faces) };
}
