// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end section scenarios on the two supported solids.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use solid_section_geometry::{
    from_user_order, AxisAlignment, Point3, Polyhedron, SectionEngine, SectionError, SolidShape,
};

#[test]
fn test_box_cut_at_half_height() {
    let cuboid = Polyhedron::cuboid(2.0, 2.0, 2.0).unwrap();
    let section = SectionEngine::new()
        .compute(
            &cuboid,
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(2.0, 0.0, 1.0),
            &Point3::new(0.0, 2.0, 1.0),
        )
        .unwrap();

    assert_eq!(section.alignment(), AxisAlignment::PerpendicularToXY);
    for p in section.points() {
        // Only z carries noise, sigma = 0.001
        assert!((p.z - 1.0).abs() < 0.01);
        assert!(p.x == 0.0 || p.x == 2.0);
        assert!(p.y == 0.0 || p.y == 2.0);
    }

    let mut corners: Vec<(i64, i64)> = section
        .points()
        .iter()
        .map(|p| (p.x as i64, p.y as i64))
        .collect();
    corners.sort();
    corners.dedup();
    assert_eq!(corners, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
}

#[test]
fn test_tetrahedron_far_plane_has_no_intersection() {
    let tetra = Polyhedron::tetrahedron(1.0).unwrap();
    let result = SectionEngine::new().compute(
        &tetra,
        &Point3::new(0.0, 0.0, 100.0),
        &Point3::new(1.0, 0.0, 100.0),
        &Point3::new(0.0, 1.0, 100.0),
    );
    assert_eq!(result, Err(SectionError::NoIntersection));
}

#[test]
fn test_plane_touching_one_edge_is_insufficient() {
    // y + z = 0 only touches the cube along the edge from (0,0,0) to (1,0,0)
    let cuboid = Polyhedron::cuboid(1.0, 1.0, 1.0).unwrap();
    let result = SectionEngine::new().compute(
        &cuboid,
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, -1.0, 1.0),
    );
    assert_eq!(result, Err(SectionError::InsufficientPoints { unique: 2 }));
}

#[test]
fn test_oblique_section_is_reproducible() {
    let tetra = Polyhedron::tetrahedron(3.0).unwrap();
    let engine = SectionEngine::new();
    let (p1, p2, p3) = (
        Point3::new(0.2, 0.1, 0.3),
        Point3::new(2.0, 0.4, 0.9),
        Point3::new(1.0, 2.0, 0.5),
    );

    let first = engine.compute(&tetra, &p1, &p2, &p3).unwrap();
    let second = engine.compute(&tetra, &p1, &p2, &p3).unwrap();

    assert_eq!(first.alignment(), AxisAlignment::None);
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_perturbation_draws_fresh_noise() {
    let cuboid = Polyhedron::cuboid(2.0, 2.0, 2.0).unwrap();
    let engine = SectionEngine::new();
    let (a, b, c) = (
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(2.0, 0.0, 1.0),
        Point3::new(0.0, 2.0, 1.0),
    );

    let first = engine.compute(&cuboid, &a, &b, &c).unwrap();
    let second = engine.compute(&cuboid, &a, &b, &c).unwrap();

    assert_eq!(first.points().len(), second.points().len());
    assert_ne!(first.points(), second.points());
}

#[test]
fn test_seeded_perturbation_is_reproducible() {
    let cuboid = Polyhedron::cuboid(1.0, 1.0, 1.0).unwrap();
    let engine = SectionEngine::new();
    let (p1, p2, p3) = (
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(0.5, 1.0, 0.0),
        Point3::new(0.5, 0.0, 1.0),
    );

    let a = engine
        .compute_with_rng(&cuboid, &p1, &p2, &p3, &mut StdRng::seed_from_u64(3))
        .unwrap();
    let b = engine
        .compute_with_rng(&cuboid, &p1, &p2, &p3, &mut StdRng::seed_from_u64(3))
        .unwrap();

    assert_eq!(a.alignment(), AxisAlignment::PerpendicularToYZ);
    assert_eq!(a, b);
}

#[test]
fn test_user_order_points_from_request() {
    // User types X Y Z; the engine sees (Y, X, Z)
    let solid = SolidShape::Cuboid {
        length: 4.0,
        width: 1.0,
        height: 1.0,
    };
    let cuboid = solid.build().unwrap();

    // User plane X = 0.5 becomes internal y = 0.5, which cuts the box
    let p1 = from_user_order([0.5, 0.0, 0.0]);
    let p2 = from_user_order([0.5, 1.0, 0.0]);
    let p3 = from_user_order([0.5, 0.0, 1.0]);
    let section = SectionEngine::new().compute(&cuboid, &p1, &p2, &p3).unwrap();

    assert_eq!(section.alignment(), AxisAlignment::PerpendicularToXZ);
    for p in section.points() {
        assert_relative_eq!(p.y, 0.5, epsilon = 0.01);
    }
}

#[test]
fn test_section_surface_of_box_diagonal() {
    let cuboid = Polyhedron::cuboid(2.0, 2.0, 2.0).unwrap();
    // Plane through the diagonal x = y contains two vertical edges
    let section = SectionEngine::new()
        .compute(
            &cuboid,
            &Point3::new(0.0, 0.0, 0.5),
            &Point3::new(2.0, 2.0, 0.5),
            &Point3::new(1.0, 1.0, 1.5),
        )
        .unwrap();

    assert_eq!(section.alignment(), AxisAlignment::None);
    let mesh = section.surface().unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
}
