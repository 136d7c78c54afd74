// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane/edge intersection
//!
//! Every face is walked independently, so an edge shared by two faces is
//! tested twice and its intersection point appears twice in the output.

use crate::constants::INTERSECTION_EPSILON;
use crate::plane::CuttingPlane;
use crate::polyhedron::Polyhedron;
use nalgebra::Point3;
use tracing::trace;

/// Intersects cutting planes with polyhedron edges
#[derive(Debug, Clone, Copy)]
pub struct EdgeIntersector {
    /// Edges whose direction has at most this component along the normal
    /// count as parallel to the plane
    pub epsilon: f64,
}

impl EdgeIntersector {
    /// Create a new intersector with the default tolerance
    pub fn new() -> Self {
        Self {
            epsilon: INTERSECTION_EPSILON,
        }
    }

    /// Create an intersector with a custom tolerance
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Intersect the segment p1-p2 with a plane
    ///
    /// Parallel edges yield nothing, including edges lying inside the plane.
    pub fn intersect_edge(
        &self,
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        plane: &CuttingPlane,
    ) -> Option<Point3<f64>> {
        let direction = p2 - p1;
        let denom = plane.normal.dot(&direction);

        if denom.abs() <= self.epsilon {
            return None;
        }

        let t = -(plane.normal.dot(&p1.coords) + plane.d) / denom;

        if (0.0..=1.0).contains(&t) {
            Some(p1 + direction * t)
        } else {
            None
        }
    }

    /// Intersect a plane with every face edge of a polyhedron
    ///
    /// Output follows face-then-edge traversal order and keeps duplicates.
    pub fn intersect(&self, polyhedron: &Polyhedron, plane: &CuttingPlane) -> Vec<Point3<f64>> {
        let mut points = Vec::new();

        for (face_idx, face) in polyhedron.faces().iter().enumerate() {
            let before = points.len();
            points.extend(
                polyhedron
                    .face_edges(face)
                    .filter_map(|(a, b)| self.intersect_edge(a, b, plane)),
            );
            trace!(face = face_idx, hits = points.len() - before, "face intersected");
        }

        points
    }
}

impl Default for EdgeIntersector {
    fn default() -> Self {
        Self::new()
    }
}
