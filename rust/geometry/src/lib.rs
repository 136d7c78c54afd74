// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid-Section Geometry
//!
//! Plane sections of convex solids: polyhedron builders, cutting planes
//! through three points, edge intersection and degeneracy handling, with
//! earcutr triangulation of the reconstructed section polygon.

pub mod constants;
pub mod coords;
pub mod error;
pub mod intersect;
pub mod mesh;
pub mod plane;
pub mod polyhedron;
pub mod section;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use coords::{from_user_order, to_arrays, to_user_order};
pub use error::{Error, Result, SectionError};
pub use intersect::EdgeIntersector;
pub use mesh::Mesh;
pub use plane::{classify_axis_perpendicular, collinear, AxisAlignment, CuttingPlane};
pub use polyhedron::{Face, Polyhedron, SolidShape};
pub use section::{Section, SectionConfig, SectionEngine, SectionResolver};
