// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Convex polyhedra described by vertices and face loops

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::triangulation::calculate_polygon_normal;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Ordered cycle of vertex indices bounding one planar face
pub type Face = SmallVec<[usize; 4]>;

/// Immutable polyhedron: vertex list plus face loops
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Face>,
}

#[inline]
fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

impl Polyhedron {
    /// Create a polyhedron from raw vertices and faces
    ///
    /// Every face needs at least 3 indices, all within the vertex list.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Result<Self> {
        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(Error::InvalidFace {
                    face: face_idx,
                    reason: format!("needs at least 3 vertices, has {}", face.len()),
                });
            }
            if let Some(&bad) = face.iter().find(|&&i| i >= vertices.len()) {
                return Err(Error::InvalidFace {
                    face: face_idx,
                    reason: format!(
                        "vertex index {} out of range ({} vertices)",
                        bad,
                        vertices.len()
                    ),
                });
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Tetrahedron with edge coefficient `c`
    ///
    /// Base triangle in the z = 0 plane, apex at (c/2, sqrt(3)c/5, sqrt(3)c/2).
    /// The apex is not the centroid-above position, so the solid is not
    /// regular for any c.
    pub fn tetrahedron(coefficient: f64) -> Result<Self> {
        check_positive("coefficient", coefficient)?;

        let c = coefficient;
        let s3 = 3f64.sqrt();
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(c, 0.0, 0.0),
            Point3::new(c / 2.0, s3 * c / 2.0, 0.0),
            Point3::new(c / 2.0, s3 * c / 5.0, s3 * c / 2.0),
        ];
        let faces = vec![
            smallvec![0, 1, 2],
            smallvec![1, 2, 3],
            smallvec![2, 0, 3],
            smallvec![0, 1, 3],
        ];

        Ok(Self { vertices, faces })
    }

    /// Axis-aligned box with one corner at the origin
    pub fn cuboid(length: f64, width: f64, height: f64) -> Result<Self> {
        check_positive("length", length)?;
        check_positive("width", width)?;
        check_positive("height", height)?;

        let (l, w, h) = (length, width, height);
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(l, 0.0, 0.0),
            Point3::new(l, w, 0.0),
            Point3::new(0.0, w, 0.0),
            Point3::new(0.0, 0.0, h),
            Point3::new(l, 0.0, h),
            Point3::new(l, w, h),
            Point3::new(0.0, w, h),
        ];
        let faces = vec![
            smallvec![0, 1, 2, 3],
            smallvec![4, 5, 6, 7],
            smallvec![0, 1, 5, 4],
            smallvec![1, 2, 6, 5],
            smallvec![2, 3, 7, 6],
            smallvec![3, 0, 4, 7],
        ];

        Ok(Self { vertices, faces })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Boundary edges of one face, last vertex wrapping to the first
    pub fn face_edges<'a>(
        &'a self,
        face: &'a Face,
    ) -> impl Iterator<Item = (&'a Point3<f64>, &'a Point3<f64>)> + 'a {
        let n = face.len();
        (0..n).map(move |i| (&self.vertices[face[i]], &self.vertices[face[(i + 1) % n]]))
    }

    /// All face edges in face-then-edge order
    ///
    /// Edges shared by two faces are yielded once per face.
    pub fn edges(&self) -> impl Iterator<Item = (&Point3<f64>, &Point3<f64>)> + '_ {
        self.faces.iter().flat_map(move |face| self.face_edges(face))
    }

    /// Fan-triangulated surface with one flat normal per face
    pub fn to_mesh(&self) -> Mesh {
        let vertex_total: usize = self.faces.iter().map(|f| f.len()).sum();
        let index_total: usize = self.faces.iter().map(|f| (f.len() - 2) * 3).sum();
        let mut mesh = Mesh::with_capacity(vertex_total, index_total);

        for face in &self.faces {
            let loop_points: Vec<Point3<f64>> = face.iter().map(|&i| self.vertices[i]).collect();
            let normal = calculate_polygon_normal(&loop_points);

            let fan: Vec<usize> = (1..loop_points.len() - 1)
                .flat_map(|i| [0, i, i + 1])
                .collect();

            let mut face_mesh = Mesh::with_capacity(loop_points.len(), fan.len());
            face_mesh.add_polygon(&loop_points, normal, &fan);
            mesh.merge(&face_mesh);
        }

        mesh
    }
}

/// Serializable description of a supported solid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SolidShape {
    Tetrahedron {
        coefficient: f64,
    },
    #[serde(rename = "box")]
    Cuboid {
        length: f64,
        width: f64,
        height: f64,
    },
}

impl SolidShape {
    /// Build the polyhedron this description names
    pub fn build(&self) -> Result<Polyhedron> {
        match *self {
            SolidShape::Tetrahedron { coefficient } => Polyhedron::tetrahedron(coefficient),
            SolidShape::Cuboid {
                length,
                width,
                height,
            } => Polyhedron::cuboid(length, width, height),
        }
    }

    /// Short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SolidShape::Tetrahedron { .. } => "tetrahedron",
            SolidShape::Cuboid { .. } => "box",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tetrahedron_vertices() {
        let tetra = Polyhedron::tetrahedron(2.0).unwrap();
        let v = tetra.vertices();
        let s3 = 3f64.sqrt();

        assert_eq!(v.len(), 4);
        assert_eq!(v[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(v[1], Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(v[2].x, 1.0);
        assert_relative_eq!(v[2].y, s3);
        assert_relative_eq!(v[2].z, 0.0);
        // Apex keeps the divisor 5 on y
        assert_relative_eq!(v[3].x, 1.0);
        assert_relative_eq!(v[3].y, 2.0 * s3 / 5.0);
        assert_relative_eq!(v[3].z, s3);
    }

    #[test]
    fn test_tetrahedron_faces() {
        let tetra = Polyhedron::tetrahedron(1.0).unwrap();
        let faces: Vec<Vec<usize>> = tetra.faces().iter().map(|f| f.to_vec()).collect();
        assert_eq!(
            faces,
            vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 0, 3], vec![0, 1, 3]]
        );
        assert_eq!(tetra.edges().count(), 12);
    }

    #[test]
    fn test_cuboid_layout() {
        let cuboid = Polyhedron::cuboid(3.0, 2.0, 1.0).unwrap();
        assert_eq!(cuboid.vertices().len(), 8);
        assert_eq!(cuboid.vertices()[6], Point3::new(3.0, 2.0, 1.0));
        assert_eq!(cuboid.faces().len(), 6);
        assert_eq!(cuboid.faces()[5].as_slice(), &[3, 0, 4, 7]);
        assert_eq!(cuboid.edges().count(), 24);
    }

    #[test]
    fn test_face_edges_wrap_around() {
        let cuboid = Polyhedron::cuboid(1.0, 1.0, 1.0).unwrap();
        let top = &cuboid.faces()[1];
        let edges: Vec<_> = cuboid.face_edges(top).collect();

        assert_eq!(edges.len(), 4);
        assert_eq!(*edges[3].0, Point3::new(0.0, 1.0, 1.0));
        assert_eq!(*edges[3].1, Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        assert_eq!(
            Polyhedron::tetrahedron(0.0),
            Err(Error::InvalidParameter {
                name: "coefficient",
                value: 0.0
            })
        );
        assert!(matches!(
            Polyhedron::cuboid(1.0, -2.0, 1.0),
            Err(Error::InvalidParameter { name: "width", .. })
        ));
        assert!(Polyhedron::cuboid(1.0, 1.0, f64::INFINITY).is_err());
        assert!(Polyhedron::tetrahedron(f64::NAN).is_err());
    }

    #[test]
    fn test_new_validates_faces() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];

        assert!(Polyhedron::new(vertices.clone(), vec![smallvec![0, 1, 2]]).is_ok());
        assert!(matches!(
            Polyhedron::new(vertices.clone(), vec![smallvec![0, 1]]),
            Err(Error::InvalidFace { face: 0, .. })
        ));
        assert!(matches!(
            Polyhedron::new(vertices, vec![smallvec![0, 1, 2], smallvec![0, 1, 7]]),
            Err(Error::InvalidFace { face: 1, .. })
        ));
    }

    #[test]
    fn test_to_mesh() {
        let cuboid = Polyhedron::cuboid(2.0, 2.0, 2.0).unwrap();
        let mesh = cuboid.to_mesh();

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(2.0, 2.0, 2.0));

        let tetra = Polyhedron::tetrahedron(1.0).unwrap().to_mesh();
        assert_eq!(tetra.triangle_count(), 4);
    }

    #[test]
    fn test_solid_shape_serde() {
        let shape: SolidShape =
            serde_json::from_str(r#"{"type":"box","length":1,"width":2,"height":3}"#).unwrap();
        assert_eq!(
            shape,
            SolidShape::Cuboid {
                length: 1.0,
                width: 2.0,
                height: 3.0
            }
        );
        assert_eq!(shape.name(), "box");

        let json = serde_json::to_string(&SolidShape::Tetrahedron { coefficient: 1.5 }).unwrap();
        assert_eq!(json, r#"{"type":"tetrahedron","coefficient":1.5}"#);
    }

    #[test]
    fn test_solid_shape_build() {
        let tetra = SolidShape::Tetrahedron { coefficient: 1.0 }.build().unwrap();
        assert_eq!(tetra.vertices().len(), 4);

        let err = SolidShape::Cuboid {
            length: 1.0,
            width: 1.0,
            height: 0.0,
        }
        .build();
        assert!(matches!(
            err,
            Err(Error::InvalidParameter { name: "height", .. })
        ));
    }
}
