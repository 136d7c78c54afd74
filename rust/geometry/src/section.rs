// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane sections of polyhedra
//!
//! [`SectionEngine`] runs the full pipeline: collinearity check, plane
//! construction, edge intersection and degeneracy resolution. A plane that is
//! perpendicular to a coordinate plane produces a section that is flat in one
//! coordinate, so the resolver spreads that coordinate with small Gaussian
//! noise before counting distinct points.

use crate::constants::{INTERSECTION_EPSILON, MIN_SECTION_POINTS, NOISE_STD_DEV, VERTEX_MERGE_EPSILON};
use crate::error::{Error, Result, SectionError};
use crate::intersect::EdgeIntersector;
use crate::mesh::Mesh;
use crate::plane::{classify_axis_perpendicular, collinear, AxisAlignment, CuttingPlane};
use crate::polyhedron::Polyhedron;
use crate::triangulation::{angular_order, project_to_2d, triangulate_polygon};
use nalgebra::{Point2, Point3, Vector3};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Tunables for section computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionConfig {
    /// Standard deviation of the perturbation noise
    pub noise_std_dev: f64,
    /// Fewest distinct points accepted as a section
    pub min_points: usize,
    /// Parallel-edge tolerance for the intersector
    pub intersection_epsilon: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            noise_std_dev: NOISE_STD_DEV,
            min_points: MIN_SECTION_POINTS,
            intersection_epsilon: INTERSECTION_EPSILON,
        }
    }
}

/// Bit pattern key for exact point equality, with -0.0 folded into 0.0
#[inline]
fn exact_key(p: &Point3<f64>) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Number of exactly distinct points
pub fn count_unique(points: &[Point3<f64>]) -> usize {
    points.iter().map(exact_key).collect::<FxHashSet<_>>().len()
}

/// Perturbs axis-aligned sections and rejects degenerate ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionResolver {
    noise_std_dev: f64,
    min_points: usize,
}

impl SectionResolver {
    /// Create a resolver; the noise deviation must be finite and non-negative
    pub fn new(noise_std_dev: f64, min_points: usize) -> Result<Self> {
        if !noise_std_dev.is_finite() || noise_std_dev < 0.0 {
            return Err(Error::InvalidParameter {
                name: "noise_std_dev",
                value: noise_std_dev,
            });
        }

        Ok(Self {
            noise_std_dev,
            min_points,
        })
    }

    /// Resolve raw section points of the plane through p1, p2, p3
    ///
    /// Noise comes from the thread-local RNG, so repeated calls on an
    /// axis-perpendicular plane give different coordinates.
    pub fn resolve(
        &self,
        raw: Vec<Point3<f64>>,
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        p3: &Point3<f64>,
    ) -> std::result::Result<Vec<Point3<f64>>, SectionError> {
        let alignment = classify_axis_perpendicular(p1, p2, p3);
        self.resolve_with_rng(raw, alignment, &mut rand::rng())
    }

    /// Resolve raw section points for a known alignment, drawing noise from `rng`
    ///
    /// Points keep their order and duplicates; only the coordinate selected
    /// by `alignment` is perturbed, each point independently.
    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        mut raw: Vec<Point3<f64>>,
        alignment: AxisAlignment,
        rng: &mut R,
    ) -> std::result::Result<Vec<Point3<f64>>, SectionError> {
        if let Some(axis) = alignment.perturbed_axis() {
            for p in raw.iter_mut() {
                let sample: f64 = StandardNormal.sample(rng);
                p[axis] += self.noise_std_dev * sample;
            }
            debug!(?alignment, axis, count = raw.len(), "perturbed section points");
        }

        if raw.is_empty() {
            return Err(SectionError::NoIntersection);
        }

        let unique = count_unique(&raw);
        if unique < self.min_points {
            return Err(SectionError::InsufficientPoints { unique });
        }

        Ok(raw)
    }
}

impl Default for SectionResolver {
    fn default() -> Self {
        Self {
            noise_std_dev: NOISE_STD_DEV,
            min_points: MIN_SECTION_POINTS,
        }
    }
}

/// Points where a cutting plane meets the edges of a solid
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    points: Vec<Point3<f64>>,
    normal: Vector3<f64>,
    alignment: AxisAlignment,
}

impl Section {
    /// Section points in face-then-edge order, duplicates included
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Unit normal of the cutting plane
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    #[inline]
    pub fn alignment(&self) -> AxisAlignment {
        self.alignment
    }

    /// Section polygon as an ordered loop
    ///
    /// Points are projected onto the cutting plane, merged when their
    /// projections are closer than [`VERTEX_MERGE_EPSILON`] and sorted
    /// counter-clockwise around the centroid.
    pub fn boundary(&self) -> Vec<Point3<f64>> {
        let projected = project_to_2d(&self.points, &self.normal);

        let mut kept: Vec<Point2<f64>> = Vec::with_capacity(projected.len());
        let mut kept_3d: Vec<Point3<f64>> = Vec::with_capacity(projected.len());
        for (p2, p3) in projected.iter().zip(&self.points) {
            if kept.iter().all(|k| (k - p2).norm() >= VERTEX_MERGE_EPSILON) {
                kept.push(*p2);
                kept_3d.push(*p3);
            }
        }

        angular_order(&kept).into_iter().map(|i| kept_3d[i]).collect()
    }

    /// Triangulated section surface
    pub fn surface(&self) -> Result<Mesh> {
        let boundary = self.boundary();
        let projected = project_to_2d(&boundary, &self.normal);
        let indices = triangulate_polygon(&projected)?;

        let mut mesh = Mesh::with_capacity(boundary.len(), indices.len());
        mesh.add_polygon(&boundary, self.normal, &indices);
        Ok(mesh)
    }
}

/// Computes sections of polyhedra
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionEngine {
    intersector: EdgeIntersector,
    resolver: SectionResolver,
}

impl SectionEngine {
    /// Create an engine with the default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from explicit settings
    ///
    /// The intersection tolerance must be finite and non-negative.
    pub fn with_config(config: SectionConfig) -> Result<Self> {
        let epsilon = config.intersection_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "intersection_epsilon",
                value: epsilon,
            });
        }

        Ok(Self {
            intersector: EdgeIntersector::with_epsilon(config.intersection_epsilon),
            resolver: SectionResolver::new(config.noise_std_dev, config.min_points)?,
        })
    }

    /// Section of `polyhedron` by the plane through p1, p2, p3
    pub fn compute(
        &self,
        polyhedron: &Polyhedron,
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        p3: &Point3<f64>,
    ) -> std::result::Result<Section, SectionError> {
        self.compute_with_rng(polyhedron, p1, p2, p3, &mut rand::rng())
    }

    /// Same as [`compute`](Self::compute) with a caller-supplied RNG
    pub fn compute_with_rng<R: Rng + ?Sized>(
        &self,
        polyhedron: &Polyhedron,
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        p3: &Point3<f64>,
        rng: &mut R,
    ) -> std::result::Result<Section, SectionError> {
        if collinear(p1, p2, p3) {
            debug!("rejected collinear plane points");
            return Err(SectionError::CollinearInput);
        }

        let plane =
            CuttingPlane::from_points(p1, p2, p3).map_err(|_| SectionError::CollinearInput)?;
        let alignment = classify_axis_perpendicular(p1, p2, p3);
        debug!(coefficients = ?plane.coefficients(), ?alignment, "cutting plane");

        let raw = self.intersector.intersect(polyhedron, &plane);
        debug!(raw_points = raw.len(), "edge intersection done");

        let points = self.resolver.resolve_with_rng(raw, alignment, rng)?;

        Ok(Section {
            points,
            normal: plane.normal,
            alignment,
        })
    }
}
