// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cutting planes defined by three points
//!
//! Collinearity test, plane coefficient derivation and classification of
//! planes that are perpendicular to one of the coordinate planes.

use crate::constants::ZERO_TOLERANCE;
use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Unnormalized normal of the triangle (p1, p2, p3)
#[inline]
fn raw_normal(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Vector3<f64> {
    (p2 - p1).cross(&(p3 - p1))
}

#[inline]
fn near_zero(value: f64) -> bool {
    value.abs() <= ZERO_TOLERANCE
}

/// Check whether three points lie on one line
///
/// True when every component of `(p2 - p1) x (p3 - p1)` is within
/// [`ZERO_TOLERANCE`] of zero. Repeated points are always collinear.
pub fn collinear(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> bool {
    let n = raw_normal(p1, p2, p3);
    near_zero(n.x) && near_zero(n.y) && near_zero(n.z)
}

/// Plane `a*x + b*y + c*z + d = 0` with a unit normal `(a, b, c)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuttingPlane {
    /// Unit normal
    pub normal: Vector3<f64>,
    /// Offset
    pub d: f64,
}

impl CuttingPlane {
    /// Build the plane through three ordered points
    ///
    /// normal = normalize((p2 - p1) x (p3 - p1)), d = -normal . p1.
    /// Collinear points do not define a plane and are rejected.
    pub fn from_points(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Result<Self> {
        if collinear(p1, p2, p3) {
            return Err(Error::CollinearPoints);
        }

        let normal = raw_normal(p1, p2, p3).normalize();
        let d = -normal.dot(&p1.coords);

        Ok(Self { normal, d })
    }

    /// Plane coefficients `[a, b, c, d]`
    #[inline]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// Signed distance from point to plane
    /// Positive = on the side the normal points to
    #[inline]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) + self.d
    }
}

/// Which coordinate plane a cutting plane is perpendicular to, if any
///
/// The check looks at the components of the plane normal: `PerpendicularToXY`
/// means the x and y components are near zero (the normal runs along z), and
/// likewise for the other two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisAlignment {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "perpendicular_to_xy")]
    PerpendicularToXY,
    #[serde(rename = "perpendicular_to_xz")]
    PerpendicularToXZ,
    #[serde(rename = "perpendicular_to_yz")]
    PerpendicularToYZ,
}

impl AxisAlignment {
    /// Index of the coordinate that collapses for this alignment
    /// (z = 2, y = 1, x = 0)
    pub fn perturbed_axis(&self) -> Option<usize> {
        match self {
            AxisAlignment::None => None,
            AxisAlignment::PerpendicularToXY => Some(2),
            AxisAlignment::PerpendicularToXZ => Some(1),
            AxisAlignment::PerpendicularToYZ => Some(0),
        }
    }
}

/// Classify the plane through three points by its normal direction
///
/// Checks run in XY, XZ, YZ order and the first match wins. Collinear input
/// has a zero normal and therefore reports `PerpendicularToXY`.
pub fn classify_axis_perpendicular(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> AxisAlignment {
    let n = raw_normal(p1, p2, p3);

    if near_zero(n.x) && near_zero(n.y) {
        AxisAlignment::PerpendicularToXY
    } else if near_zero(n.x) && near_zero(n.z) {
        AxisAlignment::PerpendicularToXZ
    } else if near_zero(n.y) && near_zero(n.z) {
        AxisAlignment::PerpendicularToYZ
    } else {
        AxisAlignment::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_contains_defining_points() {
        let p1 = Point3::new(0.3, -1.2, 4.0);
        let p2 = Point3::new(2.5, 0.7, -1.0);
        let p3 = Point3::new(-3.0, 2.0, 0.5);
        let plane = CuttingPlane::from_points(&p1, &p2, &p3).unwrap();

        for p in [p1, p2, p3] {
            assert!(plane.signed_distance(&p).abs() < 1e-8);
        }
        assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_plane_coefficients() {
        let plane = CuttingPlane::from_points(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(2.0, 0.0, 1.0),
            &Point3::new(0.0, 2.0, 1.0),
        )
        .unwrap();

        let [a, b, c, d] = plane.coefficients();
        assert_relative_eq!(a, 0.0);
        assert_relative_eq!(b, 0.0);
        assert_relative_eq!(c, 1.0);
        assert_relative_eq!(d, -1.0);
    }

    #[test]
    fn test_plane_rejects_collinear_points() {
        let result = CuttingPlane::from_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(result, Err(Error::CollinearPoints));
    }

    #[test]
    fn test_collinear_repeated_points() {
        let p = Point3::new(1.5, -2.0, 3.0);
        let q = Point3::new(4.0, 0.0, 1.0);
        assert!(collinear(&p, &p, &p));
        assert!(collinear(&p, &p, &q));
        assert!(collinear(&p, &q, &p));
        assert!(collinear(&q, &p, &p));
    }

    #[test]
    fn test_collinear_line_and_triangle() {
        assert!(collinear(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(-2.0, -4.0, -6.0),
        ));
        assert!(!collinear(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        ));
    }

    #[test]
    fn test_classify_axis_perpendicular() {
        let origin = Point3::new(0.0, 0.0, 0.0);

        // z = const: normal along z
        assert_eq!(
            classify_axis_perpendicular(
                &Point3::new(0.0, 0.0, 1.0),
                &Point3::new(2.0, 0.0, 1.0),
                &Point3::new(0.0, 2.0, 1.0),
            ),
            AxisAlignment::PerpendicularToXY
        );
        // y = 0: normal along y
        assert_eq!(
            classify_axis_perpendicular(
                &origin,
                &Point3::new(1.0, 0.0, 0.0),
                &Point3::new(0.0, 0.0, 1.0),
            ),
            AxisAlignment::PerpendicularToXZ
        );
        // x = 0: normal along x
        assert_eq!(
            classify_axis_perpendicular(
                &origin,
                &Point3::new(0.0, 1.0, 0.0),
                &Point3::new(0.0, 0.0, 1.0),
            ),
            AxisAlignment::PerpendicularToYZ
        );
        assert_eq!(
            classify_axis_perpendicular(
                &Point3::new(1.0, 0.0, 0.0),
                &Point3::new(0.0, 1.0, 0.0),
                &Point3::new(0.0, 0.0, 1.0),
            ),
            AxisAlignment::None
        );
    }

    #[test]
    fn test_perturbed_axis() {
        assert_eq!(AxisAlignment::None.perturbed_axis(), None);
        assert_eq!(AxisAlignment::PerpendicularToXY.perturbed_axis(), Some(2));
        assert_eq!(AxisAlignment::PerpendicularToXZ.perturbed_axis(), Some(1));
        assert_eq!(AxisAlignment::PerpendicularToYZ.perturbed_axis(), Some(0));
    }
}
