// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User-facing coordinate order
//!
//! Users type points as `X Y Z`. The engine works in `(Y, X, Z)` order, so
//! the first two coordinates are swapped once on the way in and once on the
//! way out. Every point that takes part in plane or collinearity
//! computations must go through [`from_user_order`].

use nalgebra::Point3;

/// Convert a user `[X, Y, Z]` triple into an engine point
#[inline]
pub fn from_user_order(xyz: [f64; 3]) -> Point3<f64> {
    Point3::new(xyz[1], xyz[0], xyz[2])
}

/// Convert an engine point back into a user `[X, Y, Z]` triple
#[inline]
pub fn to_user_order(point: &Point3<f64>) -> [f64; 3] {
    [point.y, point.x, point.z]
}

/// Flatten engine points into coordinate triples, keeping the engine frame
pub fn to_arrays(points: &[Point3<f64>]) -> Vec<[f64; 3]> {
    points.iter().map(|p| [p.x, p.y, p.z]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_first_two_coordinates() {
        let p = from_user_order([1.0, 2.0, 3.0]);
        assert_eq!(p, Point3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn test_user_order_inverse() {
        let xyz = [-4.5, 0.25, 7.0];
        assert_eq!(to_user_order(&from_user_order(xyz)), xyz);
    }

    #[test]
    fn test_to_arrays_keeps_frame() {
        let points = [Point3::new(1.0, 2.0, 3.0)];
        assert_eq!(to_arrays(&points), vec![[1.0, 2.0, 3.0]]);
    }
}
