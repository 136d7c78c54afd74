// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric tolerances and defaults shared by the engine

/// Edge/plane denominators at or below this magnitude count as parallel.
pub const INTERSECTION_EPSILON: f64 = 1e-8;

/// Absolute tolerance for near-zero cross product components
/// (collinearity and axis-perpendicular classification).
pub const ZERO_TOLERANCE: f64 = 1e-8;

/// Points closer than this are merged when rebuilding a section boundary.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Standard deviation of the Gaussian noise added to axis-aligned sections.
pub const NOISE_STD_DEV: f64 = 0.001;

/// Fewest distinct points that still form a drawable surface.
pub const MIN_SECTION_POINTS: usize = 3;
