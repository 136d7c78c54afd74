// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building solids and planes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Points are collinear and do not define a plane")]
    CollinearPoints,

    #[error("Invalid parameter '{name}': {value} (must be a finite number greater than 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    #[error("Triangulation failed: {0}")]
    TriangulationError(String),
}

/// Reasons a cutting plane does not yield a renderable section.
///
/// All variants are expected outcomes the user can correct by entering
/// different points; none of them is fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionError {
    #[error("The points lie on one line, so no cutting plane can be built")]
    CollinearInput,

    #[error("The plane does not cross the solid: no section points")]
    NoIntersection,

    #[error("Not enough points to draw the section ({unique} distinct, at least 3 needed)")]
    InsufficientPoints { unique: usize },
}

impl SectionError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            SectionError::CollinearInput => "COLLINEAR_INPUT",
            SectionError::NoIntersection => "NO_INTERSECTION",
            SectionError::InsufficientPoints { .. } => "INSUFFICIENT_POINTS",
        }
    }
}
