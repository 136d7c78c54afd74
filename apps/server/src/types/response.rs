// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use super::mesh::{Bounds, MeshData};
use serde::Serialize;
use solid_section_dialog::{DialogState, Reply};
use solid_section_geometry::{
    to_arrays, AxisAlignment, Polyhedron, Section, SectionError, SolidShape,
};

/// Built solid with its geometry.
#[derive(Debug, Serialize)]
pub struct SolidResponse {
    pub solid: SolidShape,
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
    pub mesh: MeshData,
    pub bounds: Bounds,
}

impl SolidResponse {
    pub fn new(solid: SolidShape, polyhedron: &Polyhedron) -> Self {
        let mesh = polyhedron.to_mesh();
        Self {
            solid,
            vertices: to_arrays(polyhedron.vertices()),
            faces: polyhedron.faces().iter().map(|f| f.to_vec()).collect(),
            bounds: Bounds::of(&mesh),
            mesh: mesh.into(),
        }
    }
}

/// Section outcome; failures are expected and carry a user-facing message.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionResult {
    Ok {
        /// Raw section points in face-then-edge order.
        points: Vec<[f64; 3]>,
        alignment: AxisAlignment,
        /// Distinct points ordered around the section polygon.
        boundary: Vec<[f64; 3]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        surface: Option<MeshData>,
    },
    Failed {
        reason: &'static str,
        message: String,
    },
}

impl From<Result<Section, SectionError>> for SectionResult {
    fn from(result: Result<Section, SectionError>) -> Self {
        match result {
            Ok(section) => {
                let surface = match section.surface() {
                    Ok(mesh) => Some(mesh.into()),
                    Err(err) => {
                        tracing::warn!(error = %err, "Section surface not triangulated");
                        None
                    }
                };
                SectionResult::Ok {
                    points: to_arrays(section.points()),
                    alignment: section.alignment(),
                    boundary: to_arrays(&section.boundary()),
                    surface,
                }
            }
            Err(err) => SectionResult::Failed {
                reason: err.code(),
                message: err.to_string(),
            },
        }
    }
}

/// Body returned by `POST /api/v1/section`.
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub solid: SolidShape,
    pub outcome: SectionResult,
}

/// Body returned by `POST /api/v1/dialog`.
#[derive(Debug, Serialize)]
pub struct DialogResponse {
    pub state: DialogState,
    pub replies: Vec<Reply>,
}
