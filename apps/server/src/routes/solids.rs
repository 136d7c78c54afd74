// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid construction endpoint.

use crate::error::ApiError;
use crate::types::{SolidRequest, SolidResponse};
use axum::{extract::rejection::JsonRejection, Json};

/// POST /api/v1/solids - Build a solid and return its geometry.
pub async fn build(
    payload: Result<Json<SolidRequest>, JsonRejection>,
) -> Result<Json<SolidResponse>, ApiError> {
    let Json(request) = payload?;

    let polyhedron = request.solid.build().map_err(ApiError::InvalidSolid)?;
    let response = SolidResponse::new(request.solid, &polyhedron);

    tracing::info!(
        solid = request.solid.name(),
        vertices = response.vertices.len(),
        triangles = response.mesh.triangle_count(),
        "Built solid"
    );

    Ok(Json(response))
}
