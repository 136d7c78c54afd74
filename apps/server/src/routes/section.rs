// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section endpoint.

use crate::error::ApiError;
use crate::types::{SectionRequest, SectionResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use solid_section_geometry::from_user_order;

/// POST /api/v1/section - Cut a solid with the plane through three points.
///
/// Points arrive in user order and are swapped into the engine frame here.
/// Degenerate sections are reported in the body with status 200.
pub async fn compute(
    State(state): State<AppState>,
    payload: Result<Json<SectionRequest>, JsonRejection>,
) -> Result<Json<SectionResponse>, ApiError> {
    let Json(request) = payload?;

    let polyhedron = request.solid.build().map_err(ApiError::InvalidSolid)?;
    let [p1, p2, p3] = request.points.map(from_user_order);

    let result = state.engine.compute(&polyhedron, &p1, &p2, &p3);
    match &result {
        Ok(section) => tracing::info!(
            solid = request.solid.name(),
            points = section.points().len(),
            alignment = ?section.alignment(),
            "Section computed"
        ),
        Err(err) => tracing::info!(
            solid = request.solid.name(),
            reason = err.code(),
            "Section not renderable"
        ),
    }

    Ok(Json(SectionResponse {
        solid: request.solid,
        outcome: result.into(),
    }))
}
