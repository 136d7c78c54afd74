// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid solid: {0}")]
    InvalidSolid(#[source] solid_section_geometry::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidSolid(_) => (StatusCode::BAD_REQUEST, "INVALID_SOLID"),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        };

        tracing::debug!(error = %self, "Rejected request");

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_solid_is_bad_request() {
        let err = ApiError::InvalidSolid(solid_section_geometry::Error::InvalidParameter {
            name: "length",
            value: 0.0,
        });
        assert!(err.to_string().contains("length"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_solid_body_carries_code() {
        let err = ApiError::InvalidSolid(solid_section_geometry::Error::InvalidParameter {
            name: "coefficient",
            value: -1.0,
        });
        let bytes = axum::body::to_bytes(err.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_SOLID");
    }
}
