// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/health - Health check endpoint.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "solid-section-server",
    })
}

/// GET / - API information endpoint.
pub async fn info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "solid-section-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Plane sections of tetrahedra and boxes",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/api/v1/health",
                description: "Health check endpoint",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/solids",
                description: "Build a solid: vertices, faces and mesh",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/section",
                description: "Section of a solid by the plane through three points",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/dialog",
                description: "Advance a conversation by one message",
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check() {
        let Json(health) = check().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "solid-section-server");
    }

    #[tokio::test]
    async fn test_info_lists_endpoints() {
        let Json(info) = info().await;
        let paths: Vec<_> = info.endpoints.iter().map(|e| e.path).collect();
        assert!(paths.contains(&"/api/v1/section"));
        assert!(paths.contains(&"/api/v1/dialog"));
    }
}
