// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP route handlers.

pub mod dialog;
pub mod health;
pub mod section;
pub mod solids;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// API routes without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Root endpoint - API information
        .route("/", get(health::info))
        // Health check
        .route("/api/v1/health", get(health::check))
        // Geometry endpoints
        .route("/api/v1/solids", post(solids::build))
        .route("/api/v1/section", post(section::compute))
        // Conversation endpoint
        .route("/api/v1/dialog", post(dialog::step))
        .with_state(state)
}
