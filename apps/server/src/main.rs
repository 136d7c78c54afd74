// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid-Section Server - plane sections of convex solids over HTTP.
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `POST /api/v1/solids` - Build a tetrahedron or box
//! - `POST /api/v1/section` - Section of a solid by the plane through three points
//! - `POST /api/v1/dialog` - Step-by-step conversation, state kept by the client

use axum::extract::DefaultBodyLimit;
use solid_section_dialog::Dialog;
use solid_section_geometry::SectionEngine;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

mod config;
mod error;
mod routes;
mod types;

use config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: SectionEngine,
    pub dialog: Dialog,
}

impl AppState {
    /// Build the shared state; fails when the engine settings are invalid.
    pub fn new(config: &Config) -> Result<Self, solid_section_geometry::Error> {
        let engine = SectionEngine::with_config(config.section_config())?;
        Ok(Self {
            engine,
            dialog: Dialog::new(engine),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,solid_section_server=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        request_timeout_secs = config.request_timeout_secs,
        max_body_kb = config.max_body_kb,
        noise_std_dev = config.noise_std_dev,
        "Starting Solid-Section Server"
    );

    let state = AppState::new(&config)?;

    let app = routes::router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(DefaultBodyLimit::max(config.max_body_kb * 1024)),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
