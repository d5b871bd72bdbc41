// ABOUTME: Health check route answering the mirror probe
// ABOUTME: Returns {"ok": true} whenever the process can serve requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route used by the orchestrator's mirror probe

use axum::{routing::get, Json, Router};
use eight_cuisines_core::models::HealthStatus;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::handle_health))
    }

    /// Handle GET /health
    async fn handle_health() -> Json<HealthStatus> {
        Json(HealthStatus { ok: true })
    }
}
