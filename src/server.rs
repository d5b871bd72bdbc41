// ABOUTME: Mirror HTTP server assembling routes, middleware and graceful shutdown
// ABOUTME: Serves the recipe pipeline at / and /api for browser frontends and other orchestrators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Mirror Server
//!
//! The mirror answers the same API at the root and under `/api`, so a
//! frontend can point at either `http://host:8888` or a reverse-proxied
//! `https://host/api`.

use crate::config::ServerConfig;
use crate::middleware::{setup_cors, setup_trace_layer};
use crate::routes::{HealthRoutes, RecipeRoutes};
use crate::search::RecipeCatalog;
use anyhow::{Context, Result};
use axum::Router;
use eight_cuisines_core::constants::mirror;
use eight_cuisines_intelligence::ClassificationConfig;
use eight_cuisines_providers::{build_client, MealDbClient};
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

/// Catalog talking to the configured upstream API
#[must_use]
pub fn catalog_from_config(config: &ServerConfig) -> RecipeCatalog {
    let http = build_client(&config.http_client);
    let mealdb = MealDbClient::new(http, config.mealdb.base_url.as_str());
    RecipeCatalog::new(Arc::new(mealdb), Arc::new(ClassificationConfig::default()))
        .with_pool_area(config.mealdb.pool_area.as_str())
}

/// Mirror routes without middleware, mounted at `/` and `/api`
pub fn mirror_routes(catalog: Arc<RecipeCatalog>) -> Router {
    let api = HealthRoutes::routes().merge(RecipeRoutes::routes(catalog));
    Router::new()
        .merge(api.clone())
        .nest(mirror::API_PREFIX, api)
}

/// Complete application router with CORS, tracing and request timeout
pub fn build_router(catalog: Arc<RecipeCatalog>, config: &ServerConfig) -> Router {
    mirror_routes(catalog)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(setup_trace_layer())
        .layer(setup_cors(config))
}

/// Serve `router` on an already bound listener until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Mirror server failed")?;

    info!("Mirror server stopped");
    Ok(())
}

/// Bind the configured port and run the mirror
///
/// # Errors
///
/// Returns an error if the port cannot be bound or serving fails
pub async fn run(config: &ServerConfig) -> Result<()> {
    let catalog = Arc::new(catalog_from_config(config));
    let router = build_router(catalog, config);

    let address = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(address = %address, "Mirror server listening");
    serve(listener, router).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
