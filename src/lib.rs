// ABOUTME: Main library entry point for the Eight Cuisines recipe search platform
// ABOUTME: Wires configuration, logging, the search orchestrator and the mirror HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Eight Cuisines
//!
//! Recipe search over `TheMealDB` with every result placed into one of the
//! eight Chinese regional cuisines (Lu, Yue, Min, Su, Zhe, Xiang, Hui,
//! Chuan) and filtered by diet.
//!
//! ## Architecture
//!
//! - **`eight-cuisines-core`**: recipe and search models, error taxonomy, constants
//! - **`eight-cuisines-intelligence`**: cuisine classifier and diet filter
//! - **`eight-cuisines-providers`**: upstream, mirror and in-memory recipe sources
//! - **Search**: direct pipeline ([`search::RecipeCatalog`]) and the
//!   mirror-first [`search::SearchOrchestrator`]
//! - **Routes / Server**: the mirror HTTP API served by `eight-cuisines-server`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use eight_cuisines::config::ServerConfig;
//! use eight_cuisines::search::SearchOrchestrator;
//! use eight_cuisines_core::models::SearchQuery;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let orchestrator = SearchOrchestrator::from_config(&config);
//!
//!     let query = SearchQuery::from_params(Some("chicken,garlic"), Some("chuan"), None, Some("10"));
//!     let response = orchestrator.search(&query).await;
//!     for meal in &response.result.meals {
//!         println!("{} {}", meal.id, meal.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Logging configuration and structured logging helpers
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Mirror API routes
pub mod routes;

/// Recipe search pipeline and orchestration
pub mod search;

/// Mirror HTTP server
pub mod server;
