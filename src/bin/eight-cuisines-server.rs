// ABOUTME: Mirror server binary exposing the recipe search pipeline over HTTP
// ABOUTME: Loads configuration from the environment, initializes logging and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Eight Cuisines Mirror Server
//!
//! Serves `/health`, `/cuisines`, `/recipes`, `/top` and `/recipe/:id`, at
//! the root and under `/api`.

use anyhow::Result;
use clap::Parser;
use eight_cuisines::{config::ServerConfig, logging, server};
use std::env;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "eight-cuisines-server")]
#[command(about = "Eight Cuisines - recipe search mirror over TheMealDB")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = Args::try_parse().unwrap_or_else(|e| {
        eprintln!("Argument parsing failed: {e}");
        eprintln!("Using configuration from the environment only");
        Args { http_port: None }
    });

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Eight Cuisines mirror");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    for prefix in ["", "/api"] {
        info!("   Health:       GET  http://{host}:{port}{prefix}/health");
        info!("   Cuisines:     GET  http://{host}:{port}{prefix}/cuisines");
        info!("   Search:       GET  http://{host}:{port}{prefix}/recipes?ingredients=&cuisine=&diet=&limit=");
        info!("   Top Picks:    GET  http://{host}:{port}{prefix}/top?limit=");
        info!("   Recipe:       GET  http://{host}:{port}{prefix}/recipe/{{id}}");
    }
    info!("=== End of Endpoint List ===");
}
