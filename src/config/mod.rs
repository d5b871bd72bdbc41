// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Re-exports the environment-driven server configuration and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Eight Cuisines
//!
//! Everything is read from environment variables at startup; there is no
//! configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, LogLevel, MealDbConfig, MirrorConfig, ServerConfig,
};
