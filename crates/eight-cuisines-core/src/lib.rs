// ABOUTME: Core types and constants for the Eight Cuisines recipe search platform
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Eight Cuisines Core
//!
//! Foundation crate providing shared types and constants for the Eight Cuisines
//! recipe search platform. Both the classification engine and the upstream
//! providers depend on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Upstream endpoints, limits, and fixed identifiers
//! - **models**: Recipes, cuisine slugs, diets, search queries and results

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `CuisineSlug`, Diet, `SearchQuery`, `SearchResult`)
pub mod models;
