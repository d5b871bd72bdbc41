// ABOUTME: Recipe source implementations for the Eight Cuisines platform
// ABOUTME: TheMealDB client, recipe mirror client, shared HTTP client and in-memory source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Eight Cuisines Providers
//!
//! Everything that talks to the network lives here. The search pipeline only
//! sees the [`RecipeSource`] trait, so tests and local development can swap
//! the upstream API for an [`InMemoryRecipeSource`].

/// Shared reqwest client construction
pub mod http_client;
/// In-memory recipe source for development and tests
pub mod in_memory;
/// `TheMealDB` API client and wire format
pub mod mealdb;
/// Client for a recipe mirror serving the mirror API
pub mod mirror;
/// The `RecipeSource` trait
pub mod source;

pub use http_client::{build_client, HttpClientConfig};
pub use in_memory::InMemoryRecipeSource;
pub use mealdb::MealDbClient;
pub use mirror::MirrorClient;
pub use source::RecipeSource;
