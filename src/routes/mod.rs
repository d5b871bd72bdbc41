// ABOUTME: Route module organization for the Eight Cuisines mirror API
// ABOUTME: Health and recipe routes, mounted both at the root and under /api
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe mirror
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to [`crate::search::RecipeCatalog`].

/// Health check route
pub mod health;
/// Cuisine, search, top picks and recipe detail routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::{RecipeRoutes, RecipesParams, TopParams};
