// ABOUTME: Core data models shared by classifier, providers and mirror service
// ABOUTME: Re-exports recipe, cuisine, diet and search types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Mirror API response bodies
pub mod api;
/// Cuisine slugs and diets
pub mod cuisine;
/// Recipes, ingredients and their compact/detail projections
pub mod recipe;
/// Search query and result types
pub mod search;

pub use api::{CuisineList, HealthStatus, RecipeEnvelope};
pub use cuisine::{CuisineInfo, CuisineSlug, Diet};
pub use recipe::{Ingredient, MealSummary, Recipe, RecipeDetail};
pub use search::{parse_limit, SearchQuery, SearchResult};
