// ABOUTME: Trait implemented by every provider of upstream recipe data
// ABOUTME: Mirrors the three upstream endpoints used by the search pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{MealSummary, Recipe};

/// Read-only access to an upstream recipe catalogue
///
/// An upstream "no match" is an empty list or `None`, never an error.
/// Implementations do not retry.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Name used in logs and error details
    fn name(&self) -> &str;

    /// Meals that use `ingredient`
    async fn filter_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<MealSummary>, ProviderError>;

    /// Meals from `area`, e.g. `Chinese`
    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, ProviderError>;

    /// Full recipe by identifier
    async fn lookup_by_id(&self, id: &str) -> Result<Option<Recipe>, ProviderError>;
}
