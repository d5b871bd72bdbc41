// ABOUTME: Recipe route handlers for cuisines, search, top picks and recipe detail
// ABOUTME: Thin wrappers parsing query strings and delegating to the recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::search::RecipeCatalog;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use eight_cuisines_core::constants::limits;
use eight_cuisines_core::errors::AppError;
use eight_cuisines_core::models::{
    parse_limit, CuisineList, MealSummary, RecipeDetail, RecipeEnvelope, SearchQuery,
    SearchResult,
};
use std::sync::Arc;
use tracing::debug;

/// Query string of `GET /recipes`
///
/// Every value is kept as raw text; parsing is lenient and never rejects a
/// request. A repeated key keeps its first value.
#[derive(Debug, Default)]
pub struct RecipesParams {
    /// Comma-separated ingredients, at most three used
    pub ingredients: Option<String>,
    /// Cuisine slug; unknown slugs mean every cuisine
    pub cuisine: Option<String>,
    /// Diet name; unknown diets mean any
    pub diet: Option<String>,
    /// Result cap, default 200, clamped to `1..=500`
    pub limit: Option<String>,
}

impl RecipesParams {
    /// Collect known keys from raw query pairs, first occurrence wins
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "ingredients" => &mut params.ingredients,
                "cuisine" => &mut params.cuisine,
                "diet" => &mut params.diet,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Build the immutable search query
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::from_params(
            self.ingredients.as_deref(),
            self.cuisine.as_deref(),
            self.diet.as_deref(),
            self.limit.as_deref(),
        )
    }
}

/// Query string of `GET /top`
#[derive(Debug, Default)]
pub struct TopParams {
    /// Result cap, default 5, clamped to `1..=50`
    pub limit: Option<String>,
}

impl TopParams {
    /// Keep the first `limit` value, ignoring other keys
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            limit: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "limit").then_some(value)),
        }
    }
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(catalog: Arc<RecipeCatalog>) -> Router {
        Router::new()
            .route("/cuisines", get(Self::handle_cuisines))
            .route("/recipes", get(Self::handle_recipes))
            .route("/top", get(Self::handle_top))
            .route("/recipe/:id", get(Self::handle_recipe))
            .with_state(catalog)
    }

    /// Handle GET /cuisines
    async fn handle_cuisines(State(catalog): State<Arc<RecipeCatalog>>) -> Json<CuisineList> {
        Json(CuisineList {
            cuisines: catalog.cuisines(),
        })
    }

    /// Handle GET /recipes
    async fn handle_recipes(
        State(catalog): State<Arc<RecipeCatalog>>,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> Result<Json<SearchResult<MealSummary>>, AppError> {
        let query = RecipesParams::from_pairs(pairs).to_query();
        debug!(?query, "Mirror search");
        let result = catalog.search(&query).await?;
        Ok(Json(result.map(|recipe| recipe.summary())))
    }

    /// Handle GET /top
    async fn handle_top(
        State(catalog): State<Arc<RecipeCatalog>>,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> Result<Json<SearchResult<MealSummary>>, AppError> {
        let params = TopParams::from_pairs(pairs);
        let limit = parse_limit(
            params.limit.as_deref(),
            limits::DEFAULT_TOP_LIMIT,
            limits::MAX_TOP_LIMIT,
        );
        Ok(Json(catalog.top_picks(limit).await?))
    }

    /// Handle GET /recipe/:id
    async fn handle_recipe(
        State(catalog): State<Arc<RecipeCatalog>>,
        Path(id): Path<String>,
    ) -> Result<Json<RecipeEnvelope>, AppError> {
        let recipe = catalog
            .recipe(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok(Json(RecipeEnvelope {
            meal: RecipeDetail::from(recipe),
        }))
    }
}
