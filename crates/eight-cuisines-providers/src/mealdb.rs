// ABOUTME: TheMealDB v1 client implementing RecipeSource over filter and lookup endpoints
// ABOUTME: Decodes the meals envelope, numbered ingredient slots and comma-separated tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `TheMealDB` API Client
//!
//! Three endpoints are used:
//!
//! - `GET {base}/filter.php?i={ingredient}`: meals using an ingredient
//! - `GET {base}/filter.php?a={area}`: meals from an area
//! - `GET {base}/lookup.php?i={id}`: full meal
//!
//! Each answers `{"meals": [...]}` or `{"meals": null}` when nothing
//! matches. Full meals spread their ingredients over numbered
//! `strIngredientN` / `strMeasureN` keys.

use crate::source::RecipeSource;
use async_trait::async_trait;
use eight_cuisines_core::constants::{service_names, upstream};
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{MealSummary, Recipe};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// `{"meals": [...] | null}`
#[derive(Debug, Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

/// Element of a `filter.php` answer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealSummaryDto {
    id_meal: String,
    str_meal: String,
    #[serde(default)]
    str_meal_thumb: Option<String>,
}

impl From<MealSummaryDto> for MealSummary {
    fn from(dto: MealSummaryDto) -> Self {
        Self {
            id: dto.id_meal,
            name: dto.str_meal,
            thumb: dto.str_meal_thumb.unwrap_or_default(),
        }
    }
}

/// Element of a `lookup.php` answer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealDto {
    id_meal: String,
    str_meal: String,
    #[serde(default)]
    str_area: Option<String>,
    #[serde(default)]
    str_category: Option<String>,
    #[serde(default)]
    str_instructions: Option<String>,
    #[serde(default)]
    str_meal_thumb: Option<String>,
    #[serde(default)]
    str_tags: Option<String>,
    #[serde(default)]
    str_youtube: Option<String>,
    #[serde(default)]
    str_source: Option<String>,
    /// Numbered ingredient and measure slots, plus keys we ignore
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl MealDto {
    fn slot(&self, key: &str) -> &str {
        self.slots.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn into_recipe(self) -> Recipe {
        let lines: Vec<(String, String)> = (1..=upstream::INGREDIENT_SLOTS)
            .map(|n| {
                (
                    self.slot(&format!("strIngredient{n}")).to_owned(),
                    self.slot(&format!("strMeasure{n}")).to_owned(),
                )
            })
            .collect();

        let recipe = Recipe::new(self.id_meal, self.str_meal)
            .with_area(self.str_area.unwrap_or_default())
            .with_category(self.str_category.unwrap_or_default())
            .with_instructions(self.str_instructions.unwrap_or_default())
            .with_thumbnail(self.str_meal_thumb.unwrap_or_default())
            .with_tags(self.str_tags.as_deref().unwrap_or_default().split(','));

        let mut recipe = lines
            .into_iter()
            .fold(recipe, |recipe, (ingredient, measure)| {
                recipe.with_ingredient(ingredient, measure)
            });
        recipe.youtube_url = non_blank(self.str_youtube);
        recipe.source_url = non_blank(self.str_source);
        recipe
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Client for the public `TheMealDB` API
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client over a shared HTTP client
    #[must_use]
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(url = %url, ?query, "Requesting upstream meals");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(service_names::MEALDB, &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(ProviderError::http_status(
                service_names::MEALDB,
                status.as_u16(),
            ));
        }

        let envelope: MealsEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(service_names::MEALDB, &e))?;

        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn name(&self) -> &str {
        service_names::MEALDB
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ProviderError> {
        let meals: Vec<MealSummaryDto> = self.get_meals("filter.php", &[("i", ingredient)]).await?;
        Ok(meals.into_iter().map(MealSummary::from).collect())
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, ProviderError> {
        let meals: Vec<MealSummaryDto> = self.get_meals("filter.php", &[("a", area)]).await?;
        Ok(meals.into_iter().map(MealSummary::from).collect())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        let meals: Vec<MealDto> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next().map(MealDto::into_recipe))
    }
}
