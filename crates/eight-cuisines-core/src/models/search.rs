// ABOUTME: Normalized search query and capped search result types
// ABOUTME: Query construction trims ingredients, keeps at most three and clamps the limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::cuisine::{CuisineSlug, Diet};
use super::recipe::MealSummary;
use crate::constants::limits::{DEFAULT_SEARCH_LIMIT, MAX_QUERY_INGREDIENTS, MAX_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};

/// Parse a numeric limit from a query-string value
///
/// Missing, blank, non-numeric and zero values fall back to `default`. Any
/// other number is clamped into `1..=max` and truncated toward zero, so
/// `-3` becomes `1` and `7.9` becomes `7`.
#[must_use]
pub fn parse_limit(raw: Option<&str>, default: usize, max: usize) -> usize {
    let parsed = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| !value.is_nan() && *value != 0.0);

    parsed.map_or(default, |value| value.clamp(1.0, max as f64).trunc() as usize)
}

/// A normalized recipe search
///
/// Fields are private so every query in circulation has gone through the
/// normalization in [`SearchQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    ingredients: Vec<String>,
    cuisine: Option<CuisineSlug>,
    diet: Diet,
    limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            cuisine: None,
            diet: Diet::Any,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchQuery {
    /// Build a query, trimming and dropping blank ingredients, keeping the
    /// first three and clamping `limit` into `1..=500`
    #[must_use]
    pub fn new<I, S>(ingredients: I, cuisine: Option<CuisineSlug>, diet: Diet, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients = ingredients
            .into_iter()
            .map(|ingredient| ingredient.as_ref().trim().to_owned())
            .filter(|ingredient| !ingredient.is_empty())
            .take(MAX_QUERY_INGREDIENTS)
            .collect();

        Self {
            ingredients,
            cuisine,
            diet,
            limit: limit.clamp(1, MAX_SEARCH_LIMIT),
        }
    }

    /// Build a query from raw query-string values
    ///
    /// `ingredients` is comma separated. Unknown cuisine slugs mean every
    /// cuisine and unknown diets mean any diet.
    #[must_use]
    pub fn from_params(
        ingredients: Option<&str>,
        cuisine: Option<&str>,
        diet: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        let ingredients = ingredients.unwrap_or_default().split(',');
        let cuisine = cuisine.and_then(CuisineSlug::parse);
        let diet = diet.map_or(Diet::Any, Diet::from_query_value);
        let limit = parse_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);

        Self::new(ingredients, cuisine, diet, limit)
    }

    /// Replace the limit, clamped like [`SearchQuery::new`]
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    /// Normalized ingredients, at most three
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Cuisine restriction, `None` for all cuisines
    #[must_use]
    pub const fn cuisine(&self) -> Option<CuisineSlug> {
        self.cuisine
    }

    /// Diet restriction
    #[must_use]
    pub const fn diet(&self) -> Diet {
        self.diet
    }

    /// Maximum number of meals returned
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Query-string pairs for the mirror `/recipes` endpoint
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "cuisine",
                self.cuisine.map(|slug| slug.as_str().to_owned()).unwrap_or_default(),
            ),
            ("diet", self.diet.as_str().to_owned()),
            ("ingredients", self.ingredients.join(",")),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// A capped list of meals with the count before capping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<T = MealSummary> {
    /// Meals, at most `limit`
    pub meals: Vec<T>,
    /// Number of matches before truncation
    pub total: usize,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> SearchResult<T> {
    /// A result with no meals
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            meals: Vec::new(),
            total: 0,
        }
    }

    /// Record the full count of `items`, then keep the first `limit`
    #[must_use]
    pub fn truncated(mut items: Vec<T>, limit: usize) -> Self {
        let total = items.len();
        items.truncate(limit);
        Self {
            meals: items,
            total,
        }
    }

    /// Whether no meals are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Convert each meal, preserving `total`
    #[must_use]
    pub fn map<U, F>(self, f: F) -> SearchResult<U>
    where
        F: FnMut(T) -> U,
    {
        SearchResult {
            meals: self.meals.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}
