// ABOUTME: Direct search pipeline over a RecipeSource: fetch, intersect, expand, classify, filter
// ABOUTME: Shared by the mirror routes and the orchestrator's direct-upstream fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! The catalog runs a search end to end against one [`RecipeSource`]:
//!
//! 1. Fetch the base set: the pool area when no ingredient is given,
//!    otherwise every per-ingredient filter concurrently, intersected by id.
//! 2. Expand summaries into full recipes concurrently. Lookups that fail or
//!    find nothing are dropped.
//! 3. Classify the expanded set into cuisine buckets.
//! 4. Keep recipes passing the diet, then those assigned to the requested
//!    cuisine.
//! 5. Truncate to the limit. The result is ordered by id.

use eight_cuisines_core::constants::upstream;
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{CuisineInfo, MealSummary, Recipe, SearchQuery, SearchResult};
use eight_cuisines_intelligence::{passes_diet, ClassificationConfig, CuisineClassifier};
use eight_cuisines_providers::RecipeSource;
use futures_util::future::{join_all, try_join_all};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Search pipeline bound to one recipe source and one set of classification tables
#[derive(Clone)]
pub struct RecipeCatalog {
    source: Arc<dyn RecipeSource>,
    classifier: CuisineClassifier,
    pool_area: String,
    top_ids: Vec<String>,
}

impl RecipeCatalog {
    /// Create a catalog with the default pool area and top picks
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, config: Arc<ClassificationConfig>) -> Self {
        Self {
            source,
            classifier: CuisineClassifier::new(config),
            pool_area: upstream::DEFAULT_POOL_AREA.to_owned(),
            top_ids: upstream::TOP_PICK_IDS.iter().map(|id| (*id).to_owned()).collect(),
        }
    }

    /// Area listed when a search names no ingredient
    #[must_use]
    pub fn with_pool_area(mut self, area: impl Into<String>) -> Self {
        self.pool_area = area.into();
        self
    }

    /// Replace the fixed top picks
    #[must_use]
    pub fn with_top_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the underlying source, for logs
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Area listed when a search names no ingredient
    #[must_use]
    pub fn pool_area(&self) -> &str {
        &self.pool_area
    }

    /// Fixed top pick ids
    #[must_use]
    pub fn top_ids(&self) -> &[String] {
        &self.top_ids
    }

    /// Classifier used by [`RecipeCatalog::search`]
    #[must_use]
    pub const fn classifier(&self) -> &CuisineClassifier {
        &self.classifier
    }

    /// The `/cuisines` listing
    #[must_use]
    pub fn cuisines(&self) -> Vec<CuisineInfo> {
        self.classifier.config().cuisines()
    }

    /// Summaries matching every ingredient, or the pool area when none is given
    ///
    /// Order follows the first ingredient's answer; ids are unique.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any upstream filter call fails
    pub async fn fetch_base_set(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<MealSummary>, ProviderError> {
        if ingredients.is_empty() {
            let pool = self.source.filter_by_area(&self.pool_area).await?;
            return Ok(dedupe_by_id(pool));
        }

        let mut lists = try_join_all(
            ingredients
                .iter()
                .map(|ingredient| self.source.filter_by_ingredient(ingredient)),
        )
        .await?
        .into_iter();

        let first = lists.next().unwrap_or_default();
        let rest: Vec<HashSet<String>> = lists
            .map(|list| list.into_iter().map(|meal| meal.id).collect())
            .collect();

        let intersection: Vec<MealSummary> = first
            .into_iter()
            .filter(|meal| rest.iter().all(|ids| ids.contains(&meal.id)))
            .collect();

        debug!(
            ingredients = ?ingredients,
            matches = intersection.len(),
            "Intersected ingredient filters"
        );
        Ok(dedupe_by_id(intersection))
    }

    /// Look up every summary concurrently and keep the recipes found
    ///
    /// Failed or empty lookups are dropped. The result is sorted by id.
    pub async fn expand_details(&self, summaries: &[MealSummary]) -> Vec<Recipe> {
        let lookups = join_all(
            summaries
                .iter()
                .map(|summary| self.source.lookup_by_id(&summary.id)),
        )
        .await;

        let mut recipes: Vec<Recipe> = summaries
            .iter()
            .zip(lookups)
            .filter_map(|(summary, lookup)| match lookup {
                Ok(found) => found,
                Err(e) => {
                    warn!(recipe_id = %summary.id, error = %e, "Dropping recipe whose lookup failed");
                    None
                }
            })
            .collect();

        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        recipes.dedup_by(|a, b| a.id == b.id);
        recipes
    }

    /// Run the full direct pipeline for `query`
    ///
    /// # Errors
    ///
    /// Fails when fetching the base set fails; lookup failures only shrink
    /// the result
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult<Recipe>, ProviderError> {
        let base = self.fetch_base_set(query.ingredients()).await?;
        let recipes = self.expand_details(&base).await;
        let classification = self.classifier.classify(&recipes);

        let matches: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| passes_diet(recipe, query.diet()))
            .filter(|recipe| {
                query
                    .cuisine()
                    .is_none_or(|slug| classification.slug_of(&recipe.id) == Some(slug))
            })
            .collect();

        debug!(
            base = base.len(),
            classified = classification.len(),
            matches = matches.len(),
            limit = query.limit(),
            "Direct search completed"
        );
        Ok(SearchResult::truncated(matches, query.limit()))
    }

    /// The first `limit` fixed top picks that upstream still knows
    ///
    /// `total` is the number of fixed ids.
    ///
    /// # Errors
    ///
    /// Fails when any lookup fails
    pub async fn top_picks(&self, limit: usize) -> Result<SearchResult<MealSummary>, ProviderError> {
        let ids = &self.top_ids[..limit.min(self.top_ids.len())];
        let found = try_join_all(ids.iter().map(|id| self.source.lookup_by_id(id))).await?;

        Ok(SearchResult {
            meals: found.into_iter().flatten().map(|recipe| recipe.summary()).collect(),
            total: self.top_ids.len(),
        })
    }

    /// Full recipe by id, `None` when upstream has no match
    ///
    /// # Errors
    ///
    /// Fails when the lookup fails
    pub async fn recipe(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        self.source.lookup_by_id(id).await
    }
}

fn dedupe_by_id(meals: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut seen = HashSet::new();
    meals
        .into_iter()
        .filter(|meal| seen.insert(meal.id.clone()))
        .collect()
}
