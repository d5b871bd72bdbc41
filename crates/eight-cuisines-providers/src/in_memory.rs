// ABOUTME: In-memory RecipeSource over a fixed recipe set for development and tests
// ABOUTME: Matches ingredients and areas like the upstream API and can simulate outages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::source::RecipeSource;
use async_trait::async_trait;
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{MealSummary, Recipe};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

const SOURCE_NAME: &str = "in-memory";

/// Fixed recipe catalogue answering like the upstream API
///
/// Ingredient and area filters match whole names, ignoring case. Results
/// come back in identifier order.
#[derive(Debug, Default)]
pub struct InMemoryRecipeSource {
    recipes: BTreeMap<String, Recipe>,
    broken_lookups: HashSet<String>,
    latency: Option<Duration>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryRecipeSource {
    /// Create a source over `recipes`; later duplicates replace earlier ones
    #[must_use]
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes
                .into_iter()
                .map(|recipe| (recipe.id.clone(), recipe))
                .collect(),
            ..Self::default()
        }
    }

    /// Make lookups of `id` fail with a network error
    #[must_use]
    pub fn with_broken_lookup(mut self, id: impl Into<String>) -> Self {
        self.broken_lookups.insert(id.into());
        self
    }

    /// Delay every call by `latency`
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every call fail until switched back
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of trait calls served so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of recipes held
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether no recipes are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    async fn begin_call(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::network(SOURCE_NAME, "simulated outage"));
        }
        Ok(())
    }

    fn summaries<F>(&self, predicate: F) -> Vec<MealSummary>
    where
        F: Fn(&Recipe) -> bool,
    {
        self.recipes
            .values()
            .filter(|recipe| predicate(recipe))
            .map(Recipe::summary)
            .collect()
    }
}

#[async_trait]
impl RecipeSource for InMemoryRecipeSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ProviderError> {
        self.begin_call().await?;
        let wanted = ingredient.trim();
        Ok(self.summaries(|recipe| {
            recipe
                .ingredients
                .iter()
                .any(|line| line.ingredient.eq_ignore_ascii_case(wanted))
        }))
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, ProviderError> {
        self.begin_call().await?;
        let wanted = area.trim();
        Ok(self.summaries(|recipe| recipe.area.eq_ignore_ascii_case(wanted)))
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        self.begin_call().await?;
        if self.broken_lookups.contains(id) {
            return Err(ProviderError::network(
                SOURCE_NAME,
                format!("lookup of {id} failed"),
            ));
        }
        Ok(self.recipes.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> InMemoryRecipeSource {
        InMemoryRecipeSource::new([
            Recipe::new("2", "Mapo Tofu")
                .with_area("Chinese")
                .with_ingredient("Tofu", "1 block"),
            Recipe::new("1", "Egg Fried Rice")
                .with_area("Chinese")
                .with_ingredient("Rice", "2 cups")
                .with_ingredient("Egg", "2"),
            Recipe::new("3", "Pad Thai")
                .with_area("Thai")
                .with_ingredient("Egg", "1"),
        ])
    }

    #[tokio::test]
    async fn test_filters_match_whole_names_in_id_order() {
        let source = source();
        let eggs = source.filter_by_ingredient("egg").await.unwrap();
        let ids: Vec<&str> = eggs.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        assert!(source.filter_by_ingredient("eg").await.unwrap().is_empty());
        assert_eq!(source.filter_by_area("chinese").await.unwrap().len(), 2);
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failures() {
        let source = source().with_broken_lookup("2");
        assert!(source.lookup_by_id("2").await.is_err());
        assert!(source.lookup_by_id("1").await.unwrap().is_some());
        assert!(source.lookup_by_id("99").await.unwrap().is_none());

        source.set_failing(true);
        assert!(source.filter_by_area("Chinese").await.is_err());
        source.set_failing(false);
        assert!(source.filter_by_area("Chinese").await.is_ok());
    }
}
