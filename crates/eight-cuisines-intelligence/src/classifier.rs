// ABOUTME: Deterministic cuisine classifier assigning every recipe to exactly one of eight buckets
// ABOUTME: Greedy keyword/anchor placement with load balancing and an empty-bucket donor pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cuisine Classifier
//!
//! Upstream recipes carry no regional label, so every recipe in a result set
//! is placed into one of the eight buckets by a greedy pass over the set
//! sorted by identifier:
//!
//! 1. The candidate bucket is the anchor for the exact recipe name, else the
//!    first bucket whose keywords occur in `name | area | category | tags`.
//! 2. The candidate is accepted when its current count is at most
//!    `min(counts) + 1`; otherwise the least-loaded bucket (first in fixed
//!    order on ties) takes the recipe.
//! 3. Once every recipe is placed, each empty bucket receives the last
//!    recipe of the first bucket holding more than one.
//!
//! The same input always yields the same assignment.

use crate::config::ClassificationConfig;
use eight_cuisines_core::models::{CuisineSlug, Recipe};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Per-bucket recipe counts during the greedy pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketLoad {
    counts: [usize; CuisineSlug::COUNT],
}

impl BucketLoad {
    /// All buckets empty
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; CuisineSlug::COUNT],
        }
    }

    /// Current count of one bucket
    #[must_use]
    pub const fn count(&self, slug: CuisineSlug) -> usize {
        self.counts[slug.index()]
    }

    /// Smallest bucket count
    #[must_use]
    pub fn min(&self) -> usize {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    /// Largest bucket count
    #[must_use]
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// First bucket in fixed order holding the smallest count
    #[must_use]
    pub fn least_loaded(&self) -> CuisineSlug {
        let min = self.min();
        CuisineSlug::ALL
            .into_iter()
            .find(|slug| self.count(*slug) == min)
            .unwrap_or(CuisineSlug::Lu)
    }

    /// Whether `slug` may take another recipe without unbalancing the load
    #[must_use]
    pub fn admits(&self, slug: CuisineSlug) -> bool {
        self.count(slug) <= self.min() + 1
    }

    /// Place one recipe, honouring `candidate` when the load admits it
    ///
    /// Returns the bucket that received the recipe.
    pub fn place(&mut self, candidate: Option<CuisineSlug>) -> CuisineSlug {
        let target = candidate
            .filter(|slug| self.admits(*slug))
            .unwrap_or_else(|| self.least_loaded());
        self.counts[target.index()] += 1;
        target
    }
}

/// Result of classifying a recipe set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Recipe id to bucket, total over the classified set
    pub assignment: BTreeMap<String, CuisineSlug>,
    /// Bucket to recipes in placement order; every slug is present
    pub buckets: BTreeMap<CuisineSlug, Vec<Recipe>>,
}

impl Classification {
    /// Bucket a recipe was assigned to
    #[must_use]
    pub fn slug_of(&self, recipe_id: &str) -> Option<CuisineSlug> {
        self.assignment.get(recipe_id).copied()
    }

    /// Recipes of one bucket
    #[must_use]
    pub fn bucket(&self, slug: CuisineSlug) -> &[Recipe] {
        self.buckets.get(&slug).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of classified recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether nothing was classified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

/// Assigns recipes to cuisine buckets using a shared [`ClassificationConfig`]
#[derive(Debug, Clone, Default)]
pub struct CuisineClassifier {
    config: Arc<ClassificationConfig>,
}

impl CuisineClassifier {
    /// Create a classifier over shared tables
    #[must_use]
    pub const fn new(config: Arc<ClassificationConfig>) -> Self {
        Self { config }
    }

    /// Tables in use
    #[must_use]
    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Preferred bucket before load balancing
    #[must_use]
    pub fn candidate(&self, recipe: &Recipe) -> Option<CuisineSlug> {
        self.config
            .anchor_for(&recipe.name)
            .or_else(|| self.config.keyword_match(&haystack(recipe)))
    }

    /// Assign every recipe to exactly one bucket
    #[must_use]
    pub fn classify(&self, recipes: &[Recipe]) -> Classification {
        let mut sorted: Vec<&Recipe> = recipes.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));

        let mut load = BucketLoad::new();
        let mut buckets: [Vec<Recipe>; CuisineSlug::COUNT] = Default::default();
        let mut assignment = BTreeMap::new();

        for recipe in &sorted {
            let slug = load.place(self.candidate(recipe));
            buckets[slug.index()].push((*recipe).clone());
            assignment.insert(recipe.id.clone(), slug);
        }

        if !sorted.is_empty() {
            rebalance_empty_buckets(&mut buckets, &mut assignment);
        }

        debug!(
            recipes = sorted.len(),
            min = buckets.iter().map(Vec::len).min().unwrap_or(0),
            max = buckets.iter().map(Vec::len).max().unwrap_or(0),
            "Classified recipes into cuisine buckets"
        );

        Classification {
            assignment,
            buckets: CuisineSlug::ALL.into_iter().zip(buckets).collect(),
        }
    }
}

/// Text the keyword tables are matched against
fn haystack(recipe: &Recipe) -> String {
    let tags = recipe.tags.join(",");
    [
        recipe.name.as_str(),
        recipe.area.as_str(),
        recipe.category.as_str(),
        tags.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Move one recipe into each empty bucket from the first bucket with spare recipes
fn rebalance_empty_buckets(
    buckets: &mut [Vec<Recipe>; CuisineSlug::COUNT],
    assignment: &mut BTreeMap<String, CuisineSlug>,
) {
    for slug in CuisineSlug::ALL {
        if !buckets[slug.index()].is_empty() {
            continue;
        }
        let Some(donor) = CuisineSlug::ALL
            .into_iter()
            .find(|candidate| buckets[candidate.index()].len() > 1)
        else {
            continue;
        };
        if let Some(moved) = buckets[donor.index()].pop() {
            debug!(recipe_id = %moved.id, from = %donor, to = %slug, "Moved recipe into empty bucket");
            assignment.insert(moved.id.clone(), slug);
            buckets[slug.index()].push(moved);
        }
    }
}
