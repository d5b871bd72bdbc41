// ABOUTME: Recipe model with ordered ingredients and tags as decoded from the upstream API
// ABOUTME: Includes the compact list summary and the detail projection served by the mirror
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, trimmed and non-empty
    pub ingredient: String,
    /// Free-form measure, trimmed, possibly empty
    pub measure: String,
}

impl Ingredient {
    /// Create an ingredient line, trimming both parts
    #[must_use]
    pub fn new(ingredient: impl AsRef<str>, measure: impl AsRef<str>) -> Self {
        Self {
            ingredient: ingredient.as_ref().trim().to_owned(),
            measure: measure.as_ref().trim().to_owned(),
        }
    }
}

/// Compact meal shape returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealSummary {
    /// Upstream meal identifier
    pub id: String,
    /// Meal name
    pub name: String,
    /// Thumbnail URL
    pub thumb: String,
}

/// A recipe as provided by the upstream recipe API
///
/// Recipes are read-only values rebuilt for every request. Identity is the
/// upstream `id`; classification sorts by it before assigning buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Upstream meal identifier
    pub id: String,
    /// Meal name
    pub name: String,
    /// Upstream area label, e.g. `Chinese`
    pub area: String,
    /// Upstream category label, e.g. `Seafood`
    pub category: String,
    /// Cooking instructions
    pub instructions: String,
    /// Thumbnail URL
    pub thumbnail_url: String,
    /// Distinct tags in upstream order
    pub tags: Vec<String>,
    /// Ordered ingredient lines
    pub ingredients: Vec<Ingredient>,
    /// Video link, when upstream has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// Original source link, when upstream has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Recipe {
    /// Create a recipe with only identity fields set
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the area label
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    /// Replace the tags, trimming, dropping blanks and keeping the first
    /// occurrence of each
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !distinct.iter().any(|seen| seen == tag) {
                distinct.push(tag.to_owned());
            }
        }
        self.tags = distinct;
        self
    }

    /// Append an ingredient line; blank ingredient names are ignored
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl AsRef<str>, measure: impl AsRef<str>) -> Self {
        if !ingredient.as_ref().trim().is_empty() {
            self.ingredients.push(Ingredient::new(ingredient, measure));
        }
        self
    }

    /// Set the video link
    #[must_use]
    pub fn with_youtube(mut self, url: impl Into<String>) -> Self {
        self.youtube_url = Some(url.into());
        self
    }

    /// Set the source link
    #[must_use]
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Whether the recipe carries `tag`, ignoring case
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Compact list projection
    #[must_use]
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumb: self.thumbnail_url.clone(),
        }
    }
}

/// Detail projection served by `GET /recipe/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Upstream meal identifier
    pub id: String,
    /// Meal name
    pub name: String,
    /// Area label
    pub area: String,
    /// Category label
    pub category: String,
    /// Cooking instructions
    pub instructions: String,
    /// Thumbnail URL
    pub thumb: String,
    /// Distinct tags
    pub tags: Vec<String>,
    /// Video link
    pub youtube: Option<String>,
    /// Source link
    pub source: Option<String>,
    /// Ordered ingredient lines
    pub ingredients: Vec<Ingredient>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            area: recipe.area.clone(),
            category: recipe.category.clone(),
            instructions: recipe.instructions.clone(),
            thumb: recipe.thumbnail_url.clone(),
            tags: recipe.tags.clone(),
            youtube: recipe.youtube_url.clone(),
            source: recipe.source_url.clone(),
            ingredients: recipe.ingredients.clone(),
        }
    }
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            area: recipe.area,
            category: recipe.category,
            instructions: recipe.instructions,
            thumb: recipe.thumbnail_url,
            tags: recipe.tags,
            youtube: recipe.youtube_url,
            source: recipe.source_url,
            ingredients: recipe.ingredients,
        }
    }
}
