// ABOUTME: Ingredient-based dietary filter over the closed set of supported diets
// ABOUTME: Matches lowercase ingredient names against fixed word lists by substring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use eight_cuisines_core::models::{Diet, Recipe};

/// Word lists matched as substrings of lowercase ingredient names
pub mod word_lists {
    /// Meat ingredients
    pub const MEATS: &[&str] = &[
        "beef",
        "pork",
        "chicken",
        "lamb",
        "mutton",
        "duck",
        "turkey",
        "bacon",
        "ham",
        "sausage",
        "veal",
        "prosciutto",
    ];

    /// Fish and shellfish
    pub const SEAFOOD: &[&str] = &[
        "fish", "salmon", "tuna", "shrimp", "prawn", "crab", "oyster", "clam", "anchovy", "squid",
        "octopus", "scallop",
    ];

    /// Dairy products
    pub const DAIRY: &[&str] = &[
        "milk",
        "cheese",
        "cream",
        "butter",
        "yogurt",
        "ghee",
        "parmesan",
        "evaporated milk",
        "condensed milk",
    ];

    /// Egg products
    pub const EGGS: &[&str] = &["egg", "mayonnaise"];

    /// Ingredients excluded by vegan diets on top of animal products
    pub const VEGAN_EXTRA: &[&str] = &["honey"];

    /// Gluten-bearing ingredients
    pub const GLUTEN: &[&str] = &[
        "wheat",
        "barley",
        "rye",
        "flour",
        "bread",
        "breadcrumbs",
        "noodle",
        "pasta",
        "dumpling",
        "bao",
        "bun",
        "tortilla",
        "soy sauce",
    ];

    /// Tag that marks a recipe gluten free regardless of its ingredients
    pub const GLUTEN_FREE_TAG: &str = "gluten free";
}

/// Whether `recipe` fits `diet`
///
/// Matching is by substring, so `ham` also excludes `graham crackers`. A
/// recipe with no ingredients passes every diet.
#[must_use]
pub fn passes_diet(recipe: &Recipe, diet: Diet) -> bool {
    let ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|line| line.ingredient.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    let contains_any = |words: &[&str]| {
        ingredients
            .iter()
            .any(|name| words.iter().any(|word| name.contains(word)))
    };

    match diet {
        Diet::Any => true,
        Diet::Vegetarian => !contains_any(word_lists::MEATS) && !contains_any(word_lists::SEAFOOD),
        Diet::Vegan => {
            !contains_any(word_lists::MEATS)
                && !contains_any(word_lists::SEAFOOD)
                && !contains_any(word_lists::DAIRY)
                && !contains_any(word_lists::EGGS)
                && !contains_any(word_lists::VEGAN_EXTRA)
        }
        Diet::Pescatarian => !contains_any(word_lists::MEATS),
        Diet::DairyFree => !contains_any(word_lists::DAIRY),
        Diet::GlutenFree => {
            recipe.has_tag(word_lists::GLUTEN_FREE_TAG) || !contains_any(word_lists::GLUTEN)
        }
    }
}
