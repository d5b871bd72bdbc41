// ABOUTME: Recipe fixtures shaped like upstream Chinese-area meals
// ABOUTME: Builds in-memory sources and catalogs over the fixtures for pipeline tests

use eight_cuisines::search::RecipeCatalog;
use eight_cuisines_core::models::Recipe;
use eight_cuisines_intelligence::ClassificationConfig;
use eight_cuisines_providers::InMemoryRecipeSource;
use std::sync::Arc;

fn meal(id: &str, name: &str, category: &str, ingredients: &[(&str, &str)]) -> Recipe {
    ingredients.iter().fold(
        Recipe::new(id, name)
            .with_area("Chinese")
            .with_category(category)
            .with_instructions(format!("Prepare the {name}."))
            .with_thumbnail(format!("https://img.example.com/{id}.jpg")),
        |recipe, (ingredient, measure)| recipe.with_ingredient(*ingredient, *measure),
    )
}

/// Twelve Chinese-area meals covering every diet outcome
pub fn chinese_recipes() -> Vec<Recipe> {
    vec![
        meal(
            "52945",
            "Kung Pao Chicken",
            "Chicken",
            &[("Chicken", "500g"), ("Peanuts", "50g"), ("Soy Sauce", "2 tbsp"), ("Chilli", "3")],
        )
        .with_tags(["Spicy"]),
        meal(
            "52946",
            "Kung Po Prawns",
            "Seafood",
            &[("King Prawns", "400g"), ("Ginger", "1 tsp"), ("Peanuts", "30g")],
        ),
        meal(
            "52947",
            "Mapo Tofu",
            "Vegetarian",
            &[("Tofu", "400g"), ("Chilli Bean Paste", "2 tbsp"), ("Spring Onions", "2")],
        ),
        meal(
            "52948",
            "Wontons",
            "Pork",
            &[("Pork", "250g"), ("Wonton Skin", "20"), ("Ginger", "1 tsp")],
        ),
        meal(
            "52949",
            "Sweet and Sour Pork",
            "Pork",
            &[("Pork", "300g"), ("Egg", "1"), ("Vinegar", "3 tbsp"), ("Sugar", "2 tbsp")],
        ),
        meal(
            "52950",
            "Szechuan Beef",
            "Beef",
            &[("Beef", "400g"), ("Chilli", "2"), ("Garlic", "3 cloves")],
        ),
        meal(
            "52951",
            "Chicken Congee",
            "Chicken",
            &[("Chicken", "200g"), ("Rice", "150g"), ("Ginger", "1 tsp")],
        ),
        meal(
            "52952",
            "Beef Lo Mein",
            "Beef",
            &[("Beef", "250g"), ("Egg Noodles", "200g"), ("Broccoli", "1 head")],
        ),
        meal(
            "52953",
            "Stir-Fried Bok Choy",
            "Vegan",
            &[("Bok Choy", "4"), ("Garlic", "2 cloves"), ("Sesame Oil", "1 tsp")],
        )
        .with_tags(["Vegan", "Gluten Free"]),
        meal(
            "52954",
            "Steamed Fish with Ginger",
            "Seafood",
            &[("White Fish", "2 fillets"), ("Ginger", "2 tsp"), ("Spring Onions", "2")],
        ),
        meal(
            "52955",
            "Dongpo Pork",
            "Pork",
            &[("Pork Belly", "600g"), ("Shaoxing Wine", "100ml"), ("Sugar", "2 tbsp")],
        ),
        meal(
            "52956",
            "Egg Fried Rice",
            "Side",
            &[("Rice", "300g"), ("Egg", "2"), ("Peas", "100g"), ("Butter", "1 tbsp")],
        ),
    ]
}

/// `count` Chinese-area chicken dishes with ids `60000..`
pub fn chicken_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            meal(
                &format!("{}", 60_000 + i),
                &format!("Chicken Dish {i}"),
                "Chicken",
                &[("Chicken", "300g"), ("Garlic", "2 cloves")],
            )
        })
        .collect()
}

/// In-memory source over `recipes`
pub fn in_memory(recipes: Vec<Recipe>) -> Arc<InMemoryRecipeSource> {
    Arc::new(InMemoryRecipeSource::new(recipes))
}

/// Catalog with default tables over `recipes`
pub fn catalog(recipes: Vec<Recipe>) -> RecipeCatalog {
    RecipeCatalog::new(in_memory(recipes), Arc::new(ClassificationConfig::default()))
}
