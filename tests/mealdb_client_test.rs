// ABOUTME: Integration tests for the upstream and mirror HTTP clients against local stub servers
// ABOUTME: Covers decoding, null meal lists, error classification and end-to-end catalog searches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use eight_cuisines::search::RecipeCatalog;
use eight_cuisines::server;
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{CuisineSlug, SearchQuery};
use eight_cuisines_intelligence::ClassificationConfig;
use eight_cuisines_providers::{
    build_client, HttpClientConfig, MealDbClient, MirrorClient, RecipeSource,
};
use helpers::fixtures::{catalog, chinese_recipes};
use helpers::stub_servers::{failing_stub, garbage_stub, mealdb_stub, spawn};
use std::sync::Arc;
use std::time::Duration;

async fn mealdb() -> MealDbClient {
    let url = spawn(mealdb_stub(chinese_recipes())).await;
    MealDbClient::new(build_client(&HttpClientConfig::default()), url)
}

// ============================================================================
// Upstream client
// ============================================================================

#[tokio::test]
async fn test_filter_by_ingredient() {
    let client = mealdb().await;
    let meals = client.filter_by_ingredient("chicken").await.unwrap();

    let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["52945", "52951"]);
    assert_eq!(meals[0].name, "Kung Pao Chicken");
    assert_eq!(meals[0].thumb, "https://img.example.com/52945.jpg");
}

#[tokio::test]
async fn test_filter_by_area() {
    let client = mealdb().await;
    assert_eq!(client.filter_by_area("Chinese").await.unwrap().len(), 12);
}

#[tokio::test]
async fn test_null_meals_mean_no_match() {
    let client = mealdb().await;
    assert!(client.filter_by_ingredient("unicorn").await.unwrap().is_empty());
    assert!(client.filter_by_area("Atlantis").await.unwrap().is_empty());
    assert!(client.lookup_by_id("1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_decodes_ingredient_slots() {
    let client = mealdb().await;
    let recipe = client.lookup_by_id("52956").await.unwrap().unwrap();

    assert_eq!(recipe.name, "Egg Fried Rice");
    assert_eq!(recipe.area, "Chinese");
    assert_eq!(recipe.category, "Side");
    assert_eq!(recipe.ingredients.len(), 4);
    assert_eq!(recipe.ingredients[3].ingredient, "Butter");
    assert_eq!(recipe.ingredients[3].measure, "1 tbsp");
    assert!(recipe.tags.is_empty());
    assert!(recipe.youtube_url.is_none());
    assert!(recipe.source_url.is_none());
}

#[tokio::test]
async fn test_lookup_keeps_tags() {
    let client = mealdb().await;
    let recipe = client.lookup_by_id("52953").await.unwrap().unwrap();
    assert_eq!(recipe.tags, vec!["Vegan", "Gluten Free"]);
}

#[tokio::test]
async fn test_error_status_is_classified() {
    let url = spawn(failing_stub(StatusCode::SERVICE_UNAVAILABLE)).await;
    let client = MealDbClient::new(build_client(&HttpClientConfig::default()), url);

    let error = client.filter_by_area("Chinese").await.unwrap_err();
    assert!(matches!(
        error,
        ProviderError::HttpStatus {
            status_code: 503,
            ..
        }
    ));
    assert_eq!(error.provider(), "TheMealDB");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let url = spawn(garbage_stub()).await;
    let client = MealDbClient::new(build_client(&HttpClientConfig::default()), url);

    let error = client.lookup_by_id("52945").await.unwrap_err();
    assert!(matches!(error, ProviderError::Decode { .. }), "{error:?}");
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    let client = MealDbClient::new(
        build_client(&HttpClientConfig::default()),
        "http://127.0.0.1:9",
    );
    let error = client.filter_by_area("Chinese").await.unwrap_err();
    assert!(
        matches!(error, ProviderError::Network { .. } | ProviderError::Timeout { .. }),
        "{error:?}"
    );
}

#[tokio::test]
async fn test_catalog_over_upstream_client() {
    let catalog = RecipeCatalog::new(
        Arc::new(mealdb().await),
        Arc::new(ClassificationConfig::default()),
    );

    let query = SearchQuery::from_params(Some("Pork"), None, Some("dairy-free"), None);
    let result = catalog.search(&query).await.unwrap();
    let names: Vec<&str> = result.meals.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Wontons", "Sweet and Sour Pork"]);

    let chuan = SearchQuery::from_params(None, Some("chuan"), None, None);
    let result = catalog.search(&chuan).await.unwrap();
    assert!(result.meals.iter().any(|r| r.name == "Mapo Tofu"));
}

// ============================================================================
// Mirror client
// ============================================================================

async fn mirror() -> MirrorClient {
    let url = spawn(server::mirror_routes(Arc::new(catalog(chinese_recipes())))).await;
    MirrorClient::new(build_client(&HttpClientConfig::default()), format!("{url}/api/"))
}

#[tokio::test]
async fn test_mirror_client_round_trip() {
    let client = mirror().await;
    assert!(client.base_url().ends_with("/api"));
    client.health(Duration::from_secs(2)).await.unwrap();

    let query = SearchQuery::from_params(Some("ginger"), None, Some("pescatarian"), Some("2"));
    let result = client.search(&query).await.unwrap();
    let ids: Vec<&str> = result.meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["52946", "52954"]);
    assert_eq!(result.total, 2);

    let cuisines = client.cuisines().await.unwrap();
    assert_eq!(cuisines.len(), 8);
    assert_eq!(cuisines[7].slug, CuisineSlug::Chuan);

    let top = client.top(3).await.unwrap();
    assert_eq!(top.meals.len(), 3);
    assert_eq!(top.total, 5);
}

#[tokio::test]
async fn test_mirror_client_recipe() {
    let client = mirror().await;

    let detail = client.recipe("52954").await.unwrap().unwrap();
    assert_eq!(detail.name, "Steamed Fish with Ginger");
    assert_eq!(detail.ingredients.len(), 3);

    assert!(client.recipe("000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mirror_resolve_skips_unreachable_candidates() {
    let good = mirror().await.base_url().to_owned();
    let candidates = vec!["http://127.0.0.1:9".to_owned(), good.clone()];

    let resolved = MirrorClient::resolve(
        &build_client(&HttpClientConfig::default()),
        &candidates,
        Duration::from_millis(500),
    )
    .await
    .unwrap();
    assert_eq!(resolved.base_url(), good);
}
