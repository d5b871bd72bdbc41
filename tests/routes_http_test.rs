// ABOUTME: HTTP-level tests for the mirror routes through the full middleware stack
// ABOUTME: Exercises health, cuisines, search, top picks, recipe detail, errors and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use axum::Router;
use eight_cuisines::config::ServerConfig;
use eight_cuisines::search::RecipeCatalog;
use eight_cuisines::server::build_router;
use eight_cuisines_core::models::{CuisineList, MealSummary, SearchResult};
use eight_cuisines_intelligence::ClassificationConfig;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{catalog, chinese_recipes, in_memory};
use serde_json::Value;
use std::sync::Arc;

fn app() -> Router {
    build_router(Arc::new(catalog(chinese_recipes())), &ServerConfig::default())
}

fn ids(result: &SearchResult<MealSummary>) -> Vec<&str> {
    result.meals.iter().map(|m| m.id.as_str()).collect()
}

// ============================================================================
// Health and cuisines
// ============================================================================

#[tokio::test]
async fn test_health_at_root_and_api_prefix() {
    for path in ["/health", "/api/health"] {
        let response = AxumTestRequest::get(path).send(app()).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{path}");
        let body: Value = response.json();
        assert_eq!(body["ok"], true);
    }
}

#[tokio::test]
async fn test_cuisines_lists_eight_buckets_in_order() {
    let response = AxumTestRequest::get("/api/cuisines").send(app()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let list: CuisineList = response.json();
    assert_eq!(list.cuisines.len(), 8);
    assert_eq!(list.cuisines[0].slug.as_str(), "lu");
    assert_eq!(list.cuisines[0].name, "Shandong (Lu)");
    assert_eq!(list.cuisines[7].slug.as_str(), "chuan");
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_by_ingredient_with_limit() {
    let response = AxumTestRequest::get("/recipes?ingredients=chicken&limit=1")
        .send(app())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52945"]);
    assert_eq!(result.total, 2);
    assert_eq!(result.meals[0].thumb, "https://img.example.com/52945.jpg");
}

#[tokio::test]
async fn test_search_by_cuisine() {
    let response = AxumTestRequest::get("/api/recipes?cuisine=chuan")
        .send(app())
        .await;
    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52945", "52947"]);
}

#[tokio::test]
async fn test_search_with_lenient_params() {
    let response = AxumTestRequest::get("/recipes?diet=vegan&cuisine=nowhere&limit=abc")
        .send(app())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52947", "52953"]);
}

#[tokio::test]
async fn test_search_repeated_key_keeps_first_value() {
    let response = AxumTestRequest::get("/recipes?diet=vegan&diet=any&limit=abc&limit=1")
        .send(app())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52947", "52953"]);
    assert_eq!(result.total, 2);
}

#[tokio::test]
async fn test_search_chicken_vegetarian_is_empty() {
    let response = AxumTestRequest::get("/recipes?ingredients=chicken&diet=vegetarian")
        .send(app())
        .await;
    let result: SearchResult<MealSummary> = response.json();
    assert!(result.meals.is_empty());
    assert_eq!(result.total, 0);
}

#[tokio::test]
async fn test_search_intersects_ingredients() {
    let response = AxumTestRequest::get("/recipes?ingredients=ginger,%20spring%20onions")
        .send(app())
        .await;
    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52954"]);
}

// ============================================================================
// Top picks and detail
// ============================================================================

#[tokio::test]
async fn test_top_with_limit() {
    let response = AxumTestRequest::get("/top?limit=2").send(app()).await;
    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52946", "52952"]);
    assert_eq!(result.total, 5);
}

#[tokio::test]
async fn test_top_with_invalid_limit_uses_default() {
    let response = AxumTestRequest::get("/api/top?limit=abc").send(app()).await;
    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(result.meals.len(), 5);
    assert_eq!(result.total, 5);
}

#[tokio::test]
async fn test_top_repeated_limit_keeps_first_value() {
    let response = AxumTestRequest::get("/top?limit=2&limit=4").send(app()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let result: SearchResult<MealSummary> = response.json();
    assert_eq!(ids(&result), vec!["52946", "52952"]);
}

#[tokio::test]
async fn test_recipe_detail() {
    let response = AxumTestRequest::get("/recipe/52947").send(app()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let meal = &body["meal"];
    assert_eq!(meal["id"], "52947");
    assert_eq!(meal["name"], "Mapo Tofu");
    assert_eq!(meal["area"], "Chinese");
    assert_eq!(meal["ingredients"].as_array().unwrap().len(), 3);
    assert_eq!(meal["ingredients"][0]["ingredient"], "Tofu");
}

#[tokio::test]
async fn test_unknown_recipe_is_not_found() {
    let response = AxumTestRequest::get("/api/recipe/unknown").send(app()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Recipe unknown not found");
}

// ============================================================================
// Upstream failures and CORS
// ============================================================================

#[tokio::test]
async fn test_upstream_outage_maps_to_bad_gateway() {
    let source = in_memory(chinese_recipes());
    source.set_failing(true);
    let catalog = RecipeCatalog::new(source, Arc::new(ClassificationConfig::default()));
    let app = build_router(Arc::new(catalog), &ServerConfig::default());

    for path in ["/recipes?ingredients=chicken", "/top", "/recipe/52947"] {
        let response = AxumTestRequest::get(path).send(app.clone()).await;
        assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY, "{path}");
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_UNAVAILABLE");
        assert_eq!(body["error"]["details"]["provider"], "in-memory");
    }

    // health does not touch upstream
    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:5173")
        .send(app())
        .await;
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = AxumTestRequest::options("/api/recipes")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .send(app())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.header("access-control-allow-methods").is_some());
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let mut config = ServerConfig::default();
    config.cors.allowed_origins = vec!["https://cuisines.example.com".to_owned()];
    let app = build_router(Arc::new(catalog(chinese_recipes())), &config);

    let allowed = AxumTestRequest::get("/health")
        .header("origin", "https://cuisines.example.com")
        .send(app.clone())
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        Some("https://cuisines.example.com")
    );

    let denied = AxumTestRequest::get("/health")
        .header("origin", "https://evil.example.com")
        .send(app)
        .await;
    assert!(denied.header("access-control-allow-origin").is_none());
}
