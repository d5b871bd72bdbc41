// ABOUTME: Local HTTP stubs standing in for the upstream recipe API and for recipe mirrors
// ABOUTME: Each stub binds 127.0.0.1 on an ephemeral port and serves until the test ends

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use eight_cuisines_core::models::{CuisineInfo, CuisineSlug, MealSummary, Recipe, SearchResult};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ============================================================================
// Upstream recipe API
// ============================================================================

fn summary_json(recipe: &Recipe) -> Value {
    json!({
        "strMeal": recipe.name,
        "strMealThumb": recipe.thumbnail_url,
        "idMeal": recipe.id,
    })
}

fn meal_json(recipe: &Recipe) -> Value {
    let mut meal = Map::new();
    meal.insert("idMeal".into(), json!(recipe.id));
    meal.insert("strMeal".into(), json!(recipe.name));
    meal.insert("strCategory".into(), json!(recipe.category));
    meal.insert("strArea".into(), json!(recipe.area));
    meal.insert("strInstructions".into(), json!(recipe.instructions));
    meal.insert("strMealThumb".into(), json!(recipe.thumbnail_url));
    meal.insert("strTags".into(), json!(recipe.tags.join(",")));
    meal.insert("strYoutube".into(), json!(recipe.youtube_url.clone().unwrap_or_default()));
    meal.insert("strSource".into(), Value::Null);
    for n in 1..=20 {
        let line = recipe.ingredients.get(n - 1);
        meal.insert(
            format!("strIngredient{n}"),
            line.map_or_else(|| json!(""), |l| json!(l.ingredient)),
        );
        meal.insert(
            format!("strMeasure{n}"),
            line.map_or_else(|| json!(" "), |l| json!(l.measure)),
        );
    }
    Value::Object(meal)
}

fn envelope(meals: Vec<Value>) -> Json<Value> {
    if meals.is_empty() {
        Json(json!({ "meals": null }))
    } else {
        Json(json!({ "meals": meals }))
    }
}

async fn mealdb_filter(
    State(recipes): State<Arc<Vec<Recipe>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let meals = recipes
        .iter()
        .filter(|recipe| {
            params.get("i").map_or_else(
                || {
                    params
                        .get("a")
                        .is_some_and(|area| recipe.area.eq_ignore_ascii_case(area))
                },
                |ingredient| {
                    recipe
                        .ingredients
                        .iter()
                        .any(|line| line.ingredient.eq_ignore_ascii_case(ingredient))
                },
            )
        })
        .map(summary_json)
        .collect();
    envelope(meals)
}

async fn mealdb_lookup(
    State(recipes): State<Arc<Vec<Recipe>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let id = params.get("i").cloned().unwrap_or_default();
    envelope(
        recipes
            .iter()
            .filter(|recipe| recipe.id == id)
            .map(meal_json)
            .collect(),
    )
}

/// Upstream API answering `filter.php` and `lookup.php` from `recipes`
pub fn mealdb_stub(recipes: Vec<Recipe>) -> Router {
    Router::new()
        .route("/filter.php", get(mealdb_filter))
        .route("/lookup.php", get(mealdb_lookup))
        .with_state(Arc::new(recipes))
}

/// Upstream API failing every request with `status`
pub fn failing_stub(status: StatusCode) -> Router {
    Router::new().fallback(move || async move { (status, "upstream down") })
}

/// Upstream API answering every request with a body that is not JSON
pub fn garbage_stub() -> Router {
    Router::new().fallback(|| async { "<html>maintenance</html>" })
}

// ============================================================================
// Recipe mirrors
// ============================================================================

/// A mirror whose `/health` answers after `delay`
pub fn slow_mirror(delay: Duration) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            sleep(delay).await;
            Json(json!({ "ok": true }))
        }),
    )
}

/// A mirror whose `/health` fails with 500 and counts the probes
pub fn unhealthy_mirror(probes: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/health",
        get(move || {
            let probes = Arc::clone(&probes);
            async move {
                probes.fetch_add(1, Ordering::SeqCst);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }),
    )
}

/// A healthy mirror answering every list endpoint with `meals`
pub fn fixed_mirror(meals: Vec<MealSummary>) -> Router {
    let result = SearchResult {
        total: meals.len(),
        meals,
    };
    let cuisines = vec![CuisineInfo {
        slug: CuisineSlug::Chuan,
        name: "Mirror Sichuan".to_owned(),
    }];

    Router::new()
        .route("/health", get(|| async { Json(json!({ "ok": true })) }))
        .route(
            "/recipes",
            get({
                let result = result.clone();
                move || async move { Json(result) }
            }),
        )
        .route("/top", get(move || async move { Json(result) }))
        .route(
            "/cuisines",
            get(move || async move { Json(json!({ "cuisines": cuisines })) }),
        )
}
