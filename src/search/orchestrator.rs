// ABOUTME: Search orchestrator choosing between a resolved mirror and the direct upstream pipeline
// ABOUTME: Resolves the mirror once per session and turns upstream failures into user notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Search Orchestrator
//!
//! Entry point for callers that render results. Every operation follows the
//! same policy:
//!
//! - The first call probes the configured mirror candidates. The outcome is
//!   kept for the orchestrator's lifetime; a session that found no mirror
//!   never probes again.
//! - A resolved mirror is asked first and a non-empty answer is trusted.
//! - Otherwise the direct pipeline runs against the upstream API.
//! - Failures never propagate. The caller gets an empty value and a
//!   [`SearchNotice`] to display.

use crate::config::ServerConfig;
use crate::logging::AppLogger;
use crate::search::catalog::RecipeCatalog;
use crate::search::generation::{Generation, SearchGeneration};
use eight_cuisines_core::constants::{limits, mirror, service_names, upstream};
use eight_cuisines_core::models::{
    CuisineInfo, MealSummary, RecipeDetail, SearchQuery, SearchResult,
};
use eight_cuisines_intelligence::ClassificationConfig;
use eight_cuisines_providers::{build_client, MealDbClient, MirrorClient, RecipeSource};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Construction-time settings of a [`SearchOrchestrator`]
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Mirror base URLs probed in order; empty means direct mode
    pub mirror_candidates: Vec<String>,
    /// Bound on a single health probe
    pub probe_timeout: Duration,
    /// Area listed when a search names no ingredient
    pub pool_area: String,
    /// Fixed top picks
    pub top_ids: Vec<String>,
    /// Classification tables for the direct pipeline
    pub classification: Arc<ClassificationConfig>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            mirror_candidates: Vec::new(),
            probe_timeout: Duration::from_millis(mirror::DEFAULT_PROBE_TIMEOUT_MS),
            pool_area: upstream::DEFAULT_POOL_AREA.to_owned(),
            top_ids: upstream::TOP_PICK_IDS.iter().map(|id| (*id).to_owned()).collect(),
            classification: Arc::new(ClassificationConfig::default()),
        }
    }
}

impl From<&ServerConfig> for OrchestratorConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            mirror_candidates: config.mirror.candidates.clone(),
            probe_timeout: config.mirror.probe_timeout(),
            pool_area: config.mealdb.pool_area.clone(),
            ..Self::default()
        }
    }
}

/// Where the orchestrator sends searches for the rest of its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// A mirror answered the health probe at this base URL
    Mirror(String),
    /// No mirror answered; the upstream API is used directly
    Direct,
}

/// Which path produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// The resolved mirror
    Mirror,
    /// The direct upstream pipeline
    Upstream,
    /// Tables compiled into the binary
    BuiltIn,
}

/// User-visible message attached to an empty value after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    /// A recipe search failed
    RecipesUnavailable,
    /// The top picks could not be loaded
    TopPicksUnavailable,
    /// A recipe detail could not be loaded
    RecipeUnavailable,
}

impl SearchNotice {
    /// Text shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RecipesUnavailable => "Failed to load recipes. Please try again.",
            Self::TopPicksUnavailable => "Failed to load Top 5. Please try again.",
            Self::RecipeUnavailable => "Failed to load recipe. Please try again.",
        }
    }
}

impl fmt::Display for SearchNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A value together with its origin and an optional notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// The value, empty when `notice` is set
    pub value: T,
    /// Path that produced `value`
    pub source: ResultSource,
    /// Set when a failure was swallowed
    pub notice: Option<SearchNotice>,
}

impl<T> Outcome<T> {
    const fn ok(value: T, source: ResultSource) -> Self {
        Self {
            value,
            source,
            notice: None,
        }
    }

    const fn failed(value: T, notice: SearchNotice) -> Self {
        Self {
            value,
            source: ResultSource::Upstream,
            notice: Some(notice),
        }
    }
}

/// Answer to one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// Generation this search was issued under
    pub generation: Generation,
    /// Capped meals and pre-truncation total
    pub result: SearchResult<MealSummary>,
    /// Path that produced `result`
    pub source: ResultSource,
    /// Set when the search failed and `result` is empty
    pub notice: Option<SearchNotice>,
}

/// Mirror-first, upstream-fallback search session
pub struct SearchOrchestrator {
    http: Client,
    catalog: RecipeCatalog,
    mirror_candidates: Vec<String>,
    probe_timeout: Duration,
    mirror: OnceCell<Option<MirrorClient>>,
    generations: SearchGeneration,
}

impl SearchOrchestrator {
    /// Create an orchestrator over an explicit recipe source
    #[must_use]
    pub fn new(http: Client, source: Arc<dyn RecipeSource>, config: OrchestratorConfig) -> Self {
        let catalog = RecipeCatalog::new(source, config.classification)
            .with_pool_area(config.pool_area)
            .with_top_ids(config.top_ids);

        Self {
            http,
            catalog,
            mirror_candidates: config.mirror_candidates,
            probe_timeout: config.probe_timeout,
            mirror: OnceCell::new(),
            generations: SearchGeneration::new(),
        }
    }

    /// Create an orchestrator talking to the configured upstream API
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let http = build_client(&config.http_client);
        let mealdb = MealDbClient::new(http.clone(), config.mealdb.base_url.as_str());
        Self::new(http, Arc::new(mealdb), OrchestratorConfig::from(config))
    }

    /// Direct pipeline used when no mirror answers
    #[must_use]
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    async fn mirror(&self) -> Option<&MirrorClient> {
        self.mirror
            .get_or_init(|| async {
                let resolved =
                    MirrorClient::resolve(&self.http, &self.mirror_candidates, self.probe_timeout)
                        .await;
                AppLogger::log_mirror_resolution(
                    resolved.as_ref().map(MirrorClient::base_url),
                    self.mirror_candidates.len(),
                );
                resolved
            })
            .await
            .as_ref()
    }

    /// Resolve the mirror if not done yet and report the session mode
    pub async fn mode(&self) -> SearchMode {
        self.mirror().await.map_or(SearchMode::Direct, |mirror| {
            SearchMode::Mirror(mirror.base_url().to_owned())
        })
    }

    /// Whether no search was started after `generation`
    #[must_use]
    pub fn is_latest(&self, generation: Generation) -> bool {
        self.generations.is_latest(generation)
    }

    /// Run a search under a new generation
    pub async fn search(&self, query: &SearchQuery) -> SearchResponse {
        let generation = self.generations.next();

        if let Some(mirror) = self.mirror().await {
            match mirror.search(query).await {
                Ok(result) if !result.is_empty() => {
                    AppLogger::log_search(
                        service_names::MIRROR,
                        query.ingredients(),
                        result.total,
                        result.meals.len(),
                    );
                    return SearchResponse {
                        generation,
                        result,
                        source: ResultSource::Mirror,
                        notice: None,
                    };
                }
                Ok(_) => debug!("Mirror returned no meals, searching upstream directly"),
                Err(e) => warn!(error = %e, "Mirror search failed, searching upstream directly"),
            }
        }

        match self.catalog.search(query).await {
            Ok(result) => {
                AppLogger::log_search(
                    self.catalog.source_name(),
                    query.ingredients(),
                    result.total,
                    result.meals.len(),
                );
                SearchResponse {
                    generation,
                    result: result.map(|recipe| recipe.summary()),
                    source: ResultSource::Upstream,
                    notice: None,
                }
            }
            Err(e) => {
                AppLogger::log_upstream_failure("search", e.provider(), &e.to_string());
                SearchResponse {
                    generation,
                    result: SearchResult::empty(),
                    source: ResultSource::Upstream,
                    notice: Some(SearchNotice::RecipesUnavailable),
                }
            }
        }
    }

    /// Run a search and return it only if no newer search started meanwhile
    pub async fn search_latest(&self, query: &SearchQuery) -> Option<SearchResponse> {
        let response = self.search(query).await;
        if self.is_latest(response.generation) {
            Some(response)
        } else {
            debug!(
                generation = response.generation,
                latest = self.generations.latest(),
                "Discarding superseded search result"
            );
            None
        }
    }

    /// The eight cuisines, from the mirror when it has them
    pub async fn cuisines(&self) -> Outcome<Vec<CuisineInfo>> {
        if let Some(mirror) = self.mirror().await {
            match mirror.cuisines().await {
                Ok(cuisines) if !cuisines.is_empty() => {
                    return Outcome::ok(cuisines, ResultSource::Mirror);
                }
                Ok(_) => debug!("Mirror listed no cuisines, using built-in table"),
                Err(e) => warn!(error = %e, "Mirror cuisines failed, using built-in table"),
            }
        }
        Outcome::ok(self.catalog.cuisines(), ResultSource::BuiltIn)
    }

    /// Fixed top picks, `limit` clamped to `1..=50`
    pub async fn top_picks(&self, limit: usize) -> Outcome<SearchResult<MealSummary>> {
        let limit = limit.clamp(1, limits::MAX_TOP_LIMIT);

        if let Some(mirror) = self.mirror().await {
            match mirror.top(limit).await {
                Ok(result) if !result.is_empty() => {
                    return Outcome::ok(result, ResultSource::Mirror);
                }
                Ok(_) => debug!("Mirror returned no top picks, looking them up directly"),
                Err(e) => warn!(error = %e, "Mirror top picks failed, looking them up directly"),
            }
        }

        match self.catalog.top_picks(limit).await {
            Ok(result) => Outcome::ok(result, ResultSource::Upstream),
            Err(e) => {
                AppLogger::log_upstream_failure("top_picks", e.provider(), &e.to_string());
                Outcome::failed(SearchResult::empty(), SearchNotice::TopPicksUnavailable)
            }
        }
    }

    /// Full recipe by id; `None` with no notice when nobody knows the id
    pub async fn recipe_detail(&self, id: &str) -> Outcome<Option<RecipeDetail>> {
        if let Some(mirror) = self.mirror().await {
            match mirror.recipe(id).await {
                Ok(Some(detail)) => return Outcome::ok(Some(detail), ResultSource::Mirror),
                Ok(None) => debug!(recipe_id = %id, "Mirror has no such recipe, asking upstream"),
                Err(e) => warn!(recipe_id = %id, error = %e, "Mirror recipe failed, asking upstream"),
            }
        }

        match self.catalog.recipe(id).await {
            Ok(found) => Outcome::ok(found.map(RecipeDetail::from), ResultSource::Upstream),
            Err(e) => {
                AppLogger::log_upstream_failure("recipe_detail", e.provider(), &e.to_string());
                Outcome::failed(None, SearchNotice::RecipeUnavailable)
            }
        }
    }
}
