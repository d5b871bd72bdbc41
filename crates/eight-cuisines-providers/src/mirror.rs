// ABOUTME: HTTP client for a recipe mirror exposing health, cuisines, recipes, top and recipe detail
// ABOUTME: Resolves the first healthy mirror among configured candidate base URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Mirror Client
//!
//! A mirror runs the same search pipeline server-side and answers the mirror
//! API (see the `eight-cuisines-server` binary). The orchestrator probes
//! candidate base URLs once with [`MirrorClient::resolve`] and talks to the
//! winner for the rest of its lifetime.

use eight_cuisines_core::constants::service_names;
use eight_cuisines_core::errors::ProviderError;
use eight_cuisines_core::models::{
    CuisineInfo, CuisineList, MealSummary, RecipeDetail, RecipeEnvelope, SearchQuery,
    SearchResult,
};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for one resolved mirror base URL
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: Client,
    base_url: String,
}

impl MirrorClient {
    /// Create a client for `base_url`, e.g. `http://localhost:8888/api`
    #[must_use]
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe each candidate in order and return a client for the first one
    /// whose `/health` answers 2xx within `probe_timeout`
    pub async fn resolve(
        http: &Client,
        candidates: &[String],
        probe_timeout: Duration,
    ) -> Option<Self> {
        for candidate in candidates {
            let mirror = Self::new(http.clone(), candidate.as_str());
            match mirror.health(probe_timeout).await {
                Ok(()) => {
                    info!(mirror = %mirror.base_url, "Recipe mirror resolved");
                    return Some(mirror);
                }
                Err(e) => debug!(mirror = %candidate, error = %e, "Mirror candidate rejected"),
            }
        }
        info!(
            candidates = candidates.len(),
            "No recipe mirror available, using upstream directly"
        );
        None
    }

    /// `GET {base}/health`, succeeding on any 2xx answer
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout or non-2xx status
    pub async fn health(&self, timeout: Duration) -> Result<(), ProviderError> {
        let url = self.endpoint(&["health"])?;
        let response = self
            .http
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(service_names::MIRROR, &e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProviderError::http_status(
                service_names::MIRROR,
                status.as_u16(),
            ))
        }
    }

    /// `GET {base}/recipes`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or bad body
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, ProviderError> {
        let url = self.endpoint(&["recipes"])?;
        self.get_json(url, &query.to_query_pairs()).await
    }

    /// `GET {base}/cuisines`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or bad body
    pub async fn cuisines(&self) -> Result<Vec<CuisineInfo>, ProviderError> {
        let url = self.endpoint(&["cuisines"])?;
        let list: CuisineList = self.get_json(url, &[]).await?;
        Ok(list.cuisines)
    }

    /// `GET {base}/top?limit=`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or bad body
    pub async fn top(&self, limit: usize) -> Result<SearchResult<MealSummary>, ProviderError> {
        let url = self.endpoint(&["top"])?;
        self.get_json(url, &[("limit", limit.to_string())]).await
    }

    /// `GET {base}/recipe/:id`, `None` on 404
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, other non-2xx status or bad body
    pub async fn recipe(&self, id: &str) -> Result<Option<RecipeDetail>, ProviderError> {
        let url = self.endpoint(&["recipe", id])?;
        match self.get_json::<RecipeEnvelope>(url, &[]).await {
            Ok(envelope) => Ok(Some(envelope.meal)),
            Err(ProviderError::HttpStatus { status_code, .. })
                if status_code == StatusCode::NOT_FOUND.as_u16() =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ProviderError::network(service_names::MIRROR, format!("invalid mirror URL: {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::network(service_names::MIRROR, "mirror URL has no path")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(service_names::MIRROR, &e))?;

        let status = response.status();
        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                warn!(url = %url, status = status.as_u16(), "Mirror returned error status");
            }
            return Err(ProviderError::http_status(
                service_names::MIRROR,
                status.as_u16(),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(service_names::MIRROR, &e))
    }
}
