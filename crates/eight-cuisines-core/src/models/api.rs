// ABOUTME: JSON bodies of the recipe mirror API shared by the server routes and the mirror client
// ABOUTME: Health, cuisine listing and recipe detail envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::cuisine::CuisineInfo;
use super::recipe::RecipeDetail;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `true` when the mirror answers
    pub ok: bool,
}

/// Body of `GET /cuisines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineList {
    /// Buckets in fixed order
    pub cuisines: Vec<CuisineInfo>,
}

/// Body of `GET /recipe/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    /// The requested recipe
    pub meal: RecipeDetail,
}
