// ABOUTME: System-wide constants for upstream endpoints, query limits and fixed identifiers
// ABOUTME: Shared by the classifier, providers, mirror routes and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values shared across crates. Anything a deployment may want to
//! change (base URLs, pool area, mirror candidates) is also exposed through
//! the server configuration, with these values as defaults.

/// Service names used in logs and error details
pub mod service_names {
    /// Name of the mirror service binary
    pub const EIGHT_CUISINES_SERVER: &str = "eight-cuisines-server";
    /// Upstream public recipe API
    pub const MEALDB: &str = "TheMealDB";
    /// Backend mirror consumed by the orchestrator
    pub const MIRROR: &str = "recipe mirror";
}

/// Upstream recipe API
pub mod upstream {
    /// Public `TheMealDB` v1 base URL (free test key)
    pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

    /// Area whose recipes form the browsing pool when no ingredient is given
    pub const DEFAULT_POOL_AREA: &str = "Chinese";

    /// Number of numbered `strIngredientN` / `strMeasureN` slots in a meal
    pub const INGREDIENT_SLOTS: usize = 20;

    /// Fixed, non-personalized top picks
    pub const TOP_PICK_IDS: [&str; 5] = ["52946", "52952", "52948", "52949", "52950"];
}

/// Query limits
pub mod limits {
    /// Ingredients considered per search
    pub const MAX_QUERY_INGREDIENTS: usize = 3;

    /// Default number of meals returned by a search
    pub const DEFAULT_SEARCH_LIMIT: usize = 200;

    /// Upper bound for a search limit
    pub const MAX_SEARCH_LIMIT: usize = 500;

    /// Default number of top picks returned
    pub const DEFAULT_TOP_LIMIT: usize = 5;

    /// Upper bound for the top picks limit
    pub const MAX_TOP_LIMIT: usize = 50;
}

/// Mirror mount points and probe defaults
pub mod mirror {
    /// Path prefix under which the mirror API is mounted besides `/`
    pub const API_PREFIX: &str = "/api";

    /// Default bound for a single health probe in milliseconds
    pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2000;
}

/// HTTP server defaults
pub mod server {
    /// Default listening port of the mirror service
    pub const DEFAULT_HTTP_PORT: u16 = 8888;

    /// Default bound on handling one inbound request, in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
}
