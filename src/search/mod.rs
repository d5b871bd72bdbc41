// ABOUTME: Recipe search module: direct upstream pipeline, orchestrator and generation counter
// ABOUTME: Re-exports the types callers need to run and render searches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Direct search pipeline over a recipe source
pub mod catalog;
/// Search generation counter
pub mod generation;
/// Mirror-first search orchestration
pub mod orchestrator;

pub use catalog::RecipeCatalog;
pub use generation::{Generation, SearchGeneration};
pub use orchestrator::{
    OrchestratorConfig, Outcome, ResultSource, SearchMode, SearchNotice, SearchOrchestrator,
    SearchResponse,
};
