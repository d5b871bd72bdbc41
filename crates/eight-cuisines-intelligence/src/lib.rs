// ABOUTME: Cuisine classification and dietary filtering for the Eight Cuisines platform
// ABOUTME: Balances recipes across eight regional buckets and screens ingredients by diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Eight Cuisines Intelligence
//!
//! Deterministic, I/O-free algorithms over already-fetched recipes:
//!
//! - **classifier**: assigns every recipe to exactly one of the eight
//!   cuisine buckets, keeping bucket sizes balanced
//! - **diet**: decides whether a recipe's ingredients fit a diet
//! - **config**: keyword and anchor tables driving the classifier

/// Bucket assignment with load balancing
pub mod classifier;
/// Classification tables (display names, keywords, anchors)
pub mod config;
/// Ingredient-based dietary screening
pub mod diet;

pub use classifier::{BucketLoad, Classification, CuisineClassifier};
pub use config::{ClassificationConfig, CuisineProfile};
pub use diet::passes_diet;
