// ABOUTME: Configuration module for eight-cuisines-intelligence crate
// ABOUTME: Re-exports classification table types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-cuisine keywords and name anchors
pub mod classification;

pub use classification::{ClassificationConfig, CuisineProfile};
