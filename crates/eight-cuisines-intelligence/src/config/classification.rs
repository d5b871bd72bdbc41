// ABOUTME: Classification tables mapping cuisines to keywords and well-known dish names to cuisines
// ABOUTME: One shared instance drives both the mirror routes and the direct search pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification Configuration
//!
//! Keyword lists are matched as case-insensitive substrings against a
//! recipe's name, area, category and tags. Anchors are exact recipe names
//! that always prefer a specific bucket.

use eight_cuisines_core::models::{CuisineInfo, CuisineSlug};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Display name and keywords of one cuisine bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineProfile {
    /// Bucket slug
    pub slug: CuisineSlug,
    /// Display name
    pub name: String,
    /// Lowercase keywords, normalized on deserialize
    #[serde(deserialize_with = "deserialize_keywords")]
    pub keywords: Vec<String>,
}

/// Trim and lowercase keywords, dropping empty ones
fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|kw| kw.as_ref().trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer).map(normalize_keywords)
}

impl CuisineProfile {
    fn builtin(slug: CuisineSlug, keywords: &[&str]) -> Self {
        Self {
            slug,
            name: slug.display_name().to_owned(),
            keywords: normalize_keywords(keywords),
        }
    }

    /// Whether any keyword occurs in `haystack`, which must already be lowercase
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|kw| haystack.contains(kw.as_str()))
    }
}

/// Keyword and anchor tables for the cuisine classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// One profile per slug, iterated in fixed bucket order
    profiles: BTreeMap<CuisineSlug, CuisineProfile>,
    /// Exact recipe name to preferred slug
    anchors: HashMap<String, CuisineSlug>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        let profiles = [
            CuisineProfile::builtin(
                CuisineSlug::Lu,
                &["shandong", "lu", "scallion", "braise", "dezhou", "bao"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Yue,
                &[
                    "cantonese",
                    "yue",
                    "guangdong",
                    "dim sum",
                    "steamed",
                    "char siu",
                    "soy sauce",
                ],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Min,
                &["fujian", "min", "oyster", "soup", "fo tiao", "lamian"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Su,
                &["jiangsu", "su", "yangzhou", "lion head", "sweet", "crab"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Zhe,
                &["zhejiang", "zhe", "hangzhou", "dongpo", "shaoxing"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Xiang,
                &["hunan", "xiang", "duo jiao", "smoked", "spicy"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Hui,
                &["anhui", "hui", "ham", "bamboo", "stew"],
            ),
            CuisineProfile::builtin(
                CuisineSlug::Chuan,
                &[
                    "sichuan", "chuan", "mapo", "ma po", "kung pao", "mala", "chili", "pepper",
                    "szechuan",
                ],
            ),
        ]
        .into_iter()
        .map(|profile| (profile.slug, profile))
        .collect();

        let anchors = [
            ("Chicken Congee", CuisineSlug::Yue),
            ("Wontons", CuisineSlug::Yue),
            ("Shrimp Chow Fun", CuisineSlug::Yue),
            ("Char Siu", CuisineSlug::Yue),
            ("Sweet and Sour Pork", CuisineSlug::Yue),
            ("Kung Pao Chicken", CuisineSlug::Chuan),
            ("Mapo Tofu", CuisineSlug::Chuan),
            ("Ma Po Tofu", CuisineSlug::Chuan),
            ("Szechuan Beef", CuisineSlug::Chuan),
            ("Hot and Sour Soup", CuisineSlug::Chuan),
            ("Beef Lo Mein", CuisineSlug::Lu),
            ("General Tsos Chicken", CuisineSlug::Zhe),
        ]
        .into_iter()
        .map(|(name, slug)| (name.to_owned(), slug))
        .collect();

        Self { profiles, anchors }
    }
}

impl ClassificationConfig {
    /// Slug anchored to this exact recipe name
    #[must_use]
    pub fn anchor_for(&self, name: &str) -> Option<CuisineSlug> {
        self.anchors.get(name).copied()
    }

    /// First bucket in fixed order with a keyword occurring in `haystack`
    ///
    /// `haystack` is lowercased here; callers pass the raw joined text.
    #[must_use]
    pub fn keyword_match(&self, haystack: &str) -> Option<CuisineSlug> {
        let haystack = haystack.to_lowercase();
        self.profiles
            .values()
            .find(|profile| profile.matches(&haystack))
            .map(|profile| profile.slug)
    }

    /// Profile of one bucket
    #[must_use]
    pub fn profile(&self, slug: CuisineSlug) -> Option<&CuisineProfile> {
        self.profiles.get(&slug)
    }

    /// The `/cuisines` listing in fixed bucket order
    #[must_use]
    pub fn cuisines(&self) -> Vec<CuisineInfo> {
        CuisineSlug::ALL
            .into_iter()
            .map(|slug| CuisineInfo {
                slug,
                name: self
                    .profiles
                    .get(&slug)
                    .map_or_else(|| slug.display_name().to_owned(), |p| p.name.clone()),
            })
            .collect()
    }

    /// Add or replace an anchor
    #[must_use]
    pub fn with_anchor(mut self, name: impl Into<String>, slug: CuisineSlug) -> Self {
        self.anchors.insert(name.into(), slug);
        self
    }

    /// Replace the keyword list of one bucket; keywords are lowercased
    #[must_use]
    pub fn with_keywords<I, S>(mut self, slug: CuisineSlug, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = normalize_keywords(keywords);
        self.profiles
            .entry(slug)
            .and_modify(|profile| profile.keywords.clone_from(&keywords))
            .or_insert_with(|| CuisineProfile {
                slug,
                name: slug.display_name().to_owned(),
                keywords,
            });
        self
    }
}
