// ABOUTME: Cuisine bucket slugs in fixed order and the supported dietary categories
// ABOUTME: Provides strict and lenient parsing from query-string values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight regional cuisine buckets
///
/// Declaration order is the fixed bucket order: keyword checks, least-loaded
/// tie breaks and donor search all walk the buckets in this order, and the
/// derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CuisineSlug {
    /// Shandong
    Lu,
    /// Cantonese
    Yue,
    /// Fujian
    Min,
    /// Jiangsu
    Su,
    /// Zhejiang
    Zhe,
    /// Hunan
    Xiang,
    /// Anhui
    Hui,
    /// Sichuan
    Chuan,
}

impl CuisineSlug {
    /// Number of buckets
    pub const COUNT: usize = 8;

    /// All buckets in fixed order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Lu,
        Self::Yue,
        Self::Min,
        Self::Su,
        Self::Zhe,
        Self::Xiang,
        Self::Hui,
        Self::Chuan,
    ];

    /// Position in the fixed bucket order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lu => "lu",
            Self::Yue => "yue",
            Self::Min => "min",
            Self::Su => "su",
            Self::Zhe => "zhe",
            Self::Xiang => "xiang",
            Self::Hui => "hui",
            Self::Chuan => "chuan",
        }
    }

    /// Human-readable name shown in cuisine pickers
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Lu => "Shandong (Lu)",
            Self::Yue => "Cantonese (Yue)",
            Self::Min => "Fujian (Min)",
            Self::Su => "Jiangsu (Su)",
            Self::Zhe => "Zhejiang (Zhe)",
            Self::Xiang => "Hunan (Xiang)",
            Self::Hui => "Anhui (Hui)",
            Self::Chuan => "Sichuan (Chuan)",
        }
    }

    /// Parse a slug, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for CuisineSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuisineSlug {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::invalid_input(format!("Unknown cuisine slug '{s}'")))
    }
}

/// Entry of the `/cuisines` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineInfo {
    /// Bucket slug
    pub slug: CuisineSlug,
    /// Display name
    pub name: String,
}

impl From<CuisineSlug> for CuisineInfo {
    fn from(slug: CuisineSlug) -> Self {
        Self {
            slug,
            name: slug.display_name().to_owned(),
        }
    }
}

/// Dietary category a recipe can be filtered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    /// No filtering
    #[default]
    Any,
    /// No meat or seafood
    Vegetarian,
    /// No animal products or honey
    Vegan,
    /// No meat, seafood allowed
    Pescatarian,
    /// No dairy
    DairyFree,
    /// No gluten-bearing ingredients
    GlutenFree,
}

impl Diet {
    /// All diets in picker order
    pub const ALL: [Self; 6] = [
        Self::Any,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::DairyFree,
        Self::GlutenFree,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::DairyFree => "dairy-free",
            Self::GlutenFree => "gluten-free",
        }
    }

    /// Lenient parse used for query strings
    ///
    /// Blank, `any`, `any diet` and unrecognised values all mean [`Diet::Any`].
    #[must_use]
    pub fn from_query_value(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!(diet = %value, "Unrecognised diet, treating as any");
            Self::Any
        })
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "" | "any" | "any diet" => Ok(Self::Any),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "pescatarian" => Ok(Self::Pescatarian),
            "dairy-free" => Ok(Self::DairyFree),
            "gluten-free" => Ok(Self::GlutenFree),
            _ => Err(AppError::invalid_input(format!("Unknown diet '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_order_matches_index() {
        for (position, slug) in CuisineSlug::ALL.iter().enumerate() {
            assert_eq!(slug.index(), position);
        }
        assert!(CuisineSlug::Lu < CuisineSlug::Chuan);
    }

    #[test]
    fn test_slug_parsing() {
        assert_eq!(CuisineSlug::parse(" Chuan "), Some(CuisineSlug::Chuan));
        assert_eq!(CuisineSlug::parse("xiang"), Some(CuisineSlug::Xiang));
        assert_eq!(CuisineSlug::parse("mexican"), None);
        assert!("".parse::<CuisineSlug>().is_err());
    }

    #[test]
    fn test_diet_parsing() {
        assert_eq!("Any diet".parse::<Diet>().unwrap(), Diet::Any);
        assert_eq!("DAIRY-FREE".parse::<Diet>().unwrap(), Diet::DairyFree);
        assert!("keto".parse::<Diet>().is_err());
        assert_eq!(Diet::from_query_value("keto"), Diet::Any);
        assert_eq!(Diet::from_query_value("vegan"), Diet::Vegan);
    }

    #[test]
    fn test_diet_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Diet::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");
    }
}
