// ABOUTME: Static read-only knowledge base for food label analysis
// ABOUTME: Keyword matching helpers, E-number extraction, and catalog re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Knowledge Base
//!
//! Every table in this module is a `static` slice scanned in declaration
//! order. Matching is a case-insensitive substring test: callers lowercase
//! the ingredient name once and match it against lowercase keywords.

/// Additive risk catalog with carcinogenicity tags
pub mod additives;
/// Allergen keyword catalog
pub mod allergens;
/// Per-disease avoid-keyword catalog
pub mod diseases;
/// Concerning-ingredient, processing, and health bonus keyword sets
pub mod keywords;

pub use additives::{
    AdditiveEntry, AdditiveRiskLevel, CarcinogenGroup, ADDITIVE_CATALOG,
};
pub use allergens::{AllergenEntry, ALLERGEN_CATALOG};
pub use diseases::{DiseaseEntry, DiseaseRule, DISEASE_CATALOG};
pub use keywords::{
    BonusEntry, ConcernEntry, ConcernKind, HealthBonusKind, BONUS_CATALOG, CONCERN_CATALOG,
};

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// E-number pattern: `E250`, `e-211`, `E 951`, `E150a`
const E_NUMBER_PATTERN: &str = r"(?i)\bE[\s-]?(\d{3,4})[a-z]?\b";

static E_NUMBER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn e_number_regex() -> Option<&'static Regex> {
    E_NUMBER_REGEX
        .get_or_init(|| match Regex::new(E_NUMBER_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("E-number pattern failed to compile: {e}");
                None
            }
        })
        .as_ref()
}

/// Extract every E-number in `text`, normalized to `E` followed by digits
#[must_use]
pub fn extract_e_numbers(text: &str) -> Vec<String> {
    e_number_regex().map_or_else(Vec::new, |regex| {
        regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|digits| format!("E{}", digits.as_str()))
            .collect()
    })
}

/// Whether `text` mentions any E-number
#[must_use]
pub fn has_e_number(text: &str) -> bool {
    e_number_regex().is_some_and(|regex| regex.is_match(text))
}

/// First keyword contained in `haystack_lower`, if any
///
/// `haystack_lower` must already be lowercase; keywords in the static
/// tables are lowercase.
#[must_use]
pub fn first_keyword<'k>(haystack_lower: &str, keywords: &[&'k str]) -> Option<&'k str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| haystack_lower.contains(keyword))
}

/// Whether `haystack_lower` contains any of `keywords`
#[must_use]
pub fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    first_keyword(haystack_lower, keywords).is_some()
}
