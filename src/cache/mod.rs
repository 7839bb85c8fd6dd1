// ABOUTME: Report cache keyed by a digest of the canonical product and profile JSON
// ABOUTME: In-memory LRU backend; analysis is pure so entries never expire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

/// In-memory LRU cache implementation
pub mod memory;

pub use memory::AnalysisCache;

use crate::errors::AppResult;
use nutrilens_core::models::{FoodAnalysisInput, UserHealthProfile};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Serialize)]
struct KeyPayload<'a> {
    input: &'a FoodAnalysisInput,
    profile: Option<&'a UserHealthProfile>,
}

/// Cache key for one (product, profile) pair
///
/// Hex SHA-256 of the canonical JSON encoding. Profile tag sets are ordered
/// so two equal profiles always produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a product and optional profile
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be serialized
    pub fn derive(
        input: &FoodAnalysisInput,
        profile: Option<&UserHealthProfile>,
    ) -> AppResult<Self> {
        let canonical = serde_json::to_vec(&KeyPayload { input, profile })?;
        Ok(Self(hex::encode(Sha256::digest(&canonical))))
    }

    /// Hex digest
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
