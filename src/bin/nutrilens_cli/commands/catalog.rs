// ABOUTME: Catalog command printing the static knowledge base tables as JSON
// ABOUTME: Lets fixture authors see which keywords and E-numbers the engine recognises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use super::print_json;
use crate::CatalogKind;
use nutrilens::errors::AppResult;
use nutrilens::intelligence::knowledge_base::{
    ADDITIVE_CATALOG, ALLERGEN_CATALOG, DISEASE_CATALOG,
};

/// Print one catalog
pub fn run(kind: CatalogKind) -> AppResult<()> {
    match kind {
        CatalogKind::Additives => print_json(ADDITIVE_CATALOG, false),
        CatalogKind::Allergens => print_json(ALLERGEN_CATALOG, false),
        CatalogKind::Diseases => print_json(DISEASE_CATALOG, false),
    }
}
