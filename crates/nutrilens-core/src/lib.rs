// ABOUTME: Core types and constants for the NutriLens food-label analysis engine
// ABOUTME: Foundation crate with error handling, scan input models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

#![deny(unsafe_code)]

//! # NutriLens Core
//!
//! Foundation crate providing shared types for the NutriLens engine. The
//! scoring and personalization logic lives in `nutrilens-intelligence`;
//! this crate only holds the data that crosses crate boundaries and is
//! expected to change rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring bounds, units, and service identifiers
//! - **models**: Scanned product input and user health profile types

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine-wide constants organized by domain
pub mod constants;

/// Scanned product and user profile data models
pub mod models;
