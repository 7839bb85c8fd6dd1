// ABOUTME: Error re-exports for the NutriLens embedding surface
// ABOUTME: AppError and ErrorCode live in nutrilens-core and are shared by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! # Unified Error Handling
//!
//! Re-exports the core error taxonomy so embedders depend on one path.

pub use nutrilens_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
