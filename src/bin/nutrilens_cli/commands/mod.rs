// ABOUTME: Command implementations for the NutriLens CLI
// ABOUTME: One module per subcommand plus shared JSON output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

pub mod catalog;
pub mod score;

use nutrilens::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `value` as JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> AppResult<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
