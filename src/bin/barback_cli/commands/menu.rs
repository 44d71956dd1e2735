// ABOUTME: Menu pour cost command for barback-cli
// ABOUTME: Prices every sellable recipe in a snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use barback::{price_menu, CatalogSnapshot, EngineConfig};

use crate::helpers::display::display_menu;

/// Price the menu and print the pour cost table
pub fn run(snapshot_path: &Path, config: &EngineConfig, json: bool) -> Result<()> {
    let snapshot = CatalogSnapshot::load(snapshot_path)?;
    let report = price_menu(&snapshot, &config.costing);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_menu(&report);
    }
    Ok(())
}
