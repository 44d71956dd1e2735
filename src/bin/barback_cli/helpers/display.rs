// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for barback-cli
// ABOUTME: Prints reports as human-readable text or pretty JSON

use std::fmt::Display;

use anyhow::Result;
use barback::MenuReport;
use serde::Serialize;

/// Print a report as JSON or through its `Display` impl
pub fn print_report<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Print the menu pour cost table
pub fn display_menu(report: &MenuReport) {
    println!("{:<32} {:>8} {:>8} {:>8}", "Item", "Price", "Cost", "Pour %");
    println!("{}", "=".repeat(60));
    for item in &report.items {
        let price = item
            .menu_price
            .map_or_else(|| "-".to_owned(), |p| format!("{p:.2}"));
        let pct = item
            .pour_cost_percentage
            .map_or_else(|| "-".to_owned(), |p| format!("{p:.1}"));
        let flag = if item.flagged_lines > 0 { "  *" } else { "" };
        println!(
            "{:<32} {price:>8} {:>8.2} {pct:>8}{flag}",
            item.name, item.cost_per_serving
        );
    }
    println!("{}", "-".repeat(60));
    if let Some(avg) = report.average_pour_cost_percentage {
        println!("Average pour cost {avg:.1}%");
    }
    if report.items.iter().any(|i| i.flagged_lines > 0) {
        println!("* has lines missing prices or units");
    }
}
