// ABOUTME: Unit conversion command for barback-cli
// ABOUTME: Converts an amount between units, optionally using an ingredient's container sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use anyhow::{anyhow, Result};
use barback::CatalogSnapshot;
use barback_engine::units::convert_amount;
use serde::Serialize;

use crate::helpers::display::print_report;

#[derive(Serialize)]
struct Conversion<'a> {
    amount: f64,
    from: &'a str,
    to: &'a str,
    result: f64,
}

impl Display for Conversion<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} = {:.4} {}", self.amount, self.from, self.result, self.to)
    }
}

/// Convert an amount and print the result
pub fn run(
    amount: f64,
    from: &str,
    to: &str,
    snapshot_path: Option<&Path>,
    ingredient: Option<&str>,
    json: bool,
) -> Result<()> {
    let snapshot = match snapshot_path {
        Some(path) => CatalogSnapshot::load(path)?,
        None => CatalogSnapshot::default(),
    };

    let result = convert_amount(amount, from, to, snapshot.ingredients(), ingredient)
        .ok_or_else(|| anyhow!("no conversion from '{from}' to '{to}' for amount {amount}"))?;

    print_report(
        &Conversion {
            amount,
            from,
            to,
            result,
        },
        json,
    )
}
