// ABOUTME: Barback CLI - cost recipes, plan batches and price menus from a catalog snapshot
// ABOUTME: Thin command layer over the barback library; output as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Cost one serving of a recipe
//! barback-cli cost catalog.json "Old Fashioned" --per-serving
//!
//! # Prep sheet for a batchable recipe
//! barback-cli batch catalog.json "Old Fashioned Batch"
//!
//! # Pour cost of every menu item
//! barback-cli menu catalog.json --json
//!
//! # Convert 2 bottles of an ingredient to ounces
//! barback-cli convert 2 bottle oz --snapshot catalog.json --ingredient "Rittenhouse Rye"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use barback::logging::{self, LoggingConfig};
use barback::EngineConfig;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "barback-cli",
    about = "Barback recipe costing CLI",
    long_about = "Cost recipes, scale batches into containers and report menu pour costs from a JSON catalog snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Cost a recipe
    Cost {
        /// Catalog snapshot (JSON)
        snapshot: PathBuf,

        /// Recipe name or id
        recipe: String,

        /// Cost one serving instead of the whole recipe
        #[arg(long)]
        per_serving: bool,

        /// Price sub-recipe ingredients directly instead of recursing
        #[arg(long)]
        no_recursion: bool,
    },

    /// Fit a batchable recipe into its containers
    Batch {
        /// Catalog snapshot (JSON)
        snapshot: PathBuf,

        /// Recipe name or id
        recipe: String,
    },

    /// Pour cost of every sellable recipe
    Menu {
        /// Catalog snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Convert an amount between units
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source unit
        from: String,

        /// Target unit
        to: String,

        /// Catalog snapshot for bottle, case and each conversions
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Ingredient whose container sizes apply
        #[arg(long)]
        ingredient: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::from_env().with_level("debug").init()?;
    } else {
        logging::init_from_env()?;
    }

    let config = EngineConfig::load()?;
    debug!(?config, "engine configuration loaded");

    match cli.command {
        Command::Cost {
            snapshot,
            recipe,
            per_serving,
            no_recursion,
        } => commands::cost::run(
            &snapshot,
            &recipe,
            per_serving,
            no_recursion,
            &config,
            cli.json,
        ),
        Command::Batch { snapshot, recipe } => {
            commands::batch::run(&snapshot, &recipe, &config, cli.json)
        }
        Command::Menu { snapshot } => commands::menu::run(&snapshot, &config, cli.json),
        Command::Convert {
            amount,
            from,
            to,
            snapshot,
            ingredient,
        } => commands::convert::run(
            amount,
            &from,
            &to,
            snapshot.as_deref(),
            ingredient.as_deref(),
            cli.json,
        ),
    }
}
