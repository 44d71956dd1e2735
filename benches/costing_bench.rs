// ABOUTME: Criterion benchmarks for recipe costing, batch scaling and menu pricing
// ABOUTME: Measures engine throughput over synthetic bar catalogs of different sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the costing engine.
//!
//! Measures single-recipe costing, batch scaling, and whole-menu pricing
//! over deterministic synthetic catalogs.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use barback::{price_menu, EngineConfig};
use barback_core::config::CostingConfig;
use barback_core::models::CostMode;
use barback_engine::units::convert_amount;
use common::fixtures::{generate_catalog, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_unit_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_conversion");
    let pairs = [("oz", "ml"), ("barspoon", "oz"), ("quart", "cl"), ("lb", "g")];

    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("standard_units", |b| {
        b.iter(|| {
            for (from, to) in pairs {
                black_box(convert_amount(black_box(1.5), from, to, &[], None));
            }
        });
    });

    group.finish();
}

fn bench_recipe_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_cost");
    let config = CostingConfig::default();

    for size in [CatalogSize::Small, CatalogSize::Large] {
        let snapshot = generate_catalog(size);
        let Some(recipe) = snapshot.recipe("Cocktail 1") else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("per_serving", size.ingredient_count()),
            recipe,
            |b, recipe| {
                b.iter(|| black_box(snapshot.cost_recipe(recipe, CostMode::PerServing, &config)));
            },
        );
    }

    group.finish();
}

fn bench_batch_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_metrics");
    let config = EngineConfig::default();
    let snapshot = generate_catalog(CatalogSize::Small);

    if let Some(recipe) = snapshot.recipe("Cocktail 0") {
        group.bench_function("two_liter_batch", |b| {
            b.iter(|| black_box(snapshot.batch_recipe(recipe, &config)));
        });
    }

    group.finish();
}

fn bench_menu_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_pricing");
    group.sample_size(50);
    let config = CostingConfig::default();

    for size in [CatalogSize::Small, CatalogSize::Large] {
        let snapshot = generate_catalog(size);
        group.throughput(Throughput::Elements(size.recipe_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("price_menu", size.recipe_count()),
            &snapshot,
            |b, snapshot| {
                b.iter(|| black_box(price_menu(snapshot, &config)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_unit_conversion,
    bench_recipe_cost,
    bench_batch_metrics,
    bench_menu_pricing
);
criterion_main!(benches);
