// ABOUTME: Common benchmark utilities and fixtures for costing benchmarks
// ABOUTME: Provides deterministic bar catalog generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
