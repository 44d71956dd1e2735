// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for barback-cli
// ABOUTME: Provides the cost, batch, menu and convert commands

pub mod batch;
pub mod convert;
pub mod cost;
pub mod menu;
