// ABOUTME: Batch configuration error types raised by the batch scaling calculator
// ABOUTME: Covers unknown containers, missing custom volumes and invalid numeric inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Caller contract violations in a batch configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchError {
    /// Container type is not a known standard container
    #[error("Unknown container type: '{0}'")]
    UnknownContainer(String),

    /// Custom container selected without a positive custom volume
    #[error("Custom container requires a positive custom volume")]
    MissingCustomVolume,

    /// A numeric field is NaN or infinite
    #[error("Field '{field}' must be a finite number")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Manual scale factor is negative
    #[error("Scale factor must not be negative (got {0})")]
    NegativeScaleFactor(f64),

    /// Dilution percentage is above 100
    #[error("Dilution percentage must not exceed 100 (got {0})")]
    DilutionOutOfRange(f64),
}
