// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Domus` library.
//!
//! This module provides the error hierarchy for the library: value
//! validation, seed parsing, and registry lookups.

use thiserror::Error;

use crate::device::{DeviceId, DeviceKind, SectionId};

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A mutation referenced a device that does not exist in the registry.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    /// A lookup referenced a section that does not exist in the registry.
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),

    /// An attribute write does not apply to the device's kind.
    #[error("{kind} device does not support the {attribute} attribute")]
    AttributeNotSupported {
        /// The kind of the targeted device.
        kind: DeviceKind,
        /// Name of the rejected attribute.
        attribute: &'static str,
    },

    /// A seed document failed to parse.
    #[error("seed parse error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// An unrecognised device kind string was provided.
    #[error("invalid device kind: {0}")]
    InvalidDeviceKind(String),

    /// An unrecognised climate mode string was provided.
    #[error("invalid climate mode: {0}")]
    InvalidClimateMode(String),

    /// An unrecognised notification type string was provided.
    #[error("invalid notification type: {0}")]
    InvalidNotificationType(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
