// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Moisture type for garden sprinkler zones.

use std::fmt;

use crate::error::ValueError;

/// Soil moisture level as a percentage (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Moisture(u8);

impl Moisture {
    /// Completely dry (0%).
    pub const DRY: Self = Self(0);

    /// Saturated (100%).
    pub const SATURATED: Self = Self(100);

    /// Creates a new moisture value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0.0,
                max: 100.0,
                actual: f64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a moisture value, clamping values above 100 to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the moisture percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Moisture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Moisture {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
