// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// Lights use 0-100 for brightness, where 0 is off and 100 is full
/// brightness.
///
/// # Examples
///
/// ```
/// use domus_lib::types::Brightness;
///
/// // Create a brightness at 75%
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// // Use predefined values
/// let off = Brightness::MIN;
/// let full = Brightness::MAX;
/// assert_eq!(off.value(), 0);
/// assert_eq!(full.value(), 100);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
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

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use domus_lib::types::Brightness;
    ///
    /// let level = Brightness::clamped(150);
    /// assert_eq!(level.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let level = Brightness::new(v).unwrap();
            assert_eq!(level.value(), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        let result = Brightness::new(101);
        assert!(result.is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(50).value(), 50);
        assert_eq!(Brightness::clamped(150).value(), 100);
        assert_eq!(Brightness::clamped(255).value(), 100);
    }

    #[test]
    fn brightness_as_fraction() {
        assert!((Brightness::MIN.as_fraction() - 0.0).abs() < f32::EPSILON);
        assert!((Brightness::MAX.as_fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(50).unwrap() < Brightness::new(75).unwrap());
    }
}
