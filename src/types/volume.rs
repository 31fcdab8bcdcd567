// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume type for speakers and media devices.

use std::fmt;

use crate::error::ValueError;

/// Audio volume as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use domus_lib::types::Volume;
///
/// let vol = Volume::new(35).unwrap();
/// assert_eq!(vol.value(), 35);
/// assert!(Volume::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Volume(u8);

impl Volume {
    /// Muted (0%).
    pub const MUTED: Self = Self(0);

    /// Maximum volume (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new volume value.
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

    /// Creates a volume value, clamping values above 100 to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the volume percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the volume is fully muted.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Volume {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_bounds() {
        assert!(Volume::new(100).is_ok());
        assert!(Volume::new(101).is_err());
    }

    #[test]
    fn volume_clamped() {
        assert_eq!(Volume::clamped(200).value(), 100);
        assert_eq!(Volume::clamped(40).value(), 40);
    }

    #[test]
    fn volume_muted() {
        assert!(Volume::MUTED.is_muted());
        assert!(!Volume::new(1).unwrap().is_muted());
    }
}
