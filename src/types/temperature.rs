// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for climate and pool devices.
//!
//! Different device classes allow different temperature ranges: a room
//! thermostat adjusts between 16 and 30 °C while pool water heating runs
//! between 20 and 35 °C. A [`Temperature`] is always bound to the class it
//! was created for, so range checks and clamping use the right domain.

use std::fmt;

use crate::error::ValueError;

/// The temperature domain a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureClass {
    /// Room climate (16-30 °C).
    Room,
    /// Pool water (20-35 °C).
    PoolWater,
}

impl TemperatureClass {
    /// Returns the inclusive `(min, max)` bounds of this class in °C.
    #[must_use]
    pub const fn bounds(&self) -> (f32, f32) {
        match self {
            Self::Room => (16.0, 30.0),
            Self::PoolWater => (20.0, 35.0),
        }
    }
}

/// A temperature in °C, constrained to the range of its class.
///
/// # Examples
///
/// ```
/// use domus_lib::types::{Temperature, TemperatureClass};
///
/// let target = Temperature::new(TemperatureClass::Room, 22.0).unwrap();
/// assert_eq!(target.celsius(), 22.0);
///
/// // Out-of-range values are rejected...
/// assert!(Temperature::new(TemperatureClass::Room, 35.0).is_err());
///
/// // ...or clamped to the nearest bound
/// let clamped = Temperature::clamped(TemperatureClass::Room, 35.0);
/// assert_eq!(clamped.celsius(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    celsius: f32,
    class: TemperatureClass,
}

impl Temperature {
    /// Creates a new temperature in the given class.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside the class
    /// bounds.
    pub fn new(class: TemperatureClass, celsius: f32) -> Result<Self, ValueError> {
        let (min, max) = class.bounds();
        if !(min..=max).contains(&celsius) {
            return Err(ValueError::OutOfRange {
                min: f64::from(min),
                max: f64::from(max),
                actual: f64::from(celsius),
            });
        }
        Ok(Self { celsius, class })
    }

    /// Creates a temperature, clamping the value to the class bounds.
    ///
    /// Non-finite input falls back to the lower bound.
    #[must_use]
    pub fn clamped(class: TemperatureClass, celsius: f32) -> Self {
        let (min, max) = class.bounds();
        let celsius = if celsius.is_finite() {
            celsius.clamp(min, max)
        } else {
            min
        };
        Self { celsius, class }
    }

    /// Returns the temperature in °C.
    #[must_use]
    pub const fn celsius(&self) -> f32 {
        self.celsius
    }

    /// Returns the class this temperature is bound to.
    #[must_use]
    pub const fn class(&self) -> TemperatureClass {
        self.class
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.celsius)
    }
}
