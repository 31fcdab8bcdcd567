// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat operating modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode of a thermostat unit.
///
/// # Examples
///
/// ```
/// use domus_lib::types::ClimateMode;
///
/// let mode: ClimateMode = "cool".parse().unwrap();
/// assert_eq!(mode, ClimateMode::Cool);
/// assert_eq!(mode.as_str(), "cool");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateMode {
    /// Automatic heating/cooling.
    #[default]
    Auto,
    /// Active cooling.
    Cool,
    /// Active heating.
    Heat,
    /// Fan only.
    Fan,
}

impl ClimateMode {
    /// All modes, in display order.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Cool, Self::Heat, Self::Fan];

    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::Fan => "fan",
        }
    }
}

impl fmt::Display for ClimateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClimateMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cool" => Ok(Self::Cool),
            "heat" => Ok(Self::Heat),
            "fan" => Ok(Self::Fan),
            _ => Err(ValueError::InvalidClimateMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trip() {
        for mode in ClimateMode::ALL {
            assert_eq!(mode.as_str().parse::<ClimateMode>().unwrap(), mode);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("HEAT".parse::<ClimateMode>().unwrap(), ClimateMode::Heat);
    }

    #[test]
    fn from_str_invalid() {
        let result = "warp".parse::<ClimateMode>();
        assert!(matches!(result, Err(ValueError::InvalidClimateMode(_))));
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(ClimateMode::default(), ClimateMode::Auto);
    }
}
