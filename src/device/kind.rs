// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The kind of a simulated device.
///
/// This is a closed enumeration so that filters and seed files get
/// exhaustiveness checking instead of comparing raw strings.
///
/// # Examples
///
/// ```
/// use domus_lib::device::DeviceKind;
///
/// let kind: DeviceKind = "sprinkler-zone".parse().unwrap();
/// assert_eq!(kind, DeviceKind::SprinklerZone);
/// assert!(DeviceKind::Window.is_opening());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// A dimmable light.
    #[serde(rename = "light")]
    Light,
    /// A room climate thermostat unit.
    #[serde(rename = "thermostat-unit")]
    Thermostat,
    /// A standalone speaker.
    #[serde(rename = "speaker")]
    Speaker,
    /// A lockable door.
    #[serde(rename = "door")]
    Door,
    /// A lockable window.
    #[serde(rename = "window")]
    Window,
    /// A garden sprinkler zone.
    #[serde(rename = "sprinkler-zone")]
    SprinklerZone,
    /// The pool heating/filtration system.
    #[serde(rename = "pool-system")]
    PoolSystem,
    /// A television.
    #[serde(rename = "tv")]
    Tv,
    /// A video projector.
    #[serde(rename = "projector")]
    Projector,
    /// A gaming console.
    #[serde(rename = "gaming-console")]
    GamingConsole,
}

impl DeviceKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Light,
        Self::Thermostat,
        Self::Speaker,
        Self::Door,
        Self::Window,
        Self::SprinklerZone,
        Self::PoolSystem,
        Self::Tv,
        Self::Projector,
        Self::GamingConsole,
    ];

    /// Returns the kebab-case string representation used in seed files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat-unit",
            Self::Speaker => "speaker",
            Self::Door => "door",
            Self::Window => "window",
            Self::SprinklerZone => "sprinkler-zone",
            Self::PoolSystem => "pool-system",
            Self::Tv => "tv",
            Self::Projector => "projector",
            Self::GamingConsole => "gaming-console",
        }
    }

    /// Returns `true` for doors and windows, the kinds that participate in
    /// the security score.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Door | Self::Window)
    }

    /// Returns `true` for kinds that carry an audio volume.
    #[must_use]
    pub const fn has_volume(&self) -> bool {
        matches!(
            self,
            Self::Speaker | Self::Tv | Self::Projector | Self::GamingConsole
        )
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "thermostat-unit" => Ok(Self::Thermostat),
            "speaker" => Ok(Self::Speaker),
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "sprinkler-zone" => Ok(Self::SprinklerZone),
            "pool-system" => Ok(Self::PoolSystem),
            "tv" => Ok(Self::Tv),
            "projector" => Ok(Self::Projector),
            "gaming-console" => Ok(Self::GamingConsole),
            _ => Err(ValueError::InvalidDeviceKind(s.to_string())),
        }
    }
}
