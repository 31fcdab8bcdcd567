// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seed data: the fixture schema and the built-in sample home.
//!
//! A [`HomeSeed`] is the serializable description a registry is initialized
//! from. It can be parsed from a JSON fixture:
//!
//! ```
//! use domus_lib::seed::HomeSeed;
//!
//! let seed = HomeSeed::from_json(r#"{
//!     "sections": [{
//!         "title": "Doors",
//!         "icon": "door.closed",
//!         "devices": [
//!             { "name": "Main Entrance", "type": "door",
//!               "payload": { "isLocked": true, "isOpen": false, "batteryLevel": 85 } }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let registry = seed.build_registry();
//! assert_eq!(registry.device_count(), 1);
//! ```
//!
//! Identities are assigned when the seed is built; seeds themselves carry no
//! ids. Numeric attributes are clamped into their domain on load, so a
//! hand-edited fixture cannot smuggle out-of-range state into the registry.

mod sample;

pub use sample::{sample_home, sample_notifications};

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceKind, DevicePayload};
use crate::error::Error;
use crate::notification::{NotificationCenter, NotificationItem, NotificationType, Priority};
use crate::registry::DeviceRegistry;
use crate::section::Section;
use crate::types::{Brightness, ClimateMode, Moisture, Temperature, TemperatureClass, Volume};

/// Serializable description of a whole home: sections plus notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeSeed {
    /// Sections in display order.
    pub sections: Vec<SectionSeed>,
    /// Seeded notifications, newest first.
    #[serde(default)]
    pub notifications: Vec<NotificationSeed>,
}

impl HomeSeed {
    /// Parses a seed from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Seed`] if the document is not valid against the
    /// schema.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a device registry from this seed. Always succeeds; numeric
    /// values outside their domain are clamped.
    #[must_use]
    pub fn build_registry(&self) -> DeviceRegistry {
        let sections = self
            .sections
            .iter()
            .map(|s| {
                Section::new(
                    s.title.clone(),
                    s.icon.clone(),
                    s.devices.iter().map(DeviceSeed::build).collect(),
                )
            })
            .collect();
        DeviceRegistry::new(sections)
    }

    /// Builds a notification center from this seed.
    #[must_use]
    pub fn build_notifications(&self) -> NotificationCenter {
        NotificationCenter::new(
            self.notifications
                .iter()
                .map(NotificationSeed::build)
                .collect(),
        )
    }
}

/// One section of a [`HomeSeed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSeed {
    /// Display title.
    pub title: String,
    /// Icon tag.
    pub icon: String,
    /// Devices in display order.
    pub devices: Vec<DeviceSeed>,
}

/// One device of a [`SectionSeed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSeed {
    /// Display name.
    pub name: String,
    /// Device kind (kebab-case tag, e.g. `"thermostat-unit"`).
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    /// Initial on/off flag.
    #[serde(default)]
    pub is_on: bool,
    /// Kind-specific attributes; missing fields use defaults.
    #[serde(default)]
    pub payload: PayloadSeed,
}

impl DeviceSeed {
    fn build(&self) -> Device {
        let p = &self.payload;
        let payload = match self.kind {
            DeviceKind::Light => {
                DevicePayload::light(Brightness::clamped(p.brightness.unwrap_or(100)))
            }
            DeviceKind::Thermostat => DevicePayload::thermostat(
                Temperature::clamped(TemperatureClass::Room, p.temperature.unwrap_or(22.0)),
                p.mode.unwrap_or_default(),
            ),
            DeviceKind::Speaker => {
                DevicePayload::speaker(Volume::clamped(p.volume.unwrap_or(30)))
            }
            DeviceKind::Door => DevicePayload::door(
                p.is_locked.unwrap_or(true),
                p.is_open.unwrap_or(false),
                p.battery_level.unwrap_or(100).min(100),
            ),
            DeviceKind::Window => DevicePayload::window(
                p.is_locked.unwrap_or(true),
                p.is_open.unwrap_or(false),
                p.battery_level.unwrap_or(100).min(100),
            ),
            DeviceKind::SprinklerZone => {
                DevicePayload::sprinkler_zone(Moisture::clamped(p.moisture.unwrap_or(40)))
            }
            DeviceKind::PoolSystem => DevicePayload::pool_system(Temperature::clamped(
                TemperatureClass::PoolWater,
                p.temperature.unwrap_or(28.0),
            )),
            DeviceKind::Tv => DevicePayload::tv(
                Volume::clamped(p.volume.unwrap_or(30)),
                p.source.clone(),
            ),
            DeviceKind::Projector => DevicePayload::projector(
                Volume::clamped(p.volume.unwrap_or(30)),
                p.source.clone(),
            ),
            DeviceKind::GamingConsole => {
                DevicePayload::gaming_console(Volume::clamped(p.volume.unwrap_or(50)))
            }
        };

        Device::new(self.name.clone(), payload).with_power(self.is_on)
    }
}

/// Optional attribute fields of a [`DeviceSeed`].
///
/// Only the fields relevant to the device's kind are consulted; the rest
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadSeed {
    /// Light brightness (0-100).
    pub brightness: Option<u8>,
    /// Target temperature in °C.
    pub temperature: Option<f32>,
    /// Audio volume (0-100).
    pub volume: Option<u8>,
    /// Soil moisture (0-100).
    pub moisture: Option<u8>,
    /// Lock flag for doors/windows.
    pub is_locked: Option<bool>,
    /// Open flag for doors/windows.
    pub is_open: Option<bool>,
    /// Sensor battery level (0-100).
    pub battery_level: Option<u8>,
    /// Thermostat mode.
    pub mode: Option<ClimateMode>,
    /// Input source for TVs/projectors.
    pub source: Option<String>,
}

/// One notification of a [`HomeSeed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSeed {
    /// Title line.
    pub title: String,
    /// Message body.
    pub message: String,
    /// Relative-time display label.
    pub time: String,
    /// Notification category.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Initial read flag.
    #[serde(default)]
    pub is_read: bool,
    /// Urgency.
    pub priority: Priority,
}

impl NotificationSeed {
    fn build(&self) -> NotificationItem {
        NotificationItem::new(
            self.title.clone(),
            self.message.clone(),
            self.time.clone(),
            self.kind,
            self.priority,
        )
        .with_read(self.is_read)
    }
}
