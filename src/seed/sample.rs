// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in sample home.
//!
//! This is the seed data the mock screens ship with: doors and windows with
//! battery levels, the living room trio, entertainment and music devices,
//! garden sprinkler zones, the pool system, and a handful of notifications.

use crate::device::{Device, DevicePayload};
use crate::notification::{NotificationCenter, NotificationItem, NotificationType, Priority};
use crate::registry::DeviceRegistry;
use crate::section::Section;
use crate::types::{Brightness, ClimateMode, Moisture, Temperature, TemperatureClass, Volume};

// Sample values are all inside their domain; clamping is a formality.
fn brightness(value: u8) -> Brightness {
    Brightness::clamped(value)
}

fn volume(value: u8) -> Volume {
    Volume::clamped(value)
}

fn room_temp(celsius: f32) -> Temperature {
    Temperature::clamped(TemperatureClass::Room, celsius)
}

/// Builds the registry every example and test starts from.
///
/// # Examples
///
/// ```
/// let registry = domus_lib::seed::sample_home();
/// assert!(registry.device_count() > 0);
/// ```
#[must_use]
pub fn sample_home() -> DeviceRegistry {
    DeviceRegistry::new(vec![
        Section::new(
            "Doors",
            "door.left.hand.closed",
            vec![
                Device::new("Main Entrance", DevicePayload::door(true, false, 85)),
                Device::new("Back Door", DevicePayload::door(true, false, 90)),
                Device::new("Garage Door", DevicePayload::door(true, false, 95)),
            ],
        ),
        Section::new(
            "Windows",
            "window.vertical",
            vec![
                Device::new("Living Room Window", DevicePayload::window(true, false, 75)),
                Device::new("Kitchen Window", DevicePayload::window(true, false, 80)),
                Device::new("Bedroom Window", DevicePayload::window(true, false, 88)),
                Device::new("Study Window", DevicePayload::window(true, false, 92)),
            ],
        ),
        Section::new(
            "Living Room",
            "sofa.fill",
            vec![
                Device::new("Ceiling Light", DevicePayload::light(brightness(70))).with_power(true),
                Device::new(
                    "Thermostat",
                    DevicePayload::thermostat(room_temp(22.0), ClimateMode::Auto),
                )
                .with_power(true),
                Device::new("Sound System", DevicePayload::speaker(volume(40))),
            ],
        ),
        Section::new(
            "Entertainment",
            "tv.fill",
            vec![
                Device::new(
                    "Living Room TV",
                    DevicePayload::tv(volume(35), Some("HDMI 1".to_string())),
                ),
                Device::new(
                    "Bedroom TV",
                    DevicePayload::tv(volume(25), Some("Smart TV".to_string())),
                ),
                Device::new(
                    "Cinema Projector",
                    DevicePayload::projector(Volume::MUTED, Some("HDMI 2".to_string())),
                ),
                Device::new("PlayStation 5", DevicePayload::gaming_console(volume(50))),
                Device::new("Xbox Series X", DevicePayload::gaming_console(volume(45))),
            ],
        ),
        Section::new(
            "Music",
            "speaker.wave.3.fill",
            vec![
                Device::new("Kitchen Speaker", DevicePayload::speaker(volume(30))),
                Device::new("Garden Speakers", DevicePayload::speaker(volume(45))),
            ],
        ),
        Section::new(
            "Garden",
            "leaf.fill",
            vec![
                Device::new(
                    "Front Yard Zone",
                    DevicePayload::sprinkler_zone(Moisture::clamped(45)),
                ),
                Device::new(
                    "Back Yard Zone",
                    DevicePayload::sprinkler_zone(Moisture::clamped(38)),
                ),
                Device::new(
                    "Flower Beds",
                    DevicePayload::sprinkler_zone(Moisture::clamped(52)),
                ),
            ],
        ),
        Section::new(
            "Pool",
            "figure.pool.swim",
            vec![Device::new(
                "Pool System",
                DevicePayload::pool_system(Temperature::clamped(
                    TemperatureClass::PoolWater,
                    28.0,
                )),
            )],
        ),
    ])
}

/// Builds the seeded notification list.
#[must_use]
pub fn sample_notifications() -> NotificationCenter {
    NotificationCenter::new(vec![
        NotificationItem::new(
            "Security Alert",
            "The front door was left open. Please check.",
            "2 minutes ago",
            NotificationType::Security,
            Priority::High,
        ),
        NotificationItem::new(
            "Energy Saving",
            "Living room lights have been on for 2 hours. Turning them off is recommended.",
            "15 minutes ago",
            NotificationType::Energy,
            Priority::Medium,
        ),
        NotificationItem::new(
            "Temperature Warning",
            "Bedroom temperature rose to 26°C. Air conditioning started automatically.",
            "1 hour ago",
            NotificationType::Temperature,
            Priority::Medium,
        )
        .with_read(true),
        NotificationItem::new(
            "Device Update",
            "A new update is available for the smart thermostat. Includes security patches.",
            "3 hours ago",
            NotificationType::System,
            Priority::Low,
        )
        .with_read(true),
        NotificationItem::new(
            "Motion Detected",
            "Motion detected in the backyard. Camera recording started.",
            "4 hours ago",
            NotificationType::Security,
            Priority::High,
        )
        .with_read(true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;

    #[test]
    fn sample_home_sections_are_seeded() {
        let registry = sample_home();
        assert_eq!(registry.sections().len(), 7);
        assert!(registry.sections().iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn sample_home_is_fully_secure() {
        let registry = sample_home();
        assert_eq!(aggregate::security_score(registry.sections()), Some(1.0));
    }

    #[test]
    fn sample_notifications_unread_count() {
        let center = sample_notifications();
        assert_eq!(center.len(), 5);
        assert_eq!(center.unread_count(), 2);
    }
}
