// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kind-specific device attributes and the attribute write surface.
//!
//! A [`DevicePayload`] holds the attributes that only make sense for a
//! particular [`DeviceKind`]: brightness for lights, target temperature and
//! mode for thermostats, lock/open flags for doors and windows, and so on.
//! Writes go through [`Attribute`], which carries raw caller values; numeric
//! writes are clamped to the payload's declared domain, and a write that does
//! not apply to the device kind fails with
//! [`Error::AttributeNotSupported`](crate::error::Error::AttributeNotSupported).

use crate::error::Error;
use crate::types::{Brightness, ClimateMode, Moisture, Temperature, TemperatureClass, Volume};

use super::DeviceKind;

/// Kind-specific attributes of a device.
///
/// # Examples
///
/// ```
/// use domus_lib::device::{Attribute, DeviceKind, DevicePayload};
/// use domus_lib::types::Brightness;
///
/// let mut payload = DevicePayload::light(Brightness::new(70).unwrap());
/// assert_eq!(payload.kind(), DeviceKind::Light);
///
/// // Numeric writes clamp to the attribute's domain
/// payload.set(Attribute::Brightness(180)).unwrap();
/// assert_eq!(payload.brightness().unwrap().value(), 100);
///
/// // Kind-mismatched writes are rejected
/// assert!(payload.set(Attribute::Volume(30)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DevicePayload {
    /// A dimmable light.
    Light {
        /// Current brightness level.
        brightness: Brightness,
    },
    /// A room thermostat.
    Thermostat {
        /// Target temperature (room class, 16-30 °C).
        target: Temperature,
        /// Operating mode.
        mode: ClimateMode,
    },
    /// A standalone speaker.
    Speaker {
        /// Current volume.
        volume: Volume,
    },
    /// A lockable door.
    Door {
        /// Whether the door is locked.
        is_locked: bool,
        /// Whether the door is open.
        is_open: bool,
        /// Sensor battery level (0-100, seeded, read-only).
        battery_level: u8,
    },
    /// A lockable window.
    Window {
        /// Whether the window is locked.
        is_locked: bool,
        /// Whether the window is open.
        is_open: bool,
        /// Sensor battery level (0-100, seeded, read-only).
        battery_level: u8,
    },
    /// A garden sprinkler zone.
    SprinklerZone {
        /// Measured soil moisture.
        moisture: Moisture,
    },
    /// The pool system.
    PoolSystem {
        /// Target water temperature (pool class, 20-35 °C).
        water_temperature: Temperature,
    },
    /// A television.
    Tv {
        /// Current volume.
        volume: Volume,
        /// Selected input source, if any.
        source: Option<String>,
    },
    /// A video projector.
    Projector {
        /// Current volume.
        volume: Volume,
        /// Selected input source, if any.
        source: Option<String>,
    },
    /// A gaming console.
    GamingConsole {
        /// Current volume.
        volume: Volume,
    },
}

impl DevicePayload {
    /// Creates a light payload.
    #[must_use]
    pub const fn light(brightness: Brightness) -> Self {
        Self::Light { brightness }
    }

    /// Creates a thermostat payload.
    #[must_use]
    pub const fn thermostat(target: Temperature, mode: ClimateMode) -> Self {
        Self::Thermostat { target, mode }
    }

    /// Creates a speaker payload.
    #[must_use]
    pub const fn speaker(volume: Volume) -> Self {
        Self::Speaker { volume }
    }

    /// Creates a door payload.
    #[must_use]
    pub const fn door(is_locked: bool, is_open: bool, battery_level: u8) -> Self {
        Self::Door {
            is_locked,
            is_open,
            battery_level,
        }
    }

    /// Creates a window payload.
    #[must_use]
    pub const fn window(is_locked: bool, is_open: bool, battery_level: u8) -> Self {
        Self::Window {
            is_locked,
            is_open,
            battery_level,
        }
    }

    /// Creates a sprinkler zone payload.
    #[must_use]
    pub const fn sprinkler_zone(moisture: Moisture) -> Self {
        Self::SprinklerZone { moisture }
    }

    /// Creates a pool system payload.
    #[must_use]
    pub const fn pool_system(water_temperature: Temperature) -> Self {
        Self::PoolSystem { water_temperature }
    }

    /// Creates a TV payload.
    #[must_use]
    pub const fn tv(volume: Volume, source: Option<String>) -> Self {
        Self::Tv { volume, source }
    }

    /// Creates a projector payload.
    #[must_use]
    pub const fn projector(volume: Volume, source: Option<String>) -> Self {
        Self::Projector { volume, source }
    }

    /// Creates a gaming console payload.
    #[must_use]
    pub const fn gaming_console(volume: Volume) -> Self {
        Self::GamingConsole { volume }
    }

    /// Returns the kind of device this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        match self {
            Self::Light { .. } => DeviceKind::Light,
            Self::Thermostat { .. } => DeviceKind::Thermostat,
            Self::Speaker { .. } => DeviceKind::Speaker,
            Self::Door { .. } => DeviceKind::Door,
            Self::Window { .. } => DeviceKind::Window,
            Self::SprinklerZone { .. } => DeviceKind::SprinklerZone,
            Self::PoolSystem { .. } => DeviceKind::PoolSystem,
            Self::Tv { .. } => DeviceKind::Tv,
            Self::Projector { .. } => DeviceKind::Projector,
            Self::GamingConsole { .. } => DeviceKind::GamingConsole,
        }
    }

    /// Applies an attribute write.
    ///
    /// Numeric values are clamped to the attribute's declared domain rather
    /// than rejected, matching the passive nature of slider-bound controls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotSupported`] if the attribute does not
    /// apply to this payload's kind.
    pub fn set(&mut self, attribute: Attribute) -> Result<(), Error> {
        let kind = self.kind();

        match (&mut *self, &attribute) {
            (Self::Light { brightness }, Attribute::Brightness(value)) => {
                *brightness = Brightness::clamped(*value);
            }
            (Self::Thermostat { target, .. }, Attribute::Temperature(celsius)) => {
                *target = Temperature::clamped(TemperatureClass::Room, *celsius);
            }
            (Self::Thermostat { mode, .. }, Attribute::Mode(new_mode)) => {
                *mode = *new_mode;
            }
            (Self::PoolSystem { water_temperature }, Attribute::Temperature(celsius)) => {
                *water_temperature = Temperature::clamped(TemperatureClass::PoolWater, *celsius);
            }
            (
                Self::Speaker { volume }
                | Self::Tv { volume, .. }
                | Self::Projector { volume, .. }
                | Self::GamingConsole { volume },
                Attribute::Volume(value),
            ) => {
                *volume = Volume::clamped(*value);
            }
            (
                Self::Tv { source, .. } | Self::Projector { source, .. },
                Attribute::Source(input),
            ) => {
                *source = Some(input.clone());
            }
            (
                Self::Door { is_locked, .. } | Self::Window { is_locked, .. },
                Attribute::Locked(locked),
            ) => {
                *is_locked = *locked;
            }
            (Self::Door { is_open, .. } | Self::Window { is_open, .. }, Attribute::Open(open)) => {
                *is_open = *open;
            }
            (Self::SprinklerZone { moisture }, Attribute::Moisture(value)) => {
                *moisture = Moisture::clamped(*value);
            }
            _ => {
                return Err(Error::AttributeNotSupported {
                    kind,
                    attribute: attribute.name(),
                });
            }
        }

        Ok(())
    }

    /// Returns the brightness for light payloads.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        match self {
            Self::Light { brightness } => Some(*brightness),
            _ => None,
        }
    }

    /// Returns the volume for audio-capable payloads.
    #[must_use]
    pub const fn volume(&self) -> Option<Volume> {
        match self {
            Self::Speaker { volume }
            | Self::Tv { volume, .. }
            | Self::Projector { volume, .. }
            | Self::GamingConsole { volume } => Some(*volume),
            _ => None,
        }
    }

    /// Returns the target temperature for thermostat and pool payloads.
    #[must_use]
    pub const fn temperature(&self) -> Option<Temperature> {
        match self {
            Self::Thermostat { target, .. } => Some(*target),
            Self::PoolSystem { water_temperature } => Some(*water_temperature),
            _ => None,
        }
    }

    /// Returns the moisture level for sprinkler zone payloads.
    #[must_use]
    pub const fn moisture(&self) -> Option<Moisture> {
        match self {
            Self::SprinklerZone { moisture } => Some(*moisture),
            _ => None,
        }
    }

    /// Returns the lock flag for doors and windows.
    #[must_use]
    pub const fn is_locked(&self) -> Option<bool> {
        match self {
            Self::Door { is_locked, .. } | Self::Window { is_locked, .. } => Some(*is_locked),
            _ => None,
        }
    }

    /// Returns the open flag for doors and windows.
    #[must_use]
    pub const fn is_open(&self) -> Option<bool> {
        match self {
            Self::Door { is_open, .. } | Self::Window { is_open, .. } => Some(*is_open),
            _ => None,
        }
    }

    /// Returns the sensor battery level for doors and windows.
    #[must_use]
    pub const fn battery_level(&self) -> Option<u8> {
        match self {
            Self::Door { battery_level, .. } | Self::Window { battery_level, .. } => {
                Some(*battery_level)
            }
            _ => None,
        }
    }
}

/// A single attribute write, carrying the raw caller value.
///
/// Raw values keep the write surface close to the UI controls that drive it:
/// a slider hands over a plain number and the payload decides how to clamp
/// it into its domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// Light brightness (clamped to 0-100).
    Brightness(u8),
    /// Target temperature in °C (clamped to the device's class range).
    Temperature(f32),
    /// Audio volume (clamped to 0-100).
    Volume(u8),
    /// Soil moisture (clamped to 0-100).
    Moisture(u8),
    /// Lock or unlock a door/window.
    Locked(bool),
    /// Open or close a door/window.
    Open(bool),
    /// Thermostat operating mode.
    Mode(ClimateMode),
    /// Input source for TVs and projectors.
    Source(String),
}

impl Attribute {
    /// Returns the attribute name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Brightness(_) => "brightness",
            Self::Temperature(_) => "temperature",
            Self::Volume(_) => "volume",
            Self::Moisture(_) => "moisture",
            Self::Locked(_) => "locked",
            Self::Open(_) => "open",
            Self::Mode(_) => "mode",
            Self::Source(_) => "source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_payload() {
        let payload = DevicePayload::door(true, false, 85);
        assert_eq!(payload.kind(), DeviceKind::Door);

        let payload = DevicePayload::gaming_console(Volume::new(50).unwrap());
        assert_eq!(payload.kind(), DeviceKind::GamingConsole);
    }

    #[test]
    fn brightness_write_clamps() {
        let mut payload = DevicePayload::light(Brightness::MIN);
        payload.set(Attribute::Brightness(250)).unwrap();
        assert_eq!(payload.brightness().unwrap(), Brightness::MAX);
    }

    #[test]
    fn thermostat_temperature_clamps_to_room_range() {
        let mut payload = DevicePayload::thermostat(
            Temperature::new(TemperatureClass::Room, 22.0).unwrap(),
            ClimateMode::Auto,
        );
        payload.set(Attribute::Temperature(40.0)).unwrap();
        assert_eq!(payload.temperature().unwrap().celsius(), 30.0);
    }

    #[test]
    fn pool_temperature_clamps_to_pool_range() {
        let mut payload =
            DevicePayload::pool_system(Temperature::new(TemperatureClass::PoolWater, 28.0).unwrap());
        payload.set(Attribute::Temperature(10.0)).unwrap();
        assert_eq!(payload.temperature().unwrap().celsius(), 20.0);
    }

    #[test]
    fn volume_applies_to_all_media_kinds() {
        let mut payloads = [
            DevicePayload::speaker(Volume::MUTED),
            DevicePayload::tv(Volume::MUTED, None),
            DevicePayload::projector(Volume::MUTED, None),
            DevicePayload::gaming_console(Volume::MUTED),
        ];
        for payload in &mut payloads {
            payload.set(Attribute::Volume(40)).unwrap();
            assert_eq!(payload.volume().unwrap().value(), 40);
        }
    }

    #[test]
    fn lock_and_open_flags_on_openings() {
        let mut payload = DevicePayload::window(true, false, 75);

        payload.set(Attribute::Locked(false)).unwrap();
        assert_eq!(payload.is_locked(), Some(false));

        payload.set(Attribute::Open(true)).unwrap();
        assert_eq!(payload.is_open(), Some(true));
    }

    #[test]
    fn mismatched_attribute_is_rejected() {
        let mut payload = DevicePayload::light(Brightness::MAX);
        let err = payload.set(Attribute::Moisture(10)).unwrap_err();
        assert!(matches!(
            err,
            Error::AttributeNotSupported {
                kind: DeviceKind::Light,
                attribute: "moisture",
            }
        ));
    }

    #[test]
    fn mode_only_applies_to_thermostats() {
        let mut payload = DevicePayload::speaker(Volume::MUTED);
        assert!(payload.set(Attribute::Mode(ClimateMode::Heat)).is_err());

        let mut payload = DevicePayload::thermostat(
            Temperature::new(TemperatureClass::Room, 22.0).unwrap(),
            ClimateMode::Auto,
        );
        payload.set(Attribute::Mode(ClimateMode::Heat)).unwrap();
        assert!(matches!(
            payload,
            DevicePayload::Thermostat {
                mode: ClimateMode::Heat,
                ..
            }
        ));
    }

    #[test]
    fn source_applies_to_tv_and_projector() {
        let mut payload = DevicePayload::tv(Volume::new(35).unwrap(), Some("HDMI 1".to_string()));
        payload.set(Attribute::Source("HDMI 2".to_string())).unwrap();
        assert!(matches!(
            payload,
            DevicePayload::Tv { ref source, .. } if source.as_deref() == Some("HDMI 2")
        ));

        let mut payload = DevicePayload::gaming_console(Volume::MUTED);
        assert!(payload.set(Attribute::Source("HDMI 1".to_string())).is_err());
    }
}
