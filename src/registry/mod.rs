// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device registry: authoritative in-memory state for one session.
//!
//! The registry owns a fixed set of [`Section`]s, each owning its devices
//! exclusively. All mutations are synchronous in-memory writes, immediately
//! observable by any aggregator re-read; there is no change notification and
//! no caching anywhere in the model.
//!
//! Mutations that reference an unknown identifier fail with
//! [`Error::DeviceNotFound`] instead of silently doing nothing, so non-UI
//! callers can tell a miss from a no-op.
//!
//! # Examples
//!
//! ```
//! use domus_lib::device::Attribute;
//!
//! let mut registry = domus_lib::seed::sample_home();
//!
//! let id = registry.all_devices().next().unwrap().id();
//! registry.toggle(id).unwrap();
//! registry.set_attribute(id, Attribute::Locked(false)).unwrap();
//! ```

mod shared;

pub use shared::SharedRegistry;

use tracing::debug;

use crate::device::{Attribute, Device, DeviceId, SectionId};
use crate::error::Error;
use crate::section::Section;

/// In-memory registry of all sections and devices for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceRegistry {
    sections: Vec<Section>,
}

impl DeviceRegistry {
    /// Creates a registry from an explicit list of sections.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a registry from a seed description.
    ///
    /// Always succeeds; see [`HomeSeed::build_registry`](crate::seed::HomeSeed::build_registry).
    #[must_use]
    pub fn from_seed(seed: &crate::seed::HomeSeed) -> Self {
        seed.build_registry()
    }

    /// Returns all sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by identity.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Returns all devices across all sections, in display order.
    pub fn all_devices(&self) -> impl Iterator<Item = &Device> {
        self.sections.iter().flat_map(|s| s.devices().iter())
    }

    /// Returns the devices of one section, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if the section does not exist.
    pub fn devices_in_section(&self, id: SectionId) -> Result<&[Device], Error> {
        self.section(id)
            .map(Section::devices)
            .ok_or(Error::SectionNotFound(id))
    }

    /// Looks up a device by identity across all sections.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.all_devices().find(|d| d.id() == id)
    }

    /// Returns the total number of devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Flips the on/off flag of a device and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the device does not exist.
    pub fn toggle(&mut self, id: DeviceId) -> Result<bool, Error> {
        let Some(device) = self.device_mut(id) else {
            debug!(%id, "toggle targeted an unknown device");
            return Err(Error::DeviceNotFound(id));
        };

        let is_on = device.toggle();
        debug!(%id, name = device.name(), is_on, "toggled device");
        Ok(is_on)
    }

    /// Writes an attribute on a device, clamping numeric values to their
    /// declared domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the device does not exist, or
    /// [`Error::AttributeNotSupported`] if the attribute does not apply to
    /// the device's kind.
    pub fn set_attribute(&mut self, id: DeviceId, attribute: Attribute) -> Result<(), Error> {
        let Some(device) = self.device_mut(id) else {
            debug!(%id, "attribute write targeted an unknown device");
            return Err(Error::DeviceNotFound(id));
        };

        let name = attribute.name();
        device.set_attribute(attribute)?;
        debug!(%id, attribute = name, "attribute written");
        Ok(())
    }

    /// Locks every door and window. Returns the number of entries affected.
    pub fn lock_all(&mut self) -> usize {
        self.set_all_locks(true)
    }

    /// Unlocks every door and window. Returns the number of entries affected.
    pub fn unlock_all(&mut self) -> usize {
        self.set_all_locks(false)
    }

    fn set_all_locks(&mut self, locked: bool) -> usize {
        let mut affected = 0;
        for section in &mut self.sections {
            for device in section.devices_mut() {
                if device.kind().is_opening() {
                    // Openings always accept the lock attribute
                    let _ = device.set_attribute(Attribute::Locked(locked));
                    affected += 1;
                }
            }
        }
        debug!(locked, affected, "bulk lock update");
        affected
    }

    fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.sections.iter_mut().find_map(|s| s.device_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DevicePayload;
    use crate::types::{Brightness, Volume};

    fn registry() -> DeviceRegistry {
        DeviceRegistry::new(vec![
            Section::new(
                "Lights",
                "lightbulb",
                vec![
                    Device::new("Ceiling", DevicePayload::light(Brightness::new(70).unwrap())),
                    Device::new("Desk", DevicePayload::light(Brightness::new(40).unwrap())),
                ],
            ),
            Section::new(
                "Doors",
                "door.closed",
                vec![
                    Device::new("Main Entrance", DevicePayload::door(true, false, 85)),
                    Device::new("Back Door", DevicePayload::door(false, false, 90)),
                ],
            ),
        ])
    }

    #[test]
    fn all_devices_preserves_order() {
        let registry = registry();
        let names: Vec<_> = registry.all_devices().map(Device::name).collect();
        assert_eq!(names, ["Ceiling", "Desk", "Main Entrance", "Back Door"]);
    }

    #[test]
    fn device_count_sums_sections() {
        assert_eq!(registry().device_count(), 4);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut registry = registry();
        let id = registry.all_devices().next().unwrap().id();

        assert!(registry.toggle(id).unwrap());
        assert!(registry.device(id).unwrap().is_on());
        assert!(!registry.toggle(id).unwrap());
    }

    #[test]
    fn toggle_unknown_device_fails() {
        let mut registry = registry();
        let result = registry.toggle(DeviceId::new());
        assert!(matches!(result, Err(Error::DeviceNotFound(_))));
    }

    #[test]
    fn set_attribute_clamps() {
        let mut registry = registry();
        let id = registry.all_devices().next().unwrap().id();

        registry.set_attribute(id, Attribute::Brightness(200)).unwrap();
        assert_eq!(
            registry.device(id).unwrap().payload().brightness().unwrap(),
            Brightness::MAX
        );
    }

    #[test]
    fn set_attribute_unknown_device_fails() {
        let mut registry = registry();
        let result = registry.set_attribute(DeviceId::new(), Attribute::Volume(10));
        assert!(matches!(result, Err(Error::DeviceNotFound(_))));
    }

    #[test]
    fn set_attribute_wrong_kind_fails() {
        let mut registry = registry();
        let id = registry.all_devices().next().unwrap().id();

        let result = registry.set_attribute(id, Attribute::Volume(10));
        assert!(matches!(result, Err(Error::AttributeNotSupported { .. })));
    }

    #[test]
    fn devices_in_section_by_id() {
        let registry = registry();
        let section_id = registry.sections()[1].id();

        let devices = registry.devices_in_section(section_id).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name(), "Main Entrance");
    }

    #[test]
    fn devices_in_unknown_section_fails() {
        let registry = registry();
        let result = registry.devices_in_section(SectionId::new());
        assert!(matches!(result, Err(Error::SectionNotFound(_))));
    }

    #[test]
    fn lock_all_covers_every_opening() {
        let mut registry = registry();

        let affected = registry.lock_all();
        assert_eq!(affected, 2);

        for device in registry.all_devices() {
            if device.kind().is_opening() {
                assert_eq!(device.payload().is_locked(), Some(true));
            }
        }
    }

    #[test]
    fn unlock_all_reverses_lock_all() {
        let mut registry = registry();
        registry.lock_all();

        registry.unlock_all();

        for device in registry.all_devices() {
            if device.kind().is_opening() {
                assert_eq!(device.payload().is_locked(), Some(false));
            }
        }
    }

    #[test]
    fn lock_all_skips_non_openings() {
        let mut registry = DeviceRegistry::new(vec![Section::new(
            "Media",
            "tv",
            vec![Device::new("TV", DevicePayload::tv(Volume::MUTED, None))],
        )]);

        assert_eq!(registry.lock_all(), 0);
    }
}
