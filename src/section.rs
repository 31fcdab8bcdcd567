// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sections: ordered device collections with a display label.

use crate::device::{Device, DeviceId, SectionId};

/// A room or category grouping an ordered list of devices.
///
/// The device list order is display order. Membership is fixed after
/// construction: devices do not move between sections and are never removed
/// during a session. Sections are seeded with at least one device, but every
/// consumer must tolerate an empty list.
///
/// # Examples
///
/// ```
/// use domus_lib::Section;
/// use domus_lib::device::{Device, DevicePayload};
///
/// let section = Section::new(
///     "Doors",
///     "door.closed",
///     vec![Device::new("Main Entrance", DevicePayload::door(true, false, 85))],
/// );
/// assert_eq!(section.len(), 1);
/// assert_eq!(section.title(), "Doors");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    title: String,
    icon: String,
    devices: Vec<Device>,
}

impl Section {
    /// Creates a new section with the given devices.
    #[must_use]
    pub fn new(title: impl Into<String>, icon: impl Into<String>, devices: Vec<Device>) -> Self {
        Self {
            id: SectionId::new(),
            title: title.into(),
            icon: icon.into(),
            devices,
        }
    }

    /// Returns the stable identifier of this section.
    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the icon tag.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the devices in display order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns the number of devices in this section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the section holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Looks up a device by identity.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id() == id)
    }

    /// Looks up a device mutably by identity.
    pub(crate) fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id() == id)
    }

    /// Mutable access to all devices, for registry-level bulk operations.
    pub(crate) fn devices_mut(&mut self) -> &mut [Device] {
        &mut self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DevicePayload;
    use crate::types::Brightness;

    fn lamp(name: &str) -> Device {
        Device::new(name, DevicePayload::light(Brightness::MAX))
    }

    #[test]
    fn preserves_device_order() {
        let section = Section::new(
            "Lights",
            "lightbulb",
            vec![lamp("A"), lamp("B"), lamp("C")],
        );

        let names: Vec<_> = section.devices().iter().map(Device::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn lookup_by_id() {
        let section = Section::new("Lights", "lightbulb", vec![lamp("A"), lamp("B")]);
        let id = section.devices()[1].id();

        let found = section.device(id).unwrap();
        assert_eq!(found.name(), "B");
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        let section = Section::new("Lights", "lightbulb", vec![lamp("A")]);
        assert!(section.device(DeviceId::new()).is_none());
    }

    #[test]
    fn empty_section_is_tolerated() {
        let section = Section::new("Empty", "questionmark", Vec::new());
        assert!(section.is_empty());
        assert_eq!(section.len(), 0);
    }
}
