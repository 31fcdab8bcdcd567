// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device data model.
//!
//! A [`Device`] is a named, typed entity with an on/off flag and a
//! kind-specific [`DevicePayload`]. Devices are created at registry
//! initialization from a seed, mutated in place by `toggle` and
//! `set_attribute`, and never destroyed for the lifetime of a session.
//!
//! # Examples
//!
//! ```
//! use domus_lib::device::{Attribute, Device, DevicePayload};
//! use domus_lib::types::Brightness;
//!
//! let mut light = Device::new("Ceiling Light", DevicePayload::light(Brightness::new(70).unwrap()));
//! assert!(!light.is_on());
//!
//! assert!(light.toggle());
//! light.set_attribute(Attribute::Brightness(40)).unwrap();
//! assert_eq!(light.payload().brightness().unwrap().value(), 40);
//! ```

mod id;
mod kind;
mod payload;

pub use id::{DeviceId, SectionId};
pub use kind::DeviceKind;
pub use payload::{Attribute, DevicePayload};

use chrono::{DateTime, Utc};

use crate::error::Error;

/// A single simulated device.
///
/// The identifier is assigned at creation and immutable; everything else the
/// user can reach through a control mutates in place. Every mutation also
/// refreshes [`last_activity`](Self::last_activity).
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    id: DeviceId,
    name: String,
    is_on: bool,
    payload: DevicePayload,
    last_activity: DateTime<Utc>,
}

impl Device {
    /// Creates a new device, initially off.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: DevicePayload) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            is_on: false,
            payload,
            last_activity: Utc::now(),
        }
    }

    /// Sets the initial on/off flag. Intended for seeding.
    #[must_use]
    pub fn with_power(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Returns the stable identifier of this device.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the device kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.payload.kind()
    }

    /// Returns `true` if the device is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the kind-specific attributes.
    #[must_use]
    pub fn payload(&self) -> &DevicePayload {
        &self.payload
    }

    /// Returns the time of the last mutation.
    #[must_use]
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Flips the on/off flag and returns the new value.
    ///
    /// Toggling twice restores the original state.
    pub fn toggle(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.touch();
        self.is_on
    }

    /// Applies an attribute write to the payload.
    ///
    /// Numeric values are clamped to their domain; see
    /// [`DevicePayload::set`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotSupported`] if the attribute does not
    /// apply to this device's kind.
    pub fn set_attribute(&mut self, attribute: Attribute) -> Result<(), Error> {
        self.payload.set(attribute)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}
